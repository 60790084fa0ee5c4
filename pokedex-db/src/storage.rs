//! Storage backends for the record table.
//!
//! The store only needs two things from storage: load every record, and
//! replace every record. [`CsvStorage`] keeps the table in a delimited text
//! file with a fixed header; [`MemoryStorage`] keeps it in a vector.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pokedex_catalog::PokemonRecord;

use crate::error::StoreError;

/// Column order of the persisted table. Existing data files depend on it.
pub const CSV_HEADER: [&str; 8] = [
    "id", "name", "weight", "height", "types", "sprite", "cries", "official",
];

/// Whole-table persistence used by the record store.
pub trait RecordStorage: Send + Sync {
    /// Read every record, in stored order.
    fn load(&self) -> Result<Vec<PokemonRecord>, StoreError>;

    /// Replace the entire table with `records`.
    fn save_all(&self, records: &[PokemonRecord]) -> Result<(), StoreError>;
}

// ── CSV ─────────────────────────────────────────────────────────────────────

/// Record table stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a data file containing only the header row.
    ///
    /// Fails with `AlreadyExists` if the file is present and `force` is false.
    pub fn create(path: impl Into<PathBuf>, force: bool) -> Result<Self, StoreError> {
        let storage = Self::new(path);
        if storage.path.exists() && !force {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", storage.path.display()),
            )));
        }
        storage.save_all(&[])?;
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used for atomic rewrites: `pokemon.csv` → `pokemon.csv.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStorage for CsvStorage {
    fn load(&self) -> Result<Vec<PokemonRecord>, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        parse_records(&contents)
    }

    fn save_all(&self, records: &[PokemonRecord]) -> Result<(), StoreError> {
        let serialized = serialize_records(records)?;

        // Write atomically
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, &serialized)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

/// Parse CSV content (header row first) into typed records.
///
/// Fields are trimmed. Files written before the `cries` and `official`
/// columns existed are accepted: missing trailing columns read as empty.
pub fn parse_records(content: &str) -> Result<Vec<PokemonRecord>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());

        // CSV columns:
        // 0: id
        // 1: name
        // 2: weight
        // 3: height
        // 4: types
        // 5: sprite
        // 6: cries (may be empty)
        // 7: official ("true" or anything else)
        let get = |i: usize| row.get(i).unwrap_or("");
        let int = |i: usize| -> Result<u32, StoreError> {
            get(i).parse::<u32>().map_err(|_| {
                StoreError::malformed_row(
                    line,
                    format!("column '{}' is not an integer: {:?}", CSV_HEADER[i], get(i)),
                )
            })
        };

        let cries = get(6);
        records.push(PokemonRecord {
            id: int(0)?,
            name: get(1).to_string(),
            weight: int(2)?,
            height: int(3)?,
            types: get(4).to_string(),
            sprite: get(5).to_string(),
            cries: (!cries.is_empty()).then(|| cries.to_string()),
            official: get(7) == "true",
        });
    }

    Ok(records)
}

/// Serialize records to CSV content with the standard header.
pub fn serialize_records(records: &[PokemonRecord]) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for record in records {
        let id = record.id.to_string();
        let weight = record.weight.to_string();
        let height = record.height.to_string();
        writer.write_record([
            id.as_str(),
            record.name.as_str(),
            weight.as_str(),
            height.as_str(),
            record.types.as_str(),
            record.sprite.as_str(),
            record.cries.as_deref().unwrap_or(""),
            if record.official { "true" } else { "false" },
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::Io(e.into_error()))
}

// ── Memory ──────────────────────────────────────────────────────────────────

/// Record table held in memory. Useful for testing and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<Vec<PokemonRecord>>,
}

impl MemoryStorage {
    pub fn new(records: Vec<PokemonRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl RecordStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<PokemonRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::LockPoisoned("memory load"))?;
        Ok(records.clone())
    }

    fn save_all(&self, records: &[PokemonRecord]) -> Result<(), StoreError> {
        let mut stored = self
            .records
            .lock()
            .map_err(|_| StoreError::LockPoisoned("memory save"))?;
        *stored = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/storage_tests.rs"]
mod tests;
