//! The Pokemon record store.
//!
//! Every operation reads the whole table from storage; mutations rewrite the
//! whole table. There is no cache between calls. Mutations are serialized
//! through a store-wide lock held across the whole read-modify-write cycle.
//!
//! Operations return `Result<Outcome<_>, StoreError>`: the outer error is a
//! storage failure, the inner [`Outcome`] is the business result.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use pokedex_catalog::{Failure, FailureKind, Outcome, PokemonInput, PokemonRecord, Stored};

use crate::error::StoreError;
use crate::queries::{ListQuery, Page, apply_query};
use crate::storage::{CsvStorage, RecordStorage};
use crate::validation::{is_unchanged, validate};

/// IDs below this belong to the official dex range.
pub const RESERVED_ID_CEILING: u32 = 500;

/// Offset applied to the first custom ID so it lands above the dex range.
pub const CUSTOM_ID_OFFSET: u32 = 1000;

/// Next ID to assign, derived from the current maximum.
///
/// While the maximum is inside the dex range the new ID jumps by
/// [`CUSTOM_ID_OFFSET`]; afterwards IDs continue from the maximum. Gaps below
/// the maximum are never filled.
pub fn next_id(records: &[PokemonRecord]) -> u32 {
    let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
    if max_id < RESERVED_ID_CEILING {
        max_id + CUSTOM_ID_OFFSET
    } else {
        max_id.saturating_add(1)
    }
}

/// Parse an id path parameter. Only plain decimal digits are accepted.
pub fn parse_id(raw: &str) -> Result<u32, Failure> {
    let invalid = || {
        Failure::new(
            FailureKind::InvalidType,
            format!("id must be a positive integer, got {raw:?}"),
        )
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u32>().map_err(|_| invalid())
}

/// CSV-backed (by default) store of Pokemon records.
#[derive(Debug)]
pub struct PokemonStore<S = CsvStorage> {
    storage: S,
    write_lock: Mutex<()>,
}

impl PokemonStore<CsvStorage> {
    /// A store over the CSV file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(CsvStorage::new(path))
    }
}

impl<S: RecordStorage> PokemonStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Records matching `query`. Never fails for lack of matches.
    pub fn list_all(&self, query: &ListQuery) -> Result<Vec<PokemonRecord>, StoreError> {
        Ok(self.list_page(query)?.records)
    }

    /// Like [`list_all`](Self::list_all), with paging metadata.
    pub fn list_page(&self, query: &ListQuery) -> Result<Page, StoreError> {
        Ok(apply_query(self.storage.load()?, query))
    }

    /// Look up a record by its raw id parameter.
    ///
    /// A malformed id is rejected before storage is touched.
    pub fn get_by_id(&self, raw_id: &str) -> Result<Outcome<PokemonRecord>, StoreError> {
        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(failure) => return Ok(Err(failure)),
        };
        Ok(self.find(id)?.map(Stored::ok).ok_or_else(|| Failure::not_found(id)))
    }

    /// Validate `input` and append it as a new custom record.
    ///
    /// The returned record is re-read from storage after the write.
    pub fn create(&self, input: &PokemonInput) -> Result<Outcome<PokemonRecord>, StoreError> {
        let _guard = self.lock("create")?;
        let mut records = self.storage.load()?;

        let fields = match validate(input, &records, None) {
            Ok(fields) => fields,
            Err(failure) => return Ok(Err(failure)),
        };

        let id = next_id(&records);
        records.push(fields.into_record(id));
        self.storage.save_all(&records)?;

        Ok(Ok(Stored::created(self.reload(id)?)))
    }

    /// Replace the mutable fields of custom record `id`.
    ///
    /// Official records are refused, and an update that would change
    /// nothing is reported as `NothingToDo` rather than silently accepted.
    pub fn update(
        &self,
        id: u32,
        input: &PokemonInput,
    ) -> Result<Outcome<PokemonRecord>, StoreError> {
        let _guard = self.lock("update")?;
        let mut records = self.storage.load()?;

        let Some(position) = records.iter().position(|r| r.id == id) else {
            return Ok(Err(Failure::not_found(id)));
        };
        let existing = &records[position];
        if existing.official {
            return Ok(Err(Failure::forbidden(&existing.name)));
        }
        if is_unchanged(existing, input) {
            return Ok(Err(Failure::nothing_to_do(id)));
        }

        let fields = match validate(input, &records, Some(id)) {
            Ok(fields) => fields,
            Err(failure) => return Ok(Err(failure)),
        };

        fields.apply_to(&mut records[position]);
        self.storage.save_all(&records)?;

        Ok(Ok(Stored::ok(self.reload(id)?)))
    }

    /// Remove custom record `id`, returning the removed record.
    pub fn delete(&self, id: u32) -> Result<Outcome<PokemonRecord>, StoreError> {
        let _guard = self.lock("delete")?;
        let mut records = self.storage.load()?;

        let Some(existing) = records.iter().find(|r| r.id == id).cloned() else {
            return Ok(Err(Failure::not_found(id)));
        };
        if existing.official {
            return Ok(Err(Failure::forbidden(&existing.name)));
        }

        records.retain(|r| r.id != id);
        self.storage.save_all(&records)?;

        Ok(Ok(Stored::ok(existing)))
    }

    fn find(&self, id: u32) -> Result<Option<PokemonRecord>, StoreError> {
        Ok(self.storage.load()?.into_iter().find(|r| r.id == id))
    }

    /// Re-read a record that was just written.
    fn reload(&self, id: u32) -> Result<PokemonRecord, StoreError> {
        self.find(id)?.ok_or(StoreError::WriteNotVisible { id })
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
