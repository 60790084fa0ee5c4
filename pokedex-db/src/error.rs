use thiserror::Error;

/// Unrecoverable storage failures.
///
/// These are distinct from [`pokedex_catalog::Failure`]: a `StoreError`
/// means the backing data could not be read or written, and callers should
/// treat it as a server-side error rather than a problem with the input.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("Record {id} was written but is missing on reload")]
    WriteNotVisible { id: u32 },

    #[error("Store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StoreError {
    pub fn malformed_row(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }

    /// HTTP-style status code for this error. Always a server error.
    pub fn code(&self) -> u16 {
        500
    }
}
