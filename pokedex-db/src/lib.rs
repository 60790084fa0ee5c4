//! Flat-file persistence layer for the Pokemon catalog.
//!
//! Provides the storage interface with CSV and in-memory backends, the
//! field validation pipeline, listing queries, and the record store that
//! ties them together into list/get/create/update/delete operations.

pub mod error;
pub mod queries;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::StoreError;
pub use queries::{KANTO_POKEDEX_OG, Limit, ListQuery, Page};
pub use storage::{CSV_HEADER, CsvStorage, MemoryStorage, RecordStorage};
pub use store::{CUSTOM_ID_OFFSET, PokemonStore, RESERVED_ID_CEILING, next_id, parse_id};
pub use validation::{ValidFields, is_unchanged, validate};
