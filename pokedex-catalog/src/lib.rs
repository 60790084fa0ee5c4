//! Pokemon catalog data model, failure taxonomy, and name rules.
//!
//! This crate defines the record types shared by the store and its callers
//! without any persistence dependencies. Consumers can use these types
//! directly for serialization or display, or hand them to `pokedex-db`.

pub mod name;
pub mod outcome;
pub mod types;

pub use name::{is_valid_name_syntax, normalize_name};
pub use outcome::{Failure, FailureKind, Outcome, Stored};
pub use types::*;
