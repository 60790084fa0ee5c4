//! Structured results of store operations.
//!
//! Every business-rule or validation failure is reported as a [`Failure`]
//! value carrying an HTTP-style status code, a machine-readable kind, a
//! human-readable message, and optionally the offending input field, so that
//! a caller can render the message next to the matching form input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Field;

/// Kinds of recoverable failure reported by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// A field has the wrong type, or an id path parameter is malformed.
    InvalidType,
    /// A numeric field could not be parsed as an integer.
    InvalidNumber,
    /// A numeric field is below the allowed minimum of 1.
    InvalidNumberValue,
    /// The name does not start with a letter or contains disallowed characters.
    InvalidNameSyntax,
    /// The name is already used by another record.
    DuplicateName,
    /// The sprite is not a parseable URL.
    #[serde(rename = "InvalidURL")]
    InvalidUrl,
    /// No record has the requested id.
    NotFound,
    /// The record is official and cannot be mutated.
    Forbidden,
    /// An update would not change anything.
    NothingToDo,
}

impl FailureKind {
    /// HTTP-style status code reported for this kind.
    pub fn code(self) -> u16 {
        match self {
            FailureKind::InvalidType
            | FailureKind::InvalidNumber
            | FailureKind::InvalidNumberValue => 400,
            FailureKind::Forbidden => 403,
            FailureKind::NotFound => 404,
            FailureKind::DuplicateName => 409,
            FailureKind::InvalidNameSyntax | FailureKind::InvalidUrl | FailureKind::NothingToDo => {
                422
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::InvalidType => "InvalidType",
            FailureKind::InvalidNumber => "InvalidNumber",
            FailureKind::InvalidNumberValue => "InvalidNumberValue",
            FailureKind::InvalidNameSyntax => "InvalidNameSyntax",
            FailureKind::DuplicateName => "DuplicateName",
            FailureKind::InvalidUrl => "InvalidURL",
            FailureKind::NotFound => "NotFound",
            FailureKind::Forbidden => "Forbidden",
            FailureKind::NothingToDo => "NothingToDo",
        }
    }
}

/// A recoverable failure of a store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Failure {
    pub code: u16,
    pub error: FailureKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop: Option<Field>,
}

impl Failure {
    pub fn new(error: FailureKind, message: impl Into<String>) -> Self {
        Self {
            code: error.code(),
            error,
            message: message.into(),
            prop: None,
        }
    }

    /// A failure attributed to a specific input field.
    pub fn on_field(error: FailureKind, field: Field, message: impl Into<String>) -> Self {
        Self {
            prop: Some(field),
            ..Self::new(error, message)
        }
    }

    pub fn not_found(id: u32) -> Self {
        Self::new(FailureKind::NotFound, format!("pokemon {id} not found"))
    }

    pub fn forbidden(record_name: &str) -> Self {
        Self::new(
            FailureKind::Forbidden,
            format!("{record_name} is an official pokemon and cannot be modified"),
        )
    }

    pub fn nothing_to_do(id: u32) -> Self {
        Self::new(
            FailureKind::NothingToDo,
            format!("pokemon {id} already has these values"),
        )
    }
}

/// A successful store operation: status code plus the affected record(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub code: u16,
    pub record: T,
}

impl<T> Stored<T> {
    pub fn ok(record: T) -> Self {
        Self { code: 200, record }
    }

    pub fn created(record: T) -> Self {
        Self { code: 201, record }
    }
}

/// Business-level result of a store operation.
pub type Outcome<T> = Result<Stored<T>, Failure>;
