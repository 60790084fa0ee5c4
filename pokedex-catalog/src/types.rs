//! Data model types for the Pokemon catalog.
//!
//! `PokemonRecord` is the fully-typed row as it is persisted. `PokemonInput`
//! is what callers submit for creation and update: raw, untrusted values that
//! still have to pass through the store's validation pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Record ──────────────────────────────────────────────────────────────────

/// A single Pokemon entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    /// Free-text type description (e.g., "grass", "fire").
    pub types: String,
    /// Absolute URL of the sprite image.
    pub sprite: String,
    /// Absolute URL of the cry audio, absent for custom records.
    #[serde(default)]
    pub cries: Option<String>,
    /// Official records are seed data and read-only.
    #[serde(default)]
    pub official: bool,
}

impl PokemonRecord {
    /// Whether this record may be updated or deleted.
    pub fn is_custom(&self) -> bool {
        !self.official
    }
}

// ── Mutable fields ──────────────────────────────────────────────────────────

/// The five caller-editable fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Weight,
    Height,
    Types,
    Sprite,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Weight,
        Field::Height,
        Field::Types,
        Field::Sprite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Types => "types",
            Field::Sprite => "sprite",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

/// Untrusted creation/update payload.
///
/// Values are kept as JSON values so that API bodies (numbers) and form
/// submissions (strings) go through the same coercion rules. A missing field
/// is `None` and fails the type check for that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub weight: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub types: Option<Value>,
    #[serde(default)]
    pub sprite: Option<Value>,
}

impl PokemonInput {
    /// Build an input from form-style `(field, value)` string pairs.
    ///
    /// Unknown field names are ignored, as a browser form may post extras.
    pub fn from_form<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut input = Self::default();
        for (key, value) in fields {
            if let Some(field) = Field::from_name(key) {
                input.set(field, Value::String(value.to_string()));
            }
        }
        input
    }

    /// An input carrying exactly the mutable fields of an existing record.
    pub fn from_record(record: &PokemonRecord) -> Self {
        Self {
            name: Some(Value::String(record.name.clone())),
            weight: Some(Value::from(record.weight)),
            height: Some(Value::from(record.height)),
            types: Some(Value::String(record.types.clone())),
            sprite: Some(Value::String(record.sprite.clone())),
        }
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Weight => self.weight.as_ref(),
            Field::Height => self.height.as_ref(),
            Field::Types => self.types.as_ref(),
            Field::Sprite => self.sprite.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Value) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::Types => &mut self.types,
            Field::Sprite => &mut self.sprite,
        };
        *slot = Some(value);
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.set(field, value.into());
        self
    }
}
