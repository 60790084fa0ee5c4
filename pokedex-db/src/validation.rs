//! Field validation for creation and update payloads.
//!
//! Validation is an ordered list of rules, each bound to one input field.
//! Rules run in sequence and the first failure wins, which fixes the
//! precedence callers observe: name type, name syntax, name uniqueness,
//! then per-field type and range checks, then the sprite URL.

use pokedex_catalog::{
    Failure, FailureKind, Field, PokemonInput, PokemonRecord, is_valid_name_syntax, normalize_name,
};
use serde_json::Value;

/// The five mutable fields after successful validation and coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub types: String,
    pub sprite: String,
}

impl ValidFields {
    /// A new custom record with these fields.
    pub fn into_record(self, id: u32) -> PokemonRecord {
        PokemonRecord {
            id,
            name: self.name,
            weight: self.weight,
            height: self.height,
            types: self.types,
            sprite: self.sprite,
            cries: None,
            official: false,
        }
    }

    /// Overwrite the mutable fields of `record`, keeping id, cries, and official.
    pub fn apply_to(self, record: &mut PokemonRecord) {
        record.name = self.name;
        record.weight = self.weight;
        record.height = self.height;
        record.types = self.types;
        record.sprite = self.sprite;
    }
}

/// Values accumulated while the rules run.
#[derive(Debug, Default)]
struct Draft {
    name: Option<String>,
    weight: Option<u32>,
    height: Option<u32>,
    types: Option<String>,
    sprite: Option<String>,
}

struct Context<'a> {
    input: &'a PokemonInput,
    existing: &'a [PokemonRecord],
    /// Record being updated; its own name never counts as a duplicate.
    exclude_id: Option<u32>,
}

type Rejection = (FailureKind, String);
type Rule = fn(&Context<'_>, &mut Draft) -> Result<(), Rejection>;

const RULES: [(Field, Rule); 8] = [
    (Field::Name, name_is_text),
    (Field::Name, name_syntax),
    (Field::Name, name_is_unique),
    (Field::Weight, weight_in_range),
    (Field::Height, height_in_range),
    (Field::Types, types_is_text),
    (Field::Sprite, sprite_is_text),
    (Field::Sprite, sprite_is_url),
];

/// Run the validation rules against `input`.
///
/// `existing` is the current table, used for the duplicate-name check.
/// `exclude_id` names the record being updated, if any.
pub fn validate(
    input: &PokemonInput,
    existing: &[PokemonRecord],
    exclude_id: Option<u32>,
) -> Result<ValidFields, Failure> {
    let ctx = Context {
        input,
        existing,
        exclude_id,
    };
    let mut draft = Draft::default();

    for (field, rule) in RULES {
        rule(&ctx, &mut draft)
            .map_err(|(kind, message)| Failure::on_field(kind, field, message))?;
    }

    match draft {
        Draft {
            name: Some(name),
            weight: Some(weight),
            height: Some(height),
            types: Some(types),
            sprite: Some(sprite),
        } => Ok(ValidFields {
            name,
            weight,
            height,
            types,
            sprite,
        }),
        _ => Err(Failure::new(
            FailureKind::InvalidType,
            "incomplete pokemon payload",
        )),
    }
}

/// Whether `input` would leave `record` exactly as it is.
///
/// Compares field by field after the same normalization validation applies,
/// so `"5"` and `5`, or `"mr  mime"` and `"mr_mime"`, count as unchanged.
/// Any field that cannot be coerced counts as a change.
pub fn is_unchanged(record: &PokemonRecord, input: &PokemonInput) -> bool {
    let name = text(input.name.as_ref()).map(normalize_name);
    let weight = count(input.weight.as_ref()).ok();
    let height = count(input.height.as_ref()).ok();
    let types = text(input.types.as_ref()).map(str::trim);
    let sprite = text(input.sprite.as_ref()).map(str::trim);

    name.as_deref() == Some(record.name.as_str())
        && weight == Some(record.weight)
        && height == Some(record.height)
        && types == Some(record.types.as_str())
        && sprite == Some(record.sprite.as_str())
}

// ── Coercion helpers ────────────────────────────────────────────────────────

fn text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

fn require_text<'a>(value: Option<&'a Value>, field: Field) -> Result<&'a str, Rejection> {
    text(value).ok_or_else(|| {
        (
            FailureKind::InvalidType,
            format!("{field} must be a string"),
        )
    })
}

/// Coerce a JSON number or numeric string to a positive count.
fn count(value: Option<&Value>) -> Result<u32, Rejection> {
    let parsed = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => {
            return Err((FailureKind::InvalidType, "must be a number".to_string()));
        }
    };

    let n = parsed.ok_or_else(|| (FailureKind::InvalidNumber, "must be an integer".to_string()))?;
    if n < 1 {
        return Err((
            FailureKind::InvalidNumberValue,
            "must be at least 1".to_string(),
        ));
    }
    u32::try_from(n).map_err(|_| (FailureKind::InvalidNumberValue, "is too large".to_string()))
}

fn count_field(value: Option<&Value>, field: Field) -> Result<u32, Rejection> {
    count(value).map_err(|(kind, message)| (kind, format!("{field} {message}")))
}

// ── Rules ───────────────────────────────────────────────────────────────────

fn name_is_text(ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    let raw = require_text(ctx.input.name.as_ref(), Field::Name)?;
    draft.name = Some(normalize_name(raw));
    Ok(())
}

fn name_syntax(_ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    let name = draft.name.as_deref().unwrap_or_default();
    if is_valid_name_syntax(name) {
        Ok(())
    } else {
        Err((
            FailureKind::InvalidNameSyntax,
            format!("{name:?} must start with a letter followed by letters, digits or underscores"),
        ))
    }
}

fn name_is_unique(ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    let name = draft.name.as_deref().unwrap_or_default();
    let taken = ctx
        .existing
        .iter()
        .any(|r| r.name == name && Some(r.id) != ctx.exclude_id);
    if taken {
        Err((
            FailureKind::DuplicateName,
            format!("a pokemon named {name} already exists"),
        ))
    } else {
        Ok(())
    }
}

fn weight_in_range(ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    draft.weight = Some(count_field(ctx.input.weight.as_ref(), Field::Weight)?);
    Ok(())
}

fn height_in_range(ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    draft.height = Some(count_field(ctx.input.height.as_ref(), Field::Height)?);
    Ok(())
}

fn types_is_text(ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    let types = require_text(ctx.input.types.as_ref(), Field::Types)?;
    draft.types = Some(types.trim().to_string());
    Ok(())
}

fn sprite_is_text(ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    let sprite = require_text(ctx.input.sprite.as_ref(), Field::Sprite)?;
    draft.sprite = Some(sprite.trim().to_string());
    Ok(())
}

fn sprite_is_url(_ctx: &Context<'_>, draft: &mut Draft) -> Result<(), Rejection> {
    let sprite = draft.sprite.as_deref().unwrap_or_default();
    url::Url::parse(sprite)
        .map(|_| ())
        .map_err(|e| (FailureKind::InvalidUrl, format!("sprite is not a valid URL: {e}")))
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
