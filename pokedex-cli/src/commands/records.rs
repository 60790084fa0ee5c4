//! Record commands: init, list, get, create, update, delete.
//!
//! These are thin callers of the record store. Each one logs a single
//! structured line describing the outcome, then renders the result.

use std::path::Path;

use serde_json::Value;

use pokedex_catalog::{Field, Outcome, PokemonInput, PokemonRecord};
use pokedex_db::{CsvStorage, ListQuery, PokemonStore, parse_id};

use crate::render::{print_failure, print_json, print_page, print_record};
use crate::{CliError, Status};

/// Field values given on the command line, as a form would submit them.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldArgs {
    pub(crate) name: Option<String>,
    pub(crate) weight: Option<String>,
    pub(crate) height: Option<String>,
    pub(crate) types: Option<String>,
    pub(crate) sprite: Option<String>,
}

impl FieldArgs {
    fn pairs(&self) -> Vec<(Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Weight, &self.weight),
            (Field::Height, &self.height),
            (Field::Types, &self.types),
            (Field::Sprite, &self.sprite),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    /// Overlay the given fields onto `base`.
    fn apply(&self, mut base: PokemonInput) -> PokemonInput {
        for (field, value) in self.pairs() {
            base.set(field, Value::String(value.to_string()));
        }
        base
    }
}

pub(crate) fn run_init(data_path: &Path, force: bool) -> Result<Status, CliError> {
    CsvStorage::create(data_path, force)?;
    log::info!("op=init path={}", data_path.display());
    println!("Initialized empty pokedex at {}", data_path.display());
    Ok(Status::Done)
}

pub(crate) fn run_list(
    store: &PokemonStore,
    query: &ListQuery,
    json: bool,
) -> Result<Status, CliError> {
    let page = store.list_page(query)?;
    log::info!(
        "op=list pattern={:?} offset={} limit={} returned={} total={}",
        query.pattern.as_deref().unwrap_or(""),
        query.offset,
        query.limit,
        page.records.len(),
        page.total,
    );

    if json {
        print_json(&page.records)?;
    } else {
        print_page(&page);
    }
    Ok(Status::Done)
}

pub(crate) fn run_get(store: &PokemonStore, raw_id: &str, json: bool) -> Result<Status, CliError> {
    let outcome = store.get_by_id(raw_id)?;
    report("get", Some(raw_id), outcome, json)
}

pub(crate) fn run_create(
    store: &PokemonStore,
    fields: &FieldArgs,
    json: bool,
) -> Result<Status, CliError> {
    let input = fields.apply(PokemonInput::default());
    let outcome = store.create(&input)?;
    report("create", None, outcome, json)
}

/// Update a record. Fields not given on the command line keep their
/// current values, the way an edit form is pre-filled.
pub(crate) fn run_update(
    store: &PokemonStore,
    raw_id: &str,
    fields: &FieldArgs,
    json: bool,
) -> Result<Status, CliError> {
    if fields.pairs().is_empty() {
        return Err(CliError::other(
            "nothing to update: pass at least one of --name, --weight, --height, --types, --sprite",
        ));
    }

    let current = match store.get_by_id(raw_id)? {
        Ok(stored) => stored.record,
        Err(failure) => return report("update", Some(raw_id), Err(failure), json),
    };

    let input = fields.apply(PokemonInput::from_record(&current));
    let outcome = store.update(current.id, &input)?;
    report("update", Some(raw_id), outcome, json)
}

pub(crate) fn run_delete(store: &PokemonStore, raw_id: &str, json: bool) -> Result<Status, CliError> {
    let outcome = match parse_id(raw_id) {
        Ok(id) => store.delete(id)?,
        Err(failure) => Err(failure),
    };
    report("delete", Some(raw_id), outcome, json)
}

/// Log and render a store outcome.
fn report(
    op: &str,
    raw_id: Option<&str>,
    outcome: Outcome<PokemonRecord>,
    json: bool,
) -> Result<Status, CliError> {
    match outcome {
        Ok(stored) => {
            log::info!(
                "op={op} id={} code={} name={}",
                stored.record.id,
                stored.code,
                stored.record.name,
            );
            if json {
                print_json(&stored)?;
            } else {
                print_record(&stored.record);
            }
            Ok(Status::Done)
        }
        Err(failure) => {
            log::warn!(
                "op={op} id={} code={} error={} prop={}",
                raw_id.unwrap_or("-"),
                failure.code,
                failure.error.as_str(),
                failure.prop.map_or("-", Field::as_str),
            );
            if json {
                print_json(&failure)?;
            } else {
                print_failure(&failure);
            }
            Ok(Status::Rejected)
        }
    }
}

#[cfg(test)]
#[path = "../tests/records_tests.rs"]
mod tests;
