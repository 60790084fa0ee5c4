//! Text and JSON rendering of store results.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use pokedex_catalog::{Failure, PokemonRecord};
use pokedex_db::Page;

use crate::CliError;

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Label shown next to a record's name.
fn origin_label(record: &PokemonRecord) -> &'static str {
    if record.is_custom() { "custom" } else { "official" }
}

/// Full detail view of one record.
pub(crate) fn print_record(record: &PokemonRecord) {
    println!(
        "{} {}",
        record.name.if_supports_color(Stdout, |t| t.bold()),
        format!("#{} ({})", record.id, origin_label(record))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!("  weight:  {}", record.weight);
    println!("  height:  {}", record.height);
    println!("  types:   {}", record.types);
    println!("  sprite:  {}", record.sprite);
    if let Some(cries) = &record.cries {
        println!("  cries:   {cries}");
    }
}

/// One line per record, followed by a paging hint.
pub(crate) fn print_page(page: &Page) {
    if page.records.is_empty() {
        println!(
            "{}",
            "No pokemon found.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }

    println!(
        "{}",
        format!(
            "{:>6}  {:<24} {:<12} {:>7} {:>7}",
            "ID", "NAME", "TYPES", "WEIGHT", "HEIGHT"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for record in &page.records {
        let line = format!(
            "{:>6}  {:<24} {:<12} {:>7} {:>7}",
            record.id,
            truncate_str(&record.name, 24),
            truncate_str(&record.types, 12),
            record.weight,
            record.height,
        );
        if record.official {
            println!("{line}");
        } else {
            println!("{}", line.if_supports_color(Stdout, |t| t.cyan()));
        }
    }

    let shown_to = page.offset + page.records.len();
    let summary = match page.next_offset {
        Some(next) => format!(
            "Showing {}-{} of {} (next page: --offset {next})",
            page.offset + 1,
            shown_to,
            page.total
        ),
        None => format!("Showing {}-{} of {}", page.offset + 1, shown_to, page.total),
    };
    println!();
    println!("{}", summary.if_supports_color(Stdout, |t| t.dimmed()));
}

/// A rejected operation, with the offending field when there is one.
pub(crate) fn print_failure(failure: &Failure) {
    let head = format!("{} {}", failure.code, failure.error.as_str());
    match failure.prop {
        Some(field) => eprintln!(
            "{} {}: {}",
            head.if_supports_color(owo_colors::Stream::Stderr, |t| t.red()),
            field.if_supports_color(owo_colors::Stream::Stderr, |t| t.bold()),
            failure.message,
        ),
        None => eprintln!(
            "{} {}",
            head.if_supports_color(owo_colors::Stream::Stderr, |t| t.red()),
            failure.message,
        ),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
