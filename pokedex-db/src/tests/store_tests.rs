use super::*;

use crate::storage::MemoryStorage;

fn with_ids(ids: &[u32]) -> Vec<PokemonRecord> {
    ids.iter()
        .map(|&id| PokemonRecord {
            id,
            name: format!("mon{id}"),
            weight: 1,
            height: 1,
            types: "normal".to_string(),
            sprite: "http://x/p.png".to_string(),
            cries: None,
            official: id < RESERVED_ID_CEILING,
        })
        .collect()
}

#[test]
fn next_id_jumps_above_dex_range() {
    assert_eq!(next_id(&with_ids(&[1, 2, 3])), 1003);
    assert_eq!(next_id(&with_ids(&[151])), 1151);
    assert_eq!(next_id(&with_ids(&[499])), 1499);
}

#[test]
fn next_id_continues_once_in_high_range() {
    assert_eq!(next_id(&with_ids(&[1, 500])), 501);
    assert_eq!(next_id(&with_ids(&[3, 1003])), 1004);
}

#[test]
fn next_id_on_empty_store() {
    assert_eq!(next_id(&[]), 1000);
}

#[test]
fn next_id_does_not_fill_gaps() {
    assert_eq!(next_id(&with_ids(&[1, 1003, 1010])), 1011);
}

#[test]
fn parse_id_accepts_plain_digits() {
    assert_eq!(parse_id("5"), Ok(5));
    assert_eq!(parse_id("1003"), Ok(1003));
    assert_eq!(parse_id("007"), Ok(7));
}

#[test]
fn parse_id_rejects_malformed_input() {
    for raw in ["", "12a", "5x", "-1", "+1", " 5", "1.0", "99999999999"] {
        let failure = parse_id(raw).unwrap_err();
        assert_eq!(failure.code, 400, "{raw:?}");
        assert_eq!(failure.error, FailureKind::InvalidType, "{raw:?}");
    }
}

#[test]
fn get_by_id_on_memory_storage() {
    let store = PokemonStore::new(MemoryStorage::new(with_ids(&[1, 2])));
    let found = store.get_by_id("2").unwrap().unwrap();
    assert_eq!(found.code, 200);
    assert_eq!(found.record.id, 2);

    let missing = store.get_by_id("3").unwrap().unwrap_err();
    assert_eq!(missing.code, 404);
    assert_eq!(missing.error, FailureKind::NotFound);
}
