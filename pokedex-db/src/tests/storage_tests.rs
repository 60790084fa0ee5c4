use super::*;

use tempfile::TempDir;

fn record(id: u32, name: &str, official: bool) -> PokemonRecord {
    PokemonRecord {
        id,
        name: name.to_string(),
        weight: 10,
        height: 3,
        types: "normal".to_string(),
        sprite: format!("http://x/{id}.png"),
        cries: official.then(|| format!("http://x/{id}.ogg")),
        official,
    }
}

#[test]
fn serializes_header_and_literal_booleans() {
    let bytes = serialize_records(&[record(1, "bulbasaur", true), record(1000, "foo", false)]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "id,name,weight,height,types,sprite,cries,official");
    assert_eq!(
        lines[1],
        "1,bulbasaur,10,3,normal,http://x/1.png,http://x/1.ogg,true"
    );
    assert_eq!(lines[2], "1000,foo,10,3,normal,http://x/1000.png,,false");
}

#[test]
fn parses_what_it_serializes() {
    let records = vec![record(1, "bulbasaur", true), record(1000, "foo", false)];
    let bytes = serialize_records(&records).unwrap();
    let parsed = parse_records(std::str::from_utf8(&bytes).unwrap()).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn parses_legacy_six_column_rows() {
    let content = "id,name,weight,height,types,sprite\n\
                   4,charmander,85,6,fire,http://x/4.png\n";
    let parsed = parse_records(content).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name, "charmander");
    assert_eq!(parsed[0].cries, None);
    assert!(!parsed[0].official);
}

#[test]
fn trims_fields_and_coerces_official() {
    let content = "id,name,weight,height,types,sprite,cries,official\n\
                   7 , squirtle , 90 , 5 , water , http://x/7.png ,, TRUE\n\
                   8,wartortle,225,10,water,http://x/8.png,,true\n";
    let parsed = parse_records(content).unwrap();
    assert_eq!(parsed[0].id, 7);
    assert_eq!(parsed[0].name, "squirtle");
    assert_eq!(parsed[0].weight, 90);
    // Only the exact literal "true" marks a record as official
    assert!(!parsed[0].official);
    assert!(parsed[1].official);
}

#[test]
fn rejects_non_integer_columns() {
    let content = "id,name,weight,height,types,sprite,cries,official\n\
                   1,bulbasaur,heavy,7,grass,http://x/1.png,,true\n";
    let err = parse_records(content).unwrap_err();
    match err {
        StoreError::MalformedRow { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("weight"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn header_only_file_is_empty() {
    assert!(parse_records("id,name,weight,height,types,sprite,cries,official\n")
        .unwrap()
        .is_empty());
}

#[test]
fn csv_storage_round_trips_through_disk() {
    let tmp = TempDir::new().unwrap();
    let storage = CsvStorage::new(tmp.path().join("models").join("pokemon.csv"));
    let records = vec![record(1, "bulbasaur", true), record(1001, "ditto_clone", false)];

    storage.save_all(&records).unwrap();
    assert_eq!(storage.load().unwrap(), records);
    assert!(!storage.temp_path().exists());
}

#[test]
fn temp_path_is_a_sibling() {
    let storage = CsvStorage::new("/data/pokemon.csv");
    assert_eq!(storage.temp_path(), PathBuf::from("/data/pokemon.csv.tmp"));
}

#[test]
fn create_refuses_to_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pokemon.csv");
    let storage = CsvStorage::create(&path, false).unwrap();
    storage.save_all(&[record(1, "bulbasaur", true)]).unwrap();

    let err = CsvStorage::create(&path, false).unwrap_err();
    assert!(matches!(err, StoreError::Io(ref e) if e.kind() == io::ErrorKind::AlreadyExists));
    assert_eq!(storage.load().unwrap().len(), 1);

    let storage = CsvStorage::create(&path, true).unwrap();
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let storage = CsvStorage::new(tmp.path().join("absent.csv"));
    assert!(matches!(storage.load(), Err(StoreError::Io(_))));
}

#[test]
fn memory_storage_replaces_contents() {
    let storage = MemoryStorage::new(vec![record(1, "bulbasaur", true)]);
    storage.save_all(&[record(2, "ivysaur", true)]).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "ivysaur");
}
