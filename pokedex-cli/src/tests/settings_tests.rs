use super::*;

use tempfile::TempDir;

#[test]
fn flag_override_wins() {
    let (path, source) = resolve_data_path(Some(PathBuf::from("/tmp/custom.csv")));
    assert_eq!(path, PathBuf::from("/tmp/custom.csv"));
    assert_eq!(source, DataPathSource::Flag);
}

#[test]
fn missing_settings_file_has_no_data_path() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(load_data_path(&tmp.path().join("settings.toml")), None);
}

#[test]
fn save_then_load_data_path() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("pokedex").join("settings.toml");

    save_data_path(&settings, Some(Path::new("/srv/pokemon.csv"))).unwrap();
    assert_eq!(
        load_data_path(&settings),
        Some(PathBuf::from("/srv/pokemon.csv"))
    );
    assert!(!settings.with_extension("toml.tmp").exists());
}

#[test]
fn clearing_removes_only_the_data_path() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    std::fs::write(
        &settings,
        "[data]\ncsv_path = \"/srv/pokemon.csv\"\n\n[ui]\ncolor = false\n",
    )
    .unwrap();

    save_data_path(&settings, None).unwrap();
    assert_eq!(load_data_path(&settings), None);

    let shown = load_settings_string(&settings).unwrap();
    assert!(shown.contains("color = false"));
}

#[test]
fn empty_data_path_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    std::fs::write(&settings, "[data]\ncsv_path = \"\"\n").unwrap();
    assert_eq!(load_data_path(&settings), None);
}

#[test]
fn sources_describe_themselves() {
    assert_eq!(DataPathSource::Environment.describe(), "POKEDEX_DATA");
    assert_eq!(DataPathSource::Default.describe(), "default");
}
