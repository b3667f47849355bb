use factoryplan_io::load_factory_config;
use std::io::Write;

fn write_fixture(extension: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_json_config_from_disk() {
    let file = write_fixture(
        "json",
        r#"{
            "recipes": [
                { "m": "Electrolyzer", "tier": "LV", "inputs": {"water": 1000}, "outputs": {"hydrogen": 1000}, "dur": 20, "eut": 8 }
            ],
            "targets": { "hydrogen": 500.0 }
        }"#,
    );
    let config = load_factory_config(file.path()).unwrap();
    assert_eq!(config.recipes.len(), 1);
    assert_eq!(config.targets[0].quantity_per_second, 500.0);
}

#[test]
fn loads_yaml_config_from_disk() {
    let file = write_fixture(
        "yaml",
        "recipes:\n  - m: Electrolyzer\n    tier: LV\n    inputs:\n      water: 1000\n    outputs:\n      hydrogen: 1000\n    dur: 20\n    eut: 8\ntargets:\n  hydrogen: 500.0\n",
    );
    let config = load_factory_config(file.path()).unwrap();
    assert_eq!(config.recipes.len(), 1);
}

#[test]
fn missing_file_surfaces_io_error() {
    let result = load_factory_config("/nonexistent/path/to/config.json");
    assert!(result.is_err());
}
