//! Tests for settings functionality.

use crate::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.symbol_prefix, "CONFIG_");
    assert_eq!(settings.name_width, 25);
    assert_eq!(settings.makefile_name, ".config.mk");
    assert_eq!(settings.header_name, ".config.h");
    assert_eq!(settings.header_guard, "__CONFIG_H__");
    assert_eq!(settings.generator, "confgen");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let settings = Settings::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
symbol_prefix: R5_
header_guard: __R5_CONFIG_H__
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    assert_eq!(settings.symbol_prefix, "R5_");
    assert_eq!(settings.header_guard, "__R5_CONFIG_H__");

    // Unspecified values should use defaults
    assert_eq!(settings.makefile_name, ".config.mk");
    assert_eq!(settings.name_width, 25);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
symbol_prefix: FEATURE_
name_width: 0
makefile_name: features.mk
header_name: features.h
header_guard: FEATURES_H
generator: scripts/config
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    assert_eq!(settings.symbol_prefix, "FEATURE_");
    assert_eq!(settings.name_width, 0);
    assert_eq!(settings.makefile_name, "features.mk");
    assert_eq!(settings.header_name, "features.h");
    assert_eq!(settings.header_guard, "FEATURES_H");
    assert_eq!(settings.generator, "scripts/config");
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
symbol_prefix: X_
emit_json: true
"#;
    let settings = Settings::from_yaml(yaml).unwrap();
    assert_eq!(settings.symbol_prefix, "X_");
}

#[test]
fn test_parse_invalid_yaml() {
    let err = Settings::from_yaml("name_width: wide").unwrap_err();
    assert!(err.to_string().contains("failed to parse settings YAML"));
}

#[test]
fn test_validate_symbol_prefix() {
    let err = Settings::from_yaml("symbol_prefix: \"CONFIG-\"").unwrap_err();
    assert!(err.to_string().contains("symbol_prefix"));
    assert!(err.to_string().contains("not a valid identifier"));

    let err = Settings::from_yaml("symbol_prefix: \"\"").unwrap_err();
    assert!(err.to_string().contains("symbol_prefix"));
}

#[test]
fn test_validate_header_guard() {
    let err = Settings::from_yaml("header_guard: \"CONFIG H\"").unwrap_err();
    assert!(err.to_string().contains("header_guard"));
}

#[test]
fn test_validate_output_names_are_plain() {
    let err = Settings::from_yaml("makefile_name: out/config.mk").unwrap_err();
    assert!(err.to_string().contains("makefile_name"));
    assert!(err.to_string().contains("plain file name"));

    let err = Settings::from_yaml("header_name: \"\"").unwrap_err();
    assert!(err.to_string().contains("header_name"));

    let err = Settings::from_yaml("header_name: \"..\"").unwrap_err();
    assert!(err.to_string().contains("header_name"));
}

#[test]
fn test_validate_output_names_are_distinct() {
    let err = Settings::from_yaml("makefile_name: config\nheader_name: config\n").unwrap_err();
    assert!(err.to_string().contains("are both 'config'"));
}

#[test]
fn test_symbol() {
    let settings = Settings::default();
    assert_eq!(settings.symbol("VUART"), "CONFIG_VUART");
}

#[test]
fn test_to_yaml() {
    let settings = Settings::default();
    let yaml = settings.to_yaml().unwrap();

    let parsed = Settings::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_settings_load_from_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol_prefix: R5_").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.symbol_prefix, "R5_");
}

#[test]
fn test_settings_load_missing_file() {
    let err = Settings::load("/nonexistent/path/confgen.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read settings file"));
}
