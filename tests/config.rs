//! Configuration system tests
//!
//! Tests for config paths, config file loading/saving and option resolution.

use maskedit::config::MaskConfig;
use maskedit::config_paths;
use maskedit::mask::{LocaleSymbols, MaskedTextProvider};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("maskedit"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Mask Config Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = MaskConfig::default();
    config.options.prompt_char = '#';
    config.options.password_char = Some('•');
    config
        .presets
        .insert("ssn".to_string(), "000-00-0000".to_string());
    config.locales.insert(
        "sv-SE",
        LocaleSymbols {
            decimal: ",".to_string(),
            group: " ".to_string(),
            currency: "kr".to_string(),
            ..LocaleSymbols::invariant()
        },
    );
    config.locale = Some("sv-SE".to_string());

    config.save_to(&path).unwrap();
    let loaded = MaskConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_from_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = MaskConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_load_from_invalid_yaml_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "options: [not, a, map]\n").unwrap();
    let err = MaskConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "{}\n").unwrap();
    assert_eq!(MaskConfig::load_from(&path).unwrap(), MaskConfig::default());
}

#[test]
fn test_config_builds_provider() {
    let yaml = r#"
options:
  prompt_char: "-"
  include_prompt: true
locale: de-DE
locales:
  de-DE: { decimal: ",", group: "." }
presets:
  amount: "0,000.00"
"#;
    let config: MaskConfig = serde_yaml::from_str(yaml).unwrap();
    let mask = config.resolve_mask("amount");
    let mut p = MaskedTextProvider::with_options(mask, &config.provider_options()).unwrap();
    assert!(p.add_str("12").success);
    assert_eq!(p.to_string(), "1.2--,--");
}

#[test]
fn test_empty_locale_symbol_falls_back_to_invariant() {
    let yaml = r#"
locale: xx
locales:
  xx: { currency: "", decimal: "" }
"#;
    let config: MaskConfig = serde_yaml::from_str(yaml).unwrap();
    let p = MaskedTextProvider::with_options("$0.0", &config.provider_options()).unwrap();
    assert_eq!(p.len(), 4);
    assert_eq!(p.to_string_with(true, true), "¤_._");
}
