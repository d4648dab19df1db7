use gadgets::components::button::ButtonVariant;
use gadgets::config::{ConfigLoadResult, load_config};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_load_full_config_file() {
    let file = write_config(
        r#"
poll_timeout_ms = 20

[ui]
popup_width = 80
popup_height = 50
theme = "light"

[keys]
key_quit = "x"
key_confirm_yes = "j"

[logging]
level = "debug"

[email]
check_deliverability = false
timeout_secs = 5

[demo]
yes_variant = "warning"
"#,
    );

    let config = match load_config(Some(file.path())) {
        ConfigLoadResult::Success(config) => config,
        other => panic!("expected a loaded config, got {other:?}"),
    };

    assert_eq!(config.poll_timeout(), Duration::from_millis(20));
    assert_eq!(config.ui().popup_width(), 80);
    assert_eq!(config.ui().popup_height(), 50);
    assert_eq!(config.ui().theme(), "light");
    assert_eq!(config.keys().quit(), 'x');
    assert_eq!(config.keys().confirm_yes(), 'j');
    assert_eq!(config.keys().confirm_no(), 'n');
    assert_eq!(config.logging().level(), "debug");
    assert_eq!(config.email().timeout(), Duration::from_secs(5));
    assert!(!config.email().check_deliverability());
    assert_eq!(config.demo().yes_variant(), ButtonVariant::Warning);
    assert_eq!(config.demo().no_variant(), ButtonVariant::Primary);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");

    let config = match load_config(Some(file.path())) {
        ConfigLoadResult::Success(config) => config,
        other => panic!("expected a loaded config, got {other:?}"),
    };

    assert_eq!(config.ui().popup_width(), 60);
    assert_eq!(config.ui().popup_height(), 40);
    assert_eq!(config.ui().theme(), "dark");
    assert_eq!(config.keys().back(), 'b');
    assert_eq!(config.email().timeout(), Duration::from_secs(15));
}

#[test]
fn test_unknown_button_variant_falls_back() {
    let file = write_config("[demo]\nyes_variant = \"danger\"\nno_variant = \"Success\"\n");

    let config = match load_config(Some(file.path())) {
        ConfigLoadResult::Success(config) => config,
        other => panic!("expected a loaded config, got {other:?}"),
    };

    assert_eq!(config.demo().yes_variant(), ButtonVariant::Error);
    assert_eq!(config.demo().no_variant(), ButtonVariant::Success);
    assert_eq!(config.demo().button_variant(), ButtonVariant::Primary);
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let file = write_config(
        r#"
[ui]
popup_width = 10

[email]
timeout_secs = 120
"#,
    );

    match load_config(Some(file.path())) {
        ConfigLoadResult::DeserializeError(message) => {
            assert!(message.starts_with("Configuration validation failed"));
            assert!(message.contains("Popup size out of range"));
            assert!(message.contains("Your configured value: 10%"));
            assert!(message.contains("Email DNS timeout out of range"));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let file = write_config("[logging]\nlevel = \"chatty\"\n");

    match load_config(Some(file.path())) {
        ConfigLoadResult::DeserializeError(message) => {
            assert!(message.contains("Unknown log level 'chatty'"));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_wrong_value_type_is_a_deserialize_error() {
    let file = write_config("[ui]\npopup_width = \"wide\"\n");

    assert!(matches!(
        load_config(Some(file.path())),
        ConfigLoadResult::DeserializeError(_)
    ));
}

#[test]
fn test_missing_explicit_file_is_a_load_error() {
    let result = load_config(Some(Path::new("/nonexistent/gadgets/config.toml")));

    match result {
        ConfigLoadResult::LoadError(message) => {
            assert!(message.starts_with("Configuration loading failed"));
        }
        other => panic!("expected a load error, got {other:?}"),
    }
}
