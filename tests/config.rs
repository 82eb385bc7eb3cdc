use timedock::config::HostConfig;
use timedock::constants::DEFAULT_CELL_HEIGHT;

#[test]
fn test_default_config() {
    let config = HostConfig::default();
    assert_eq!(config.widget.label, None);
    assert_eq!(config.widget.default, None);
    assert!(!config.widget.disabled);
    assert_eq!(config.frame.cell_height, DEFAULT_CELL_HEIGHT);
    assert!(config.theme.is_none());
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = HostConfig::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Cell height outside the accepted range should fail
    config.frame.cell_height = 4;
    assert!(config.validate().is_err());

    config.frame.cell_height = 100;
    assert!(config.validate().is_err());

    config.frame.cell_height = 20;
    assert!(config.validate().is_ok());
}

#[test]
fn test_unparseable_widget_default_is_valid_config() {
    let mut config = HostConfig::default();
    config.widget.default = Some("not-a-time".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = HostConfig::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("cell_height = 20"));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r##"
[widget]
label = "Departure"
default = "02:30 pm"

[theme]
base = "dark"
primaryColor = "#FF4B4B"
"##;

    let config: HostConfig = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.widget.label.as_deref(), Some("Departure"));
    assert_eq!(config.widget.default.as_deref(), Some("02:30 pm"));
    assert!(!config.widget.disabled); // default value
    assert_eq!(config.frame.cell_height, DEFAULT_CELL_HEIGHT); // default value

    let theme = config.theme.expect("theme table should deserialize");
    assert_eq!(theme.base.as_deref(), Some("dark"));
    assert_eq!(theme.primary_color.as_deref(), Some("#FF4B4B"));
}

#[test]
fn test_empty_config_deserialization() {
    let config: HostConfig = toml::from_str("").unwrap();
    assert_eq!(config.frame.cell_height, DEFAULT_CELL_HEIGHT);
    assert!(config.theme.is_none());
}

#[test]
fn test_widget_args_mapping() {
    let toml_str = r##"
[widget]
label = "Departure"
disabled = true

[theme]
base = "dark"
"##;
    let config: HostConfig = toml::from_str(toml_str).unwrap();
    let args = config.widget_args();

    assert_eq!(args.label.as_deref(), Some("Departure"));
    assert_eq!(args.default, None);
    assert!(args.disabled);
    assert_eq!(args.theme.unwrap().base.as_deref(), Some("dark"));
}
