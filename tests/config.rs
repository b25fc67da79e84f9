use menulist::config::Config;
use menulist::constants::DEFAULT_BASE_URL;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty base URL should fail
    config.server.base_url = String::new();
    assert!(config.validate().is_err());

    // Schemeless base URL should fail
    config.server.base_url = "localhost:3333".to_string();
    assert!(config.validate().is_err());

    // Reset and test unknown log level
    config.server.base_url = DEFAULT_BASE_URL.to_string();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:3333\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[server]
base_url = "https://menu.example.com/api"

[logging]
file = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.server.base_url, "https://menu.example.com/api");
    assert!(config.logging.file);

    // Check that unspecified values use defaults
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    // Empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.server.base_url, default_config.server.base_url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_base_url_trailing_slash_is_trimmed_for_routing() {
    let config: Config = toml::from_str(
        r#"
[server]
base_url = "http://localhost:3333/"
"#,
    )
    .unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.server_base_url(), "http://localhost:3333");
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("menulist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Menulist Configuration File"));
    assert!(content.contains("base_url = \"http://localhost:3333\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
