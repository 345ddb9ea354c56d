// Client options loading tests

use std::io::Write;

use thumbor_url::{Thumbor, ThumborClientOptions, ThumborError};

#[test]
fn test_can_load_options_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "url: \"https://images.example.com\"").unwrap();
    writeln!(file, "key: \"MY_SECURE_KEY\"").unwrap();

    let options = ThumborClientOptions::from_file(file.path()).unwrap();
    assert_eq!(options.url, "https://images.example.com");
    assert_eq!(options.signing_key(), Some("MY_SECURE_KEY"));

    let thumbor = Thumbor::new(options);
    assert!(thumbor.is_signed());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ThumborClientOptions::from_file(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ThumborError::Config(ref msg) if msg.contains("Failed to read config file")));
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = ThumborClientOptions::from_yaml_with_env("url: [unclosed").unwrap_err();
    assert!(matches!(err, ThumborError::Config(_)));
}

#[test]
fn test_env_substitution_in_url() {
    std::env::set_var("THUMBOR_URL_TEST_HOST", "https://thumbor.internal");
    let options =
        ThumborClientOptions::from_yaml_with_env("url: ${THUMBOR_URL_TEST_HOST}\n").unwrap();
    assert_eq!(options.url, "https://thumbor.internal");
    std::env::remove_var("THUMBOR_URL_TEST_HOST");
}

#[test]
fn test_options_serialize_without_absent_key() {
    let yaml = serde_yaml::to_string(&ThumborClientOptions::new("https://ex.com")).unwrap();
    assert!(yaml.contains("https://ex.com"));
    assert!(!yaml.contains("key"));
}
