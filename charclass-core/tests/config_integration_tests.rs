// charclass-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use charclass_core::config::{EngineOptions, DEFAULT_SIZE_LIMIT};
use charclass_core::{CharClass, CharClassError, Engine};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
cache_patterns: false
custom_classes:
  - name: hex
    fragment: "0-9a-fA-F"
    description: "Hexadecimal digits"
  - name: slug
    fragment: "a-z0-9\\-"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let options = EngineOptions::load_from_file(file.path())?;

    assert!(!options.cache_patterns);
    assert_eq!(options.size_limit, DEFAULT_SIZE_LIMIT);
    assert_eq!(options.custom_classes.len(), 2);
    assert_eq!(options.custom_classes[0].description.as_deref(), Some("Hexadecimal digits"));
    assert_eq!(options.custom_classes[1].fragment, r"a-z0-9\-");
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = EngineOptions::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config file"));
}

#[test]
fn test_load_rejects_invalid_fragment() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"custom_classes:\n  - name: broken\n    fragment: \"\\\\p{Nope}\"\n")?;
    let err = EngineOptions::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Custom class 'broken' has an invalid fragment"));
    Ok(())
}

#[test]
fn test_engine_uses_loaded_classes() -> Result<()> {
    let options = EngineOptions::from_yaml_str(
        "custom_classes:\n  - name: slug\n    fragment: \"a-z0-9\\\\-\"\n",
    )?;
    let engine = Engine::with_options(options)?;

    assert_eq!(engine.filter_named("slug", "Hello World-2024!", "")?, "elloorld-2024");
    assert_eq!(engine.filter_named("slug", "my post title", "-")?, "my-post-title");
    assert!(engine.check_named("slug", "my-post-2024", false)?);
    assert!(!engine.check_named("slug", "My-Post", false)?);
    Ok(())
}

#[test]
fn test_engine_without_cache_matches_cached_results() -> Result<()> {
    let uncached = Engine::with_options(EngineOptions {
        cache_patterns: false,
        ..Default::default()
    })?;
    let cached = Engine::new();
    for class in CharClass::ALL {
        let subject = "ip 192.168.001.001 / FE80::8329 / Añb-c_d.9";
        assert_eq!(
            uncached.filter_class(class, subject, "")?,
            cached.filter_class(class, subject, "")?,
            "{class}"
        );
    }
    Ok(())
}

#[test]
fn test_tiny_size_limit_surfaces_engine_failure() {
    let engine = Engine::with_options(EngineOptions {
        size_limit: 16,
        ..Default::default()
    });
    // Options carry no custom classes, so construction succeeds; the failure
    // appears on the first pattern that does not fit.
    let engine = engine.unwrap();
    let err = engine.alpha("abc", "").unwrap_err();
    assert!(matches!(err, CharClassError::PatternCompilation(..)));
}

#[test]
fn test_unknown_class_name() {
    let engine = Engine::new();
    let err = engine.filter_named("octal", "0755", "").unwrap_err();
    assert_eq!(err.to_string(), "Unknown character class 'octal'");
}
