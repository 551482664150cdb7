//! Integration tests for loading plugin configs from disk.

use gqlts_config::{ConfigFile, EnumOverride, Error, ResolversConfig, ServerConfig, TransformSpec};
use tempfile::TempDir;

#[test]
fn test_resolvers_config_from_toml_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("codegen.toml");
    std::fs::write(
        &path,
        r##"
        noNamespaces = true
        defaultMapper = "./models#BaseModel"
        namingConvention = { typeNames = "change-case#pascalCase", enumValues = "keep" }

        [mappers]
        User = "./models#UserModel"
        Post = "PostModel"

        [enums.Color]
        RED = "#f00"
        "##,
    )
    .expect("Failed to write config");

    let config = ResolversConfig::from_file(&path).expect("Failed to load config");
    assert!(config.no_namespaces);
    assert_eq!(config.default_mapper.as_deref(), Some("./models#BaseModel"));
    assert_eq!(config.mappers.len(), 2);

    let naming = config
        .naming_convention
        .as_ref()
        .expect("namingConvention missing")
        .to_map();
    assert!(matches!(naming.enum_values, Some(TransformSpec::Keep)));
    assert!(naming.default.is_none());

    assert!(matches!(
        config.enum_override("Color"),
        Some(EnumOverride::Values(values)) if values["RED"] == "#f00"
    ));
}

#[test]
fn test_server_config_from_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("codegen.json");
    std::fs::write(
        &path,
        r#"{ "schemaNamespace": "Api", "namingConvention": "keep", "interfacePrefix": "I" }"#,
    )
    .expect("Failed to write config");

    let config = ServerConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.schema_namespace.as_deref(), Some("Api"));
    assert_eq!(config.interface_prefix.as_deref(), Some("I"));
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("codegen.yml");
    std::fs::write(&path, "strict: true").expect("Failed to write config");

    let err = ResolversConfig::from_file(&path).unwrap_err();
    assert!(matches!(*err, Error::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = ResolversConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_validation_error_carries_filename() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("codegen.toml");
    std::fs::write(&path, "schemaNamespace = \"2fast\"\n").expect("Failed to write config");

    let err = ServerConfig::from_file(&path).unwrap_err();
    match *err {
        Error::Validation { src, span, .. } => {
            assert!(src.name().ends_with("codegen.toml"));
            assert_eq!(span.map(|s| s.offset()), Some(19));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
