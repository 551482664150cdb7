//! Options shared by every TypeScript generator.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{NamingConventionConfig, ParseContext, Result, parse::ConfigFile};

/// Per-enum override from the `enums` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumOverride {
    /// Replace the emitted value of individual enum values.
    Values(IndexMap<String, String>),
    /// Import the enum instead of declaring it (`"./enums#Color"` or `"./enums"`).
    Import(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonConfig {
    pub naming_convention: Option<NamingConventionConfig>,
    /// Never emit `?` on optional fields.
    pub avoid_optionals: bool,
    /// What `Maybe<T>` unions `T` with; `null` when unset.
    pub optional_type: Option<String>,
    pub const_enums: bool,
    pub enums_as_types: bool,
    pub immutable_types: bool,
    /// Prefix for every generated interface name.
    pub interface_prefix: Option<String>,
    /// `null` entries behave as if the enum was not listed.
    pub enums: IndexMap<String, Option<EnumOverride>>,
    /// Scalar name to TypeScript type overrides.
    pub scalars: IndexMap<String, String>,
}

impl CommonConfig {
    pub fn enum_override(&self, enum_name: &str) -> Option<&EnumOverride> {
        self.enums.get(enum_name).and_then(Option::as_ref)
    }

    pub(crate) fn validate_common(&self, ctx: &ParseContext<'_>) -> Result<()> {
        if let Some(prefix) = &self.interface_prefix {
            ctx.validate_identifier(prefix, "interfacePrefix", true)?;
        }
        Ok(())
    }
}

impl ConfigFile for CommonConfig {
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        self.validate_common(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CommonConfig::from_toml_str("").unwrap();
        assert!(config.naming_convention.is_none());
        assert!(!config.avoid_optionals);
        assert!(!config.const_enums);
        assert!(config.scalars.is_empty());
    }

    #[test]
    fn test_enum_overrides() {
        let config = CommonConfig::from_json_str(
            r##"{
                "enums": {
                    "Color": { "RED": "#f00" },
                    "Role": "./roles#Role",
                    "Status": null
                }
            }"##,
        )
        .unwrap();

        assert!(matches!(
            config.enum_override("Color"),
            Some(EnumOverride::Values(values)) if values["RED"] == "#f00"
        ));
        assert_eq!(
            config.enum_override("Role"),
            Some(&EnumOverride::Import("./roles#Role".to_string()))
        );
        assert_eq!(config.enum_override("Status"), None);
        assert_eq!(config.enum_override("Missing"), None);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = CommonConfig::from_toml_str(
            r#"
            avoidOptionals = true
            optionalType = "undefined"
            constEnums = true
            immutableTypes = true
            interfacePrefix = "I"

            [scalars]
            DateTime = "Date"
            "#,
        )
        .unwrap();

        assert!(config.avoid_optionals);
        assert_eq!(config.optional_type.as_deref(), Some("undefined"));
        assert!(config.const_enums);
        assert!(config.immutable_types);
        assert_eq!(config.interface_prefix.as_deref(), Some("I"));
        assert_eq!(config.scalars["DateTime"], "Date");
    }

    #[test]
    fn test_invalid_interface_prefix() {
        let err = CommonConfig::from_toml_str(r#"interfacePrefix = "I-""#).unwrap_err();
        assert!(matches!(*err, crate::Error::Validation { .. }));
    }
}
