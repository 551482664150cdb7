//! Naming convention configuration.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A user supplied identifier transform.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How one kind of identifier is transformed, as written in the config.
///
/// Names are resolved into callables by the code generator, once, before
/// any output is produced.
#[derive(Clone)]
pub enum TransformSpec {
    /// Leave identifiers untouched (`"keep"`).
    Keep,
    /// A named transform such as `"change-case#camelCase"` or `"camelCase"`.
    Named(String),
    /// A callable supplied through the Rust API.
    Custom(TransformFn),
}

impl TransformSpec {
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        TransformSpec::Custom(Arc::new(f))
    }
}

impl From<&str> for TransformSpec {
    fn from(value: &str) -> Self {
        if value == "keep" {
            TransformSpec::Keep
        } else {
            TransformSpec::Named(value.to_string())
        }
    }
}

impl fmt::Debug for TransformSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformSpec::Keep => write!(f, "Keep"),
            TransformSpec::Named(name) => f.debug_tuple("Named").field(name).finish(),
            TransformSpec::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for TransformSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(TransformSpec::from(value.as_str()))
    }
}

impl Serialize for TransformSpec {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TransformSpec::Keep => serializer.serialize_str("keep"),
            TransformSpec::Named(name) => serializer.serialize_str(name),
            // Callables have no textual form
            TransformSpec::Custom(_) => serializer.serialize_str("<custom>"),
        }
    }
}

/// Per-kind naming conventions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConventionMap {
    pub default: Option<TransformSpec>,
    pub enum_values: Option<TransformSpec>,
    pub type_names: Option<TransformSpec>,
}

/// The `namingConvention` option: one transform for everything, or one per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamingConventionConfig {
    Single(TransformSpec),
    PerKind(NamingConventionMap),
}

impl NamingConventionConfig {
    /// Expand into a per-kind map. Unset kinds stay unset.
    pub fn to_map(&self) -> NamingConventionMap {
        match self {
            NamingConventionConfig::Single(spec) => NamingConventionMap {
                default: Some(spec.clone()),
                enum_values: Some(spec.clone()),
                type_names: Some(spec.clone()),
            },
            NamingConventionConfig::PerKind(map) => map.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_is_recognized() {
        assert!(matches!(TransformSpec::from("keep"), TransformSpec::Keep));
        assert!(matches!(
            TransformSpec::from("change-case#camelCase"),
            TransformSpec::Named(name) if name == "change-case#camelCase"
        ));
    }

    #[test]
    fn test_single_expands_to_all_kinds() {
        let config: NamingConventionConfig = serde_json::from_str("\"keep\"").unwrap();
        let map = config.to_map();
        assert!(matches!(map.default, Some(TransformSpec::Keep)));
        assert!(matches!(map.enum_values, Some(TransformSpec::Keep)));
        assert!(matches!(map.type_names, Some(TransformSpec::Keep)));
    }

    #[test]
    fn test_per_kind_keeps_unset_kinds() {
        let config: NamingConventionConfig =
            serde_json::from_str(r#"{ "enumValues": "upperCase" }"#).unwrap();
        let map = config.to_map();
        assert!(map.default.is_none());
        assert!(map.type_names.is_none());
        assert!(matches!(map.enum_values, Some(TransformSpec::Named(ref n)) if n == "upperCase"));
    }

    #[test]
    fn test_serialize() {
        let config = NamingConventionConfig::PerKind(NamingConventionMap {
            default: Some(TransformSpec::Keep),
            enum_values: Some(TransformSpec::from("upperCase")),
            type_names: Some(TransformSpec::custom(|s| s.to_string())),
        });
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"default":"keep","enumValues":"upperCase","typeNames":"<custom>"}"#
        );
    }

    #[test]
    fn test_custom_debug() {
        let spec = TransformSpec::custom(|s| s.to_uppercase());
        assert_eq!(format!("{:?}", spec), "Custom(..)");
    }
}
