//! Naming convention resolution.
//!
//! A `namingConvention` config is resolved once into a [`Convert`], which
//! holds a ready-to-call [`Transform`] for every [`NamingKind`].

use std::fmt;

use gqlts_config::{NamingConventionConfig, TransformFn, TransformSpec};
use heck::{
    ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase,
};

use crate::{ResolutionError, SymbolResolver};

/// Module prefix accepted in front of built-in case names.
const CHANGE_CASE_MODULE: &str = "change-case#";

/// The kind of identifier being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamingKind {
    #[default]
    Default,
    TypeNames,
    EnumValues,
}

/// Built-in case transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Pascal,
    Camel,
    Snake,
    Constant,
    Kebab,
    Lower,
    Upper,
    Title,
}

impl CaseStyle {
    /// Look up a built-in by name, bare (`camelCase`) or module qualified
    /// (`change-case#camelCase`).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix(CHANGE_CASE_MODULE).unwrap_or(name);
        let style = match name {
            "pascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snakeCase" => Self::Snake,
            "constantCase" => Self::Constant,
            "paramCase" | "kebabCase" => Self::Kebab,
            "lowerCase" => Self::Lower,
            "upperCase" => Self::Upper,
            "titleCase" => Self::Title,
            _ => return None,
        };
        Some(style)
    }

    pub fn apply(&self, s: &str) -> String {
        match self {
            Self::Pascal => s.to_pascal_case(),
            Self::Camel => s.to_lower_camel_case(),
            Self::Snake => s.to_snake_case(),
            Self::Constant => s.to_shouty_snake_case(),
            Self::Kebab => s.to_kebab_case(),
            Self::Lower => s.to_lowercase(),
            Self::Upper => s.to_uppercase(),
            Self::Title => s.to_title_case(),
        }
    }
}

/// A resolved identifier transform.
#[derive(Clone)]
pub enum Transform {
    /// `keep`
    Identity,
    Builtin(CaseStyle),
    /// A function found through a [`SymbolResolver`].
    External { spec: String, f: TransformFn },
    /// A callable passed in through the config.
    Custom(TransformFn),
}

impl Transform {
    /// Resolve a configured transform. Named transforms that are neither
    /// `keep` nor a built-in go through `resolver`.
    pub fn resolve(
        spec: &TransformSpec,
        resolver: &dyn SymbolResolver,
    ) -> Result<Self, ResolutionError> {
        match spec {
            TransformSpec::Keep => Ok(Transform::Identity),
            TransformSpec::Custom(f) => Ok(Transform::Custom(f.clone())),
            TransformSpec::Named(name) => {
                if let Some(style) = CaseStyle::from_name(name) {
                    return Ok(Transform::Builtin(style));
                }
                resolver
                    .resolve(name)
                    .map(|f| Transform::External {
                        spec: name.clone(),
                        f,
                    })
                    .ok_or_else(|| ResolutionError::new(name.as_str()))
            }
        }
    }

    pub fn apply(&self, s: &str) -> String {
        match self {
            Transform::Identity => s.to_string(),
            Transform::Builtin(style) => style.apply(s),
            Transform::External { f, .. } | Transform::Custom(f) => f(s),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::Builtin(CaseStyle::Pascal)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => write!(f, "Identity"),
            Transform::Builtin(style) => f.debug_tuple("Builtin").field(style).finish(),
            Transform::External { spec, .. } => f.debug_tuple("External").field(spec).finish(),
            Transform::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// An empty transform name counts as not configured.
fn is_unset(spec: &TransformSpec) -> bool {
    matches!(spec, TransformSpec::Named(name) if name.is_empty())
}

fn configured(spec: Option<&TransformSpec>) -> Option<&TransformSpec> {
    spec.filter(|s| !is_unset(s))
}

/// Identifier conversion with one resolved transform per kind.
#[derive(Debug, Clone, Default)]
pub struct Convert {
    default: Transform,
    type_names: Transform,
    enum_values: Transform,
}

impl Convert {
    /// Resolve a `namingConvention` config.
    ///
    /// Absent config means pascal case everywhere, an empty string leaves
    /// names untouched. Each kind falls back to the map's `default` entry,
    /// then to pascal case; empty entries count as missing.
    pub fn resolve(
        config: Option<&NamingConventionConfig>,
        resolver: &dyn SymbolResolver,
    ) -> Result<Self, ResolutionError> {
        let map = match config {
            None => return Ok(Self::default()),
            Some(NamingConventionConfig::Single(spec)) if is_unset(spec) => {
                return Ok(Self::identity());
            }
            Some(config) => config.to_map(),
        };
        let resolve_kind = |spec: Option<&TransformSpec>| -> Result<Transform, ResolutionError> {
            match configured(spec).or(configured(map.default.as_ref())) {
                Some(spec) => Transform::resolve(spec, resolver),
                None => Ok(Transform::default()),
            }
        };

        let convert = Self {
            default: resolve_kind(map.default.as_ref())?,
            type_names: resolve_kind(map.type_names.as_ref())?,
            enum_values: resolve_kind(map.enum_values.as_ref())?,
        };
        tracing::debug!(
            default = ?convert.default,
            type_names = ?convert.type_names,
            enum_values = ?convert.enum_values,
            "resolved naming convention"
        );
        Ok(convert)
    }

    fn identity() -> Self {
        Self {
            default: Transform::Identity,
            type_names: Transform::Identity,
            enum_values: Transform::Identity,
        }
    }

    pub fn transform(&self, kind: NamingKind) -> &Transform {
        match kind {
            NamingKind::Default => &self.default,
            NamingKind::TypeNames => &self.type_names,
            NamingKind::EnumValues => &self.enum_values,
        }
    }

    /// Convert `name`, keeping any leading underscores verbatim.
    pub fn convert(&self, name: &str, kind: NamingKind) -> String {
        let rest = name.trim_start_matches('_');
        let underscores = &name[..name.len() - rest.len()];
        let transform = self.transform(kind);
        if underscores.is_empty() {
            transform.apply(name)
        } else {
            format!("{}{}", underscores, transform.apply(rest))
        }
    }

    /// Shorthand for [`NamingKind::Default`].
    pub fn name(&self, name: &str) -> String {
        self.convert(name, NamingKind::Default)
    }
}

#[cfg(test)]
mod tests {
    use gqlts_config::NamingConventionMap;

    use super::*;
    use crate::SymbolRegistry;

    fn per_kind(map: NamingConventionMap) -> NamingConventionConfig {
        NamingConventionConfig::PerKind(map)
    }

    #[test]
    fn test_absent_config_is_pascal_case() {
        let convert = Convert::resolve(None, &()).unwrap();
        assert_eq!(convert.name("user_profile"), "UserProfile");
        assert_eq!(convert.convert("RED", NamingKind::EnumValues), "Red");
        assert_eq!(convert.convert("my_type", NamingKind::TypeNames), "MyType");
    }

    #[test]
    fn test_leading_underscores_are_preserved() {
        let convert = Convert::default();
        assert_eq!(convert.name("_foo"), "_Foo");
        assert_eq!(convert.name("__foo"), "__Foo");
        assert_eq!(convert.name("__typename"), "__Typename");
        assert_eq!(convert.name("___"), "___");
        assert_eq!(convert.name(""), "");
    }

    #[test]
    fn test_keep_string_applies_to_all_kinds() {
        let config = NamingConventionConfig::Single(TransformSpec::Keep);
        let convert = Convert::resolve(Some(&config), &()).unwrap();
        assert_eq!(convert.name("my_type"), "my_type");
        assert_eq!(convert.convert("RED", NamingKind::EnumValues), "RED");
        assert_eq!(convert.convert("_x", NamingKind::TypeNames), "_x");
    }

    #[test]
    fn test_builtin_names_bare_and_qualified() {
        for (name, expected) in [
            ("camelCase", "userProfile"),
            ("change-case#camelCase", "userProfile"),
            ("snakeCase", "user_profile"),
            ("constantCase", "USER_PROFILE"),
            ("paramCase", "user-profile"),
            ("change-case#kebabCase", "user-profile"),
            ("upperCase", "USERPROFILE"),
            ("lowerCase", "userprofile"),
            ("titleCase", "User Profile"),
        ] {
            let config = NamingConventionConfig::Single(TransformSpec::from(name));
            let convert = Convert::resolve(Some(&config), &()).unwrap();
            assert_eq!(convert.name("UserProfile"), expected, "transform {name}");
        }
    }

    #[test]
    fn test_per_kind_falls_back_to_default_then_pascal() {
        let config = per_kind(NamingConventionMap {
            default: Some(TransformSpec::from("keep")),
            enum_values: Some(TransformSpec::from("upperCase")),
            type_names: None,
        });
        let convert = Convert::resolve(Some(&config), &()).unwrap();
        assert_eq!(convert.convert("my_type", NamingKind::TypeNames), "my_type");
        assert_eq!(convert.convert("red", NamingKind::EnumValues), "RED");

        let config = per_kind(NamingConventionMap {
            enum_values: Some(TransformSpec::from("keep")),
            ..Default::default()
        });
        let convert = Convert::resolve(Some(&config), &()).unwrap();
        assert_eq!(convert.convert("my_type", NamingKind::TypeNames), "MyType");
        assert_eq!(convert.name("my_type"), "MyType");
        assert_eq!(convert.convert("RED", NamingKind::EnumValues), "RED");
    }

    #[test]
    fn test_empty_names_count_as_unset() {
        let config = NamingConventionConfig::Single(TransformSpec::from(""));
        let convert = Convert::resolve(Some(&config), &()).unwrap();
        assert_eq!(convert.convert("my_type", NamingKind::TypeNames), "my_type");
        assert_eq!(convert.convert("RED", NamingKind::EnumValues), "RED");

        let config = per_kind(NamingConventionMap {
            default: Some(TransformSpec::from("keep")),
            type_names: Some(TransformSpec::from("")),
            enum_values: None,
        });
        let convert = Convert::resolve(Some(&config), &()).unwrap();
        assert_eq!(convert.convert("my_type", NamingKind::TypeNames), "my_type");

        let config = per_kind(NamingConventionMap {
            default: Some(TransformSpec::from("")),
            type_names: Some(TransformSpec::from("")),
            enum_values: None,
        });
        let convert = Convert::resolve(Some(&config), &()).unwrap();
        assert_eq!(convert.convert("my_type", NamingKind::TypeNames), "MyType");
        assert_eq!(convert.name("my_type"), "MyType");
    }

    #[test]
    fn test_custom_callable() {
        let config = NamingConventionConfig::Single(TransformSpec::custom(|s| format!("{s}!")));
        let convert = Convert::resolve(Some(&config), &()).unwrap();
        assert_eq!(convert.name("_hey"), "_hey!");
        assert_eq!(convert.name("_"), "_!");
    }

    #[test]
    fn test_external_symbol_through_registry() {
        let mut registry = SymbolRegistry::new();
        registry.register("./naming#shout", |s: &str| s.to_uppercase());

        let config = NamingConventionConfig::Single(TransformSpec::from("./naming#shout"));
        let convert = Convert::resolve(Some(&config), &registry).unwrap();
        assert_eq!(convert.name("_user"), "_USER");
        assert!(matches!(
            convert.transform(NamingKind::Default),
            Transform::External { spec, .. } if spec == "./naming#shout"
        ));
    }

    #[test]
    fn test_unresolvable_name_is_an_error() {
        let config = per_kind(NamingConventionMap {
            type_names: Some(TransformSpec::from("./naming#missing")),
            ..Default::default()
        });
        let err = Convert::resolve(Some(&config), &()).unwrap_err();
        assert_eq!(err.spec, "./naming#missing");
    }

    #[test]
    fn test_convert_is_total_on_odd_input() {
        let convert = Convert::default();
        for input in ["", "_", "__", "a", "1abc", "ÄÖÜ", "with space", "_-_"] {
            let _ = convert.name(input);
            let _ = convert.convert(input, NamingKind::EnumValues);
        }
    }
}
