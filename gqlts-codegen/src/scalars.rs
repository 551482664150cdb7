//! GraphQL scalar to TypeScript primitive mapping.

use indexmap::IndexMap;
use serde::Serialize;

/// Built-in scalar mappings, overridable per entry.
pub const DEFAULT_SCALARS: [(&str, &str); 5] = [
    ("String", "string"),
    ("Int", "number"),
    ("Float", "number"),
    ("Boolean", "boolean"),
    ("ID", "string"),
];

/// Scalar name to TypeScript type name.
///
/// Keeps the built-ins first, followed by user scalars in config order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScalarMap {
    map: IndexMap<String, String>,
}

impl ScalarMap {
    /// Merge `overrides` over the built-in defaults. Overrides win.
    pub fn new<'a>(overrides: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut map: IndexMap<String, String> = DEFAULT_SCALARS
            .iter()
            .map(|(name, ty)| (name.to_string(), ty.to_string()))
            .collect();
        for (name, ty) in overrides {
            map.insert(name.clone(), ty.clone());
        }
        Self { map }
    }

    /// Raw lookup, `None` when the scalar has no mapping.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// The mapped type, or `name` itself when unmapped.
    pub fn scalar_type(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        self.get(name).unwrap_or(name).to_string()
    }
}

impl Default for ScalarMap {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}
