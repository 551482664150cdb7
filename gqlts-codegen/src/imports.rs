//! Import aggregation for mapped types.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::mappers::{parse_mapper, pick_mapper};

/// Module path to imported symbols.
///
/// Modules and symbols both keep first-seen order; symbols are de-duplicated
/// per module.
///
/// # Example
///
/// ```
/// use gqlts_codegen::ImportModuleSet;
///
/// let mut imports = ImportModuleSet::new();
/// imports.add("./models", "User");
/// imports.add("./models", "Post");
/// imports.add("./models", "User");
///
/// assert_eq!(imports.render(), "import { User, Post } from './models';");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportModuleSet {
    modules: IndexMap<String, Vec<String>>,
}

impl ImportModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the imports needed by the configured mappers.
    ///
    /// An external default mapper is always imported first. Explicit mappers
    /// are imported in declaration order, and only when they are external
    /// and their type is one of `types` or `interfaces`.
    pub fn from_mappers<'a>(
        types: impl IntoIterator<Item = &'a str>,
        interfaces: impl IntoIterator<Item = &'a str>,
        mappers: &IndexMap<String, String>,
        default_mapper: Option<&str>,
    ) -> Self {
        let available: HashSet<&str> = types.into_iter().chain(interfaces).collect();
        let mut imports = Self::new();

        if let Some(spec) = default_mapper {
            let mapper = parse_mapper(spec);
            if let Some(source) = &mapper.source {
                imports.add(source, mapper.symbol());
            }
        }

        for type_name in mappers.keys() {
            let Some(mapper) = pick_mapper(type_name, mappers, default_mapper) else {
                continue;
            };
            let Some(source) = &mapper.source else {
                continue;
            };
            if !available.contains(type_name.as_str()) {
                tracing::debug!(
                    type_name = type_name.as_str(),
                    mapper = mappers[type_name].as_str(),
                    "skipping mapper for a type missing from the schema"
                );
                continue;
            }
            imports.add(source, mapper.symbol());
        }

        imports
    }

    /// Add a symbol import from a module, ignoring duplicates.
    pub fn add(&mut self, module: &str, symbol: &str) {
        let symbols = self.modules.entry(module.to_string()).or_default();
        if !symbols.iter().any(|s| s == symbol) {
            symbols.push(symbol.to_string());
        }
    }

    /// Iterate over modules in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.modules
            .iter()
            .map(|(module, symbols)| (module.as_str(), symbols.as_slice()))
    }

    /// One `import { A, B } from 'path';` per module, joined with newlines.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(module, symbols)| format!("import {{ {} }} from '{}';", symbols.join(", "), module))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
