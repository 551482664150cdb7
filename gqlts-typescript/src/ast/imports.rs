//! TypeScript import builder.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for named TypeScript imports (`import { A, B as C } from 'path';`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<(String, Option<String>)>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push((name.into(), None));
        self
    }

    /// Import a named export under another local name. Identical names
    /// render without `as`.
    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        let name = name.into();
        let alias = alias.into();
        let alias = (alias != name).then_some(alias);
        self.named.push((name, alias));
        self
    }

    pub fn module(&self) -> &str {
        &self.from
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            return format!("import '{}';", self.from);
        }
        let names: Vec<String> = self
            .named
            .iter()
            .map(|(name, alias)| match alias {
                Some(alias) => format!("{} as {}", name, alias),
                None => name.clone(),
            })
            .collect();
        format!("import {{ {} }} from '{}';", names.join(", "), self.from)
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("graphql")
            .named("GraphQLResolveInfo")
            .named("GraphQLScalarType")
            .build();
        assert_eq!(
            i,
            "import { GraphQLResolveInfo, GraphQLScalarType } from 'graphql';\n"
        );
    }

    #[test]
    fn test_aliased_import() {
        let i = Import::new("./enums").named_as("RoleEnum", "Role").build();
        assert_eq!(i, "import { RoleEnum as Role } from './enums';\n");
    }

    #[test]
    fn test_alias_with_same_name() {
        let i = Import::new("./enums").named_as("Role", "Role").build();
        assert_eq!(i, "import { Role } from './enums';\n");
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("./polyfill").build(), "import './polyfill';\n");
    }
}
