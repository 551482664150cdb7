//! TypeScript interface builder.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A member of a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
            readonly: false,
        }
    }

    /// Attach a JSDoc comment; empty descriptions are ignored.
    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        CodeFragment::jsdoc_opt(self.doc.as_deref())
            .into_iter()
            .chain([CodeFragment::Line(format!(
                "{}{}{}: {};",
                readonly, self.name, optional, self.ty
            ))])
            .collect()
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    generics: Vec<String>,
    extends: Vec<String>,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generics: Vec::new(),
            extends: Vec::new(),
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    /// Add a generic parameter, e.g. `TContext = {}`.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends.push(parent.into());
        self
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        let extends = if self.extends.is_empty() {
            String::new()
        } else {
            format!(" extends {}", self.extends.join(", "))
        };
        format!("{}interface {}{}{}", export, self.name, generics, extends)
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            CodeFragment::jsdoc_opt(self.doc.as_deref()).into_iter().collect();

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", self.header())));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{} {{", self.header()),
                body: self.fields.iter().flat_map(InterfaceField::to_fragments).collect(),
                close: Some("}".to_string()),
            });
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        assert_eq!(Interface::new("Empty").build(), "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("User")
            .doc(Some("A user"))
            .field("id", "string")
            .field_with(
                InterfaceField::new("name", "Maybe<string>")
                    .optional(true)
                    .doc(Some("Display name")),
            )
            .build();
        assert_eq!(
            i,
            "/** A user */\nexport interface User {\n  id: string;\n  /** Display name */\n  name?: Maybe<string>;\n}\n"
        );
    }

    #[test]
    fn test_generics_and_extends() {
        let i = Interface::new("Resolvers")
            .generic("TContext = {}")
            .generic("TypeParent = {}")
            .extends("Base")
            .extends("Other")
            .build();
        assert_eq!(
            i,
            "export interface Resolvers<TContext = {}, TypeParent = {}> extends Base, Other {}\n"
        );
    }

    #[test]
    fn test_readonly_field() {
        let i = Interface::new("Point")
            .field_with(InterfaceField::new("x", "number").readonly(true))
            .private()
            .build();
        assert_eq!(i, "interface Point {\n  readonly x: number;\n}\n");
    }
}
