//! TypeScript enum builder.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A string-valued enum member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
    pub doc: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }
}

/// Builder for `export enum` / `export const enum` declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    members: Vec<EnumMember>,
    is_const: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
            is_const: false,
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    pub fn const_enum(mut self, is_const: bool) -> Self {
        self.is_const = is_const;
        self
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let keyword = if self.is_const { "const enum" } else { "enum" };
        let body = self
            .members
            .iter()
            .flat_map(|member| {
                CodeFragment::jsdoc_opt(member.doc.as_deref())
                    .into_iter()
                    .chain([CodeFragment::Line(format!(
                        "{} = {},",
                        member.name,
                        quote(&member.value)
                    ))])
            })
            .collect();

        CodeFragment::jsdoc_opt(self.doc.as_deref())
            .into_iter()
            .chain([CodeFragment::Block {
                header: format!("export {} {} {{", keyword, self.name),
                body,
                close: Some("}".to_string()),
            }])
            .collect()
    }
}

/// Double-quote a string literal.
pub(crate) fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum() {
        let e = Enum::new("Color")
            .member(EnumMember::new("Red", "RED"))
            .member(EnumMember::new("Green", "GREEN").doc(Some("Go")))
            .build();
        assert_eq!(
            e,
            "export enum Color {\n  Red = \"RED\",\n  /** Go */\n  Green = \"GREEN\",\n}\n"
        );
    }

    #[test]
    fn test_const_enum() {
        let e = Enum::new("Role")
            .const_enum(true)
            .member(EnumMember::new("Admin", "ADMIN"))
            .build();
        assert_eq!(e, "export const enum Role {\n  Admin = \"ADMIN\",\n}\n");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("#f00"), "\"#f00\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
