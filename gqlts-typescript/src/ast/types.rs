//! TypeScript type alias and union builders.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases (`export type Foo<T> = ...;`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    generics: Vec<String>,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generics: Vec::new(),
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        CodeFragment::jsdoc_opt(self.doc.as_deref())
            .into_iter()
            .chain([CodeFragment::Line(format!(
                "{}type {}{} = {};",
                export, self.name, generics, self.ty
            ))])
            .collect()
    }
}

/// Builder for union type aliases (`export type Foo = A | B;`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    name: String,
    doc: Option<String>,
    members: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// A union without members renders as `never`.
    fn union_type(&self) -> String {
        if self.members.is_empty() {
            "never".to_string()
        } else {
            self.members.join(" | ")
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        TypeAlias::new(&self.name, self.union_type())
            .doc(self.doc.as_deref())
            .to_fragments()
    }
}
