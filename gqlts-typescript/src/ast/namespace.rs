//! TypeScript namespace builder.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// `export namespace Name { ... }` wrapping other declarations.
///
/// Members are separated by blank lines, like top-level declarations.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    name: String,
    members: Vec<Vec<CodeFragment>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    pub fn add_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.members.push(fragments);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(member.iter().cloned());
        }

        vec![CodeFragment::Block {
            header: format!("export namespace {} {{", self.name),
            body,
            close: Some("}".to_string()),
        }]
    }
}
