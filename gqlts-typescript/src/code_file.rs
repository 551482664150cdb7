//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Organizes a generated file into an import section followed by body
//! declarations separated by blank lines.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// # Example
///
/// ```
/// use gqlts_typescript::{CodeFile, ast::{Import, TypeAlias}};
///
/// let code = CodeFile::new()
///     .import(Import::new("./scalars").named("Json"))
///     .add(TypeAlias::new("Payload", "Json"))
///     .render();
///
/// assert_eq!(code, "import { Json } from './scalars';\n\nexport type Payload = Json;\n");
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<ImportLine>,
    body: Vec<Vec<CodeFragment>>,
}

/// An import statement, kept in the order it was added.
#[derive(Debug, Clone)]
enum ImportLine {
    Built(Import),
    Raw(String),
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(ImportLine::Built(import));
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports.into_iter().map(ImportLine::Built));
        self
    }

    /// Add pre-rendered import lines (one statement per line).
    pub fn raw_imports(mut self, text: &str) -> Self {
        self.imports.extend(
            text.lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| ImportLine::Raw(l.to_string())),
        );
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Add a body element from raw fragments.
    pub fn add_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        if !fragments.is_empty() {
            self.body.push(fragments);
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            match import {
                ImportLine::Built(import) => builder.emit(import),
                ImportLine::Raw(line) => builder.push_line(line),
            };
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}
