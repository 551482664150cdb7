//! The resolved schema handed to every generator.

use std::path::Path;

use graphql_parser::schema::Document;
use serde::Serialize;

use crate::{
    Error, Result,
    types::{
        DirectiveDef, EnumType, InputObjectType, InterfaceType, ObjectType, ScalarType, UnionType,
    },
};

/// Scalars every GraphQL schema provides without declaring them.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Names of the root operation types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl RootTypes {
    /// Check if a type is one of the root operation types.
    pub fn contains(&self, name: &str) -> bool {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .any(|root| root.as_deref() == Some(name))
    }

    pub fn is_subscription(&self, name: &str) -> bool {
        self.subscription.as_deref() == Some(name)
    }
}

/// Template-friendly view of a GraphQL schema.
///
/// Every list keeps the declaration order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Object types (root operation types included).
    pub types: Vec<ObjectType>,
    pub input_types: Vec<InputObjectType>,
    pub interfaces: Vec<InterfaceType>,
    pub unions: Vec<UnionType>,
    pub enums: Vec<EnumType>,
    /// Custom scalars only; built-in scalars are implied.
    pub scalars: Vec<ScalarType>,
    /// Built-in directives followed by declared ones.
    pub directives: Vec<DirectiveDef>,
    pub roots: RootTypes,
}

impl Schema {
    /// Parse SDL and build the schema (uses "schema.graphql" as filename).
    pub fn parse(sdl: &str) -> Result<Self> {
        Self::parse_with_filename(sdl, "schema.graphql")
    }

    /// Parse SDL with a custom filename for error reporting.
    pub fn parse_with_filename(sdl: &str, filename: &str) -> Result<Self> {
        let document = graphql_parser::parse_schema::<String>(sdl)
            .map_err(|e| Error::parse(e, sdl, filename))?;
        Self::from_document(&document)
    }

    /// Read and parse a schema file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse_with_filename(&content, &path.display().to_string())
    }

    /// Build the schema from an already parsed document.
    pub fn from_document(document: &Document<'_, String>) -> Result<Self> {
        crate::build::build(document)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceType> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn union(&self, name: &str) -> Option<&UnionType> {
        self.unions.iter().find(|u| u.name == name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Check if a custom scalar with this name is declared.
    pub fn has_scalar(&self, name: &str) -> bool {
        self.scalars.iter().any(|s| s.name == name)
    }

    /// Directives declared by the schema itself (built-ins excluded).
    pub fn custom_directives(&self) -> impl Iterator<Item = &DirectiveDef> {
        self.directives
            .iter()
            .filter(|d| !crate::build::is_builtin_directive(&d.name))
    }
}
