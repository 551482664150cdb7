//! GraphQL schema descriptors for the gqlts TypeScript code generators.
//!
//! Schema parsing itself is delegated to [`graphql_parser`]. This crate turns
//! the parsed type-system document into flat, template-friendly descriptors
//! that every generator consumes.
//!
//! # Architecture
//!
//! ```text
//! schema.graphql → graphql-parser (AST) → gqlts-schema (descriptors) → plugins
//! ```
//!
//! Descriptors are:
//! - Resolved: every field knows the [`TypeKind`] of the type it references
//! - Merged: `extend type ...` definitions are folded into their base type
//! - Serializable: the whole [`Schema`] can be dumped as JSON for debugging

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod build;
mod document;
mod error;
mod schema;
mod types;

pub use document::DocumentFile;
pub use error::{Error, Result};
pub use schema::{BUILTIN_SCALARS, RootTypes, Schema};
pub use types::{
    DirectiveDef, EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType,
    ObjectType, ScalarType, TypeKind, TypeRef, UnionType,
};
