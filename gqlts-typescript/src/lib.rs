//! TypeScript declarations for GraphQL schemas.
//!
//! This crate provides the `typescript-common` generator and the pieces the
//! other TypeScript generators share:
//!
//! - [`context`] - [`init_common_template`] and the [`CommonTemplate`] helpers
//!   (type conversion, optionals, enum values, scalars)
//! - [`ast`] - Builders for imports, interfaces, enums, type aliases and namespaces
//! - [`CodeFile`] - Imports plus body declarations, rendered with 2-space indent
//!
//! # Usage
//!
//! ```
//! use gqlts_codegen::Plugin;
//! use gqlts_config::CommonConfig;
//! use gqlts_schema::Schema;
//! use gqlts_typescript::TypeScriptCommonPlugin;
//!
//! let schema = Schema::parse("enum Color { RED }").unwrap();
//! let output = TypeScriptCommonPlugin::new()
//!     .generate(&schema, &[], &CommonConfig::default())
//!     .unwrap();
//!
//! assert!(output.contains("export enum Color {"));
//! ```

mod code_file;
mod plugin;

pub mod ast;
pub mod context;

pub use code_file::{CodeFile, RawCode};
pub use context::{CommonTemplate, TemplateContext, init_common_template};
pub use plugin::{
    TypeScriptCommonPlugin, enum_declaration, input_interface, render_common, scalar_alias,
};
