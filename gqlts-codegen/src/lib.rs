//! Shared code generation utilities for the gqlts TypeScript generators.
//!
//! This crate holds the language-level pieces every generator needs:
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Naming convention resolution and identifier conversion
//! - [`resolve`] - The symbol resolution boundary for externally named transforms
//! - [`scalars`] - GraphQL scalar to TypeScript primitive mapping
//! - [`mappers`] - Mapper spec parsing (`path#Symbol`)
//! - [`imports`] - Import aggregation for mapped types
//! - [`plugin`] - The trait every generator implements

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod imports;
pub mod mappers;
pub mod naming;
pub mod plugin;
pub mod resolve;
pub mod scalars;

pub use imports::ImportModuleSet;
pub use mappers::{MapperDescriptor, parse_mapper, pick_mapper};
pub use naming::{CaseStyle, Convert, NamingKind, Transform};
pub use plugin::Plugin;
pub use resolve::{ResolutionError, SymbolRegistry, SymbolResolver};
pub use scalars::ScalarMap;
