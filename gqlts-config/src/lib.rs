//! Plugin configuration for the gqlts TypeScript code generators.
//!
//! Configuration arrives from the code-generation host either as TOML or as
//! JSON. Keys are spelled in camelCase:
//!
//! ```toml
//! namingConvention = { typeNames = "change-case#pascalCase", enumValues = "keep" }
//! avoidOptionals = true
//! contextType = "./context#MyContext"
//!
//! [scalars]
//! DateTime = "Date"
//!
//! [mappers]
//! User = "./models#UserModel"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod common;
mod error;
mod naming;
mod parse;
mod resolvers;
mod server;
mod validate;

pub use common::{CommonConfig, EnumOverride};
pub use error::{Error, Result, SourceContext};
pub use naming::{NamingConventionConfig, NamingConventionMap, TransformFn, TransformSpec};
pub use parse::{ConfigFile, Format};
pub use resolvers::ResolversConfig;
pub use server::ServerConfig;
pub use validate::ParseContext;
