//! TypeScript AST builders for the declarations the generators emit.
//!
//! Every node implements [`Renderable`](gqlts_codegen::builder::Renderable)
//! and can also be built into a string directly.

mod enums;
mod imports;
mod interface;
mod namespace;
mod types;

pub use enums::{Enum, EnumMember};
pub(crate) use enums::quote;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use namespace::Namespace;
pub use types::{TypeAlias, Union};
