//! Resolution of externally named transform functions.
//!
//! Naming conventions may reference functions by name (`"./naming#shout"`).
//! Those names are looked up exactly once, through a [`SymbolResolver`],
//! when the naming convention is resolved.

use std::collections::HashMap;

use gqlts_config::TransformFn;
use miette::Diagnostic;
use thiserror::Error;

/// Turns a `module#symbol` (or bare symbol) reference into a callable.
pub trait SymbolResolver {
    fn resolve(&self, spec: &str) -> Option<TransformFn>;
}

/// A resolver that never resolves anything.
impl SymbolResolver for () {
    fn resolve(&self, _spec: &str) -> Option<TransformFn> {
        None
    }
}

/// Explicitly registered transform functions, keyed by `module#symbol`.
///
/// # Example
///
/// ```
/// use gqlts_codegen::{SymbolRegistry, SymbolResolver};
///
/// let mut registry = SymbolRegistry::new();
/// registry.register("./naming#shout", |s: &str| s.to_uppercase());
///
/// let shout = registry.resolve("./naming#shout").unwrap();
/// assert_eq!(shout("hey"), "HEY");
/// ```
#[derive(Clone, Default)]
pub struct SymbolRegistry {
    symbols: HashMap<String, TransformFn>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform under `spec`, replacing any previous entry.
    pub fn register(
        &mut self,
        spec: impl Into<String>,
        f: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.symbols.insert(spec.into(), std::sync::Arc::new(f));
        self
    }
}

impl SymbolResolver for SymbolRegistry {
    fn resolve(&self, spec: &str) -> Option<TransformFn> {
        self.symbols.get(spec).cloned()
    }
}

impl std::fmt::Debug for SymbolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.symbols.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("SymbolRegistry")
            .field("symbols", &keys)
            .finish()
    }
}

/// A naming convention names a function nobody can provide.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot resolve naming convention function '{spec}'")]
#[diagnostic(
    code(gqlts::naming::unresolved),
    help(
        "use \"keep\", a built-in case (pascalCase, camelCase, snakeCase, constantCase, \
         paramCase, kebabCase, lowerCase, upperCase, titleCase) or register the function \
         in a SymbolRegistry"
    )
)]
pub struct ResolutionError {
    pub spec: String,
}

impl ResolutionError {
    pub fn new(spec: impl Into<String>) -> Self {
        Self { spec: spec.into() }
    }
}
