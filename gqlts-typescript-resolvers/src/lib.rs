//! The `typescript-resolvers` generator.
//!
//! Produces resolver signatures for a schema: a `Resolvers` interface and a
//! resolver type per field of every object type, `__resolveType` resolvers
//! for interfaces and unions, scalar configs, directive resolvers and the
//! `IResolvers` / `IDirectiveResolvers` roots.
//!
//! Types listed under `mappers` (or covered by `defaultMapper`) are resolved
//! from the mapped type instead of the generated interface, and the mapped
//! symbols are imported.
//!
//! ```
//! use gqlts_codegen::Plugin;
//! use gqlts_config::{ConfigFile, ResolversConfig};
//! use gqlts_schema::Schema;
//! use gqlts_typescript_resolvers::TypeScriptResolversPlugin;
//!
//! let schema = Schema::parse("type Query { hello: String }").unwrap();
//! let config = ResolversConfig::from_toml_str("noNamespaces = true").unwrap();
//! let output = TypeScriptResolversPlugin::new()
//!     .generate(&schema, &[], &config)
//!     .unwrap();
//!
//! assert!(output.contains("export interface QueryResolvers<TContext = {}, TypeParent = {}> {"));
//! ```

mod helpers;
mod imports;
mod prelude;
mod render;

use eyre::{Result, WrapErr};
use gqlts_codegen::{Plugin, SymbolRegistry};
use gqlts_config::ResolversConfig;
use gqlts_schema::{DocumentFile, Schema};
use gqlts_typescript::{CodeFile, init_common_template};

pub use helpers::ResolversTemplate;
pub use imports::{graphql_import, import_context, import_mappers};

#[derive(Debug, Clone, Default)]
pub struct TypeScriptResolversPlugin {
    symbols: SymbolRegistry,
}

impl TypeScriptResolversPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `symbols` to resolve naming convention functions referenced by name.
    pub fn with_symbols(symbols: SymbolRegistry) -> Self {
        Self { symbols }
    }
}

impl Plugin for TypeScriptResolversPlugin {
    type Config = ResolversConfig;

    fn name(&self) -> &'static str {
        "typescript-resolvers"
    }

    fn generate(
        &self,
        schema: &Schema,
        _documents: &[DocumentFile],
        config: &ResolversConfig,
    ) -> Result<String> {
        let _span = tracing::debug_span!("generate", plugin = self.name()).entered();

        let common = init_common_template(schema, &config.common, &self.symbols)
            .wrap_err("failed to initialize the typescript-resolvers template")?;
        let template = ResolversTemplate::new(common, config);

        let mappers = import_mappers(&template);
        tracing::debug!(
            modules = mappers.lines().count(),
            "collected mapper imports"
        );

        let file = CodeFile::new()
            .import(graphql_import(schema))
            .raw_imports(&mappers)
            .imports(import_context(&template))
            .add_all(prelude::prelude(&template.context_type()));
        let file = render::declarations(&template)
            .into_iter()
            .fold(file, CodeFile::add_fragments);

        Ok(file.render())
    }
}
