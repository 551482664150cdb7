//! The trait every generator implements.

use eyre::Result;
use gqlts_schema::{DocumentFile, Schema};

/// A code generator invoked by the host with a schema, the operation
/// documents and its own config.
///
/// Every call is independent: implementations build whatever state they
/// need inside [`Plugin::generate`] and keep nothing between calls.
///
/// # Example
///
/// ```
/// use gqlts_codegen::Plugin;
/// use gqlts_schema::{DocumentFile, Schema};
///
/// struct TypeCount;
///
/// impl Plugin for TypeCount {
///     type Config = ();
///
///     fn name(&self) -> &'static str {
///         "type-count"
///     }
///
///     fn generate(&self, schema: &Schema, _: &[DocumentFile], _: &()) -> eyre::Result<String> {
///         Ok(format!("// {} types\n", schema.types.len()))
///     }
/// }
///
/// let schema = Schema::parse("type Query { ok: Boolean }").unwrap();
/// assert_eq!(TypeCount.generate(&schema, &[], &()).unwrap(), "// 1 types\n");
/// ```
pub trait Plugin: Send + Sync {
    type Config;

    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Generate the output source text.
    fn generate(
        &self,
        schema: &Schema,
        documents: &[DocumentFile],
        config: &Self::Config,
    ) -> Result<String>;
}
