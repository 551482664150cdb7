use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{CommonConfig, ParseContext, Result, parse::ConfigFile};

/// Config of the `typescript-server` generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    /// Wrap the output in `export namespace <name> { ... }`.
    pub schema_namespace: Option<String>,
}

impl Deref for ServerConfig {
    type Target = CommonConfig;

    fn deref(&self) -> &Self::Target {
        &self.common
    }
}

impl ConfigFile for ServerConfig {
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        self.common.validate_common(ctx)?;
        if let Some(namespace) = &self.schema_namespace {
            ctx.validate_identifier(namespace, "schemaNamespace", false)?;
        }
        Ok(())
    }
}
