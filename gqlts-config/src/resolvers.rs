use std::ops::Deref;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{CommonConfig, ParseContext, Result, parse::ConfigFile};

/// Config of the `typescript-resolvers` generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolversConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    /// Make every resolver member required.
    pub strict: bool,
    /// Emit flat `<Type><Field>Resolver` names instead of namespaces.
    pub no_namespaces: bool,
    /// `path#Symbol` or a plain type used as the default `TContext`.
    pub context_type: Option<String>,
    /// GraphQL type name to mapper spec, in declaration order.
    pub mappers: IndexMap<String, String>,
    /// Mapper used for types without an entry in `mappers`.
    pub default_mapper: Option<String>,
    pub field_resolver_name_prefix: Option<String>,
}

impl Deref for ResolversConfig {
    type Target = CommonConfig;

    fn deref(&self) -> &Self::Target {
        &self.common
    }
}

impl ConfigFile for ResolversConfig {
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        self.common.validate_common(ctx)?;

        if let Some(prefix) = &self.field_resolver_name_prefix {
            ctx.validate_identifier(prefix, "fieldResolverNamePrefix", true)?;
        }

        for (type_name, spec) in &self.mappers {
            if spec.trim().is_empty() {
                return Err(ctx.validation_error(
                    format!("mapper for '{}' cannot be empty", type_name),
                    ctx.find_span(spec),
                ));
            }
        }

        Ok(())
    }
}
