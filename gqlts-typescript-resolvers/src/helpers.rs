//! Resolver-specific helpers layered over the common template.

use gqlts_codegen::{MapperDescriptor, NamingKind, parse_mapper, pick_mapper};
use gqlts_config::ResolversConfig;
use gqlts_schema::{Field, TypeKind};
use gqlts_typescript::CommonTemplate;

/// Helpers for one resolvers generation.
#[derive(Debug, Clone)]
pub struct ResolversTemplate<'a> {
    common: CommonTemplate<'a>,
    config: &'a ResolversConfig,
}

impl<'a> ResolversTemplate<'a> {
    pub fn new(common: CommonTemplate<'a>, config: &'a ResolversConfig) -> Self {
        Self { common, config }
    }

    pub fn common(&self) -> &CommonTemplate<'a> {
        &self.common
    }

    pub fn config(&self) -> &'a ResolversConfig {
        self.config
    }

    fn type_names(&self, name: &str) -> String {
        self.common.convert(name, NamingKind::TypeNames)
    }

    /// The mapper configured for a type, if any.
    pub fn mapper(&self, type_name: &str) -> Option<MapperDescriptor> {
        pick_mapper(
            type_name,
            &self.config.mappers,
            self.config.default_mapper.as_deref(),
        )
    }

    /// Name of the resolver type of a field, e.g. `PostsResolver`, or
    /// `UserPostsResolver` without namespaces.
    pub fn field_resolver_name(&self, type_name: &str, field_name: &str) -> String {
        let prefix = self.config.field_resolver_name_prefix.as_deref().unwrap_or("");
        let name = format!("{}{}Resolver", prefix, self.type_names(field_name));
        if self.config.no_namespaces {
            format!("{}{}", self.type_names(type_name), name)
        } else {
            name
        }
    }

    /// Name of the arguments interface of a field.
    pub fn args_name(&self, type_name: &str, field_name: &str) -> String {
        let name = format!("{}Args", self.type_names(field_name));
        if self.config.no_namespaces {
            format!("{}{}", self.type_names(type_name), name)
        } else {
            name
        }
    }

    /// Name of the resolve-type alias of an interface or union.
    pub fn resolve_type_name(&self, type_name: &str) -> String {
        if self.config.no_namespaces {
            format!("{}ResolveType", self.type_names(type_name))
        } else {
            "ResolveType".to_string()
        }
    }

    /// The declared name of a type's resolvers interface.
    pub fn resolvers_name(&self, type_name: &str) -> String {
        if self.config.no_namespaces {
            format!("{}Resolvers", self.type_names(type_name))
        } else {
            "Resolvers".to_string()
        }
    }

    /// How other declarations refer to a type's resolvers interface.
    pub fn resolvers_ref(&self, type_name: &str) -> String {
        if self.config.no_namespaces {
            self.resolvers_name(type_name)
        } else {
            format!("{}Resolvers.Resolvers", self.type_names(type_name))
        }
    }

    /// `SubscriptionResolver` for fields of the subscription root.
    pub fn field_resolver(&self, type_name: &str) -> &'static str {
        if self.common.schema().roots.is_subscription(type_name) {
            "SubscriptionResolver"
        } else {
            "Resolver"
        }
    }

    /// Parent value type of a type's resolvers.
    ///
    /// Root operation types resolve from `{}`, mapped types from their
    /// mapper, everything else from the generated type.
    pub fn parent_type(&self, type_name: &str) -> String {
        if self.common.schema().roots.contains(type_name) {
            return "{}".to_string();
        }
        match self.mapper(type_name) {
            Some(mapper) => mapper.ty,
            None => self.common.type_name(type_name, TypeKind::Object),
        }
    }

    /// Union of the parent types of `type_names`; `{}` when empty.
    pub fn parent_types(&self, type_names: &[String]) -> String {
        if type_names.is_empty() {
            return "{}".to_string();
        }
        type_names
            .iter()
            .map(|name| self.parent_type(name))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// `'User' | 'Post'`; `never` when empty.
    pub fn typenames(&self, type_names: &[String]) -> String {
        if type_names.is_empty() {
            return "never".to_string();
        }
        type_names
            .iter()
            .map(|name| format!("'{}'", name))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Result type of a field resolver; object and interface results use
    /// their mapper when one is configured.
    pub fn field_type(&self, field: &Field) -> String {
        if field.kind.is_composite() {
            if let Some(mapper) = self.mapper(field.ty.base_name()) {
                return self.common.wrap_type(&field.ty, &mapper.ty);
            }
        }
        self.common.converted_type(&field.ty, field.kind)
    }

    fn context_mapper(&self) -> Option<MapperDescriptor> {
        self.config.context_type.as_deref().map(parse_mapper)
    }

    /// Default `TContext`: the configured context type, or `{}`.
    pub fn context_type(&self) -> String {
        self.context_mapper()
            .map(|mapper| mapper.ty)
            .unwrap_or_else(|| "{}".to_string())
    }

    /// `(module, symbol)` to import for an external context type.
    pub fn context_import(&self) -> Option<(String, String)> {
        let mapper = self.context_mapper()?;
        let source = mapper.source.clone()?;
        Some((source, mapper.symbol().to_string()))
    }
}
