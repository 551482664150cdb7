//! Template context and the helpers shared by every TypeScript generator.
//!
//! Each generator call builds its own [`CommonTemplate`]; nothing is
//! registered globally, so concurrent calls never observe each other.

use gqlts_codegen::{
    Convert, NamingKind, ResolutionError, ScalarMap, SymbolResolver, builder::CodeFragment,
};
use gqlts_config::{CommonConfig, EnumOverride};
use gqlts_schema::{InputValue, Schema, TypeKind, TypeRef};
use serde::Serialize;

use crate::ast::{Import, Interface, InterfaceField, TypeAlias};

/// Data handed to rendering: the schema descriptors plus config and the
/// resolved scalar map.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    #[serde(flatten)]
    pub schema: &'a Schema,
    pub config: &'a CommonConfig,
    pub primitives: ScalarMap,
}

/// Per-invocation template state and helpers.
#[derive(Debug, Clone)]
pub struct CommonTemplate<'a> {
    context: TemplateContext<'a>,
    convert: Convert,
}

/// Resolve the naming convention and scalar map for one generator call.
///
/// Fails only when the naming convention names a function `resolver`
/// cannot provide.
pub fn init_common_template<'a>(
    schema: &'a Schema,
    config: &'a CommonConfig,
    resolver: &dyn SymbolResolver,
) -> Result<CommonTemplate<'a>, ResolutionError> {
    let convert = Convert::resolve(config.naming_convention.as_ref(), resolver)?;
    let primitives = ScalarMap::new(&config.scalars);

    Ok(CommonTemplate {
        context: TemplateContext {
            schema,
            config,
            primitives,
        },
        convert,
    })
}

impl<'a> CommonTemplate<'a> {
    pub fn context(&self) -> &TemplateContext<'a> {
        &self.context
    }

    pub fn schema(&self) -> &'a Schema {
        self.context.schema
    }

    pub fn config(&self) -> &'a CommonConfig {
        self.context.config
    }

    pub fn scalars(&self) -> &ScalarMap {
        &self.context.primitives
    }

    pub fn converter(&self) -> &Convert {
        &self.convert
    }

    pub fn convert(&self, name: &str, kind: NamingKind) -> String {
        self.convert.convert(name, kind)
    }

    /// The TypeScript name of a named GraphQL type.
    ///
    /// Scalars map through the scalar map, object, interface and input
    /// types get the interface prefix.
    pub fn type_name(&self, name: &str, kind: TypeKind) -> String {
        match kind {
            TypeKind::Scalar => match self.scalars().get(name) {
                Some(mapped) => mapped.to_string(),
                None => self.convert(name, NamingKind::TypeNames),
            },
            TypeKind::Object | TypeKind::Interface | TypeKind::InputObject => format!(
                "{}{}",
                self.interface_prefix(),
                self.convert(name, NamingKind::TypeNames)
            ),
            TypeKind::Enum | TypeKind::Union => self.convert(name, NamingKind::TypeNames),
        }
    }

    fn interface_prefix(&self) -> &str {
        self.config().interface_prefix.as_deref().unwrap_or("")
    }

    /// The full TypeScript type of a field: nullable positions are wrapped
    /// in `Maybe<>`, lists become arrays.
    pub fn converted_type(&self, ty: &TypeRef, kind: TypeKind) -> String {
        let base = self.type_name(ty.base_name(), kind);
        self.wrap_type(ty, &base)
    }

    /// Apply the wrappers of `ty` around an already computed base type.
    pub fn wrap_type(&self, ty: &TypeRef, base: &str) -> String {
        match ty {
            TypeRef::NonNull(inner) => self.wrap_required(inner, base),
            nullable => format!("Maybe<{}>", self.wrap_required(nullable, base)),
        }
    }

    fn wrap_required(&self, ty: &TypeRef, base: &str) -> String {
        match ty {
            TypeRef::Named(_) => base.to_string(),
            TypeRef::List(inner) => self.list_of(&self.wrap_type(inner, base)),
            TypeRef::NonNull(inner) => self.wrap_required(inner, base),
        }
    }

    fn list_of(&self, item: &str) -> String {
        if self.config().immutable_types {
            format!("ReadonlyArray<{}>", item)
        } else {
            format!("{}[]", item)
        }
    }

    /// `"?"` for nullable fields unless optionals are avoided.
    pub fn optionals(&self, ty: &TypeRef) -> &'static str {
        if self.config().avoid_optionals || ty.is_required() {
            ""
        } else {
            "?"
        }
    }

    /// Interface member for a field or input value.
    pub fn interface_field(
        &self,
        name: &str,
        description: Option<&str>,
        ty: &TypeRef,
        kind: TypeKind,
    ) -> InterfaceField {
        InterfaceField::new(name, self.converted_type(ty, kind))
            .doc(description)
            .optional(!self.optionals(ty).is_empty())
            .readonly(self.config().immutable_types)
    }

    /// Interface holding the arguments of a field.
    pub fn arguments_interface(&self, name: &str, arguments: &[InputValue]) -> Interface {
        Interface::new(name).fields(arguments.iter().map(|arg| {
            self.interface_field(&arg.name, arg.description.as_deref(), &arg.ty, arg.kind)
        }))
    }

    /// Member name of an enum value.
    pub fn enum_member_name(&self, value: &str) -> String {
        self.convert(value, NamingKind::EnumValues)
    }

    /// Emitted value of an enum value, honoring `enums` overrides.
    pub fn enum_value(&self, enum_name: &str, value: &str) -> String {
        match self.config().enum_override(enum_name) {
            Some(EnumOverride::Values(values)) => values
                .get(value)
                .cloned()
                .unwrap_or_else(|| value.to_string()),
            _ => value.to_string(),
        }
    }

    /// Import replacing the declaration of an enum configured as
    /// `"path#Symbol"` or `"path"`.
    pub fn enum_import(&self, enum_name: &str) -> Option<Import> {
        let Some(EnumOverride::Import(spec)) = self.config().enum_override(enum_name) else {
            return None;
        };
        let local = self.convert(enum_name, NamingKind::TypeNames);
        let import = match spec.split_once('#') {
            Some((path, symbol)) if !symbol.is_empty() => Import::new(path).named_as(symbol, local),
            Some((path, _)) => Import::new(path).named(local),
            None => Import::new(spec.as_str()).named(local),
        };
        Some(import)
    }

    /// Type of a custom scalar declaration.
    pub fn scalar_type(&self, name: &str) -> String {
        self.config()
            .scalars
            .get(name)
            .cloned()
            .unwrap_or_else(|| "any".to_string())
    }

    /// Map a scalar name to its primitive, passing unknown names through.
    pub fn to_primitive(&self, name: &str) -> String {
        self.scalars().scalar_type(name)
    }

    /// `export type Maybe<T> = T | null;`
    pub fn define_maybe(&self) -> TypeAlias {
        let optional = self.config().optional_type.as_deref().unwrap_or("null");
        TypeAlias::new("Maybe", format!("T | {}", optional)).generic("T")
    }

    pub fn block_comment(&self, description: Option<&str>) -> Option<CodeFragment> {
        CodeFragment::jsdoc_opt(description)
    }
}
