//! The `typescript-common` generator.

use eyre::{Result, WrapErr};
use gqlts_codegen::{NamingKind, Plugin, SymbolRegistry};
use gqlts_config::CommonConfig;
use gqlts_schema::{DocumentFile, EnumType, InputObjectType, ScalarType, Schema, TypeKind};

use crate::{
    CodeFile,
    ast::{Enum, EnumMember, Interface, TypeAlias, Union},
    context::{CommonTemplate, init_common_template},
};

/// Emits the declarations every other generator builds on: `Maybe<T>`,
/// custom scalars, enums and input types.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptCommonPlugin {
    symbols: SymbolRegistry,
}

impl TypeScriptCommonPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `symbols` to resolve naming convention functions referenced by name.
    pub fn with_symbols(symbols: SymbolRegistry) -> Self {
        Self { symbols }
    }
}

impl Plugin for TypeScriptCommonPlugin {
    type Config = CommonConfig;

    fn name(&self) -> &'static str {
        "typescript-common"
    }

    fn generate(
        &self,
        schema: &Schema,
        _documents: &[DocumentFile],
        config: &CommonConfig,
    ) -> Result<String> {
        let _span = tracing::debug_span!("generate", plugin = self.name()).entered();

        let template = init_common_template(schema, config, &self.symbols)
            .wrap_err("failed to initialize the typescript-common template")?;
        Ok(render_common(&template).render())
    }
}

/// Build the common declarations as a file.
pub fn render_common(template: &CommonTemplate<'_>) -> CodeFile {
    let schema = template.schema();

    CodeFile::new()
        .imports(schema.enums.iter().filter_map(|e| template.enum_import(&e.name)))
        .add(template.define_maybe())
        .add_all(schema.scalars.iter().map(|s| scalar_alias(template, s)))
        .add_all(
            schema
                .enums
                .iter()
                .filter(|e| template.enum_import(&e.name).is_none())
                .map(|e| enum_declaration(template, e)),
        )
        .add_all(schema.input_types.iter().map(|i| input_interface(template, i)))
}

/// `export type <Scalar> = <mapped | any>;`
pub fn scalar_alias(template: &CommonTemplate<'_>, scalar: &ScalarType) -> TypeAlias {
    TypeAlias::new(
        template.convert(&scalar.name, NamingKind::TypeNames),
        template.scalar_type(&scalar.name),
    )
    .doc(scalar.description.as_deref())
}

/// A TypeScript enum, or a string-literal union with `enumsAsTypes`.
pub fn enum_declaration(
    template: &CommonTemplate<'_>,
    enum_type: &EnumType,
) -> Box<dyn gqlts_codegen::builder::Renderable> {
    let name = template.convert(&enum_type.name, NamingKind::TypeNames);

    if template.config().enums_as_types {
        let members = enum_type
            .values
            .iter()
            .map(|v| crate::ast::quote(&template.enum_value(&enum_type.name, &v.name)));
        return Box::new(
            Union::new(name)
                .doc(enum_type.description.as_deref())
                .members(members),
        );
    }

    let declaration = enum_type.values.iter().fold(
        Enum::new(name)
            .doc(enum_type.description.as_deref())
            .const_enum(template.config().const_enums),
        |declaration, value| {
            declaration.member(
                EnumMember::new(
                    template.enum_member_name(&value.name),
                    template.enum_value(&enum_type.name, &value.name),
                )
                .doc(value.description.as_deref()),
            )
        },
    );
    Box::new(declaration)
}

/// `export interface <prefix><Input> { ... }`
pub fn input_interface(template: &CommonTemplate<'_>, input: &InputObjectType) -> Interface {
    Interface::new(template.type_name(&input.name, TypeKind::InputObject))
        .doc(input.description.as_deref())
        .fields(input.fields.iter().map(|field| {
            template.interface_field(
                &field.name,
                field.description.as_deref(),
                &field.ty,
                field.kind,
            )
        }))
}
