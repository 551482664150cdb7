//! The `typescript-server` generator.
//!
//! Emits one interface per GraphQL interface and object type, an `Args`
//! interface per field with arguments, and a type alias per union. With
//! `schemaNamespace` set, everything is wrapped in a namespace.

use eyre::{Result, WrapErr};
use gqlts_codegen::{NamingKind, Plugin, SymbolRegistry, builder::CodeFragment};
use gqlts_config::ServerConfig;
use gqlts_schema::{DocumentFile, Field, Schema, TypeKind, UnionType};
use gqlts_typescript::{
    CodeFile, CommonTemplate,
    ast::{Interface, Namespace, Union},
    init_common_template,
};

#[derive(Debug, Clone, Default)]
pub struct TypeScriptServerPlugin {
    symbols: SymbolRegistry,
}

impl TypeScriptServerPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `symbols` to resolve naming convention functions referenced by name.
    pub fn with_symbols(symbols: SymbolRegistry) -> Self {
        Self { symbols }
    }
}

impl Plugin for TypeScriptServerPlugin {
    type Config = ServerConfig;

    fn name(&self) -> &'static str {
        "typescript-server"
    }

    fn generate(
        &self,
        schema: &Schema,
        _documents: &[DocumentFile],
        config: &ServerConfig,
    ) -> Result<String> {
        let _span = tracing::debug_span!("generate", plugin = self.name()).entered();

        let template = init_common_template(schema, &config.common, &self.symbols)
            .wrap_err("failed to initialize the typescript-server template")?;
        let declarations = declarations(&template);

        let file = match &config.schema_namespace {
            Some(namespace) => {
                tracing::debug!(namespace = namespace.as_str(), "wrapping output in namespace");
                let wrapped = declarations
                    .into_iter()
                    .fold(Namespace::new(namespace), Namespace::add_fragments);
                CodeFile::new().add(wrapped)
            }
            None => declarations
                .into_iter()
                .fold(CodeFile::new(), CodeFile::add_fragments),
        };
        Ok(file.render())
    }
}

/// Every server declaration in output order, one entry per declaration.
fn declarations(template: &CommonTemplate<'_>) -> Vec<Vec<CodeFragment>> {
    use gqlts_codegen::builder::Renderable;

    let schema = template.schema();
    let mut out = Vec::new();

    for interface in &schema.interfaces {
        let name = template.type_name(&interface.name, TypeKind::Interface);
        out.push(
            fields_interface(template, &name, &interface.fields)
                .doc(interface.description.as_deref())
                .to_fragments(),
        );
        out.extend(
            args_interfaces(template, &interface.name, &interface.fields)
                .map(|args| args.to_fragments()),
        );
    }

    for object in &schema.types {
        let name = template.type_name(&object.name, TypeKind::Object);
        let declaration = object.interfaces.iter().fold(
            fields_interface(template, &name, &object.fields).doc(object.description.as_deref()),
            |declaration, parent| {
                declaration.extends(template.type_name(parent, TypeKind::Interface))
            },
        );
        out.push(declaration.to_fragments());
        out.extend(
            args_interfaces(template, &object.name, &object.fields).map(|args| args.to_fragments()),
        );
    }

    for union in &schema.unions {
        out.push(union_alias(template, union).to_fragments());
    }

    out
}

fn fields_interface(template: &CommonTemplate<'_>, name: &str, fields: &[Field]) -> Interface {
    Interface::new(name).fields(fields.iter().map(|field| {
        template.interface_field(&field.name, field.description.as_deref(), &field.ty, field.kind)
    }))
}

/// `<Type><Field>Args` for each field that takes arguments.
fn args_interfaces<'t>(
    template: &'t CommonTemplate<'_>,
    type_name: &'t str,
    fields: &'t [Field],
) -> impl Iterator<Item = Interface> + 't {
    fields.iter().filter(|f| f.has_arguments()).map(move |field| {
        let name = format!(
            "{}{}Args",
            template.convert(type_name, NamingKind::TypeNames),
            template.convert(&field.name, NamingKind::TypeNames)
        );
        template.arguments_interface(&name, &field.arguments)
    })
}

fn union_alias(template: &CommonTemplate<'_>, union: &UnionType) -> Union {
    Union::new(template.convert(&union.name, NamingKind::TypeNames))
        .doc(union.description.as_deref())
        .members(
            union
                .possible_types
                .iter()
                .map(|member| template.type_name(member, TypeKind::Object)),
        )
}
