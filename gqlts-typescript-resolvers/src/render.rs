//! Resolver declarations for each schema type.

use gqlts_codegen::{
    NamingKind,
    builder::{CodeFragment, Renderable},
};
use gqlts_schema::{DirectiveDef, Field, ObjectType, ScalarType};
use gqlts_typescript::ast::{Interface, InterfaceField, Namespace, TypeAlias};

use crate::helpers::ResolversTemplate;

/// Every resolver declaration in output order, one entry per top-level
/// declaration.
pub fn declarations(template: &ResolversTemplate<'_>) -> Vec<Vec<CodeFragment>> {
    let schema = template.common().schema();
    let mut out = Vec::new();

    for object in &schema.types {
        out.extend(object_resolvers(template, object));
    }
    for interface in &schema.interfaces {
        out.extend(type_resolver(
            template,
            &interface.name,
            interface.description.as_deref(),
            &interface.implementing_types,
        ));
    }
    for union in &schema.unions {
        out.extend(type_resolver(
            template,
            &union.name,
            union.description.as_deref(),
            &union.possible_types,
        ));
    }
    for directive in &schema.directives {
        out.extend(directive_resolver(template, directive));
    }
    for scalar in &schema.scalars {
        out.push(scalar_config(template, scalar).to_fragments());
    }

    out.push(root_resolvers(template));
    out.push(root_directive_resolvers(template));
    out
}

/// Wrap `members` in `<Type>Resolvers` unless namespaces are disabled.
fn scoped(
    template: &ResolversTemplate<'_>,
    type_name: &str,
    members: Vec<Vec<CodeFragment>>,
) -> Vec<Vec<CodeFragment>> {
    if template.config().no_namespaces {
        return members;
    }
    let name = format!(
        "{}Resolvers",
        template.common().convert(type_name, NamingKind::TypeNames)
    );
    let namespace = members
        .into_iter()
        .fold(Namespace::new(name), Namespace::add_fragments);
    vec![namespace.to_fragments()]
}

fn object_resolvers(
    template: &ResolversTemplate<'_>,
    object: &ObjectType,
) -> Vec<Vec<CodeFragment>> {
    let context = template.context_type();
    let parent = template.parent_type(&object.name);

    let resolvers = Interface::new(template.resolvers_name(&object.name))
        .doc(object.description.as_deref())
        .generic(format!("TContext = {}", context))
        .generic(format!("TypeParent = {}", parent))
        .fields(object.fields.iter().map(|field| {
            let ty = format!(
                "{}<{}, TypeParent, TContext>",
                template.field_resolver_name(&object.name, &field.name),
                template.field_type(field)
            );
            InterfaceField::new(&field.name, ty)
                .doc(field.description.as_deref())
                .optional(!template.config().strict)
        }));

    let mut members = vec![resolvers.to_fragments()];
    for field in &object.fields {
        members.push(field_resolver(template, object, field, &parent, &context).to_fragments());
        if field.has_arguments() {
            let args = template.args_name(&object.name, &field.name);
            members.push(
                template
                    .common()
                    .arguments_interface(&args, &field.arguments)
                    .to_fragments(),
            );
        }
    }

    scoped(template, &object.name, members)
}

/// `export type <Field>Resolver<R, Parent, TContext> = Resolver<...>;`
fn field_resolver(
    template: &ResolversTemplate<'_>,
    object: &ObjectType,
    field: &Field,
    parent: &str,
    context: &str,
) -> TypeAlias {
    let args = if field.has_arguments() {
        format!(", {}", template.args_name(&object.name, &field.name))
    } else {
        String::new()
    };
    TypeAlias::new(
        template.field_resolver_name(&object.name, &field.name),
        format!(
            "{}<R, Parent, TContext{}>",
            template.field_resolver(&object.name),
            args
        ),
    )
    .generic(format!("R = {}", template.field_type(field)))
    .generic(format!("Parent = {}", parent))
    .generic(format!("TContext = {}", context))
}

/// `__resolveType` resolver of an interface or union.
fn type_resolver(
    template: &ResolversTemplate<'_>,
    type_name: &str,
    description: Option<&str>,
    possible_types: &[String],
) -> Vec<Vec<CodeFragment>> {
    let context = template.context_type();
    let typenames = template.typenames(possible_types);
    let parents = template.parent_types(possible_types);
    let resolve_type = template.resolve_type_name(type_name);

    let resolvers = Interface::new(template.resolvers_name(type_name))
        .doc(description)
        .generic(format!("TContext = {}", context))
        .field(
            "__resolveType",
            format!("{}<{}, {}, TContext>", resolve_type, typenames, parents),
        );
    let alias = TypeAlias::new(resolve_type, "TypeResolveFn<R, Parent, TContext>")
        .generic(format!("R = {}", typenames))
        .generic(format!("Parent = {}", parents))
        .generic(format!("TContext = {}", context));

    scoped(
        template,
        type_name,
        vec![resolvers.to_fragments(), alias.to_fragments()],
    )
}

fn directive_resolver(
    template: &ResolversTemplate<'_>,
    directive: &DirectiveDef,
) -> Vec<Vec<CodeFragment>> {
    let name = template
        .common()
        .convert(&directive.name, NamingKind::TypeNames);
    let args = format!("{}DirectiveArgs", name);

    let resolver = TypeAlias::new(
        format!("{}DirectiveResolver", name),
        format!(
            "DirectiveResolverFn<Result, {}, {}>",
            args,
            template.context_type()
        ),
    )
    .doc(directive.description.as_deref())
    .generic("Result");

    vec![
        resolver.to_fragments(),
        template
            .common()
            .arguments_interface(&args, &directive.arguments)
            .to_fragments(),
    ]
}

/// `GraphQLScalarTypeConfig` pinned to the scalar's name.
fn scalar_config(template: &ResolversTemplate<'_>, scalar: &ScalarType) -> Interface {
    let name = template
        .common()
        .convert(&scalar.name, NamingKind::TypeNames);
    Interface::new(format!("{}ScalarConfig", name))
        .doc(scalar.description.as_deref())
        .extends(format!("GraphQLScalarTypeConfig<{}, any>", name))
        .field("name", format!("'{}'", scalar.name))
}

/// `IResolvers`: every resolvers interface keyed by GraphQL type name.
fn root_resolvers(template: &ResolversTemplate<'_>) -> Vec<CodeFragment> {
    let schema = template.common().schema();
    let with_context = |name: &str| {
        CodeFragment::Line(format!(
            "{}?: {}<TContext>;",
            name,
            template.resolvers_ref(name)
        ))
    };

    let mut body: Vec<CodeFragment> = schema
        .types
        .iter()
        .map(|t| with_context(t.name.as_str()))
        .chain(schema.interfaces.iter().map(|i| with_context(i.name.as_str())))
        .chain(schema.unions.iter().map(|u| with_context(u.name.as_str())))
        .collect();
    body.extend(
        schema
            .scalars
            .iter()
            .map(|s| CodeFragment::Line(format!("{}?: GraphQLScalarType;", s.name))),
    );

    vec![CodeFragment::Block {
        header: format!(
            "export type IResolvers<TContext = {}> = {{",
            template.context_type()
        ),
        body,
        close: Some(
            "} & { [typeName: string]: { [fieldName: string]: Resolver<any, any, TContext, any> | SubscriptionResolver<any, any, TContext, any> } };"
                .to_string(),
        ),
    }]
}

/// `IDirectiveResolvers`: every directive resolver keyed by directive name.
fn root_directive_resolvers(template: &ResolversTemplate<'_>) -> Vec<CodeFragment> {
    let body = template
        .common()
        .schema()
        .directives
        .iter()
        .map(|d| {
            CodeFragment::Line(format!(
                "{}?: {}DirectiveResolver<Result>;",
                d.name,
                template.common().convert(&d.name, NamingKind::TypeNames)
            ))
        })
        .collect();

    vec![CodeFragment::Block {
        header: "export type IDirectiveResolvers<Result> = {".to_string(),
        body,
        close: Some(
            "} & { [directiveName: string]: DirectiveResolverFn<any, any, any> };".to_string(),
        ),
    }]
}
