//! Conversion from the `graphql_parser` AST into schema descriptors.

use std::collections::HashMap;

use graphql_parser::schema::{
    self as ast, Definition, Document, TypeDefinition, TypeExtension,
};

use crate::{
    BUILTIN_SCALARS, Error, Result,
    schema::{RootTypes, Schema},
    types::{
        DirectiveDef, EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType,
        ObjectType, ScalarType, TypeKind, TypeRef, UnionType,
    },
};

const BUILTIN_DIRECTIVES: [&str; 3] = ["skip", "include", "deprecated"];

pub(crate) fn is_builtin_directive(name: &str) -> bool {
    BUILTIN_DIRECTIVES.contains(&name)
}

/// Maps every named type to its kind so references can be resolved.
struct Kinds<'d> {
    kinds: HashMap<&'d str, TypeKind>,
}

impl<'d> Kinds<'d> {
    fn collect(document: &'d Document<'_, String>) -> Self {
        let mut kinds: HashMap<&'d str, TypeKind> = BUILTIN_SCALARS
            .iter()
            .map(|name| (*name, TypeKind::Scalar))
            .collect();

        for definition in &document.definitions {
            if let Definition::TypeDefinition(ty) = definition {
                let (name, kind) = match ty {
                    TypeDefinition::Scalar(t) => (&t.name, TypeKind::Scalar),
                    TypeDefinition::Object(t) => (&t.name, TypeKind::Object),
                    TypeDefinition::Interface(t) => (&t.name, TypeKind::Interface),
                    TypeDefinition::Union(t) => (&t.name, TypeKind::Union),
                    TypeDefinition::Enum(t) => (&t.name, TypeKind::Enum),
                    TypeDefinition::InputObject(t) => (&t.name, TypeKind::InputObject),
                };
                kinds.insert(name.as_str(), kind);
            }
        }

        Self { kinds }
    }

    fn kind_of(&self, ty: &TypeRef, referenced_by: &str) -> Result<TypeKind> {
        let name = ty.base_name();
        self.kinds
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_type(name, referenced_by))
    }

    fn field(&self, parent: &str, field: &ast::Field<'_, String>) -> Result<Field> {
        let ty = type_ref(&field.field_type);
        let owner = format!("{}.{}", parent, field.name);
        Ok(Field {
            kind: self.kind_of(&ty, &owner)?,
            name: field.name.clone(),
            description: field.description.clone(),
            arguments: self.input_values(&owner, &field.arguments)?,
            ty,
        })
    }

    fn fields(&self, parent: &str, fields: &[ast::Field<'_, String>]) -> Result<Vec<Field>> {
        fields.iter().map(|f| self.field(parent, f)).collect()
    }

    fn input_values(
        &self,
        parent: &str,
        values: &[ast::InputValue<'_, String>],
    ) -> Result<Vec<InputValue>> {
        values
            .iter()
            .map(|value| {
                let ty = type_ref(&value.value_type);
                Ok(InputValue {
                    kind: self.kind_of(&ty, &format!("{}.{}", parent, value.name))?,
                    name: value.name.clone(),
                    description: value.description.clone(),
                    ty,
                })
            })
            .collect()
    }
}

fn type_ref(ty: &ast::Type<'_, String>) -> TypeRef {
    match ty {
        ast::Type::NamedType(name) => TypeRef::named(name.clone()),
        ast::Type::ListType(inner) => TypeRef::list(type_ref(inner)),
        ast::Type::NonNullType(inner) => TypeRef::non_null(type_ref(inner)),
    }
}

fn enum_values(values: &[ast::EnumValue<'_, String>]) -> Vec<EnumValue> {
    values
        .iter()
        .map(|v| EnumValue {
            name: v.name.clone(),
            description: v.description.clone(),
        })
        .collect()
}

fn builtin_directives() -> Vec<DirectiveDef> {
    let if_arg = |description: &str| InputValue {
        name: "if".to_string(),
        description: Some(description.to_string()),
        ty: TypeRef::non_null(TypeRef::named("Boolean")),
        kind: TypeKind::Scalar,
    };
    let field_locations = || {
        ["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]
            .map(String::from)
            .to_vec()
    };

    vec![
        DirectiveDef {
            name: "skip".to_string(),
            description: Some(
                "Directs the executor to skip this field or fragment when the `if` argument is true."
                    .to_string(),
            ),
            locations: field_locations(),
            arguments: vec![if_arg("Skipped when true.")],
        },
        DirectiveDef {
            name: "include".to_string(),
            description: Some(
                "Directs the executor to include this field or fragment only when the `if` argument is true."
                    .to_string(),
            ),
            locations: field_locations(),
            arguments: vec![if_arg("Included when true.")],
        },
        DirectiveDef {
            name: "deprecated".to_string(),
            description: Some(
                "Marks an element of a GraphQL schema as no longer supported.".to_string(),
            ),
            locations: ["FIELD_DEFINITION", "ENUM_VALUE"].map(String::from).to_vec(),
            arguments: vec![InputValue {
                name: "reason".to_string(),
                description: Some(
                    "Explains why this element was deprecated, usually also including a suggestion for how to access supported similar data."
                        .to_string(),
                ),
                ty: TypeRef::named("String"),
                kind: TypeKind::Scalar,
            }],
        },
    ]
}

pub(crate) fn build(document: &Document<'_, String>) -> Result<Schema> {
    let kinds = Kinds::collect(document);
    let mut schema = Schema {
        directives: builtin_directives(),
        ..Schema::default()
    };
    let mut schema_definition = None;

    for definition in &document.definitions {
        match definition {
            Definition::SchemaDefinition(def) => schema_definition = Some(def),
            Definition::TypeDefinition(ty) => push_type(&mut schema, &kinds, ty)?,
            Definition::DirectiveDefinition(def) => {
                let directive = DirectiveDef {
                    name: def.name.clone(),
                    description: def.description.clone(),
                    locations: def
                        .locations
                        .iter()
                        .map(|l| l.as_str().to_string())
                        .collect(),
                    arguments: kinds.input_values(&format!("@{}", def.name), &def.arguments)?,
                };
                // A redeclared built-in replaces the implicit one in place
                match schema.directives.iter_mut().find(|d| d.name == def.name) {
                    Some(existing) => *existing = directive,
                    None => schema.directives.push(directive),
                }
            }
            Definition::TypeExtension(_) => {}
        }
    }

    // Extensions may appear before the type they extend
    for definition in &document.definitions {
        if let Definition::TypeExtension(ext) = definition {
            apply_extension(&mut schema, &kinds, ext)?;
        }
    }

    for interface in &mut schema.interfaces {
        interface.implementing_types = schema
            .types
            .iter()
            .filter(|t| t.interfaces.contains(&interface.name))
            .map(|t| t.name.clone())
            .collect();
    }

    let roots = match schema_definition {
        Some(def) => RootTypes {
            query: def.query.clone(),
            mutation: def.mutation.clone(),
            subscription: def.subscription.clone(),
        },
        None => {
            let existing = |name: &str| schema.object(name).map(|t| t.name.clone());
            RootTypes {
                query: existing("Query"),
                mutation: existing("Mutation"),
                subscription: existing("Subscription"),
            }
        }
    };
    schema.roots = roots;

    Ok(schema)
}

fn push_type(schema: &mut Schema, kinds: &Kinds<'_>, ty: &TypeDefinition<'_, String>) -> Result<()> {
    match ty {
        TypeDefinition::Scalar(t) => {
            if !BUILTIN_SCALARS.contains(&t.name.as_str()) {
                schema.scalars.push(ScalarType {
                    name: t.name.clone(),
                    description: t.description.clone(),
                });
            }
        }
        TypeDefinition::Object(t) => schema.types.push(ObjectType {
            name: t.name.clone(),
            description: t.description.clone(),
            fields: kinds.fields(&t.name, &t.fields)?,
            interfaces: t.implements_interfaces.clone(),
        }),
        TypeDefinition::Interface(t) => schema.interfaces.push(InterfaceType {
            name: t.name.clone(),
            description: t.description.clone(),
            fields: kinds.fields(&t.name, &t.fields)?,
            implementing_types: Vec::new(),
        }),
        TypeDefinition::Union(t) => {
            for member in &t.types {
                kinds.kind_of(&TypeRef::named(member.clone()), &t.name)?;
            }
            schema.unions.push(UnionType {
                name: t.name.clone(),
                description: t.description.clone(),
                possible_types: t.types.clone(),
            })
        }
        TypeDefinition::Enum(t) => schema.enums.push(EnumType {
            name: t.name.clone(),
            description: t.description.clone(),
            values: enum_values(&t.values),
        }),
        TypeDefinition::InputObject(t) => schema.input_types.push(InputObjectType {
            name: t.name.clone(),
            description: t.description.clone(),
            fields: kinds.input_values(&t.name, &t.fields)?,
        }),
    }
    Ok(())
}

fn apply_extension(
    schema: &mut Schema,
    kinds: &Kinds<'_>,
    ext: &TypeExtension<'_, String>,
) -> Result<()> {
    let missing = |name: &str| Error::unknown_type(name, "extend");

    match ext {
        TypeExtension::Scalar(_) => {}
        TypeExtension::Object(e) => {
            let fields = kinds.fields(&e.name, &e.fields)?;
            let target = schema
                .types
                .iter_mut()
                .find(|t| t.name == e.name)
                .ok_or_else(|| missing(&e.name))?;
            target.fields.extend(fields);
            for interface in &e.implements_interfaces {
                if !target.interfaces.contains(interface) {
                    target.interfaces.push(interface.clone());
                }
            }
        }
        TypeExtension::Interface(e) => {
            let fields = kinds.fields(&e.name, &e.fields)?;
            schema
                .interfaces
                .iter_mut()
                .find(|i| i.name == e.name)
                .ok_or_else(|| missing(&e.name))?
                .fields
                .extend(fields);
        }
        TypeExtension::Union(e) => {
            let target = schema
                .unions
                .iter_mut()
                .find(|u| u.name == e.name)
                .ok_or_else(|| missing(&e.name))?;
            for member in &e.types {
                kinds.kind_of(&TypeRef::named(member.clone()), &e.name)?;
                if !target.possible_types.contains(member) {
                    target.possible_types.push(member.clone());
                }
            }
        }
        TypeExtension::Enum(e) => {
            schema
                .enums
                .iter_mut()
                .find(|t| t.name == e.name)
                .ok_or_else(|| missing(&e.name))?
                .values
                .extend(enum_values(&e.values));
        }
        TypeExtension::InputObject(e) => {
            let fields = kinds.input_values(&e.name, &e.fields)?;
            schema
                .input_types
                .iter_mut()
                .find(|t| t.name == e.name)
                .ok_or_else(|| missing(&e.name))?
                .fields
                .extend(fields);
        }
    }
    Ok(())
}
