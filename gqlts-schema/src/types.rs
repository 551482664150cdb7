//! Schema descriptor types.

use std::fmt;

use serde::Serialize;

/// Kind of a named GraphQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "scalar",
            TypeKind::Object => "object",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::Enum => "enum",
            TypeKind::InputObject => "input",
        }
    }

    /// Object and interface types, the only kinds a mapper can replace.
    pub fn is_composite(&self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface)
    }
}

/// A (possibly wrapped) reference to a named type, e.g. `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "wrapper", content = "of", rename_all = "camelCase")]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// The innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base_name(),
        }
    }

    /// Whether the outermost wrapper is non-null.
    pub fn is_required(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Whether the type is a list once the outer non-null wrapper is removed.
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
            TypeRef::Named(_) => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

/// An argument, input field or directive argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Kind of the named type behind `ty`.
    pub kind: TypeKind,
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Kind of the named type behind `ty`.
    pub kind: TypeKind,
    pub arguments: Vec<InputValue>,
}

impl Field {
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Names of the interfaces this type implements.
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Object types implementing this interface, in declaration order.
    pub implementing_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveDef {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<String>,
    pub arguments: Vec<InputValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_base_name() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("User"))));
        assert_eq!(ty.base_name(), "User");
        assert!(ty.is_required());
        assert!(ty.is_list());
    }

    #[test]
    fn test_type_ref_display() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::named("String")));
        assert_eq!(ty.to_string(), "[String]!");
        assert_eq!(TypeRef::named("ID").to_string(), "ID");
    }

    #[test]
    fn test_nullable_named_is_not_list() {
        let ty = TypeRef::named("Int");
        assert!(!ty.is_required());
        assert!(!ty.is_list());
    }

    #[test]
    fn test_type_kind_composite() {
        assert!(TypeKind::Object.is_composite());
        assert!(TypeKind::Interface.is_composite());
        assert!(!TypeKind::Union.is_composite());
        assert!(!TypeKind::Scalar.is_composite());
        assert_eq!(TypeKind::InputObject.as_str(), "input");
    }
}
