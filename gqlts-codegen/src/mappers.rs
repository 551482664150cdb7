//! Mapper spec parsing.
//!
//! A mapper replaces the generated type of a GraphQL type with a user type,
//! either imported (`./models#UserModel`) or referenced by name (`UserModel`).

use indexmap::IndexMap;

/// Parsed form of a mapper spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperDescriptor {
    /// The type to use in generated code, e.g. `UserModel` or `Partial<User>`.
    pub ty: String,
    /// Module to import from, present only for external mappers.
    pub source: Option<String>,
    pub is_external: bool,
}

impl MapperDescriptor {
    /// The identifier to import for this mapper.
    ///
    /// Generic or member syntax is stripped: `Models.User` imports `Models`,
    /// `Page[User]` imports `Page`.
    pub fn symbol(&self) -> &str {
        extract_symbol(&self.ty)
    }
}

/// Parse a mapper spec.
///
/// `path#Symbol` splits at the first `#` and is external; anything else is
/// a plain type name.
pub fn parse_mapper(spec: &str) -> MapperDescriptor {
    match spec.split_once('#') {
        Some((source, ty)) => {
            if ty.contains('#') {
                tracing::warn!(
                    mapper = spec,
                    ty,
                    "mapper contains more than one '#'; using everything after the first as the type"
                );
            }
            MapperDescriptor {
                ty: ty.to_string(),
                source: Some(source.to_string()),
                is_external: true,
            }
        }
        None => MapperDescriptor {
            ty: spec.to_string(),
            source: None,
            is_external: false,
        },
    }
}

/// Find the mapper for `type_name`: its own entry, else the default mapper.
pub fn pick_mapper(
    type_name: &str,
    mappers: &IndexMap<String, String>,
    default_mapper: Option<&str>,
) -> Option<MapperDescriptor> {
    mappers
        .get(type_name)
        .map(String::as_str)
        .or(default_mapper)
        .map(parse_mapper)
}

/// Leading run of characters before `[` or `.`; the whole string when that
/// run is empty.
pub(crate) fn extract_symbol(ty: &str) -> &str {
    let end = ty.find(['[', '.']).unwrap_or(ty.len());
    if end == 0 { ty } else { &ty[..end] }
}
