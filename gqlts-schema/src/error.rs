use std::path::PathBuf;

use miette::{Diagnostic, NamedSource};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse GraphQL schema")]
    #[diagnostic(code(gqlts::schema::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[source]
        source: graphql_parser::schema::ParseError,
    },

    #[error("unknown type '{name}' referenced by '{referenced_by}'")]
    #[diagnostic(
        code(gqlts::schema::unknown_type),
        help("declare '{name}' in the schema, e.g. `scalar {name}`")
    )]
    UnknownType { name: String, referenced_by: String },
}

impl Error {
    /// Create a parse error with source context
    pub fn parse(
        source: graphql_parser::schema::ParseError,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            source,
        })
    }

    /// Create an unknown type error
    pub fn unknown_type(name: impl Into<String>, referenced_by: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownType {
            name: name.into(),
            referenced_by: referenced_by.into(),
        })
    }
}
