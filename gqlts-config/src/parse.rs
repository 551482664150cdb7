use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, ParseContext, Result, SourceContext};

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Format::Toml),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }

    fn default_filename(self) -> &'static str {
        match self {
            Format::Toml => "codegen.toml",
            Format::Json => "codegen.json",
        }
    }
}

/// A plugin configuration that can be loaded from TOML or JSON.
///
/// Loading deserializes the document and then runs [`ConfigFile::validate`]
/// against the same source so errors can point into it.
pub trait ConfigFile: DeserializeOwned {
    /// Semantic checks run after deserialization.
    fn validate(&self, _ctx: &ParseContext<'_>) -> Result<()> {
        Ok(())
    }

    fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, Format::Toml.default_filename(), Format::Toml)
    }

    fn from_json_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, Format::Json.default_filename(), Format::Json)
    }

    /// Parse a config document with a custom filename for error reporting.
    fn from_str_with_format(content: &str, filename: &str, format: Format) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let config: Self = match format {
            Format::Toml => toml::from_str(content).map_err(|e| source.toml_error(e))?,
            Format::Json => serde_json::from_str(content).map_err(|e| source.json_error(e))?,
        };

        config.validate(&ParseContext::new(&source))?;
        Ok(config)
    }

    /// Read a `.toml` or `.json` config file.
    fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_format(&content, &path.display().to_string(), format)
    }
}
