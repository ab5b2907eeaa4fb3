//! Supported serialization formats for configs and front matter.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Closed set of formats a config or archetype can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [Format; 3] = [Format::Toml, Format::Yaml, Format::Json];

    /// Normalizes a user supplied format name. Matching is case-insensitive
    /// and `yml` is accepted as an alias for YAML.
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Self> {
        let raw = s.as_ref();
        match raw.trim().to_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(Error::serialization(raw, "unsupported format")),
        }
    }

    /// File extension used for files written in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::parse(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
