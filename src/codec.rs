//! Encoding and decoding of [`Document`]s in every supported [`Format`].
//!
//! Config files are written as plain documents. Archetypes are written as
//! front matter only: TOML between `+++` lines, YAML between `---` lines and
//! JSON as a bare object.

use crate::document::{Document, Value};
use crate::error::{Error, Result};
use crate::format::Format;

const TOML_DELIMITER: &str = "+++";
const YAML_DELIMITER: &str = "---";

/// Serializes a document as a standalone config file.
pub fn encode_config(doc: &Document, format: Format) -> Result<String> {
    match format {
        Format::Toml => toml::to_string(doc).map_err(|e| Error::serialization(format, e)),
        Format::Yaml => serde_yaml::to_string(doc).map_err(|e| Error::serialization(format, e)),
        Format::Json => {
            // serde_json quietly writes NaN and infinities as null
            if doc.any_value(&|v| matches!(v, Value::Float(f) if !f.is_finite())) {
                return Err(Error::serialization(format, "non-finite numbers are not supported"));
            }
            let mut out =
                serde_json::to_string_pretty(doc).map_err(|e| Error::serialization(format, e))?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Serializes a document as a front matter block with no content body.
pub fn encode_front_matter(doc: &Document, format: Format) -> Result<String> {
    let body = encode_config(doc, format)?;
    Ok(match format {
        Format::Toml => format!("{TOML_DELIMITER}\n{body}{TOML_DELIMITER}\n"),
        Format::Yaml => format!("{YAML_DELIMITER}\n{body}{YAML_DELIMITER}\n"),
        Format::Json => body,
    })
}

/// Parses a config file written in `format`.
pub fn decode_config(text: &str, format: Format) -> Result<Document> {
    match format {
        Format::Toml => toml::from_str(text).map_err(|e| Error::serialization(format, e)),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| Error::serialization(format, e)),
        Format::Json => serde_json::from_str(text).map_err(|e| Error::serialization(format, e)),
    }
}

/// Parses the front matter block at the start of `text`. Any content after
/// the closing delimiter is ignored.
pub fn decode_front_matter(text: &str, format: Format) -> Result<Document> {
    let delimiter = match format {
        Format::Toml => TOML_DELIMITER,
        Format::Yaml => YAML_DELIMITER,
        Format::Json => {
            let mut stream = serde_json::Deserializer::from_str(text).into_iter::<Document>();
            return match stream.next() {
                Some(doc) => doc.map_err(|e| Error::serialization(format, e)),
                None => Err(Error::serialization(format, "missing front matter")),
            };
        }
    };

    let missing = || Error::serialization(format, "missing front matter delimiters");
    let rest = text
        .strip_prefix(delimiter)
        .and_then(|rest| rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")))
        .ok_or_else(missing)?;

    // A delimiter line may also sit inside a multi-line string, so every
    // candidate closing line is tried until the block in front of it parses.
    let mut block = String::new();
    let mut last_error = None;
    for line in rest.lines() {
        if line.trim_end() == delimiter {
            match decode_config(&block, format) {
                Ok(doc) => return Ok(doc),
                Err(e) => last_error = Some(e),
            }
        }
        block.push_str(line);
        block.push('\n');
    }
    Err(last_error.unwrap_or_else(missing))
}
