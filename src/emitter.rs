//! Writes the generated config file and the default archetype.

use std::path::{Path, PathBuf};

use log::debug;

use crate::codec::{encode_config, encode_front_matter};
use crate::constants::{ARCHETYPES_DIR, CONFIG_BASENAME, DEFAULT_ARCHETYPE};
use crate::document::Document;
use crate::error::Result;
use crate::format::Format;
use crate::fs::{write_with_parents, Filesystem};

/// Name of the top-level config file for `format`, e.g. `hugo.toml`.
pub fn config_file_name(format: Format) -> String {
    format!("{CONFIG_BASENAME}.{}", format.extension())
}

/// Location of the default archetype below `output_dir`.
pub fn archetype_path(output_dir: &Path) -> PathBuf {
    output_dir.join(ARCHETYPES_DIR).join(DEFAULT_ARCHETYPE)
}

/// Serializes `config` and writes it as the site config of `output_dir`.
///
/// Nothing is written if serialization fails.
pub fn write_config(
    fs: &dyn Filesystem,
    output_dir: &Path,
    config: &Document,
    format: Format,
) -> Result<PathBuf> {
    let content = encode_config(config, format)?;
    let target = output_dir.join(config_file_name(format));
    debug!("Writing config: {}", target.display());
    write_with_parents(fs, &target, content.as_bytes())?;
    Ok(target)
}

/// Serializes `archetype` as front matter and writes it to
/// `archetypes/default.md` below `output_dir`.
pub fn write_archetype(
    fs: &dyn Filesystem,
    output_dir: &Path,
    archetype: &Document,
    format: Format,
) -> Result<PathBuf> {
    let content = encode_front_matter(archetype, format)?;
    let target = archetype_path(output_dir);
    debug!("Writing archetype: {}", target.display());
    write_with_parents(fs, &target, content.as_bytes())?;
    Ok(target)
}
