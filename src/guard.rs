//! Destination checks run before anything is written.

use std::path::Path;

use log::debug;

use crate::bundle::TemplateBundle;
use crate::error::{Error, Result};
use crate::fs::Filesystem;

/// Ensures the output directory is safe to generate a site into.
///
/// # Arguments
/// * `fs` - Filesystem to inspect
/// * `output_dir` - Target directory for generated output
/// * `bundle` - Bundle whose top-level directories will be created
/// * `config_file` - Name of the config file that will be written
/// * `force` - Whether a non-empty directory may be used
///
/// # Errors
/// * `Error::NotADirectoryError` if the path exists and is not a directory
/// * `Error::AlreadyExistsError` if the directory is not empty and `force` is false
/// * `Error::CollisionError` if `force` is set but a top-level bundle directory or
///   the config file is already present
pub fn ensure_output_dir(
    fs: &dyn Filesystem,
    output_dir: &Path,
    bundle: &TemplateBundle,
    config_file: &str,
    force: bool,
) -> Result<()> {
    if !fs.exists(output_dir)? {
        return Ok(());
    }
    if !fs.is_dir(output_dir)? {
        return Err(Error::NotADirectoryError { path: output_dir.display().to_string() });
    }
    if fs.is_empty_dir(output_dir)? {
        return Ok(());
    }
    if !force {
        return Err(Error::not_empty(output_dir.display().to_string()));
    }

    // Only the top level is checked, anything deeper is merged and may be overwritten.
    for name in bundle.top_level_dirs().chain(std::iter::once(config_file)) {
        let path = output_dir.join(name);
        if fs.exists(&path)? {
            return Err(Error::CollisionError { path: path.display().to_string() });
        }
    }
    debug!("Forcing generation into non-empty directory '{}'", output_dir.display());
    Ok(())
}

/// Ensures nothing at all exists at `output_dir`.
///
/// # Errors
/// * `Error::AlreadyExistsError` if the path exists, even as an empty directory
pub fn ensure_absent(fs: &dyn Filesystem, output_dir: &Path) -> Result<()> {
    if fs.exists(output_dir)? {
        return Err(Error::already_exists(output_dir.display().to_string()));
    }
    Ok(())
}
