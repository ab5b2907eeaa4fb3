//! Copies a skeleton bundle into the output directory.

use std::path::Path;

use globset::GlobSet;
use log::debug;

use crate::bundle::{EntryKind, TemplateBundle};
use crate::error::Result;
use crate::fs::{write_with_parents, Filesystem};

/// Reproduces `bundle` below `output_dir`.
///
/// The bundle root segment is stripped from every path. Directories are
/// created with their parents, files matching `skip` are left out and every
/// other file is written byte for byte, replacing whatever is already there.
///
/// # Errors
/// The first filesystem error stops the walk. Entries written before it stay
/// on disk.
pub fn copy_bundle(
    fs: &dyn Filesystem,
    bundle: &TemplateBundle,
    output_dir: &Path,
    skip: &GlobSet,
) -> Result<()> {
    debug!("Copying '{}' skeleton into {}", bundle.root(), output_dir.display());

    for entry in bundle.entries() {
        let relative = bundle.strip_root(&entry.path);
        let target = output_dir.join(relative);

        match &entry.kind {
            EntryKind::Dir => {
                debug!("Creating directory: {}", target.display());
                fs.create_dir_all(&target)?;
            }
            EntryKind::File(_) if skip.is_match(relative) => {
                debug!("Skipping placeholder {}", entry.path.display());
            }
            EntryKind::File(content) => {
                debug!("Copying file: {}", target.display());
                write_with_parents(fs, &target, content)?;
            }
        }
    }
    Ok(())
}
