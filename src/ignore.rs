//! Skip-marker handling for skeleton bundles.
//! Placeholder files only exist so that empty directories survive in the
//! bundle; the patterns here decide which bundle files never reach the output.

use crate::constants::SKIP_MARKER;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Builds the set of patterns matching skip-marker files at any depth.
///
/// # Returns
/// * `Result<GlobSet>` - Compiled patterns, matched against bundle-relative paths
///
/// # Errors
/// * `Error::SkipPatternError` if a pattern fails to compile
pub fn skip_markers() -> Result<GlobSet> {
    build_skip_set(&[SKIP_MARKER])
}

/// Compiles base-name patterns into a set that matches them in any directory.
pub fn build_skip_set<S: AsRef<str>>(names: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for name in names {
        let pattern = format!("**/{}", name.as_ref());
        debug!("Adding skip pattern '{pattern}'");
        builder.add(Glob::new(&pattern).map_err(|e| Error::SkipPatternError(e.to_string()))?);
    }
    builder.build().map_err(|e| Error::SkipPatternError(e.to_string()))
}
