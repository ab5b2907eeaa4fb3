//! Site and theme generation.
//! Sequences the destination check, the config and archetype writers and the
//! bundle copy. The first error aborts generation; nothing already written is
//! rolled back.

use std::path::{Path, PathBuf};

use log::info;

use crate::bundle::Skeleton;
use crate::document::Document;
use crate::emitter::{config_file_name, write_archetype, write_config};
use crate::error::Result;
use crate::format::Format;
use crate::fs::Filesystem;
use crate::guard::{ensure_absent, ensure_output_dir};
use crate::ignore::skip_markers;
use crate::processor::copy_bundle;

const BASE_URL: &str = "https://example.org/";
const TITLE: &str = "My New Hugo Site";
const MIN_HUGO_VERSION: &str = "0.146.0";

/// One unit of generation work. `force` only applies to sites; theme
/// destinations must never exist.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub output_dir: PathBuf,
    pub skeleton: Skeleton,
    pub force: bool,
    pub format: Format,
    pub config: Document,
    pub archetype: Document,
}

impl GenerationRequest {
    /// Request for a site skeleton with the default documents.
    pub fn site<P: Into<PathBuf>>(output_dir: P, force: bool, format: Format) -> Self {
        Self {
            output_dir: output_dir.into(),
            skeleton: Skeleton::Site,
            force,
            format,
            config: site_config(),
            archetype: default_archetype(),
        }
    }

    /// Request for a theme skeleton with the default documents.
    pub fn theme<P: Into<PathBuf>>(output_dir: P, format: Format) -> Self {
        Self {
            output_dir: output_dir.into(),
            skeleton: Skeleton::Theme,
            force: false,
            format,
            config: theme_config(),
            archetype: default_archetype(),
        }
    }

    /// Checks that the destination may be written to, without writing anything.
    pub fn check(&self, fs: &dyn Filesystem) -> Result<()> {
        match self.skeleton {
            Skeleton::Site => ensure_output_dir(
                fs,
                &self.output_dir,
                self.skeleton.bundle(),
                &config_file_name(self.format),
                self.force,
            ),
            Skeleton::Theme => ensure_absent(fs, &self.output_dir),
        }
    }
}

/// Creates a site skeleton in `output_dir`.
///
/// An existing directory is accepted when it is empty, or when `force` is set
/// and none of the skeleton's top-level directories nor the config file are
/// present in it.
pub fn create_site<P: AsRef<Path>>(
    fs: &dyn Filesystem,
    output_dir: P,
    force: bool,
    format: &str,
) -> Result<()> {
    let format = Format::parse(format)?;
    generate(fs, &GenerationRequest::site(output_dir.as_ref(), force, format))
}

/// Creates a theme skeleton in `output_dir`, which must not exist yet.
pub fn create_theme<P: AsRef<Path>>(fs: &dyn Filesystem, output_dir: P, format: &str) -> Result<()> {
    let format = Format::parse(format)?;
    generate(fs, &GenerationRequest::theme(output_dir.as_ref(), format))
}

/// Checks the destination, then writes the config, the archetype and the
/// bundle tree, in that order.
pub fn generate(fs: &dyn Filesystem, request: &GenerationRequest) -> Result<()> {
    request.check(fs)?;
    let output_dir = &request.output_dir;
    let skip = skip_markers()?;

    let config = write_config(fs, output_dir, &request.config, request.format)?;
    info!("Wrote {}", config.display());

    let archetype = write_archetype(fs, output_dir, &request.archetype, request.format)?;
    info!("Wrote {}", archetype.display());

    copy_bundle(fs, request.skeleton.bundle(), output_dir, &skip)?;
    info!("Copied {} skeleton into {}", request.skeleton, output_dir.display());
    Ok(())
}

/// Minimal config of a new site.
pub fn site_config() -> Document {
    Document::new()
        .with("baseURL", BASE_URL)
        .with("languageCode", "en-us")
        .with("title", TITLE)
}

/// Config of a new theme, with a main menu and the minimum Hugo version.
pub fn theme_config() -> Document {
    let menu_entry = |name: &str, page_ref: &str, weight: i64| {
        Document::new().with("name", name).with("pageRef", page_ref).with("weight", weight)
    };

    Document::new()
        .with("baseURL", BASE_URL)
        .with("languageCode", "en-US")
        .with("title", TITLE)
        .with(
            "menus",
            Document::new().with(
                "main",
                vec![
                    menu_entry("Home", "/", 10),
                    menu_entry("Posts", "/posts", 20),
                    menu_entry("Tags", "/tags", 30),
                ],
            ),
        )
        .with(
            "module",
            Document::new().with(
                "hugoVersion",
                Document::new().with("extended", false).with("min", MIN_HUGO_VERSION),
            ),
        )
}

/// Front matter of the default archetype.
pub fn default_archetype() -> Document {
    Document::new()
        .with("title", r#"{{ replace .File.ContentBaseName "-" " " | title }}"#)
        .with("date", "{{ .Date }}")
        .with("draft", true)
}
