//! Embedded skeleton bundles.
//! Each bundle is a fixed tree of directories and files compiled into the
//! binary. Every path in a bundle starts with a synthetic root segment
//! (`site` or `theme`) that is stripped when the tree is copied out.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "skeletons/site/"]
struct SiteFiles;

#[derive(RustEmbed)]
#[folder = "skeletons/theme/"]
struct ThemeFiles;

/// Selects one of the built-in bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skeleton {
    Site,
    Theme,
}

impl Skeleton {
    /// Returns the process-wide bundle for this skeleton.
    pub fn bundle(&self) -> &'static TemplateBundle {
        static SITE: OnceLock<TemplateBundle> = OnceLock::new();
        static THEME: OnceLock<TemplateBundle> = OnceLock::new();
        match self {
            Skeleton::Site => SITE.get_or_init(|| TemplateBundle::from_embed::<SiteFiles>("site")),
            Skeleton::Theme => {
                THEME.get_or_init(|| TemplateBundle::from_embed::<ThemeFiles>("theme"))
            }
        }
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skeleton::Site => f.write_str("site"),
            Skeleton::Theme => f.write_str("theme"),
        }
    }
}

/// What a bundle entry represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File(Cow<'static, [u8]>),
}

/// One path in a bundle, including the root segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl BundleEntry {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Dir)
    }
}

/// An immutable tree of directories and files.
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    root: String,
    entries: Vec<BundleEntry>,
}

impl TemplateBundle {
    /// Builds a bundle from root-relative file paths and their contents.
    ///
    /// Directory entries are derived from the files: the root itself and every
    /// ancestor of every file. Entries are ordered the way a sorted directory
    /// walk visits them, parents before children.
    pub fn from_files<R, I, P>(root: R, files: I) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = (P, Cow<'static, [u8]>)>,
        P: AsRef<Path>,
    {
        let root = root.into();
        let root_path = PathBuf::from(&root);
        let mut tree = BTreeMap::new();
        tree.insert(root_path.clone(), EntryKind::Dir);

        for (relative, content) in files {
            let path = root_path.join(relative.as_ref());
            for ancestor in path.ancestors().skip(1) {
                if ancestor.as_os_str().is_empty() {
                    break;
                }
                tree.entry(ancestor.to_path_buf()).or_insert(EntryKind::Dir);
            }
            tree.insert(path, EntryKind::File(content));
        }

        let entries = tree.into_iter().map(|(path, kind)| BundleEntry { path, kind }).collect();
        Self { root, entries }
    }

    fn from_embed<E: RustEmbed>(root: &str) -> Self {
        let files = E::iter().filter_map(|name| {
            let file = E::get(&name)?;
            Some((name.into_owned(), file.data))
        });
        Self::from_files(root, files)
    }

    /// Name of the synthetic root segment.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// All entries in walk order.
    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    /// Names of the directories directly below the root.
    pub fn top_level_dirs(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.is_dir() && entry.path.components().count() == 2)
            .filter_map(|entry| entry.path.file_name().and_then(|name| name.to_str()))
    }

    /// Removes the root segment from a bundle path. The root itself maps to
    /// the empty path.
    pub fn strip_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
