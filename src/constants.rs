//! Common constants used throughout the skeleton generator.

/// Basename of the generated top-level site config; the format supplies the extension.
pub const CONFIG_BASENAME: &str = "hugo";

/// Directory holding content archetypes inside a generated site or theme.
pub const ARCHETYPES_DIR: &str = "archetypes";

/// File name of the default archetype.
pub const DEFAULT_ARCHETYPE: &str = "default.md";

/// Placeholder that keeps otherwise-empty directories in a skeleton. Never copied.
pub const SKIP_MARKER: &str = ".gitkeep";

/// Format used when the caller doesn't ask for one.
pub const DEFAULT_FORMAT: &str = "toml";
