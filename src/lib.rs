//! Skeletons creates ready-to-use Hugo site and theme scaffolds.
//! It writes a config file and a default archetype in the chosen format and
//! copies an embedded directory skeleton into the destination.

/// Embedded site and theme bundles
pub mod bundle;

/// Command-line interface module
pub mod cli;

/// Config and front matter encoding for every supported format
pub mod codec;

/// Common constants
pub mod constants;

/// Format-agnostic configuration documents
pub mod document;

/// Config file and archetype writers
pub mod emitter;

/// Error types and handling
pub mod error;

/// Supported serialization formats
pub mod format;

/// Filesystem abstraction
pub mod fs;

/// Site and theme generation entry points
pub mod generator;

/// Destination safety checks
pub mod guard;

/// Skip-marker patterns
pub mod ignore;

/// Logger setup for the binary
pub mod logger;

/// Copies a bundle tree into the destination
pub mod processor;

pub use generator::{create_site, create_theme};
