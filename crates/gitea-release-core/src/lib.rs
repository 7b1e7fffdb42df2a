//! Core library for the gitea-release CI tool
//!
//! Provides:
//! - Settings resolution and validation
//! - Conflict policy for pre-existing release assets
//! - Checksum calculation and sidecar file generation
//! - File helpers (glob expansion, string-or-file resolution)

pub mod checksum;
pub mod error;
pub mod file;
pub mod policy;
pub mod settings;

pub use checksum::{checksum, write_checksums};
pub use error::{Error, Result};
pub use file::{expand_globs, read_string_or_file};
pub use policy::ConflictPolicy;
pub use settings::Settings;

/// Ref prefix a tag push delivers in the commit ref
pub const TAG_REF_PREFIX: &str = "refs/tags/";
