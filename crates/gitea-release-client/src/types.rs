//! Wire types for the Gitea release API

use serde::{Deserialize, Serialize};

/// A release on the Gitea instance
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Release {
    /// Release identifier assigned by the remote service
    pub id: i64,

    /// Release tag (e.g. "v1.0.0")
    pub tag_name: String,

    /// Release title
    #[serde(default)]
    pub name: String,

    /// Release notes
    #[serde(default)]
    pub body: String,

    /// Whether this is a draft
    #[serde(default)]
    pub draft: bool,

    /// Whether this is a prerelease
    #[serde(default)]
    pub prerelease: bool,
}

/// A file attached to a release
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Attachment {
    /// Attachment identifier
    pub id: i64,

    /// Attachment name, unique within its release
    pub name: String,

    /// Attachment size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Request body for creating a release
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateReleaseOptions {
    /// Tag to create the release for
    pub tag_name: String,

    /// Release title
    pub name: String,

    /// Release notes
    pub body: String,

    /// Create as draft
    pub draft: bool,

    /// Mark as prerelease
    pub prerelease: bool,
}
