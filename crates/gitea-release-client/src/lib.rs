//! Gitea release API client for the gitea-release CI tool
//!
//! Provides:
//! - The `ReleaseApi` capability trait over the five remote operations
//! - A reqwest-based implementation against the Gitea REST API
//! - `ReleaseResolver` to find-or-create a release by tag
//! - `AttachmentReconciler` to upload artifacts with conflict handling

pub mod api;
pub mod error;
pub mod gitea;
pub mod reconciler;
pub mod resolver;
pub mod types;

pub use api::ReleaseApi;
pub use error::{Error, Result};
pub use gitea::GiteaClient;
pub use reconciler::AttachmentReconciler;
pub use resolver::{ReleaseOptions, ReleaseResolver};
pub use types::{Attachment, CreateReleaseOptions, Release};
