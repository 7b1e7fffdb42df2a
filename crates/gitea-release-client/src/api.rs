//! Capability trait over the remote release API

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Attachment, CreateReleaseOptions, Release};

/// The five remote operations the release engine depends on.
///
/// Implemented by [`crate::GiteaClient`] for the real API and by in-memory
/// fakes in tests. List operations are expected to return the complete set;
/// implementations over a paginated API must walk every page.
#[async_trait]
pub trait ReleaseApi: Send + Sync {
    /// List all releases of a repository
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>>;

    /// Create a new release
    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        opts: CreateReleaseOptions,
    ) -> Result<Release>;

    /// List all attachments of a release
    async fn list_attachments(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
    ) -> Result<Vec<Attachment>>;

    /// Upload a new attachment to a release
    async fn create_attachment(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
        data: Vec<u8>,
        filename: &str,
    ) -> Result<Attachment>;

    /// Delete an attachment from a release
    async fn delete_attachment(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
        attachment_id: i64,
    ) -> Result<()>;
}
