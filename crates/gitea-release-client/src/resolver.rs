//! Find-or-create release resolution

use tracing::{debug, info};

use crate::api::ReleaseApi;
use crate::error::Result;
use crate::types::{CreateReleaseOptions, Release};

/// Options describing the release a run publishes to
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Release tag
    pub tag: String,

    /// Create a draft release
    pub draft: bool,

    /// Mark the release as prerelease
    pub prerelease: bool,

    /// Release title
    pub title: String,

    /// Release notes
    pub note: String,
}

/// Resolves the release for a tag, creating it when absent.
///
/// An existing release is reused as-is: the requested draft/prerelease/
/// title/note are only applied when the release has to be created.
pub struct ReleaseResolver<'a> {
    api: &'a dyn ReleaseApi,
    opts: ReleaseOptions,
}

impl<'a> ReleaseResolver<'a> {
    /// Create a resolver over the given API port
    pub fn new(api: &'a dyn ReleaseApi, opts: ReleaseOptions) -> Self {
        Self { api, opts }
    }

    /// Find the release for the tag, or create it when no release exists.
    ///
    /// A transport failure while listing propagates and never falls through
    /// to creation.
    pub async fn resolve(&self) -> Result<Release> {
        if let Some(release) = self.find().await? {
            return Ok(release);
        }

        self.create().await
    }

    /// Retrieve the release with the tag, `None` when absent
    async fn find(&self) -> Result<Option<Release>> {
        let releases = self
            .api
            .list_releases(&self.opts.owner, &self.opts.repo)
            .await?;

        debug!("found {} releases", releases.len());

        for release in releases {
            if release.tag_name == self.opts.tag {
                info!("successfully retrieved {} release", self.opts.tag);

                return Ok(Some(release));
            }
        }

        Ok(None)
    }

    /// Create a new release with the requested metadata
    async fn create(&self) -> Result<Release> {
        let opts = CreateReleaseOptions {
            tag_name: self.opts.tag.clone(),
            name: self.opts.title.clone(),
            body: self.opts.note.clone(),
            draft: self.opts.draft,
            prerelease: self.opts.prerelease,
        };

        let release = self
            .api
            .create_release(&self.opts.owner, &self.opts.repo, opts)
            .await?;

        info!("successfully created {} release", self.opts.tag);

        Ok(release)
    }
}
