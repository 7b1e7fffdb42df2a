//! Settings resolution and validation

use std::path::Path;

use url::Url;

use crate::checksum::write_checksums;
use crate::error::{Error, Result};
use crate::file::{expand_globs, read_string_or_file};
use crate::policy::ConflictPolicy;
use crate::TAG_REF_PREFIX;

/// Resolved settings for one run.
///
/// Populated from CLI flags and CI environment variables by the binary,
/// validated here before any network call is made.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// API key to access the Gitea API
    pub api_key: String,

    /// URL of the Gitea instance
    pub base_url: String,

    /// Glob patterns of files to upload
    pub files: Vec<String>,

    /// Checksum methods to generate sidecar files for
    pub checksum: Vec<String>,

    /// What to do if an attachment with the same name already exists
    pub file_exists: String,

    /// Create a draft release
    pub draft: bool,

    /// Mark the release as prerelease
    pub prerelease: bool,

    /// Release title, either a literal or a file path
    pub title: String,

    /// Release note, either a literal or a file path
    pub note: String,

    /// Pipeline event that triggered the run
    pub event: String,

    /// Git commit ref the tag is derived from
    pub commit_ref: String,

    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,
}

impl Settings {
    /// Validate the settings before any network I/O.
    ///
    /// Checks the pipeline event, the conflict policy and the base URL, and
    /// resolves title/note values that point at files into their contents.
    pub fn validate(&mut self) -> Result<()> {
        if self.event != "tag" {
            return Err(Error::unsupported_event(&self.event));
        }

        self.file_exists.parse::<ConflictPolicy>()?;

        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
        Url::parse(&self.base_url)?;

        if !self.note.is_empty() {
            self.note = read_string_or_file(&self.note)?;
        }

        if !self.title.is_empty() {
            self.title = read_string_or_file(&self.title)?;
        }

        Ok(())
    }

    /// The validated conflict policy
    pub fn conflict_policy(&self) -> Result<ConflictPolicy> {
        self.file_exists.parse()
    }

    /// The validated base URL
    pub fn url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Release tag derived from the commit ref
    pub fn tag(&self) -> &str {
        self.commit_ref
            .strip_prefix(TAG_REF_PREFIX)
            .unwrap_or(&self.commit_ref)
    }

    /// Expand the file globs and generate the requested checksum sidecars.
    ///
    /// Sidecar files land in `out_dir` and are appended to the upload list.
    pub fn resolve_files<P: AsRef<Path>>(&self, out_dir: P) -> Result<Vec<String>> {
        let files = expand_globs(&self.files)?;

        if self.checksum.is_empty() {
            return Ok(files);
        }

        write_checksums(&files, &self.checksum, out_dir)
    }
}
