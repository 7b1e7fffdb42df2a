//! Two-phase attachment reconciliation

use std::collections::HashMap;
use std::path::Path;

use gitea_release_core::ConflictPolicy;
use tracing::{debug, info, warn};

use crate::api::ReleaseApi;
use crate::error::{Error, Result};

/// Resolved action for one local file
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    /// Upload as a new attachment
    Upload,

    /// Delete the existing attachment with this id, then upload
    Replace(i64),

    /// Leave the existing attachment alone
    Skip,
}

/// A local file path paired with its resolved action
#[derive(Debug)]
struct UploadTask<'a> {
    path: &'a str,
    name: String,
    action: Action,
}

/// Uploads local files as release attachments, resolving name conflicts
/// against the attachments that already exist on the release.
///
/// Reconciliation runs in two phases: every file is classified against the
/// existing attachment names first, then the resulting actions execute in
/// input order. The fail policy therefore aborts before any attachment is
/// touched.
pub struct AttachmentReconciler<'a> {
    api: &'a dyn ReleaseApi,
    owner: String,
    repo: String,
}

impl<'a> AttachmentReconciler<'a> {
    /// Create a reconciler over the given API port
    pub fn new(api: &'a dyn ReleaseApi, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            api,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Upload the files to the release, applying the conflict policy.
    ///
    /// Attachment names derive from the base name of each path. Uploads are
    /// irreversible; a failed run leaves earlier uploads in place and is
    /// recovered by re-running under the skip or overwrite policy.
    pub async fn reconcile(
        &self,
        release_id: i64,
        files: &[String],
        policy: ConflictPolicy,
    ) -> Result<()> {
        let attachments = self
            .api
            .list_attachments(&self.owner, &self.repo, release_id)
            .await?;

        let existing: HashMap<&str, i64> = attachments
            .iter()
            .map(|attachment| (attachment.name.as_str(), attachment.id))
            .collect();

        debug!("release has {} existing attachments", existing.len());

        let tasks = classify(files, &existing, policy)?;

        for task in tasks {
            match task.action {
                Action::Skip => continue,
                Action::Replace(attachment_id) => {
                    self.api
                        .delete_attachment(&self.owner, &self.repo, release_id, attachment_id)
                        .await?;

                    info!("successfully deleted old {} artifact", task.name);

                    self.upload(release_id, task.path, &task.name).await?;
                }
                Action::Upload => self.upload(release_id, task.path, &task.name).await?,
            }
        }

        Ok(())
    }

    async fn upload(&self, release_id: i64, path: &str, name: &str) -> Result<()> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|err| Error::read_file(path, err))?;

        self.api
            .create_attachment(&self.owner, &self.repo, release_id, data, name)
            .await?;

        info!("successfully uploaded {} artifact", path);

        Ok(())
    }
}

/// Classify every file against the existing attachment names.
///
/// Pure and side-effect free; the fail policy surfaces here, before any
/// delete or upload has happened.
fn classify<'a>(
    files: &'a [String],
    existing: &HashMap<&str, i64>,
    policy: ConflictPolicy,
) -> Result<Vec<UploadTask<'a>>> {
    let mut tasks = Vec::with_capacity(files.len());

    for file in files {
        let name = base_name(file);

        let action = match existing.get(name.as_str()) {
            None => Action::Upload,
            Some(&attachment_id) => match policy {
                ConflictPolicy::Overwrite => Action::Replace(attachment_id),
                ConflictPolicy::Fail => return Err(Error::asset_exists(name)),
                ConflictPolicy::Skip => {
                    warn!("skipping pre-existing {} artifact", name);

                    Action::Skip
                }
            },
        };

        tasks.push(UploadTask {
            path: file.as_str(),
            name,
            action,
        });
    }

    Ok(tasks)
}

/// Base name of a local file path, as used for the attachment name
fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
