//! The publish pipeline: validate, resolve the release, upload artifacts

use anyhow::{Context, Result};
use gitea_release_client::{AttachmentReconciler, GiteaClient, ReleaseOptions, ReleaseResolver};
use tracing::info;

use crate::cli::Cli;

/// Run one publish cycle for the triggering tag
pub async fn run(cli: Cli) -> Result<()> {
    let mut settings = cli.into_settings();
    settings.validate().context("validation failed")?;

    let files = settings
        .resolve_files(".")
        .context("failed to resolve files")?;

    info!("publishing {} files to {} release", files.len(), settings.tag());

    let client = GiteaClient::new(settings.url()?, &settings.api_key)
        .context("failed to create Gitea client")?;

    let resolver = ReleaseResolver::new(
        &client,
        ReleaseOptions {
            owner: settings.owner.clone(),
            repo: settings.repo.clone(),
            tag: settings.tag().to_string(),
            draft: settings.draft,
            prerelease: settings.prerelease,
            title: settings.title.clone(),
            note: settings.note.clone(),
        },
    );

    let release = resolver
        .resolve()
        .await
        .context("failed to create the release")?;

    let reconciler = AttachmentReconciler::new(&client, &settings.owner, &settings.repo);

    reconciler
        .reconcile(release.id, &files, settings.conflict_policy()?)
        .await
        .context("failed to upload the files")?;

    Ok(())
}
