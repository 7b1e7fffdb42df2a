//! In-memory recording fake for the release API
//!
//! Stands in for the Gitea backend in resolver and reconciler tests, so the
//! engine's call kinds, order and counts can be asserted without a network
//! fixture.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use gitea_release_client::{Attachment, CreateReleaseOptions, Error, Release, ReleaseApi, Result};

/// One recorded call against the fake API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListReleases,
    CreateRelease { tag: String },
    ListAttachments { release_id: i64 },
    CreateAttachment { release_id: i64, filename: String },
    DeleteAttachment { release_id: i64, attachment_id: i64 },
}

/// Recording in-memory implementation of [`ReleaseApi`]
#[derive(Default)]
pub struct RecordingApi {
    pub releases: Mutex<Vec<Release>>,
    pub attachments: Mutex<Vec<Attachment>>,
    pub calls: Mutex<Vec<ApiCall>>,

    /// Simulate a transport failure on list calls
    pub fail_listing: bool,

    /// Simulate a transport failure on delete calls
    pub fail_delete: bool,

    /// Simulate a transport failure on upload calls
    pub fail_upload: bool,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing release
    pub fn with_release(self, release: Release) -> Self {
        self.releases.lock().unwrap().push(release);
        self
    }

    /// Seed an existing attachment
    pub fn with_attachment(self, attachment: Attachment) -> Self {
        self.attachments.lock().unwrap().push(attachment);
        self
    }

    /// Make list calls fail with a transport error
    pub fn with_failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Make delete calls fail with a transport error
    pub fn with_failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Make upload calls fail with a transport error
    pub fn with_failing_upload(mut self) -> Self {
        self.fail_upload = true;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::CreateRelease { .. }))
            .count()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ReleaseApi for RecordingApi {
    async fn list_releases(&self, _owner: &str, _repo: &str) -> Result<Vec<Release>> {
        self.record(ApiCall::ListReleases);

        if self.fail_listing {
            return Err(Error::api("list releases", 500, "connection reset"));
        }

        Ok(self.releases.lock().unwrap().clone())
    }

    async fn create_release(
        &self,
        _owner: &str,
        _repo: &str,
        opts: CreateReleaseOptions,
    ) -> Result<Release> {
        self.record(ApiCall::CreateRelease {
            tag: opts.tag_name.clone(),
        });

        let mut releases = self.releases.lock().unwrap();
        let release = Release {
            id: releases.len() as i64 + 1,
            tag_name: opts.tag_name,
            name: opts.name,
            body: opts.body,
            draft: opts.draft,
            prerelease: opts.prerelease,
        };
        releases.push(release.clone());

        Ok(release)
    }

    async fn list_attachments(
        &self,
        _owner: &str,
        _repo: &str,
        release_id: i64,
    ) -> Result<Vec<Attachment>> {
        self.record(ApiCall::ListAttachments { release_id });

        if self.fail_listing {
            return Err(Error::api("list attachments", 500, "connection reset"));
        }

        Ok(self.attachments.lock().unwrap().clone())
    }

    async fn create_attachment(
        &self,
        _owner: &str,
        _repo: &str,
        release_id: i64,
        data: Vec<u8>,
        filename: &str,
    ) -> Result<Attachment> {
        self.record(ApiCall::CreateAttachment {
            release_id,
            filename: filename.to_string(),
        });

        if self.fail_upload {
            return Err(Error::api("create attachment", 500, "connection reset"));
        }

        let mut attachments = self.attachments.lock().unwrap();
        let attachment = Attachment {
            id: attachments.len() as i64 + 100,
            name: filename.to_string(),
            size: data.len() as u64,
        };
        attachments.push(attachment.clone());

        Ok(attachment)
    }

    async fn delete_attachment(
        &self,
        _owner: &str,
        _repo: &str,
        release_id: i64,
        attachment_id: i64,
    ) -> Result<()> {
        self.record(ApiCall::DeleteAttachment {
            release_id,
            attachment_id,
        });

        if self.fail_delete {
            return Err(Error::api("delete attachment", 500, "connection reset"));
        }

        self.attachments
            .lock()
            .unwrap()
            .retain(|attachment| attachment.id != attachment_id);

        Ok(())
    }
}

/// A release as the backend would return it
pub fn existing_release(id: i64, tag: &str) -> Release {
    Release {
        id,
        tag_name: tag.to_string(),
        name: format!("Release {tag}"),
        body: format!("This is the release notes for {tag}"),
        draft: false,
        prerelease: false,
    }
}

/// An attachment as the backend would return it
pub fn existing_attachment(id: i64, name: &str) -> Attachment {
    Attachment {
        id,
        name: name.to_string(),
        size: 1024,
    }
}
