//! reqwest-based implementation of the Gitea release API

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use tracing::debug;
use url::Url;

use crate::api::ReleaseApi;
use crate::error::{Error, Result};
use crate::types::{Attachment, CreateReleaseOptions, Release};

/// Page size for list calls
const PAGE_LIMIT: usize = 50;

/// Gitea API client authenticated with an API token
pub struct GiteaClient {
    /// HTTP client
    client: reqwest::Client,

    /// Base URL of the Gitea instance, with a trailing slash
    base_url: Url,

    /// Pre-formatted token authorization header value
    token: String,
}

impl GiteaClient {
    /// Create a new client for the given instance and API key
    pub fn new(base_url: Url, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gitea-release/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: format!("token {api_key}"),
        })
    }

    fn repo_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!("{}api/v1/repos/{owner}/{repo}/{path}", self.base_url)
    }

    async fn ensure_success(response: Response, operation: &'static str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();

        Err(Error::api(operation, status.as_u16(), message))
    }

    /// Fetch every page of a list endpoint until a short page signals the end
    async fn list_paged<T>(&self, url: &str, operation: &'static str) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            let response = self
                .client
                .get(url)
                .header(AUTHORIZATION, &self.token)
                .query(&[("page", page.to_string()), ("limit", PAGE_LIMIT.to_string())])
                .send()
                .await?;

            let batch: Vec<T> = Self::ensure_success(response, operation)
                .await?
                .json()
                .await?;

            let count = batch.len();
            items.extend(batch);

            if count < PAGE_LIMIT {
                break;
            }

            page += 1;
        }

        debug!("{} returned {} items over {} pages", operation, items.len(), page);

        Ok(items)
    }
}

#[async_trait]
impl ReleaseApi for GiteaClient {
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        let url = self.repo_url(owner, repo, "releases");

        self.list_paged(&url, "list releases").await
    }

    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        opts: CreateReleaseOptions,
    ) -> Result<Release> {
        let url = self.repo_url(owner, repo, "releases");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.token)
            .json(&opts)
            .send()
            .await?;

        let release = Self::ensure_success(response, "create release")
            .await?
            .json()
            .await?;

        Ok(release)
    }

    async fn list_attachments(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
    ) -> Result<Vec<Attachment>> {
        let url = self.repo_url(owner, repo, &format!("releases/{release_id}/assets"));

        self.list_paged(&url, "list attachments").await
    }

    async fn create_attachment(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
        data: Vec<u8>,
        filename: &str,
    ) -> Result<Attachment> {
        let url = self.repo_url(owner, repo, &format!("releases/{release_id}/assets"));

        let form = Form::new().part(
            "attachment",
            Part::bytes(data).file_name(filename.to_string()),
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.token)
            .query(&[("name", filename)])
            .multipart(form)
            .send()
            .await?;

        let attachment = Self::ensure_success(response, "create attachment")
            .await?
            .json()
            .await?;

        Ok(attachment)
    }

    async fn delete_attachment(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
        attachment_id: i64,
    ) -> Result<()> {
        let url = self.repo_url(
            owner,
            repo,
            &format!("releases/{release_id}/assets/{attachment_id}"),
        );

        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, &self.token)
            .send()
            .await?;

        Self::ensure_success(response, "delete attachment").await?;

        Ok(())
    }
}
