//! HTTP client for the dashboard REST API.
//!
//! Reads are GET, mutations are POST or DELETE, and every path hangs off
//! `{origin}/api/`. Non-2xx responses carry a JSON `detail` field that gets
//! surfaced verbatim to the operator.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::types::{
    Container, FileContent, FileEntry, ImagesResponse, ImageInfo, ProcessEntry, ServicesResponse,
    ServiceUnit, StatsSummary, SystemIdentity,
};

pub const DEFAULT_PROCESS_LIMIT: usize = 30;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{detail}")]
    Status { status: StatusCode, detail: String },
}

/// Extract the operator-facing message from a failed response body.
pub fn error_detail(status: StatusCode, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }
    match serde_json::from_str::<Detail>(body) {
        Ok(d) if !d.detail.is_empty() => d.detail,
        _ => format!("server returned {status}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerAction {
    Start,
    Stop,
    Restart,
}

impl ContainerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerAction::Start => "start",
            ContainerAction::Stop => "stop",
            ContainerAction::Restart => "restart",
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// `base` is the server origin, e.g. `http://pi:8000`. Any path or query
    /// on it is discarded.
    pub fn new(mut base: Url) -> Self {
        base.set_path("/");
        base.set_query(None);
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { http, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build `{origin}/api/{path}`. `path` must not start with a slash.
    pub fn endpoint(&self, path: &str) -> Url {
        // base always carries the "/" path after new()
        Url::parse(&format!("{}api/{}", self.base, path)).expect("endpoint url")
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            detail: error_detail(status, &body),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let resp = self.http.get(url).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn post_empty(&self, url: Url) -> Result<(), ApiError> {
        let resp = self.http.post(url).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn delete(&self, url: Url) -> Result<(), ApiError> {
        let resp = self.http.delete(url).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    // --- identity & stats ---

    pub async fn identity(&self) -> Result<SystemIdentity, ApiError> {
        self.get_json(self.endpoint("system/hostname")).await
    }

    pub async fn stats(&self, hours: u32) -> Result<StatsSummary, ApiError> {
        let mut url = self.endpoint("metrics/stats");
        url.query_pairs_mut().append_pair("hours", &hours.to_string());
        self.get_json(url).await
    }

    // --- processes ---

    pub async fn processes(&self, limit: usize) -> Result<Vec<ProcessEntry>, ApiError> {
        let mut url = self.endpoint("processes/list");
        url.query_pairs_mut()
            .append_pair("sort_by", "cpu")
            .append_pair("limit", &limit.to_string());
        self.get_json(url).await
    }

    pub async fn kill_process(&self, pid: u32) -> Result<(), ApiError> {
        self.post_empty(self.endpoint(&format!("processes/kill/{pid}")))
            .await
    }

    // --- containers & images ---

    pub async fn containers(&self) -> Result<Vec<Container>, ApiError> {
        self.get_json(self.endpoint("docker/containers")).await
    }

    pub async fn images(&self) -> Result<Vec<ImageInfo>, ApiError> {
        let resp: ImagesResponse = self.get_json(self.endpoint("docker/images")).await?;
        Ok(resp.images)
    }

    pub async fn container_action(
        &self,
        id: &str,
        action: ContainerAction,
    ) -> Result<(), ApiError> {
        self.post_empty(self.endpoint(&format!("docker/container/{id}/{}", action.as_str())))
            .await
    }

    /// DELETE target for a container. Removing a running container requires
    /// `force`; exited ones must not send it.
    pub fn container_delete_url(&self, id: &str, force: bool) -> Url {
        let mut url = self.endpoint(&format!("docker/container/{id}"));
        if force {
            url.query_pairs_mut().append_pair("force", "true");
        }
        url
    }

    pub async fn remove_container(&self, id: &str, force: bool) -> Result<(), ApiError> {
        self.delete(self.container_delete_url(id, force)).await
    }

    pub async fn remove_image(&self, id: &str) -> Result<(), ApiError> {
        self.delete(self.endpoint(&format!("docker/image/{id}"))).await
    }

    // --- files ---

    pub async fn list_dir(&self, path: &str) -> Result<Vec<FileEntry>, ApiError> {
        let mut url = self.endpoint("files/list");
        url.query_pairs_mut().append_pair("path", path);
        self.get_json(url).await
    }

    pub async fn read_file(&self, path: &str) -> Result<FileContent, ApiError> {
        let mut url = self.endpoint("files/read");
        url.query_pairs_mut().append_pair("path", path);
        self.get_json(url).await
    }

    pub async fn write_file(&self, path: &str, content: &str) -> Result<(), ApiError> {
        let mut url = self.endpoint("files/write");
        url.query_pairs_mut().append_pair("path", path);
        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    // --- host system ---

    pub async fn services(&self) -> Result<Vec<ServiceUnit>, ApiError> {
        let resp: ServicesResponse = self.get_json(self.endpoint("system/services")).await?;
        Ok(resp.services)
    }

    pub async fn reboot(&self) -> Result<(), ApiError> {
        self.post_empty(self.endpoint("system/reboot")).await
    }

    pub async fn shutdown(&self) -> Result<(), ApiError> {
        self.post_empty(self.endpoint("system/shutdown")).await
    }
}
