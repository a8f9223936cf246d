use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{BackendError, StartOutcome, StartRequest, StartResponse, StatusPayload};

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl BackendSettings {
    pub fn base(&self) -> Result<Url, BackendError> {
        Url::parse(&self.base_url).map_err(|err| BackendError::InvalidUrl(err.to_string()))
    }

    /// Resolves a link handed out by the backend (usually root-relative).
    pub fn resolve_link(&self, href: &str) -> Result<Url, BackendError> {
        self.base()?
            .join(href)
            .map_err(|err| BackendError::InvalidUrl(err.to_string()))
    }
}

/// The two endpoints of the job-processing service.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn start_processing(&self, device_name: &str) -> Result<StartOutcome, BackendError>;

    async fn job_status(&self, job_id: &str) -> Result<StatusPayload, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let base = settings.base()?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::Network(err.to_string()))?;
        Ok(Self { base, client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn start_processing(&self, device_name: &str) -> Result<StartOutcome, BackendError> {
        let url = self.endpoint(&["start_processing"])?;
        let response = self
            .client
            .post(url)
            .json(&StartRequest { device_name })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: StartResponse = read_json(response).await?;
        match (body.job_id, body.error) {
            (_, Some(error)) => Ok(StartOutcome::Rejected { error }),
            (Some(job_id), None) => Ok(StartOutcome::Accepted { job_id }),
            (None, None) => Err(BackendError::Decode(
                "response carries neither job_id nor error".to_string(),
            )),
        }
    }

    async fn job_status(&self, job_id: &str) -> Result<StatusPayload, BackendError> {
        let url = self.endpoint(&["status", job_id])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

/// Reads the body regardless of HTTP status: the service reports
/// validation problems as a JSON `error` with status 400.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    let text = response.text().await.map_err(map_reqwest_error)?;
    match serde_json::from_str(&text) {
        Ok(body) => Ok(body),
        Err(_) if !status.is_success() => Err(BackendError::HttpStatus(status.as_u16())),
        Err(err) => Err(BackendError::Decode(err.to_string())),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::Timeout(err.to_string());
    }
    BackendError::Network(err.to_string())
}
