use std::time::Duration;

use console_logging::{console_debug, console_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::contracts::{
    CrawlRequest, CrawlResponse, HealthResponse, SearchRequest, SearchResponse,
};
use crate::{ApiError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://localhost:7250";

const SEARCH_PATH: &str = "api/search";
const CRAWL_PATH: &str = "api/crawl";
const RESET_PATH: &str = "api/reset";
const HEALTH_PATH: &str = "api/health";

const JSON: &str = "application/json";
const TEXT: &str = "text/plain";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Overall deadline per request. `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The index service as seen by the console.
#[async_trait::async_trait]
pub trait IndexApi: Send + Sync {
    async fn search(&self, term: &str) -> Result<SearchResponse, ApiError>;

    async fn crawl(&self, url: &str) -> Result<CrawlResponse, ApiError>;

    /// Drops everything the service has indexed. The response body is ignored.
    async fn reset(&self) -> Result<(), ApiError>;

    async fn health(&self) -> Result<HealthResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestIndexApi {
    client: reqwest::Client,
    base: Url,
}

impl ReqwestIndexApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base = parse_base_url(&settings.base_url)?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.endpoint(path)?;
        let payload = serde_json::to_vec(body)
            .map_err(|err| ApiError::new(FailureKind::Encode, err.to_string()))?;
        console_debug!("POST {} ({} bytes)", url, payload.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_json(&bytes)
    }
}

#[async_trait::async_trait]
impl IndexApi for ReqwestIndexApi {
    async fn search(&self, term: &str) -> Result<SearchResponse, ApiError> {
        let request = SearchRequest {
            term: term.to_string(),
        };
        self.post_json(SEARCH_PATH, &request).await
    }

    async fn crawl(&self, url: &str) -> Result<CrawlResponse, ApiError> {
        let request = CrawlRequest {
            url_string: url.to_string(),
        };
        self.post_json(CRAWL_PATH, &request).await
    }

    async fn reset(&self) -> Result<(), ApiError> {
        let url = self.endpoint(RESET_PATH)?;
        console_debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, TEXT)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        // Opaque body; reading it only confirms the exchange completed.
        response.text().await.map_err(map_reqwest_error)?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_json(&bytes)
    }
}

/// Parses the configured base address so that endpoint paths resolve below
/// it, including any path prefix (`http://host/prefix` -> `http://host/prefix/api/...`).
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut base = Url::parse(raw.trim())
        .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(ApiError::new(
            FailureKind::InvalidBaseUrl,
            format!("{raw} is not an http(s) address"),
        ));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        console_warn!("{} answered {}", response.url(), status);
        Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}

fn decode_json<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, ApiError> {
    serde_json::from_slice(bytes).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
