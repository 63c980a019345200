// Video API client
//
// Thin wrappers over the backend's two JSON endpoints:
// - GET {base}/api/video/{id}          -> Video (with its formats array)
// - GET {base}/api/video/search/?q=... -> SearchResult
//
// The client does no retrying or caching; callers get the response shape
// or an ApiError.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

use super::errors::ApiError;
use crate::models::{SearchResult, Video};

lazy_static! {
    // Opaque catalog ids: url-safe, bounded length
    static ref VIDEO_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap();
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, no trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 30,
            proxy: None,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }
}

/// Trait for video metadata sources
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Name of the source (for logging)
    fn name(&self) -> &'static str;

    /// Fetch one video with its format list
    async fn get_video(&self, id: &str) -> Result<Video, ApiError>;

    /// Search videos by free-text query
    async fn search(&self, query: &str) -> Result<SearchResult, ApiError>;
}

/// HTTP implementation of [`VideoApi`]
pub struct HttpVideoApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpVideoApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));

        if let Some(proxy_url) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| ApiError::Network(format!("Invalid proxy {}: {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl VideoApi for HttpVideoApi {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_video(&self, id: &str) -> Result<Video, ApiError> {
        if !VIDEO_ID_RE.is_match(id) {
            return Err(ApiError::InvalidVideoId(id.to_string()));
        }

        let url = format!("{}/api/video/{}", self.config.base_url, id);
        let res = self.client.get(&url).send().await?;

        if !res.status().is_success() {
            return Err(ApiError::Http {
                status: res.status().as_u16(),
                url,
            });
        }

        Ok(res.json::<Video>().await?)
    }

    async fn search(&self, query: &str) -> Result<SearchResult, ApiError> {
        let url = format!("{}/api/video/search/", self.config.base_url);
        let res = self.client.get(&url).query(&[("q", query)]).send().await?;

        if !res.status().is_success() {
            return Err(ApiError::Http {
                status: res.status().as_u16(),
                url,
            });
        }

        Ok(res.json::<SearchResult>().await?)
    }
}
