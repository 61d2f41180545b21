use std::time::Duration;

use engine_logging::engine_debug;
use futures_util::StreamExt;
use url::Url;

use crate::wire::{decode_page, error_code};
use crate::{FailureKind, FetchError, HeadlinesPage, HeadlinesQuery};

const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org".to_string(),
            api_key: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// One remote call per invocation: no retries, no caching, safe to call concurrently.
#[async_trait::async_trait]
pub trait HeadlinesFetcher: Send + Sync {
    async fn fetch(&self, query: &HeadlinesQuery) -> Result<HeadlinesPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `{base_url}/v2/top-headlines?country=..&page=..&pageSize=..`
    pub fn request_url(&self, query: &HeadlinesQuery) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot take a path"))?
            .pop_if_empty()
            .extend(["v2", "top-headlines"]);
        url.query_pairs_mut()
            .append_pair("country", &query.country)
            .append_pair("page", &query.page.to_string())
            .append_pair("pageSize", &query.page_size.to_string());
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl HeadlinesFetcher for ReqwestFetcher {
    async fn fetch(&self, query: &HeadlinesQuery) -> Result<HeadlinesPage, FetchError> {
        let url = self.request_url(query)?;
        engine_debug!(
            "GET top-headlines country={} page={} page_size={}",
            query.country,
            query.page,
            query.page_size
        );

        let mut request = self.client.get(url);
        if let Some(key) = self.settings.api_key.as_deref() {
            request = request.header(API_KEY_HEADER, key);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The service explains most rejections in a JSON body; keep its code when present.
            let code = self
                .read_body(response)
                .await
                .ok()
                .and_then(|body| error_code(&body));
            let message = match code {
                Some(code) => format!("{status} ({code})"),
                None => status.to_string(),
            };
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let body = self.read_body(response).await?;
        let page = decode_page(&body)?;
        engine_debug!(
            "page {} decoded: {} articles, total {}",
            query.page,
            page.articles.len(),
            page.total_results
        );
        Ok(page)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
