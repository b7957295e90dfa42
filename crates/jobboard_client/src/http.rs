use std::time::Duration;

use futures_util::StreamExt;
use jobboard_logging::board_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;

use crate::{ApiReply, FailureKind, HttpMethod, RequestError, RequestSpec};

pub const DEFAULT_BASE_URL: &str = "https://teaching.cmkl.ai/api";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, spec: &RequestSpec) -> Result<ApiReply, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: ClientSettings) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, spec: &RequestSpec) -> Result<Url, RequestError> {
        let joined = format!("{}{}", self.settings.base_url.trim_end_matches('/'), spec.path);
        let mut url = Url::parse(&joined)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.set_query(spec.query.as_deref().filter(|query| !query.is_empty()));
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, spec: &RequestSpec) -> Result<ApiReply, RequestError> {
        let url = self.endpoint(spec)?;
        board_debug!("{:?} {}", spec.method, url.path());

        let mut request = match spec.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        }
        .header(ACCEPT, "application/json");
        if let Some(body) = &spec.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|err| RequestError::new(FailureKind::Decode, err.to_string()))?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(RequestError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
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
            if next_len > self.settings.max_bytes {
                return Err(RequestError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let body = serde_json::from_slice(&bytes)
            .map_err(|err| RequestError::new(FailureKind::Decode, err.to_string()))?;
        Ok(ApiReply { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
