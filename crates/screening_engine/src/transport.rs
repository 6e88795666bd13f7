use std::time::Duration;

use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use screening_core::{RankedResult, SubmissionRequest, PDF_MIME_TYPE};
use screening_logging::{screening_debug, screening_info};

use crate::wire::decode_ranked_resumes;
use crate::{FailureKind, TransportError};

/// Path of the scoring route, relative to the configured endpoint.
pub const MATCH_PATH: &str = "match_resumes";

#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Base URL of the scoring service.
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Whole-request deadline, upload included.
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<Vec<RankedResult>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Self {
        Self { settings }
    }

    /// `<endpoint>/match_resumes`, tolerating a trailing slash on the endpoint.
    pub fn match_url(&self) -> Result<Url, TransportError> {
        let mut base = Url::parse(&self.settings.endpoint)
            .map_err(|err| TransportError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(TransportError::new(
                FailureKind::InvalidEndpoint,
                format!("{} cannot be a base url", self.settings.endpoint),
            ));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(MATCH_PATH)
            .map_err(|err| TransportError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, TransportError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(TransportError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(TransportError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

/// One text part plus one `resumes` part per candidate, in selection order.
fn build_form(request: &SubmissionRequest) -> Result<Form, TransportError> {
    let mut form = Form::new().text("job_description", request.job_description.clone());
    for candidate in &request.candidates {
        let part = Part::bytes(candidate.content.to_vec())
            .file_name(candidate.name.clone())
            .mime_str(PDF_MIME_TYPE)
            .map_err(|err| TransportError::new(FailureKind::InvalidRequest, err.to_string()))?;
        form = form.part("resumes", part);
    }
    Ok(form)
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<Vec<RankedResult>, TransportError> {
        let url = self.match_url()?;
        let client = self.build_client()?;
        let form = build_form(request)?;

        screening_info!(
            "POST {} resumes={} description_len={}",
            url,
            request.candidates.len(),
            request.job_description.len()
        );

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        screening_debug!("scoring service answered {}", status);
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        decode_ranked_resumes(&body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
