// src/core/transport.rs
//! HTTP boundary - the only place that talks to the network

use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, trace};

use crate::errors::TransportError;
use crate::types::CvFile;

/// One file carried in a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartUpload {
    pub field_name: String,
    pub file: CvFile,
}

/// Outbound POST calls the candidate service needs.
///
/// Implementations return the decoded JSON body on a 2xx status and
/// [`TransportError::Rejected`] carrying the backend message otherwise.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a `multipart/form-data` body
    async fn post_multipart(
        &self,
        url: String,
        upload: MultipartUpload,
    ) -> Result<Value, TransportError>;

    /// POST a JSON body
    async fn post_json(&self, url: String, body: Value) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn read_body(response: Response) -> Result<Value, TransportError> {
        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            let response_text = response.text().await?;
            if response_text.trim().is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&response_text)?)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            let message = backend_message(status, &error_text);

            error!("Backend error response {}: {}", status, message);
            Err(TransportError::rejected(status.as_u16(), message))
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_multipart(
        &self,
        url: String,
        upload: MultipartUpload,
    ) -> Result<Value, TransportError> {
        let MultipartUpload { field_name, file } = upload;

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = Form::new().part(field_name, part);

        // reqwest sets `multipart/form-data` together with the boundary
        let response = self.client.post(&url).multipart(form).send().await?;

        Self::read_body(response).await
    }

    async fn post_json(&self, url: String, body: Value) -> Result<Value, TransportError> {
        let response = self.client.post(&url).json(&body).send().await?;

        Self::read_body(response).await
    }
}

/// Extract the human-readable message from an error response body.
///
/// A JSON string is unquoted, a JSON object yields its `message` or `error`
/// field, anything else is used verbatim. Empty bodies fall back to the
/// status reason phrase.
pub fn backend_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(message)) => message,
        Ok(Value::Object(object)) => ["message", "error"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| trimmed.to_string()),
        _ => trimmed.to_string(),
    }
}
