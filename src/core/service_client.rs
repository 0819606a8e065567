// src/core/service_client.rs
//! Candidate service client - CV upload and candidate submission

use serde::Serialize;
use tracing::info;

use super::config_manager::ClientConfig;
use super::transport::{HttpTransport, MultipartUpload, ReqwestTransport};
use crate::errors::{CandidateServiceError, TransportError};
use crate::types::{CandidatePayload, CvDescriptor, CvFile, StoredCandidate};

const UPLOAD_ENDPOINT: &str = "/upload";
const CANDIDATES_ENDPOINT: &str = "/candidates";

/// Multipart field the backend reads the CV from
pub const CV_FIELD_NAME: &str = "file";

pub struct CandidateService<T = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
}

impl CandidateService<ReqwestTransport> {
    /// Create a service backed by a reqwest client honouring the configured timeout
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self { transport, config })
    }
}

impl<T: HttpTransport> CandidateService<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Upload a CV file and return where the backend stored it.
    ///
    /// The file buffer is moved into the request, never copied.
    pub async fn upload_cv(&self, file: CvFile) -> Result<CvDescriptor, CandidateServiceError> {
        let url = self.config.endpoint(UPLOAD_ENDPOINT);
        info!(
            "Uploading CV {} ({} bytes, {}) to {}",
            file.file_name,
            file.len(),
            file.content_type,
            url
        );

        let upload = MultipartUpload {
            field_name: CV_FIELD_NAME.to_string(),
            file,
        };

        let body = self
            .transport
            .post_multipart(url, upload)
            .await
            .map_err(CandidateServiceError::Upload)?;

        let descriptor: CvDescriptor = serde_json::from_value(body)
            .map_err(|e| CandidateServiceError::Upload(TransportError::from(e)))?;

        info!("CV stored at {}", descriptor.file_path);
        Ok(descriptor)
    }

    /// Submit candidate data, purging any field outside the candidate schema
    pub async fn send_candidate_data<C>(
        &self,
        candidate: &C,
    ) -> Result<StoredCandidate, CandidateServiceError>
    where
        C: Serialize + ?Sized,
    {
        let payload = CandidatePayload::from_serializable(candidate)
            .map_err(|e| CandidateServiceError::Submission(TransportError::from(e)))?;

        let url = self.config.endpoint(CANDIDATES_ENDPOINT);
        info!(
            "Submitting candidate data ({} fields) to {}",
            payload.len(),
            url
        );

        let body = self
            .transport
            .post_json(url, payload.into_value())
            .await
            .map_err(CandidateServiceError::Submission)?;

        let stored = StoredCandidate::new(body);
        info!("Candidate stored with id {:?}", stored.id());
        Ok(stored)
    }
}
