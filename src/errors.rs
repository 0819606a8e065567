use thiserror::Error;

/// Failure at the HTTP boundary.
///
/// `Rejected` displays as the backend message alone so callers can prefix it.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

/// User-facing errors of the candidate submission pipeline.
#[derive(Debug, Error)]
pub enum CandidateServiceError {
    #[error("Error al subir el archivo: {0}")]
    Upload(#[source] TransportError),

    #[error("Error al enviar datos del candidato: {0}")]
    Submission(#[source] TransportError),
}

impl CandidateServiceError {
    /// Diagnostic text without the user-facing prefix
    pub fn backend_message(&self) -> String {
        self.transport().to_string()
    }

    pub fn status(&self) -> Option<u16> {
        self.transport().status()
    }

    pub fn transport(&self) -> &TransportError {
        match self {
            Self::Upload(e) | Self::Submission(e) => e,
        }
    }
}
