// src/core/mod.rs
//! Core services - configuration, HTTP transport and the candidate client

pub mod config_manager;
pub mod service_client;
pub mod transport;

pub use config_manager::ClientConfig;
pub use service_client::CandidateService;
pub use transport::{HttpTransport, MultipartUpload, ReqwestTransport};
