//! Client-side service layer for submitting job candidates to the recruitment backend.
//!
//! Two operations make up the pipeline: [`CandidateService::upload_cv`] sends the
//! CV file and returns where it was stored, [`CandidateService::send_candidate_data`]
//! purges unknown fields and submits the candidate record.

pub mod core;
pub mod errors;
pub mod logging;
pub mod types;

pub use crate::core::{CandidateService, ClientConfig, HttpTransport, ReqwestTransport};
pub use errors::{CandidateServiceError, TransportError};
pub use types::{
    CandidatePayload, CandidateRecord, CvDescriptor, CvFile, EducationEntry, StoredCandidate,
    WorkExperienceEntry,
};
