pub mod candidate;
pub mod response;
pub mod upload;

pub use candidate::{
    CandidatePayload, CandidateRecord, CvDescriptor, EducationEntry, WorkExperienceEntry,
    CANDIDATE_FIELDS,
};
pub use response::StoredCandidate;
pub use upload::CvFile;
