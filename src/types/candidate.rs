// src/types/candidate.rs
//! Candidate data structures shared with the recruitment backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Top-level keys accepted by `POST /candidates`. Anything else is purged.
pub const CANDIDATE_FIELDS: [&str; 8] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "address",
    "educations",
    "workExperiences",
    "cv",
];

// ===== Canonical Candidate Schema =====

/// Storage descriptor returned by the upload endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDescriptor {
    pub file_path: String,
    pub file_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceEntry {
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub educations: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperienceEntry>,
    pub cv: CvDescriptor,
}

// ===== Wire Payload =====

/// JSON object actually sent to the candidates endpoint.
///
/// Built by projecting an arbitrary input onto [`CANDIDATE_FIELDS`]. Values are
/// copied untouched and keys missing from the input stay missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CandidatePayload(Map<String, Value>);

impl CandidatePayload {
    /// Keep only the allow-listed top-level keys of `input`.
    /// Non-object inputs have nothing to keep and yield an empty payload.
    pub fn purge(input: &Value) -> Self {
        let Some(object) = input.as_object() else {
            return Self::default();
        };

        let fields = CANDIDATE_FIELDS
            .iter()
            .filter_map(|key| {
                object
                    .get(*key)
                    .map(|value| ((*key).to_string(), value.clone()))
            })
            .collect::<Map<String, Value>>();

        let dropped = object.len() - fields.len();
        if dropped > 0 {
            debug!("Purged {} unrecognized candidate field(s)", dropped);
        }

        Self(fields)
    }

    /// Serialize any candidate-shaped value and purge it
    pub fn from_serializable<T: Serialize + ?Sized>(candidate: &T) -> serde_json::Result<Self> {
        let value = serde_json::to_value(candidate)?;
        Ok(Self::purge(&value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
