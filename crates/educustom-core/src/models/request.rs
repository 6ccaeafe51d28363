use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// The structured form a teacher submits to request a lesson plan.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanRequest {
    pub curriculum_topic: String,
    pub target_grade: String,
    pub student_interests: Vec<String>,
    pub institution: Institution,
}

impl PlanRequest {
    /// Checks that must pass before a generation request is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.curriculum_topic.trim().is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        if self.student_interests.is_empty() {
            return Err(ValidationError::NoInterests);
        }
        Ok(())
    }
}

/// Institution kind. Drives the prompt variant, the document subtitle,
/// and the export filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Institution {
    Sekolah,
    Madrasah,
}

impl Institution {
    pub fn label(self) -> &'static str {
        match self {
            Institution::Sekolah => "Sekolah",
            Institution::Madrasah => "Madrasah",
        }
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
