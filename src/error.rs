use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "error")]
pub enum EngineError {
    /// The achievement-record provider has no student with this id.
    #[error("student not found: {student_id}")]
    #[serde(rename = "Student not found")]
    StudentNotFound { student_id: String },
}

impl EngineError {
    pub fn student_id(&self) -> &str {
        match self {
            EngineError::StudentNotFound { student_id } => student_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_serializes_with_student_id() {
        let err = EngineError::StudentNotFound {
            student_id: "S404".to_string(),
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["error"], "Student not found");
        assert_eq!(value["student_id"], "S404");
        assert_eq!(err.student_id(), "S404");
    }
}
