use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Number of slots in a profile vector: one per achievement type, then
/// position quality, then volume.
pub const VECTOR_LEN: usize = AchievementType::ALL.len() + 2;

pub type ProfileVector = [f64; VECTOR_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AchievementType {
    Hackathon,
    Coding,
    Paper,
    Project,
    Symposium,
    Internship,
    Other,
}

impl AchievementType {
    /// Declaration order; profile vectors lay their type slots out in this order.
    pub const ALL: [AchievementType; 7] = [
        AchievementType::Hackathon,
        AchievementType::Coding,
        AchievementType::Paper,
        AchievementType::Project,
        AchievementType::Symposium,
        AchievementType::Internship,
        AchievementType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AchievementType::Hackathon => "Hackathon",
            AchievementType::Coding => "Coding",
            AchievementType::Paper => "Paper",
            AchievementType::Project => "Project",
            AchievementType::Symposium => "Symposium",
            AchievementType::Internship => "Internship",
            AchievementType::Other => "Other",
        }
    }
}

impl fmt::Display for AchievementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// One logged achievement as the record provider hands it over. Every field
/// is optional; the analyzer substitutes defaults for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AchievementRecord {
    pub achievement_type: Option<String>,
    pub event_name: Option<String>,
    pub position: Option<String>,
    pub programming_language: Option<String>,
    pub coding_platform: Option<String>,
    pub database_type: Option<String>,
    pub achievement_description: Option<String>,
    pub achievement_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentInfo {
    pub student_id: String,
    pub name: String,
    pub department: String,
}

/// A resolved student: identity plus achievements, most recent first.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub info: StudentInfo,
    pub achievements: Vec<AchievementRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictedCareerPath {
    pub career_path: String,
    pub confidence: f64,
    pub matching_alumni: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub name: String,
    pub department: String,
    pub total_achievements: usize,
    pub achievement_types: BTreeMap<AchievementType, usize>,
    pub skills: BTreeSet<String>,
    pub positions: BTreeMap<String, usize>,
    pub recent_activity: Vec<AchievementRecord>,
    #[serde(skip_serializing)]
    pub profile_vector: ProfileVector,
    pub predicted_career_paths: Vec<PredictedCareerPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    pub suggestion: String,
    pub reason: String,
    pub priority: Priority,
    pub skill_gap: Vec<String>,
    pub statistical_insight: Option<String>,
    #[serde(rename = "similar_alumni")]
    pub similar_alumni_mention: Option<String>,
    #[serde(rename = "your_current_count")]
    pub existing_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Tip,
    Match,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlumniSummary {
    pub name: String,
    pub role: String,
    pub similarity: f64,
    pub tips: String,
    pub placement_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub student_id: String,
    pub student_name: String,
    pub department: String,
    pub total_achievements: usize,
    pub achievement_breakdown: BTreeMap<AchievementType, usize>,
    pub skills: BTreeSet<String>,
    pub predicted_career_paths: Vec<PredictedCareerPath>,
    pub career_goal: String,
    pub recommendations: Vec<Recommendation>,
    pub similar_alumni: Vec<AlumniSummary>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarAlumnus {
    pub name: String,
    pub role: String,
    pub career_path: String,
    pub similarity: f64,
    pub department: String,
    pub graduation_year: u16,
    pub tips: String,
    pub placement_package_lpa: u32,
    pub time_to_placement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarAlumniResult {
    pub student_id: String,
    pub similar_alumni: Vec<SimilarAlumnus>,
}

/// Round to one decimal place, the precision used for every percentage.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_has_slot_per_type_plus_two() {
        assert_eq!(VECTOR_LEN, 9);
    }

    #[test]
    fn histogram_serializes_with_type_names() {
        let mut counts = BTreeMap::new();
        counts.insert(AchievementType::Hackathon, 2);
        counts.insert(AchievementType::Coding, 1);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"Hackathon":2,"Coding":1}"#);
    }

    #[test]
    fn priorities_order_high_first() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), r#""medium""#);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_tenth(16.483), 16.5);
        assert_eq!(round_tenth(0.0), 0.0);
        assert_eq!(round_tenth(99.94), 99.9);
    }
}
