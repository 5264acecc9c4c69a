use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::alumni::{alumni_by_career_path, CAREER_PATH_WEIGHTS};
use crate::models::{
    round_tenth, AchievementRecord, AchievementType, PredictedCareerPath, ProfileVector,
    StudentProfile, StudentRecord, VECTOR_LEN,
};

const DEFAULT_TYPE: &str = "Other";
const DEFAULT_POSITION: &str = "Participant";
const RECENT_ACTIVITY_LIMIT: usize = 5;
const VOLUME_CAP: f64 = 20.0;
const PREDICTION_LIMIT: usize = 3;

/// Keywords scanned for in free-text descriptions, with the label recorded
/// on a match. Matches are independent; one description can yield several.
const SKILL_KEYWORDS: &[(&str, &str)] = &[
    ("python", "Python"),
    ("java", "Java"),
    ("javascript", "Javascript"),
    ("react", "React"),
    ("node", "Node"),
    ("sql", "Sql"),
    ("machine learning", "Machine Learning"),
    ("ml", "Ml"),
    ("ai", "Ai"),
    ("deep learning", "Deep Learning"),
    ("aws", "Aws"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("flutter", "Flutter"),
    ("android", "Android"),
    ("ios", "Ios"),
];

/// Build the profile for one student. Pure: the same record always yields the
/// same profile.
pub fn analyze(student: &StudentRecord) -> StudentProfile {
    let achievements = &student.achievements;
    let total = achievements.len();

    let achievement_types = tally_types(achievements);
    let positions = tally_positions(achievements);
    let skills = extract_skills(achievements);
    let weighted_positions: f64 = positions
        .iter()
        .map(|(position, count)| position_weight(position) * *count as f64)
        .sum();
    let profile_vector = build_vector(&achievement_types, weighted_positions, total);
    let predicted_career_paths = predict_career_paths(&achievement_types);

    debug!(
        student_id = %student.info.student_id,
        total,
        types = achievement_types.len(),
        skills = skills.len(),
        "analyzed student profile"
    );

    StudentProfile {
        student_id: student.info.student_id.clone(),
        name: student.info.name.clone(),
        department: student.info.department.clone(),
        total_achievements: total,
        achievement_types,
        skills,
        positions,
        recent_activity: achievements.iter().take(RECENT_ACTIVITY_LIMIT).cloned().collect(),
        profile_vector,
        predicted_career_paths,
    }
}

/// Map a free-text type onto a known category. Checks run in a fixed order
/// and the first hit wins, so "hackathon project" is a Hackathon.
pub fn normalize_achievement_type(raw: &str) -> AchievementType {
    let lower = raw.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if has(&["hack"]) {
        AchievementType::Hackathon
    } else if has(&["code", "coding", "program"]) {
        AchievementType::Coding
    } else if has(&["paper", "journal", "research"]) {
        AchievementType::Paper
    } else if has(&["project"]) {
        AchievementType::Project
    } else if has(&["symposium", "conference"]) {
        AchievementType::Symposium
    } else if has(&["intern"]) {
        AchievementType::Internship
    } else {
        AchievementType::Other
    }
}

/// Quality weight of a placement. Unknown positions weigh 0.1.
pub fn position_weight(position: &str) -> f64 {
    match position.trim().to_lowercase().as_str() {
        "1st" | "first" | "winner" => 1.0,
        "2nd" | "second" | "runner-up" => 0.8,
        "3rd" | "third" => 0.6,
        "finalist" | "top 10" | "top10" => 0.5,
        "published" => 0.9,
        "accepted" => 0.8,
        "completed" => 0.3,
        "participant" => 0.2,
        _ => 0.1,
    }
}

pub fn tally_types(achievements: &[AchievementRecord]) -> BTreeMap<AchievementType, usize> {
    let mut counts = BTreeMap::new();
    for achievement in achievements {
        let raw = achievement.achievement_type.as_deref().unwrap_or(DEFAULT_TYPE);
        *counts.entry(normalize_achievement_type(raw)).or_insert(0) += 1;
    }
    counts
}

pub fn tally_positions(achievements: &[AchievementRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for achievement in achievements {
        let position = achievement.position.as_deref().unwrap_or(DEFAULT_POSITION);
        *counts.entry(position.to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn extract_skills(achievements: &[AchievementRecord]) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();

    for achievement in achievements {
        let fields = [
            &achievement.programming_language,
            &achievement.coding_platform,
            &achievement.database_type,
        ];
        for value in fields.into_iter().flatten() {
            if !value.trim().is_empty() {
                skills.insert(value.clone());
            }
        }

        let description = achievement
            .achievement_description
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        for (keyword, label) in SKILL_KEYWORDS {
            if description.contains(keyword) {
                skills.insert((*label).to_string());
            }
        }
    }

    skills
}

/// Lay out a profile vector: type shares in [`AchievementType::ALL`] order,
/// then mean position weight, then volume saturating at 20 achievements.
///
/// `weighted_positions` is the sum of position weights over all achievements.
/// A zero total yields the zero vector.
pub fn build_vector(
    type_counts: &BTreeMap<AchievementType, usize>,
    weighted_positions: f64,
    total: usize,
) -> ProfileVector {
    let denominator = total.max(1) as f64;
    let mut vector = [0.0; VECTOR_LEN];

    for (slot, achievement_type) in AchievementType::ALL.iter().enumerate() {
        let count = type_counts.get(achievement_type).copied().unwrap_or(0);
        vector[slot] = count as f64 / denominator;
    }
    vector[VECTOR_LEN - 2] = weighted_positions / denominator;
    vector[VECTOR_LEN - 1] = (total as f64 / VOLUME_CAP).min(1.0);

    vector
}

/// Score every weighted career path against the type histogram and keep the
/// best three. Ties keep table order.
pub fn predict_career_paths(
    type_counts: &BTreeMap<AchievementType, usize>,
) -> Vec<PredictedCareerPath> {
    let mut scores: Vec<(&'static str, f64)> = CAREER_PATH_WEIGHTS
        .iter()
        .map(|entry| {
            let score: f64 = entry
                .weights
                .iter()
                .map(|(achievement_type, weight)| {
                    weight * type_counts.get(achievement_type).copied().unwrap_or(0) as f64
                })
                .sum();
            (entry.career_path, score)
        })
        .collect();

    let total: f64 = scores.iter().map(|(_, score)| score).sum();
    let total = if total == 0.0 { 1.0 } else { total };

    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scores
        .into_iter()
        .take(PREDICTION_LIMIT)
        .map(|(career_path, score)| PredictedCareerPath {
            career_path: career_path.to_string(),
            confidence: round_tenth((score / total * 100.0).min(100.0)),
            matching_alumni: alumni_by_career_path(career_path).len(),
        })
        .collect()
}
