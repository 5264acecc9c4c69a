use std::collections::BTreeMap;

use tracing::debug;

use crate::alumni::{AlumniRecord, ALUMNI};
use crate::models::{
    round_tenth, ProfileVector, SimilarAlumniResult, SimilarAlumnus, StudentProfile,
};
use crate::profile::{build_vector, position_weight};

pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct AlumniMatch<'a> {
    pub alumnus: &'a AlumniRecord,
    /// Cosine similarity as a percentage, rounded to one decimal.
    pub similarity: f64,
}

/// The alumnus's own achievement list laid out like a student profile vector.
pub fn alumnus_vector(alumnus: &AlumniRecord) -> ProfileVector {
    let mut type_counts = BTreeMap::new();
    for achievement in alumnus.achievements {
        *type_counts.entry(achievement.achievement_type).or_insert(0) += 1;
    }
    let weighted_positions: f64 = alumnus
        .achievements
        .iter()
        .map(|achievement| position_weight(achievement.position))
        .sum();

    build_vector(&type_counts, weighted_positions, alumnus.achievements.len())
}

/// Cosine of the angle between `a` and `b`; 0.0 when either has zero length.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot / (magnitude_a * magnitude_b)
}

/// Rank `corpus` by similarity to the profile, best first, and keep `top_k`.
/// Equal scores keep corpus order.
pub fn rank_alumni<'a>(
    corpus: &'a [AlumniRecord],
    profile: &StudentProfile,
    top_k: usize,
) -> Vec<AlumniMatch<'a>> {
    let mut matches: Vec<AlumniMatch<'a>> = corpus
        .iter()
        .map(|alumnus| AlumniMatch {
            alumnus,
            similarity: round_tenth(
                cosine_similarity(&profile.profile_vector, &alumnus_vector(alumnus)) * 100.0,
            ),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(top_k);

    debug!(
        student_id = %profile.student_id,
        top_k,
        best = matches.first().map(|m| m.alumnus.name).unwrap_or("none"),
        "ranked alumni"
    );

    matches
}

pub fn find_similar_alumni(profile: &StudentProfile, top_k: usize) -> Vec<AlumniMatch<'static>> {
    rank_alumni(ALUMNI, profile, top_k)
}

pub fn placement_time(alumnus: &AlumniRecord) -> String {
    format!("{} months", alumnus.time_to_placement_months)
}

/// Standalone similar-alumni query result.
pub fn similar_alumni_result(profile: &StudentProfile, top_k: usize) -> SimilarAlumniResult {
    let similar_alumni = find_similar_alumni(profile, top_k)
        .into_iter()
        .map(|found| SimilarAlumnus {
            name: found.alumnus.name.to_string(),
            role: found.alumnus.current_role.to_string(),
            career_path: found.alumnus.career_path.to_string(),
            similarity: found.similarity,
            department: found.alumnus.department.to_string(),
            graduation_year: found.alumnus.graduation_year,
            tips: found.alumnus.tips.to_string(),
            placement_package_lpa: found.alumnus.placement_package_lpa,
            time_to_placement: placement_time(found.alumnus),
        })
        .collect();

    SimilarAlumniResult {
        student_id: profile.student_id.clone(),
        similar_alumni,
    }
}
