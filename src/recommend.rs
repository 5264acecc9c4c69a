use tracing::{debug, info};

use crate::alumni::{
    statistical_insight, suggestions_for_career_path, Suggestion, DEFAULT_CAREER_PATH,
};
use crate::error::EngineError;
use crate::models::{
    AchievementType, AlumniSummary, Insight, InsightKind, Priority, Recommendation,
    RecommendationResult, StudentProfile, StudentRecord,
};
use crate::profile;
use crate::similarity::{find_similar_alumni, placement_time, AlumniMatch, DEFAULT_TOP_K};

const DEFAULT_INSIGHT_LEVEL: &str = "National";
const SKILL_GAP_LIMIT: usize = 3;

/// Recommend next achievements for a student the record provider may or may
/// not have resolved. `None` is the not-found case.
pub fn recommend_for(
    student_id: &str,
    student: Option<&StudentRecord>,
    career_goal: Option<&str>,
) -> Result<RecommendationResult, EngineError> {
    let student = student.ok_or_else(|| EngineError::StudentNotFound {
        student_id: student_id.to_string(),
    })?;

    let profile = profile::analyze(student);
    Ok(generate(&profile, career_goal))
}

pub fn generate(profile: &StudentProfile, career_goal: Option<&str>) -> RecommendationResult {
    let career_goal = resolve_career_goal(profile, career_goal);
    let similar = find_similar_alumni(profile, DEFAULT_TOP_K);

    let mut recommendations: Vec<Recommendation> = suggestions_for_career_path(&career_goal)
        .iter()
        .map(|suggestion| build_recommendation(suggestion, profile, &similar))
        .collect();
    recommendations.sort_by_key(|recommendation| recommendation.priority);

    let insights = build_insights(profile, &similar);

    info!(
        student_id = %profile.student_id,
        career_goal = %career_goal,
        recommendations = recommendations.len(),
        insights = insights.len(),
        "generated recommendations"
    );

    RecommendationResult {
        student_id: profile.student_id.clone(),
        student_name: profile.name.clone(),
        department: profile.department.clone(),
        total_achievements: profile.total_achievements,
        achievement_breakdown: profile.achievement_types.clone(),
        skills: profile.skills.clone(),
        predicted_career_paths: profile.predicted_career_paths.clone(),
        career_goal,
        recommendations,
        similar_alumni: similar
            .iter()
            .map(|found| AlumniSummary {
                name: found.alumnus.name.to_string(),
                role: found.alumnus.current_role.to_string(),
                similarity: found.similarity,
                tips: found.alumnus.tips.to_string(),
                placement_time: placement_time(found.alumnus),
            })
            .collect(),
        insights,
    }
}

/// An explicit, non-blank goal wins; otherwise the top predicted path, and
/// failing that the default path.
pub fn resolve_career_goal(profile: &StudentProfile, career_goal: Option<&str>) -> String {
    career_goal
        .map(str::trim)
        .filter(|goal| !goal.is_empty())
        .or_else(|| {
            profile
                .predicted_career_paths
                .first()
                .map(|path| path.career_path.as_str())
        })
        .unwrap_or(DEFAULT_CAREER_PATH)
        .to_string()
}

/// New types are always worth pursuing; three or more of a type is enough.
pub fn adjust_priority(base: Priority, existing_count: usize) -> Priority {
    match existing_count {
        0 => Priority::High,
        1 | 2 => base,
        _ => Priority::Low,
    }
}

fn build_recommendation(
    suggestion: &Suggestion,
    profile: &StudentProfile,
    similar: &[AlumniMatch<'_>],
) -> Recommendation {
    let existing_count = profile
        .achievement_types
        .get(&suggestion.achievement_type)
        .copied()
        .unwrap_or(0);
    let insight_key = format!(
        "{}_{}",
        suggestion.achievement_type,
        suggestion.level.unwrap_or(DEFAULT_INSIGHT_LEVEL)
    );

    debug!(
        achievement_type = %suggestion.achievement_type,
        existing_count,
        "scoring suggestion"
    );

    Recommendation {
        achievement_type: suggestion.achievement_type,
        suggestion: suggestion.name.to_string(),
        reason: suggestion.reason.to_string(),
        priority: adjust_priority(suggestion.priority, existing_count),
        skill_gap: skill_gap(profile, similar),
        statistical_insight: statistical_insight(&insight_key).map(str::to_string),
        similar_alumni_mention: similar_alumni_mention(suggestion.achievement_type, similar),
        existing_count,
    }
}

/// Skills of the closest alumnus the student lacks, in the alumnus's order.
pub fn skill_gap(profile: &StudentProfile, similar: &[AlumniMatch<'_>]) -> Vec<String> {
    let Some(top) = similar.first() else {
        return Vec::new();
    };

    top.alumnus
        .skills
        .iter()
        .filter(|skill| !profile.skills.contains(**skill))
        .take(SKILL_GAP_LIMIT)
        .map(|skill| skill.to_string())
        .collect()
}

fn similar_alumni_mention(
    achievement_type: AchievementType,
    similar: &[AlumniMatch<'_>],
) -> Option<String> {
    similar
        .iter()
        .find(|found| {
            found
                .alumnus
                .achievements
                .iter()
                .any(|achievement| achievement.achievement_type == achievement_type)
        })
        .map(|found| {
            format!(
                "{} ({}) had similar achievements",
                found.alumnus.name, found.alumnus.current_role
            )
        })
}

pub fn build_insights(profile: &StudentProfile, similar: &[AlumniMatch<'_>]) -> Vec<Insight> {
    let mut insights = Vec::new();

    if profile.total_achievements == 0 {
        insights.push(Insight {
            kind: InsightKind::Warning,
            message: "Start building your achievement portfolio! Even small wins matter."
                .to_string(),
        });
    } else if profile.total_achievements < 3 {
        insights.push(Insight {
            kind: InsightKind::Tip,
            message:
                "Great start! Students with 5+ achievements have 2x higher placement rates."
                    .to_string(),
        });
    }

    if profile.achievement_types.len() < 3 {
        insights.push(Insight {
            kind: InsightKind::Tip,
            message:
                "Diversify your achievements! Students with 3+ types get 60% more opportunities."
                    .to_string(),
        });
    }

    if let Some(top) = similar.first() {
        insights.push(Insight {
            kind: InsightKind::Match,
            message: format!(
                "Your profile is {:.1}% similar to {}, who is now a {}",
                top.similarity, top.alumnus.name, top.alumnus.current_role
            ),
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AchievementRecord, StudentInfo};
    use proptest::prelude::*;

    fn record(achievements: &[(&str, &str)]) -> StudentRecord {
        StudentRecord {
            info: StudentInfo {
                student_id: "S001".to_string(),
                name: "Avery Lee".to_string(),
                department: "CSE".to_string(),
            },
            achievements: achievements
                .iter()
                .map(|(kind, position)| AchievementRecord {
                    achievement_type: Some(kind.to_string()),
                    position: Some(position.to_string()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn sample_student() -> StudentRecord {
        record(&[
            ("Hackathon", "1st"),
            ("Hackathon", "2nd"),
            ("Coding", "Participant"),
        ])
    }

    #[test]
    fn unknown_student_is_a_structured_not_found() {
        let result = recommend_for("S404", None, None);
        assert_eq!(
            result,
            Err(EngineError::StudentNotFound {
                student_id: "S404".to_string()
            })
        );
    }

    #[test]
    fn sample_student_defaults_to_top_predicted_path() {
        let student = sample_student();
        let result = recommend_for("S001", Some(&student), None).unwrap();

        assert_eq!(result.total_achievements, 3);
        assert_eq!(result.achievement_breakdown.get(&AchievementType::Hackathon), Some(&2));
        assert_eq!(result.achievement_breakdown.get(&AchievementType::Coding), Some(&1));
        assert_eq!(result.career_goal, result.predicted_career_paths[0].career_path);
        assert_eq!(result.career_goal, "Software Development");
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.similar_alumni.len(), 3);
    }

    #[test]
    fn sample_student_recommendations() {
        let student = sample_student();
        let result = recommend_for("S001", Some(&student), None).unwrap();

        // Hackathon (2) and Coding (1) keep their base "high"; Project and
        // Internship are new types and are forced to "high".
        assert!(result
            .recommendations
            .iter()
            .all(|rec| rec.priority == Priority::High));
        let types: Vec<AchievementType> = result
            .recommendations
            .iter()
            .map(|rec| rec.achievement_type)
            .collect();
        assert_eq!(
            types,
            [
                AchievementType::Hackathon,
                AchievementType::Coding,
                AchievementType::Project,
                AchievementType::Internship,
            ]
        );

        let hackathon = &result.recommendations[0];
        assert_eq!(hackathon.existing_count, 2);
        assert_eq!(
            hackathon.statistical_insight.as_deref(),
            Some("Students who won national hackathons got placed 40% faster on average")
        );
        assert!(result.recommendations[1].statistical_insight.is_none());
        assert!(hackathon.skill_gap.len() <= 3);
        assert!(hackathon.similar_alumni_mention.is_some());
    }

    #[test]
    fn explicit_goal_overrides_prediction() {
        let student = sample_student();
        let result = recommend_for("S001", Some(&student), Some("Cybersecurity")).unwrap();
        assert_eq!(result.career_goal, "Cybersecurity");
        assert_eq!(result.recommendations[0].suggestion, "CTF Competition");
    }

    #[test]
    fn blank_goal_counts_as_absent() {
        let student = sample_student();
        let result = recommend_for("S001", Some(&student), Some("  ")).unwrap();
        assert_eq!(result.career_goal, "Software Development");
    }

    #[test]
    fn unknown_goal_uses_default_suggestions() {
        let student = sample_student();
        let result = recommend_for("S001", Some(&student), Some("Astronaut")).unwrap();
        assert_eq!(result.career_goal, "Astronaut");
        assert_eq!(result.recommendations.len(), 4);
        assert!(result
            .recommendations
            .iter()
            .any(|rec| rec.suggestion == "Smart India Hackathon"));
    }

    #[test]
    fn saturated_type_drops_to_low_and_sorts_last() {
        let student = record(&[
            ("Hackathon", "1st"),
            ("Hackathon", "1st"),
            ("Hackathon", "2nd"),
            ("Project", "Completed"),
        ]);
        let result = recommend_for("S001", Some(&student), Some("Web Development")).unwrap();

        let last = result.recommendations.last().unwrap();
        assert_eq!(last.achievement_type, AchievementType::Hackathon);
        assert_eq!(last.priority, Priority::Low);
        assert_eq!(last.existing_count, 3);

        // Project has one entry, so the declared "high" stands.
        let project = result
            .recommendations
            .iter()
            .find(|rec| rec.achievement_type == AchievementType::Project)
            .unwrap();
        assert_eq!(project.priority, Priority::High);
    }

    #[test]
    fn medium_priority_survives_for_partial_history() {
        let student = record(&[("Project", "1st"), ("Hackathon", "Winner")]);
        let result =
            recommend_for("S001", Some(&student), Some("Software Development")).unwrap();
        let project = result
            .recommendations
            .iter()
            .find(|rec| rec.achievement_type == AchievementType::Project)
            .unwrap();
        assert_eq!(project.priority, Priority::Medium);
        assert_eq!(result.recommendations.last().unwrap().priority, Priority::Medium);
    }

    #[test]
    fn empty_history_warns_and_still_matches() {
        let student = record(&[]);
        let result = recommend_for("S001", Some(&student), None).unwrap();

        assert_eq!(result.total_achievements, 0);
        assert_eq!(result.career_goal, "Software Development");
        assert_eq!(result.insights[0].kind, InsightKind::Warning);
        assert!(result.insights[0].message.starts_with("Start building your achievement portfolio"));
        assert!(result
            .insights
            .iter()
            .any(|insight| insight.kind == InsightKind::Match
                && insight.message.contains("0.0% similar to Priya Sharma")));
        assert!(result
            .recommendations
            .iter()
            .all(|rec| rec.priority == Priority::High));
    }

    #[test]
    fn small_history_gets_growth_and_diversity_tips() {
        let student = record(&[("Paper", "Published")]);
        let result = recommend_for("S001", Some(&student), None).unwrap();
        let kinds: Vec<InsightKind> = result.insights.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, [InsightKind::Tip, InsightKind::Tip, InsightKind::Match]);
    }

    #[test]
    fn skill_gap_excludes_known_skills() {
        let mut student = record(&[("Paper", "Published"), ("Paper", "Accepted")]);
        student.achievements[0].programming_language = Some("Python".to_string());
        let profile = profile::analyze(&student);
        let similar = find_similar_alumni(&profile, DEFAULT_TOP_K);
        assert_eq!(similar[0].alumnus.name, "Rahul Verma");
        assert_eq!(skill_gap(&profile, &similar), ["Deep Learning", "Statistics", "SQL"]);
        assert!(skill_gap(&profile, &[]).is_empty());
    }

    #[test]
    fn mention_skips_top_match_without_the_type() {
        let student = record(&[
            ("Project", "1st"),
            ("Paper", "Published"),
            ("Hackathon", "1st"),
            ("Symposium", "2nd"),
        ]);
        let result = recommend_for("S001", Some(&student), Some("Software Development")).unwrap();

        let names: Vec<&str> = result.similar_alumni.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Vikram Singh", "Sneha Patel", "Rahul Verma"]);

        let internship = result
            .recommendations
            .iter()
            .find(|rec| rec.achievement_type == AchievementType::Internship)
            .unwrap();
        assert_eq!(
            internship.similar_alumni_mention.as_deref(),
            Some("Sneha Patel (Product Manager at Flipkart) had similar achievements")
        );
    }

    #[test]
    fn mention_is_absent_when_no_match_has_the_type() {
        let profile = profile::analyze(&record(&[("Project", "1st"), ("Paper", "Published")]));
        let similar = find_similar_alumni(&profile, DEFAULT_TOP_K);
        assert!(!similar.is_empty());
        assert_eq!(similar_alumni_mention(AchievementType::Other, &similar), None);
        assert_eq!(similar_alumni_mention(AchievementType::Hackathon, &[]), None);
    }

    #[test]
    fn priority_override_rules() {
        assert_eq!(adjust_priority(Priority::Low, 0), Priority::High);
        assert_eq!(adjust_priority(Priority::Medium, 1), Priority::Medium);
        assert_eq!(adjust_priority(Priority::High, 2), Priority::High);
        assert_eq!(adjust_priority(Priority::High, 3), Priority::Low);
        assert_eq!(adjust_priority(Priority::Medium, 9), Priority::Low);
    }

    #[test]
    fn serialized_result_uses_presentation_field_names() {
        let student = sample_student();
        let result = recommend_for("S001", Some(&student), None).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["achievement_breakdown"]["Hackathon"], 2);
        let first = &value["recommendations"][0];
        assert_eq!(first["type"], "Hackathon");
        assert_eq!(first["priority"], "high");
        assert_eq!(first["your_current_count"], 2);
        assert!(first.get("similar_alumni").is_some());
        assert!(value["similar_alumni"][0]["placement_time"]
            .as_str()
            .unwrap()
            .ends_with("months"));
    }

    proptest! {
        #[test]
        fn recommendations_follow_priority_rank(
            picks in prop::collection::vec(
                (prop::sample::select(vec!["Hackathon", "Coding", "Paper", "Project", "Internship"]),
                 prop::sample::select(vec!["1st", "Participant", "Published"])),
                0..12,
            ),
            goal in prop::sample::select(vec!["Software Development", "Data Science", "Web Development", "Cybersecurity", "Unknown"]),
        ) {
            let student = record(&picks);
            let result = recommend_for("S001", Some(&student), Some(goal)).unwrap();

            prop_assert!(result
                .recommendations
                .windows(2)
                .all(|pair| pair[0].priority <= pair[1].priority));
            for rec in &result.recommendations {
                if rec.existing_count == 0 {
                    prop_assert_eq!(rec.priority, Priority::High);
                }
                if rec.existing_count >= 3 {
                    prop_assert_eq!(rec.priority, Priority::Low);
                }
                prop_assert!(rec.skill_gap.len() <= 3);
            }
        }

        #[test]
        fn suggestions_never_empty(path in ".{0,32}") {
            prop_assert!(!suggestions_for_career_path(&path).is_empty());
        }
    }
}
