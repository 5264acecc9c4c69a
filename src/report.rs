use std::fmt::Write;

use crate::models::RecommendationResult;

pub fn build_report(result: &RecommendationResult) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Achievement Recommendations");
    let _ = writeln!(
        output,
        "Generated for {} ({}, {}) targeting {}",
        result.student_name, result.student_id, result.department, result.career_goal
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Profile");
    let _ = writeln!(output, "- Total achievements: {}", result.total_achievements);

    if result.achievement_breakdown.is_empty() {
        let _ = writeln!(output, "- No achievements recorded yet.");
    } else {
        for (achievement_type, count) in &result.achievement_breakdown {
            let _ = writeln!(output, "- {achievement_type}: {count}");
        }
    }

    if !result.skills.is_empty() {
        let skills: Vec<&str> = result.skills.iter().map(String::as_str).collect();
        let _ = writeln!(output, "- Skills: {}", skills.join(", "));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Predicted Career Paths");

    for path in &result.predicted_career_paths {
        let _ = writeln!(
            output,
            "- {} ({:.1}% confidence, {} matching alumni)",
            path.career_path, path.confidence, path.matching_alumni
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommendations");

    if result.recommendations.is_empty() {
        let _ = writeln!(output, "No recommendations for this career goal.");
    } else {
        for rec in &result.recommendations {
            let _ = writeln!(
                output,
                "- [{}] {}: {} ({}; you have {})",
                rec.priority, rec.achievement_type, rec.suggestion, rec.reason, rec.existing_count
            );
            if !rec.skill_gap.is_empty() {
                let _ = writeln!(output, "  - Skill gap: {}", rec.skill_gap.join(", "));
            }
            if let Some(insight) = &rec.statistical_insight {
                let _ = writeln!(output, "  - {insight}");
            }
            if let Some(mention) = &rec.similar_alumni_mention {
                let _ = writeln!(output, "  - {mention}");
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Similar Alumni");

    if result.similar_alumni.is_empty() {
        let _ = writeln!(output, "No alumni to compare against.");
    } else {
        for alumnus in &result.similar_alumni {
            let _ = writeln!(
                output,
                "- {} ({}) {:.1}% similar, placed in {}: {}",
                alumnus.name, alumnus.role, alumnus.similarity, alumnus.placement_time, alumnus.tips
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Insights");

    for insight in &result.insights {
        let _ = writeln!(output, "- {}", insight.message);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AchievementRecord, StudentInfo, StudentRecord};
    use crate::recommend::recommend_for;

    #[test]
    fn report_lists_every_section() {
        let student = StudentRecord {
            info: StudentInfo {
                student_id: "S001".to_string(),
                name: "Avery Lee".to_string(),
                department: "CSE".to_string(),
            },
            achievements: vec![AchievementRecord {
                achievement_type: Some("Hackathon".to_string()),
                position: Some("1st".to_string()),
                programming_language: Some("Python".to_string()),
                ..Default::default()
            }],
        };
        let result = recommend_for("S001", Some(&student), None).unwrap();
        let report = build_report(&result);

        assert!(report.starts_with("# Achievement Recommendations"));
        assert!(report.contains("Generated for Avery Lee (S001, CSE)"));
        assert!(report.contains("- Hackathon: 1"));
        assert!(report.contains("- Skills: Python"));
        for heading in [
            "## Predicted Career Paths",
            "## Recommendations",
            "## Similar Alumni",
            "## Insights",
        ] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("[high]"));
    }

    #[test]
    fn empty_history_report_says_so() {
        let student = StudentRecord {
            info: StudentInfo {
                student_id: "S002".to_string(),
                name: "Jules Moreno".to_string(),
                department: "IT".to_string(),
            },
            achievements: Vec::new(),
        };
        let result = recommend_for("S002", Some(&student), None).unwrap();
        let report = build_report(&result);
        assert!(report.contains("No achievements recorded yet."));
        assert!(report.contains("Start building your achievement portfolio"));
    }
}
