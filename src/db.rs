use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::{PgPool, Row};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{AchievementRecord, StudentInfo, StudentRecord};

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn seed(pool: &PgPool) -> anyhow::Result<()> {
    let students = vec![
        ("21CS001", "Avery Lee", "CSE"),
        ("21IT014", "Jules Moreno", "IT"),
        ("22EC007", "Kiara Patel", "ECE"),
    ];

    for (student_id, name, department) in students {
        upsert_student(
            pool,
            &StudentInfo {
                student_id: student_id.to_string(),
                name: name.to_string(),
                department: department.to_string(),
            },
        )
        .await?;
    }

    let achievements = vec![
        (
            "seed-001",
            "21CS001",
            "Hackathon",
            "Smart India Hackathon",
            "1st",
            Some("Python"),
            "Flood alert system using machine learning on AWS",
            NaiveDate::from_ymd_opt(2025, 12, 14).context("invalid date")?,
        ),
        (
            "seed-002",
            "21CS001",
            "Hackathon",
            "HackMIT",
            "2nd",
            Some("JavaScript"),
            "React dashboard for campus events",
            NaiveDate::from_ymd_opt(2025, 9, 21).context("invalid date")?,
        ),
        (
            "seed-003",
            "21CS001",
            "Coding Contest",
            "Codeforces Round",
            "Participant",
            None,
            "Solved four problems in Java",
            NaiveDate::from_ymd_opt(2025, 6, 2).context("invalid date")?,
        ),
        (
            "seed-004",
            "21IT014",
            "Research Paper",
            "IEEE Conference on Data Engineering",
            "Published",
            Some("Python"),
            "Deep learning for traffic forecasting",
            NaiveDate::from_ymd_opt(2025, 11, 3).context("invalid date")?,
        ),
        (
            "seed-005",
            "22EC007",
            "Internship",
            "Embedded Firmware Intern",
            "Completed",
            Some("C"),
            "RTOS drivers for a sensor board",
            NaiveDate::from_ymd_opt(2025, 7, 30).context("invalid date")?,
        ),
    ];

    for (source_key, student_id, kind, event, position, language, description, date) in
        achievements
    {
        let record = AchievementRecord {
            achievement_type: Some(kind.to_string()),
            event_name: Some(event.to_string()),
            position: Some(position.to_string()),
            programming_language: language.map(str::to_string),
            achievement_description: Some(description.to_string()),
            achievement_date: Some(date),
            ..Default::default()
        };
        insert_achievement(pool, student_id, &record, source_key).await?;
    }

    Ok(())
}

/// Resolve a student and their achievements, most recent first. `None` when
/// the student does not exist; a student with no achievements resolves to an
/// empty list.
pub async fn fetch_student(
    pool: &PgPool,
    student_id: &str,
) -> anyhow::Result<Option<StudentRecord>> {
    let Some(row) = sqlx::query(
        r#"
        SELECT student_id, student_name, student_dept
        FROM achievement_recommender.students
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?
    else {
        debug!(student_id, "student not found");
        return Ok(None);
    };

    let info = StudentInfo {
        student_id: row.get("student_id"),
        name: row.get("student_name"),
        department: row.get("student_dept"),
    };

    let rows = sqlx::query(
        r#"
        SELECT achievement_type, event_name, position, programming_language,
               coding_platform, database_type, achievement_description, achievement_date
        FROM achievement_recommender.achievements
        WHERE student_id = $1
        ORDER BY achievement_date DESC NULLS LAST
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    let achievements: Vec<AchievementRecord> = rows
        .iter()
        .map(|row| AchievementRecord {
            achievement_type: row.get("achievement_type"),
            event_name: row.get("event_name"),
            position: row.get("position"),
            programming_language: row.get("programming_language"),
            coding_platform: row.get("coding_platform"),
            database_type: row.get("database_type"),
            achievement_description: row.get("achievement_description"),
            achievement_date: row.get("achievement_date"),
        })
        .collect();

    debug!(student_id, achievements = achievements.len(), "fetched student");

    Ok(Some(StudentRecord { info, achievements }))
}

#[derive(Debug, Deserialize)]
pub struct AchievementCsvRow {
    pub student_id: String,
    pub student_name: String,
    pub student_dept: String,
    pub achievement_type: Option<String>,
    pub event_name: Option<String>,
    pub position: Option<String>,
    pub programming_language: Option<String>,
    pub coding_platform: Option<String>,
    pub database_type: Option<String>,
    pub achievement_description: Option<String>,
    pub achievement_date: Option<NaiveDate>,
    pub source_key: Option<String>,
}

impl AchievementCsvRow {
    fn student(&self) -> StudentInfo {
        StudentInfo {
            student_id: self.student_id.clone(),
            name: self.student_name.clone(),
            department: self.student_dept.clone(),
        }
    }

    fn achievement(&self) -> AchievementRecord {
        AchievementRecord {
            achievement_type: self.achievement_type.clone(),
            event_name: self.event_name.clone(),
            position: self.position.clone(),
            programming_language: self.programming_language.clone(),
            coding_platform: self.coding_platform.clone(),
            database_type: self.database_type.clone(),
            achievement_description: self.achievement_description.clone(),
            achievement_date: self.achievement_date,
        }
    }
}

pub fn read_csv_rows(csv_path: &std::path::Path) -> anyhow::Result<Vec<AchievementCsvRow>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut rows = Vec::new();

    for (index, result) in reader.deserialize::<AchievementCsvRow>().enumerate() {
        let row = result.with_context(|| format!("invalid CSV record {}", index + 1))?;
        rows.push(row);
    }

    Ok(rows)
}

pub async fn import_csv(pool: &PgPool, csv_path: &std::path::Path) -> anyhow::Result<usize> {
    let rows = read_csv_rows(csv_path)?;
    let mut inserted = 0usize;
    let mut tx = pool.begin().await?;

    for row in &rows {
        upsert_student(&mut *tx, &row.student()).await?;

        let source_key = row
            .source_key
            .clone()
            .unwrap_or_else(|| format!("import-{}", Uuid::new_v4()));

        if insert_achievement(&mut *tx, &row.student_id, &row.achievement(), &source_key).await? {
            inserted += 1;
        }
    }

    tx.commit().await?;

    info!(rows = rows.len(), inserted, "imported achievements");
    Ok(inserted)
}

async fn upsert_student<'e, E>(executor: E, student: &StudentInfo) -> anyhow::Result<()>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO achievement_recommender.students (student_id, student_name, student_dept)
        VALUES ($1, $2, $3)
        ON CONFLICT (student_id) DO UPDATE
        SET student_name = EXCLUDED.student_name, student_dept = EXCLUDED.student_dept
        "#,
    )
    .bind(&student.student_id)
    .bind(&student.name)
    .bind(&student.department)
    .execute(executor)
    .await?;

    Ok(())
}

/// Returns whether a row was written; an existing `source_key` is skipped.
async fn insert_achievement<'e, E>(
    executor: E,
    student_id: &str,
    achievement: &AchievementRecord,
    source_key: &str,
) -> anyhow::Result<bool>
where
    E: sqlx::PgExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO achievement_recommender.achievements
        (id, student_id, achievement_type, event_name, position, programming_language,
         coding_platform, database_type, achievement_description, achievement_date, source_key)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (source_key) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(student_id)
    .bind(&achievement.achievement_type)
    .bind(&achievement.event_name)
    .bind(&achievement.position)
    .bind(&achievement.programming_language)
    .bind(&achievement.coding_platform)
    .bind(&achievement.database_type)
    .bind(&achievement.achievement_description)
    .bind(achievement.achievement_date)
    .bind(source_key)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_rows_with_optional_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "student_id,student_name,student_dept,achievement_type,event_name,position,\
             programming_language,coding_platform,database_type,achievement_description,\
             achievement_date,source_key"
        )
        .unwrap();
        writeln!(
            file,
            "21CS001,Avery Lee,CSE,Hackathon,HackMIT,1st,Python,,,React app,2025-09-21,k-1"
        )
        .unwrap();
        writeln!(file, "21CS001,Avery Lee,CSE,Paper,,,,,,,,").unwrap();
        file.flush().unwrap();

        let rows = read_csv_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].programming_language.as_deref(), Some("Python"));
        assert!(rows[0].coding_platform.is_none());
        assert_eq!(rows[0].achievement_date, NaiveDate::from_ymd_opt(2025, 9, 21));
        assert_eq!(rows[0].source_key.as_deref(), Some("k-1"));

        let achievement = rows[1].achievement();
        assert_eq!(achievement.achievement_type.as_deref(), Some("Paper"));
        assert!(achievement.position.is_none());
        assert!(achievement.achievement_date.is_none());
        assert!(rows[1].source_key.is_none());
        assert_eq!(rows[1].student().name, "Avery Lee");
    }

    #[test]
    fn malformed_rows_report_their_index() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "student_id,student_name").unwrap();
        writeln!(file, "21CS001,Avery Lee").unwrap();
        file.flush().unwrap();

        let err = read_csv_rows(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid CSV record 1"));
    }
}
