pub mod seed;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::bank::Question;
use crate::domain::dimension::{Dimension, DIMENSION_ORDER};
use crate::domain::session::{DimensionProgress, SessionSnapshot, SessionStatus};

#[derive(Debug, FromRow)]
pub struct SessionRow {
    pub id: Uuid,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub education_level: Option<String>,
    pub marital_status: Option<String>,
    pub status: String,
    pub current_dimension: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
pub struct DimensionScoreRow {
    pub dimension: String,
    pub theta: f64,
    pub question_count: i32,
}

#[derive(Debug)]
pub struct NewSession<'a> {
    pub name: &'a str,
    pub gender: Option<&'a str>,
    pub birth_year: Option<i32>,
    pub education_level: Option<&'a str>,
    pub marital_status: Option<&'a str>,
}

/// Creates the session row and its five dimension-score rows in one
/// transaction, so a session never exists without its scores.
pub async fn insert_session(pool: &PgPool, id: Uuid, data: &NewSession<'_>) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO sessions (id, name, gender, birth_year, education_level, marital_status, status, current_dimension)
        VALUES ($1, $2, $3, $4, $5, $6, 'active', 'openness')
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.gender)
    .bind(data.birth_year)
    .bind(data.education_level)
    .bind(data.marital_status)
    .execute(&mut *tx)
    .await?;

    for dimension in DIMENSION_ORDER {
        sqlx::query(
            r#"
            INSERT INTO dimension_scores (session_id, dimension, theta, question_count)
            VALUES ($1, $2, 0.0, 0)
            "#,
        )
        .bind(id)
        .bind(dimension.as_str())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

pub async fn find_session(pool: &PgPool, id: Uuid) -> Result<Option<SessionRow>> {
    let session = sqlx::query_as::<_, SessionRow>(
        r#"
        SELECT id, name, gender, birth_year, education_level, marital_status,
               status, current_dimension, created_at, completed_at
        FROM sessions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(session)
}

/// Rebuilds the in-memory scoring snapshot for one session: status, current
/// dimension, the five running scores, and the set of answered question ids.
pub async fn load_snapshot(pool: &PgPool, session: &SessionRow) -> Result<SessionSnapshot> {
    let status = SessionStatus::try_from(session.status.as_str())
        .map_err(|_| anyhow!("session {} has corrupt status {:?}", session.id, session.status))?;
    let current_dimension = Dimension::try_from(session.current_dimension.as_str())
        .map_err(|_| {
            anyhow!(
                "session {} has corrupt dimension {:?}",
                session.id,
                session.current_dimension
            )
        })?;

    let score_rows = sqlx::query_as::<_, DimensionScoreRow>(
        r#"
        SELECT dimension, theta, question_count
        FROM dimension_scores
        WHERE session_id = $1
        "#,
    )
    .bind(session.id)
    .fetch_all(pool)
    .await?;

    let mut progress = [DimensionProgress::default(); 5];
    for row in score_rows {
        let dimension = Dimension::try_from(row.dimension.as_str())
            .map_err(|_| anyhow!("session {} has corrupt score row {:?}", session.id, row.dimension))?;
        progress[dimension.index()] = DimensionProgress {
            theta: row.theta,
            question_count: row.question_count,
        };
    }

    let answered: HashSet<String> = sqlx::query_scalar::<_, String>(
        r#"
        SELECT question_id
        FROM answers
        WHERE session_id = $1
        "#,
    )
    .bind(session.id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .collect();

    Ok(SessionSnapshot {
        status,
        current_dimension,
        progress,
        answered,
    })
}

pub async fn set_current_dimension(pool: &PgPool, id: Uuid, dimension: Dimension) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE sessions
        SET current_dimension = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(dimension.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

/// Marks a session completed and stamps completed_at. Guarded on the active
/// status so the timestamp is written exactly once.
pub async fn mark_completed(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE sessions
        SET status = 'completed', completed_at = NOW()
        WHERE id = $1
          AND status = 'active'
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Records one answer atomically: the answer row, the dimension's updated
/// theta and count, and (when this answer finishes the test) the session's
/// completed transition all commit together or not at all.
pub async fn record_answer(
    pool: &PgPool,
    session_id: Uuid,
    question: &Question,
    response: i16,
    new_theta: f64,
    newly_completed: bool,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO answers (session_id, question_id, dimension, response)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(session_id)
    .bind(question.id)
    .bind(question.dimension.as_str())
    .bind(response)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE dimension_scores
        SET theta = $3, question_count = question_count + 1
        WHERE session_id = $1
          AND dimension = $2
        "#,
    )
    .bind(session_id)
    .bind(question.dimension.as_str())
    .bind(new_theta)
    .execute(&mut *tx)
    .await?;

    if newly_completed {
        sqlx::query(
            r#"
            UPDATE sessions
            SET status = 'completed', completed_at = NOW()
            WHERE id = $1
              AND status = 'active'
            "#,
        )
        .bind(session_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
