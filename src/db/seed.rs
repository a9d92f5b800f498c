use anyhow::Result;
use sqlx::PgPool;

use crate::domain::bank::QuestionBank;

/// Mirrors the in-memory catalog into the `questions` table so answers have
/// something to reference. Runs once: a non-empty table is left untouched.
pub async fn seed_questions(pool: &PgPool) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!("questions table already seeded ({} rows)", existing);
        return Ok(());
    }

    let bank = QuestionBank::get();
    for question in bank.all() {
        sqlx::query(
            r#"
            INSERT INTO questions (question_id, text, dimension, reverse_scored, difficulty)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (question_id) DO NOTHING
            "#,
        )
        .bind(question.id)
        .bind(question.text)
        .bind(question.dimension.as_str())
        .bind(question.reverse_scored)
        .bind(question.difficulty)
        .execute(pool)
        .await?;
    }

    tracing::info!("Seeded {} catalog questions", bank.all().len());
    Ok(())
}
