use crate::db;
use crate::domain::bank::QuestionBank;
use crate::domain::dimension::{Dimension, DIMENSION_ORDER};
use crate::domain::personalize;
use crate::domain::report;
use crate::domain::session::{next_question, NextQuestion, SessionStatus};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:session_id/question", get(current_question))
        .route("/:session_id/report", get(session_report))
        .with_state(state)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionPayload {
    name: String,
    gender: Option<String>,
    birth_year: Option<i32>,
    education_level: Option<String>,
    marital_status: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionCreatedResponse {
    session_id: Uuid,
    name: String,
    status: SessionStatus,
    current_dimension: Dimension,
    current_question_number: i32,
    total_dimensions: usize,
    dimension_progress: BTreeMap<&'static str, i32>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuestionFetchResponse {
    Question(QuestionResponse),
    Completed(CompletedResponse),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionResponse {
    question_id: &'static str,
    text: String,
    dimension: Dimension,
    question_number: i32,
    reverse_scored: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletedResponse {
    is_completed: bool,
    status: SessionStatus,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportResponse {
    session_id: Uuid,
    name: String,
    completion_date: DateTime<Utc>,
    scores: BTreeMap<&'static str, DimensionScorePayload>,
    detailed_analysis: &'static str,
    recommendations: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DimensionScorePayload {
    name: &'static str,
    score: f64,
    level: &'static str,
}

async fn create_session(
    State(state): State<SharedState>,
    Json(payload): Json<CreateSessionPayload>,
) -> Result<Json<SessionCreatedResponse>, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidState("name is required"));
    }

    let session_id = Uuid::new_v4();
    let data = db::NewSession {
        name,
        gender: payload.gender.as_deref(),
        birth_year: payload.birth_year,
        education_level: payload.education_level.as_deref(),
        marital_status: payload.marital_status.as_deref(),
    };
    db::insert_session(&state.pool, session_id, &data).await?;
    tracing::info!("Created session {} for {}", session_id, name);

    let dimension_progress = DIMENSION_ORDER.iter().map(|d| (d.as_str(), 0)).collect();

    Ok(Json(SessionCreatedResponse {
        session_id,
        name: name.to_string(),
        status: SessionStatus::Active,
        current_dimension: Dimension::Openness,
        current_question_number: 1,
        total_dimensions: DIMENSION_ORDER.len(),
        dimension_progress,
    }))
}

async fn current_question(
    State(state): State<SharedState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<QuestionFetchResponse>, ApiError> {
    let session = db::find_session(&state.pool, session_id)
        .await?
        .ok_or(ApiError::NotFound("session"))?;

    let mut snap = db::load_snapshot(&state.pool, &session).await?;
    let previous_dimension = snap.current_dimension;

    match next_question(QuestionBank::get(), &mut snap) {
        NextQuestion::Question { question, number } => {
            if snap.current_dimension != previous_dimension {
                db::set_current_dimension(&state.pool, session_id, snap.current_dimension).await?;
            }

            let text = personalize::personalize(
                question.text,
                personalize::first_name(&session.name),
                session.gender.as_deref(),
            );

            Ok(Json(QuestionFetchResponse::Question(QuestionResponse {
                question_id: question.id,
                text,
                dimension: question.dimension,
                question_number: number,
                reverse_scored: question.reverse_scored,
            })))
        }
        NextQuestion::Completed { newly_completed } => {
            if newly_completed {
                db::mark_completed(&state.pool, session_id).await?;
                tracing::info!("Session {} completed", session_id);
            }
            Ok(Json(QuestionFetchResponse::Completed(CompletedResponse {
                is_completed: true,
                status: SessionStatus::Completed,
                message: "Test completed",
            })))
        }
    }
}

async fn session_report(
    State(state): State<SharedState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReportResponse>, ApiError> {
    let session = db::find_session(&state.pool, session_id)
        .await?
        .ok_or(ApiError::NotFound("session"))?;

    let snap = db::load_snapshot(&state.pool, &session).await?;
    let content = report::build(&snap).ok_or(ApiError::NotFound("report"))?;

    let scores = content
        .scores
        .into_iter()
        .map(|entry| {
            (
                entry.dimension.as_str(),
                DimensionScorePayload {
                    name: entry.name,
                    score: entry.score,
                    level: entry.level,
                },
            )
        })
        .collect();

    Ok(Json(ReportResponse {
        session_id,
        name: session.name,
        completion_date: session.completed_at.unwrap_or_else(Utc::now),
        scores,
        detailed_analysis: content.detailed_analysis,
        recommendations: content.recommendations,
    }))
}
