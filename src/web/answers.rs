use crate::db;
use crate::domain::bank::QuestionBank;
use crate::domain::session::{record_answer, SessionStatus};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", post(submit_answer))
        .with_state(state)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitAnswerPayload {
    session_id: Uuid,
    question_id: String,
    response: i16,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitAnswerResponse {
    message: &'static str,
    status: SessionStatus,
}

async fn submit_answer(
    State(state): State<SharedState>,
    Json(payload): Json<SubmitAnswerPayload>,
) -> Result<Json<SubmitAnswerResponse>, ApiError> {
    let session = db::find_session(&state.pool, payload.session_id)
        .await?
        .ok_or(ApiError::NotFound("session"))?;

    let question = QuestionBank::get()
        .by_id(&payload.question_id)
        .ok_or(ApiError::NotFound("question"))?;

    let mut snap = db::load_snapshot(&state.pool, &session).await?;
    let outcome = record_answer(question, payload.response, &mut snap)?;

    db::record_answer(
        &state.pool,
        session.id,
        question,
        payload.response,
        outcome.theta,
        outcome.newly_completed,
    )
    .await?;

    if outcome.newly_completed {
        tracing::info!("Session {} completed on final answer", session.id);
    }

    Ok(Json(SubmitAnswerResponse {
        message: "Answer submitted successfully",
        status: outcome.status,
    }))
}
