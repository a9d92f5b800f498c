//! Test progression: per-dimension running scores, the forward-only
//! dimension walk, and the single completed transition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::bank::{Question, QuestionBank};
use super::dimension::{Dimension, DIMENSION_ORDER};
use super::{scoring, selector};
use crate::error::ApiError;

pub const QUESTIONS_PER_DIMENSION: i32 = 10;
pub const TOTAL_QUESTIONS: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

impl TryFrom<&str> for SessionStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "active" => Ok(SessionStatus::Active),
            "completed" => Ok(SessionStatus::Completed),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionProgress {
    pub theta: f64,
    pub question_count: i32,
}

/// In-memory image of one session's scoring state, loaded from the store at
/// the start of a request and written back after the pure transitions below
/// have run.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub current_dimension: Dimension,
    pub progress: [DimensionProgress; 5],
    pub answered: HashSet<String>,
}

impl SessionSnapshot {
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Active,
            current_dimension: Dimension::Openness,
            progress: [DimensionProgress::default(); 5],
            answered: HashSet::new(),
        }
    }

    pub fn progress(&self, dimension: Dimension) -> DimensionProgress {
        self.progress[dimension.index()]
    }

    pub fn total_answered(&self) -> i32 {
        self.progress.iter().map(|p| p.question_count).sum()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// What a question request resolves to.
#[derive(Debug)]
pub enum NextQuestion<'a> {
    /// A question to present, with its 1-based number within the dimension.
    Question { question: &'a Question, number: i32 },
    /// No questions remain. `newly_completed` is true only on the request
    /// that performed the transition; completed_at must be stamped then and
    /// never again.
    Completed { newly_completed: bool },
}

/// Advances the snapshot to the next presentable question. A dimension is
/// left behind once its count reaches the cap or the selector reports it
/// exhausted; both cases advance identically. The walk is a bounded loop
/// over the fixed order, never recursion, so corrupted counts cannot loop
/// forever.
pub fn next_question<'a>(bank: &'a QuestionBank, snap: &mut SessionSnapshot) -> NextQuestion<'a> {
    if snap.status == SessionStatus::Completed {
        return NextQuestion::Completed {
            newly_completed: false,
        };
    }

    for _ in 0..DIMENSION_ORDER.len() {
        let dimension = snap.current_dimension;
        let progress = snap.progress(dimension);
        if progress.question_count < QUESTIONS_PER_DIMENSION {
            if let Some(question) =
                selector::select_next(bank, dimension, progress.theta, &snap.answered)
            {
                return NextQuestion::Question {
                    question,
                    number: progress.question_count + 1,
                };
            }
        }
        match dimension.next() {
            Some(next) => snap.current_dimension = next,
            None => break,
        }
    }

    snap.status = SessionStatus::Completed;
    NextQuestion::Completed {
        newly_completed: true,
    }
}

#[derive(Debug)]
pub struct AnswerOutcome {
    pub dimension: Dimension,
    pub theta: f64,
    pub status: SessionStatus,
    /// True only when this answer tipped the session into `completed`.
    pub newly_completed: bool,
}

/// Applies one answer: reverse-aware theta update, count increment, answer
/// bookkeeping, and the completion check. Either the whole transition
/// applies or the snapshot is untouched.
pub fn record_answer(
    question: &Question,
    raw_response: i16,
    snap: &mut SessionSnapshot,
) -> Result<AnswerOutcome, ApiError> {
    if snap.status == SessionStatus::Completed {
        return Err(ApiError::InvalidState("session is already completed"));
    }
    if !(1..=5).contains(&raw_response) {
        return Err(ApiError::InvalidState("response must be between 1 and 5"));
    }
    if snap.answered.contains(question.id) {
        return Err(ApiError::InvalidState(
            "question already answered for this session",
        ));
    }

    let theta = {
        let progress = &mut snap.progress[question.dimension.index()];
        progress.theta = scoring::updated_theta(progress.theta, question.reverse_scored, raw_response);
        progress.question_count += 1;
        progress.theta
    };
    snap.answered.insert(question.id.to_string());

    let newly_completed = snap.total_answered() >= TOTAL_QUESTIONS;
    if newly_completed {
        snap.status = SessionStatus::Completed;
    }

    Ok(AnswerOutcome {
        dimension: question.dimension,
        theta,
        status: snap.status,
        newly_completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_next(bank: &QuestionBank, snap: &mut SessionSnapshot, response: i16) -> AnswerOutcome {
        match next_question(bank, snap) {
            NextQuestion::Question { question, .. } => {
                record_answer(question, response, snap).expect("answer accepted")
            }
            NextQuestion::Completed { .. } => panic!("expected a question"),
        }
    }

    #[test]
    fn ten_neutral_openness_answers_advance_the_dimension() {
        let bank = QuestionBank::get();
        let mut snap = SessionSnapshot::new();

        for _ in 0..10 {
            let outcome = answer_next(bank, &mut snap, 3);
            assert_eq!(outcome.dimension, Dimension::Openness);
        }

        assert_eq!(snap.progress(Dimension::Openness).question_count, 10);
        assert_eq!(snap.progress(Dimension::Openness).theta, 0.0);

        match next_question(bank, &mut snap) {
            NextQuestion::Question { question, number } => {
                assert_eq!(question.dimension, Dimension::Conscientiousness);
                assert_eq!(number, 1);
            }
            NextQuestion::Completed { .. } => panic!("test should continue"),
        }
        assert_eq!(snap.current_dimension, Dimension::Conscientiousness);
    }

    #[test]
    fn every_dimension_advances_after_ten_answers() {
        let bank = QuestionBank::get();
        let mut snap = SessionSnapshot::new();

        for dim in DIMENSION_ORDER {
            for _ in 0..10 {
                let outcome = answer_next(bank, &mut snap, 4);
                assert_eq!(outcome.dimension, dim);
            }
            assert_eq!(snap.progress(dim).question_count, 10);
        }
        assert_eq!(snap.total_answered(), TOTAL_QUESTIONS);
        assert_eq!(snap.status, SessionStatus::Completed);
    }

    #[test]
    fn questions_are_never_reoffered() {
        let bank = QuestionBank::get();
        let mut snap = SessionSnapshot::new();
        let mut seen = HashSet::new();

        loop {
            match next_question(bank, &mut snap) {
                NextQuestion::Question { question, .. } => {
                    assert!(seen.insert(question.id), "{} offered twice", question.id);
                    record_answer(question, 5, &mut snap).expect("answer accepted");
                }
                NextQuestion::Completed { .. } => break,
            }
        }
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn fifty_answers_complete_the_session_exactly_once() {
        let bank = QuestionBank::get();
        let mut snap = SessionSnapshot::new();

        let mut completion_events = 0;
        for _ in 0..TOTAL_QUESTIONS {
            let outcome = answer_next(bank, &mut snap, 2);
            if outcome.newly_completed {
                completion_events += 1;
            }
        }
        assert_eq!(completion_events, 1);
        assert_eq!(snap.status, SessionStatus::Completed);

        // Terminal state: further requests report completion without a
        // second transition, and answers are rejected.
        match next_question(bank, &mut snap) {
            NextQuestion::Completed { newly_completed } => assert!(!newly_completed),
            NextQuestion::Question { .. } => panic!("completed session offered a question"),
        }
        let question = bank.by_id("o1").unwrap();
        assert!(matches!(
            record_answer(question, 3, &mut snap),
            Err(ApiError::InvalidState(_))
        ));
    }

    #[test]
    fn short_bank_exhaustion_advances_like_the_count_cap() {
        // A bank holding a single openness item: answering it exhausts the
        // dimension long before the count cap, which must advance the walk
        // all the way to completion.
        let bank = QuestionBank::new(vec![Question {
            id: "o1",
            text: "نص تجريبي",
            dimension: Dimension::Openness,
            reverse_scored: false,
            difficulty: 0.0,
        }]);
        let mut snap = SessionSnapshot::new();

        let outcome = answer_next(&bank, &mut snap, 5);
        assert_eq!(outcome.dimension, Dimension::Openness);

        match next_question(&bank, &mut snap) {
            NextQuestion::Completed { newly_completed } => assert!(newly_completed),
            NextQuestion::Question { .. } => panic!("bank is exhausted"),
        }
        assert_eq!(snap.status, SessionStatus::Completed);
    }

    #[test]
    fn out_of_range_and_duplicate_answers_leave_state_untouched() {
        let bank = QuestionBank::get();
        let mut snap = SessionSnapshot::new();
        let question = bank.by_id("o3").unwrap();

        assert!(record_answer(question, 0, &mut snap).is_err());
        assert!(record_answer(question, 6, &mut snap).is_err());
        assert_eq!(snap.total_answered(), 0);
        assert_eq!(snap.progress(Dimension::Openness).theta, 0.0);

        record_answer(question, 5, &mut snap).expect("first answer accepted");
        let duplicate = record_answer(question, 5, &mut snap);
        assert!(matches!(duplicate, Err(ApiError::InvalidState(_))));
        assert_eq!(snap.progress(Dimension::Openness).question_count, 1);
    }
}
