//! Adaptive item selection: among the unanswered questions of a dimension,
//! pick the one whose difficulty sits closest to the respondent's running
//! theta.

use std::collections::HashSet;

use super::bank::{Question, QuestionBank};
use super::dimension::Dimension;

/// Returns the unanswered question in `dimension` minimizing
/// `|difficulty - theta|`, or `None` when the dimension is exhausted.
/// Ties go to the question appearing first in catalog order; the strict
/// comparison below is what makes that tie-break deterministic.
pub fn select_next<'a>(
    bank: &'a QuestionBank,
    dimension: Dimension,
    theta: f64,
    answered: &HashSet<String>,
) -> Option<&'a Question> {
    let mut best: Option<(&Question, f64)> = None;
    for question in bank.in_dimension(dimension) {
        if answered.contains(question.id) {
            continue;
        }
        let distance = (question.difficulty - theta).abs();
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((question, distance)),
        }
    }
    best.map(|(question, _)| question)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_of(entries: &[(&'static str, f64)]) -> QuestionBank {
        QuestionBank::new(
            entries
                .iter()
                .map(|&(id, difficulty)| Question {
                    id,
                    text: "نص تجريبي",
                    dimension: Dimension::Openness,
                    reverse_scored: false,
                    difficulty,
                })
                .collect(),
        )
    }

    #[test]
    fn picks_closest_difficulty() {
        let bank = bank_of(&[("q1", -1.0), ("q2", 0.0), ("q3", 1.0)]);
        let next = select_next(&bank, Dimension::Openness, 0.8, &HashSet::new());
        assert_eq!(next.map(|q| q.id), Some("q3"));
    }

    #[test]
    fn equal_distance_resolves_to_catalog_order() {
        // q1 and q2 are both 0.5 away from theta = 0; the earlier entry wins.
        let bank = bank_of(&[("q1", -0.5), ("q2", 0.5)]);
        let next = select_next(&bank, Dimension::Openness, 0.0, &HashSet::new());
        assert_eq!(next.map(|q| q.id), Some("q1"));
    }

    #[test]
    fn never_returns_an_answered_question() {
        let bank = bank_of(&[("q1", 0.0), ("q2", 0.2)]);
        let answered: HashSet<String> = ["q1".to_string()].into_iter().collect();
        let next = select_next(&bank, Dimension::Openness, 0.0, &answered);
        assert_eq!(next.map(|q| q.id), Some("q2"));
    }

    #[test]
    fn exhausted_dimension_yields_none() {
        let bank = bank_of(&[("q1", 0.0)]);
        let answered: HashSet<String> = ["q1".to_string()].into_iter().collect();
        assert!(select_next(&bank, Dimension::Openness, 0.0, &answered).is_none());
        assert!(select_next(&bank, Dimension::Extraversion, 0.0, &HashSet::new()).is_none());
    }
}
