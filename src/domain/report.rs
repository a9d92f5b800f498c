//! Report synthesis for completed sessions. Scores are derived from the
//! accumulated theta (ten ±0.2 steps bound it to [-2, 2]), normalized to a
//! 0-100 percentage and surfaced on a five-point scale.

use super::dimension::{Dimension, DIMENSION_ORDER};
use super::session::{SessionSnapshot, SessionStatus};

pub const LEVEL_HIGH: &str = "عالي";
pub const LEVEL_MEDIUM: &str = "متوسط";
pub const LEVEL_LOW: &str = "منخفض";

pub const DETAILED_ANALYSIS: &str = "تحليل شخصيتك يُظهر توازناً جيداً في معظم الأبعاد.\n\nأنت شخص منفتح على التجارب الجديدة ولديك مستوى جيد من التنظيم والانضباط.\n\nتتمتع بمهارات اجتماعية جيدة وتستطيع التعامل مع الآخرين بطريقة إيجابية.\n\nبشكل عام، شخصيتك متوازنة وتُظهر قدرة على التكيف مع المواقف المختلفة.";

pub const RECOMMENDATIONS: [&str; 3] = [
    "استمر في تطوير نقاط قوتك",
    "اعمل على تحسين المجالات التي تحتاج لتطوير",
    "تذكر أن الشخصية قابلة للنمو والتطوير",
];

#[derive(Debug, Clone)]
pub struct DimensionReport {
    pub dimension: Dimension,
    pub name: &'static str,
    /// Five-point scale (percent / 20), the unit the API reports.
    pub score: f64,
    pub level: &'static str,
}

#[derive(Debug, Clone)]
pub struct ReportContent {
    pub scores: Vec<DimensionReport>,
    pub detailed_analysis: &'static str,
    pub recommendations: Vec<&'static str>,
}

/// Theta mapped onto 0-100.
pub fn percent_score(theta: f64) -> f64 {
    ((theta + 2.0) / 4.0 * 100.0).clamp(0.0, 100.0)
}

pub fn level_for(percent: f64) -> &'static str {
    if percent >= 80.0 {
        LEVEL_HIGH
    } else if percent >= 60.0 {
        LEVEL_MEDIUM
    } else {
        LEVEL_LOW
    }
}

/// Builds the report, or `None` for a session that has not completed.
pub fn build(snap: &SessionSnapshot) -> Option<ReportContent> {
    if snap.status != SessionStatus::Completed {
        return None;
    }

    let scores = DIMENSION_ORDER
        .iter()
        .map(|&dimension| {
            let percent = percent_score(snap.progress(dimension).theta);
            DimensionReport {
                dimension,
                name: dimension.display_name(),
                score: percent / 20.0,
                level: level_for(percent),
            }
        })
        .collect();

    Some(ReportContent {
        scores,
        detailed_analysis: DETAILED_ANALYSIS,
        recommendations: RECOMMENDATIONS.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_before_completion() {
        let snap = SessionSnapshot::new();
        assert!(build(&snap).is_none());
    }

    #[test]
    fn completed_session_reports_all_five_dimensions() {
        let mut snap = SessionSnapshot::new();
        snap.status = SessionStatus::Completed;
        snap.progress[Dimension::Openness.index()].theta = 2.0;
        snap.progress[Dimension::Neuroticism.index()].theta = -2.0;

        let report = build(&snap).expect("report for completed session");
        assert_eq!(report.scores.len(), 5);
        assert_eq!(report.scores[0].dimension, Dimension::Openness);
        assert_eq!(report.scores[0].level, LEVEL_HIGH);
        assert_eq!(report.scores[0].score, 5.0);
        assert_eq!(report.scores[4].level, LEVEL_LOW);
        assert_eq!(report.scores[4].score, 0.0);
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn identical_answers_yield_an_identical_report() {
        let mut snap = SessionSnapshot::new();
        snap.status = SessionStatus::Completed;
        for progress in snap.progress.iter_mut() {
            progress.theta = 0.7;
        }
        let first = build(&snap).unwrap();
        let second = build(&snap).unwrap();
        for (a, b) in first.scores.iter().zip(second.scores.iter()) {
            assert_eq!(a.score, b.score);
            assert_eq!(a.level, b.level);
        }
    }

    #[test]
    fn level_cutoffs_sit_at_eighty_and_sixty_percent() {
        assert_eq!(level_for(80.0), LEVEL_HIGH);
        assert_eq!(level_for(79.9), LEVEL_MEDIUM);
        assert_eq!(level_for(60.0), LEVEL_MEDIUM);
        assert_eq!(level_for(59.9), LEVEL_LOW);
    }

    #[test]
    fn theta_normalization_is_clamped() {
        assert_eq!(percent_score(0.0), 50.0);
        assert_eq!(percent_score(2.0), 100.0);
        assert_eq!(percent_score(-2.0), 0.0);
        // A drifted theta outside the nominal range still lands in bounds.
        assert_eq!(percent_score(3.5), 100.0);
    }
}
