//! Running score update. A fixed-step additive rule, deliberately simpler
//! than an IRT maximum-likelihood estimate: theta moves by up to ±0.2 per
//! answer and is not clamped, so it drifts with consistently extreme answers.

pub const THETA_STEP: f64 = 0.1;
pub const NEUTRAL_RESPONSE: i16 = 3;

/// Reverse-scored statements invert the Likert response before it counts.
pub fn effective_response(reverse_scored: bool, raw: i16) -> i16 {
    if reverse_scored {
        6 - raw
    } else {
        raw
    }
}

pub fn updated_theta(theta: f64, reverse_scored: bool, raw: i16) -> f64 {
    theta + f64::from(effective_response(reverse_scored, raw) - NEUTRAL_RESPONSE) * THETA_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_answer_leaves_theta_unchanged() {
        assert_eq!(updated_theta(0.4, false, 3), 0.4);
        assert_eq!(updated_theta(0.4, true, 3), 0.4);
    }

    #[test]
    fn reverse_scoring_mirrors_the_scale() {
        for raw in 1..=5 {
            assert_eq!(effective_response(true, raw), 6 - raw);
            assert_eq!(effective_response(false, raw), raw);
        }
    }

    #[test]
    fn reversed_r_and_plain_6_minus_r_move_theta_identically() {
        for raw in 1..=5 {
            let reversed = updated_theta(0.0, true, raw);
            let plain = updated_theta(0.0, false, 6 - raw);
            assert_eq!(reversed, plain);
        }
    }

    #[test]
    fn step_size_is_a_tenth_per_scale_point() {
        assert!((updated_theta(0.0, false, 5) - 0.2).abs() < 1e-12);
        assert!((updated_theta(0.0, false, 1) + 0.2).abs() < 1e-12);
    }
}
