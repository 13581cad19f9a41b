//! Wealth-score progression.
//!
//! Scores start in a mid-band and drift upward by a small random step per
//! completed day, clamped to a ceiling so the dashboard curve flattens
//! out instead of hitting 100.

use rand::Rng;

/// Scores never exceed this.
pub const SCORE_CEILING: i32 = 92;

/// Inclusive band for a user's first score.
pub const INITIAL_MIN: i32 = 35;
pub const INITIAL_MAX: i32 = 65;

/// Largest single-day increase.
pub const MAX_DAILY_GAIN: i32 = 4;

/// Score for a user's first completed session.
pub fn initial_score<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(INITIAL_MIN..=INITIAL_MAX)
}

/// Score for a completed session following one scored `previous`.
///
/// Non-decreasing: always `previous..=min(previous + MAX_DAILY_GAIN,
/// SCORE_CEILING)`.
pub fn next_score<R: Rng + ?Sized>(previous: i32, rng: &mut R) -> i32 {
    let gained = previous + rng.random_range(1..=MAX_DAILY_GAIN);
    gained.min(SCORE_CEILING).max(previous)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn initial_score_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let score = initial_score(&mut rng);
            assert!((INITIAL_MIN..=INITIAL_MAX).contains(&score));
        }
    }

    #[test]
    fn progression_is_non_decreasing_and_capped() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut score = initial_score(&mut rng);
        for _ in 0..100 {
            let next = next_score(score, &mut rng);
            assert!(next >= score);
            assert!(next <= SCORE_CEILING);
            score = next;
        }
        assert_eq!(score, SCORE_CEILING);
    }

    #[test]
    fn score_at_ceiling_stays_at_ceiling() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(next_score(SCORE_CEILING, &mut rng), SCORE_CEILING);
    }
}
