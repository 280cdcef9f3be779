//! Data-driven game balance
//!
//! Reward per apple and the score-driven speed table. Rates are ticks per
//! second; the tick interval is derived from the rate.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Tick rate that applies once the score is strictly above `above_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedStep {
    pub above_score: u64,
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Points per apple
    pub reward: u64,
    /// Ticks per second before any step applies
    pub base_rate: u32,
    /// Ascending by score, non-decreasing in rate
    pub speed_steps: Vec<SpeedStep>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            reward: APPLE_REWARD,
            base_rate: BASE_TICK_RATE,
            speed_steps: vec![
                SpeedStep {
                    above_score: FIRST_SPEED_THRESHOLD,
                    rate: FIRST_SPEED_RATE,
                },
                SpeedStep {
                    above_score: SECOND_SPEED_THRESHOLD,
                    rate: SECOND_SPEED_RATE,
                },
            ],
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<()> {
        if self.base_rate == 0 {
            return Err(SimError::InvalidTuning("base rate must be non-zero".into()));
        }
        let mut prev_score = None;
        let mut prev_rate = self.base_rate;
        for step in &self.speed_steps {
            if prev_score.is_some_and(|s| step.above_score <= s) {
                return Err(SimError::InvalidTuning(format!(
                    "speed step above {} is out of order",
                    step.above_score
                )));
            }
            if step.rate < prev_rate {
                return Err(SimError::InvalidTuning(format!(
                    "speed step above {} slows the game ({} < {})",
                    step.above_score, step.rate, prev_rate
                )));
            }
            prev_score = Some(step.above_score);
            prev_rate = step.rate;
        }
        Ok(())
    }

    /// Ticks per second at a given score
    pub fn rate_for_score(&self, score: u64) -> u32 {
        self.speed_steps
            .iter()
            .filter(|s| score > s.above_score)
            .map(|s| s.rate)
            .next_back()
            .unwrap_or(self.base_rate)
    }

    /// Milliseconds between ticks at a given score
    pub fn interval_ms(&self, score: u64) -> f64 {
        1000.0 / self.rate_for_score(score).max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_speed_table() {
        let tuning = Tuning::default();
        assert_eq!(tuning.rate_for_score(0), 5);
        assert_eq!(tuning.rate_for_score(10), 5);
        assert_eq!(tuning.rate_for_score(11), 9);
        assert_eq!(tuning.rate_for_score(25), 9);
        assert_eq!(tuning.rate_for_score(26), 12);
        assert_eq!(tuning.rate_for_score(1000), 12);
        assert!((tuning.interval_ms(0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        assert!(Tuning::default().validate().is_ok());

        let zero = Tuning {
            base_rate: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let unordered = Tuning {
            speed_steps: vec![
                SpeedStep { above_score: 25, rate: 9 },
                SpeedStep { above_score: 10, rate: 12 },
            ],
            ..Default::default()
        };
        assert!(unordered.validate().is_err());

        let slower = Tuning {
            speed_steps: vec![SpeedStep { above_score: 10, rate: 3 }],
            ..Default::default()
        };
        assert!(slower.validate().is_err());
    }

    #[test]
    fn test_no_steps_uses_base_rate() {
        let tuning = Tuning {
            speed_steps: Vec::new(),
            ..Default::default()
        };
        assert_eq!(tuning.rate_for_score(500), tuning.base_rate);
    }

    proptest! {
        #[test]
        fn prop_interval_never_grows_with_score(a in 0u64..200, b in 0u64..200) {
            let tuning = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(tuning.interval_ms(hi) <= tuning.interval_ms(lo));
        }
    }
}
