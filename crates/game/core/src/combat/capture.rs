//! Wild capture.

use crate::rng::RngOracle;
use crate::stats::StatBlock;

/// Capture item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball {
    pub name: String,
    pub catch_rate: f64,
}

impl Ball {
    pub fn new(name: impl Into<String>, catch_rate: f64) -> Self {
        Self {
            name: name.into(),
            catch_rate,
        }
    }
}

/// `catch_rate + (1 − hp/max_hp)`. Not clamped: values above 1 always succeed.
pub fn capture_chance(ball: &Ball, wild: &StatBlock) -> f64 {
    ball.catch_rate + wild.hp_loss_fraction()
}

/// Draws one roll against [`capture_chance`].
pub fn capture_succeeds(ball: &Ball, wild: &StatBlock, rng: &mut impl RngOracle) -> bool {
    rng.uniform() <= capture_chance(ball, wild)
}
