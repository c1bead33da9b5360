use bigdecimal::BigDecimal;

use crate::stats::pow10;

/// Payouts for winning a battle, fixed when the battle is constructed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub coins: BigDecimal,
    pub player_exp: BigDecimal,
    pub creature_exp: BigDecimal,
}

impl Reward {
    /// `10^total_level` for every payout, exact at any level total.
    pub fn for_opponent_levels(total_level: u64) -> Self {
        let amount = pow10(total_level);
        Self {
            coins: amount.clone(),
            player_exp: amount.clone(),
            creature_exp: amount,
        }
    }
}
