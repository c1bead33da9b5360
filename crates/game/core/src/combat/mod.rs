//! Combat formulas.
//!
//! Pure functions over [`StatBlock`](crate::stats::StatBlock)s. Nothing here
//! mutates state; the action resolver applies the numbers they return.
//!
//! - `basic_damage` / `skill_damage`: raw damage, floored at zero
//! - `resist_chance` / `debuff_lands`: enemy-debuff resist check
//! - `capture_chance` / `capture_succeeds`: wild capture roll

pub mod capture;
pub mod damage;
pub mod resist;

pub use capture::{Ball, capture_chance, capture_succeeds};
pub use damage::{basic_damage, basic_heal_amount, skill_damage};
pub use resist::{debuff_lands, resist_chance};
