//! Stat system.
//!
//! ```text
//! [ StatBlock ]  base + derived numbers, gauge, level/exp
//!      ↑
//! [ StatIncrease ]  rune effects folded in / out reversibly
//!      ↑
//! [ PercentModifiers ]  in-battle buffs and debuffs, cleared by restore()
//! ```
//!
//! ## Rune arithmetic
//!
//! Applying: `stat = stat × (1 + pct/100) + flat`.
//! Removing: `stat = (stat − flat) / (1 + pct/100)`, in the same field order.
//!
//! Both run on [`BigDecimal`](bigdecimal::BigDecimal), so the pair cancels
//! exactly at every rune rating.

pub mod block;
pub mod decimal;
pub mod increase;
pub mod modifiers;

pub use block::{StatBlock, triangular};
pub use decimal::{decimal, hundredths, pow10, to_f64};
pub use increase::StatIncrease;
pub use modifiers::PercentModifiers;
