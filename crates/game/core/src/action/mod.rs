//! Battle actions.
//!
//! An action is chosen by a controller for the current mover and resolved
//! against exactly one target. [`resolve`] validates everything up front, so a
//! rejected action leaves every creature untouched.

mod error;
mod kind;
mod resolve;

pub use error::ActionError;
pub use kind::{ActionKind, ActionOutcome, BattleAction};
pub use resolve::{Target, resolve};
