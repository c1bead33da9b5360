//! Public API surface for runtime consumers.
//!
//! Re-exports the provider trait, the command type providers answer with and
//! the runtime error type.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{ActionProvider, TurnCommand};
