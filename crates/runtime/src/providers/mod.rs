//! Stock action providers.

mod fixed;
mod random;

pub use fixed::{BasicAttackProvider, PassProvider, ScriptedProvider};
pub use random::RandomPolicyProvider;
