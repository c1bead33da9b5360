//! Content templates.

mod creature;
mod trainer;

pub use creature::{CreatureTemplate, RuneTemplate};
pub use trainer::TrainerTemplate;
