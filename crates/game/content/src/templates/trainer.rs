//! CPU trainer templates.

/// A CPU trainer listed by the names of its catalog creatures.
///
/// The first five creatures form the battle team.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainerTemplate {
    pub name: String,
    pub creatures: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub coins: f64,
}
