use super::{Rune, RuneError};
use crate::config::BattleConfig;

/// Fixed array of rune slots numbered `1..=8`, each holding at most one rune.
///
/// Pure storage: folding the rune's increase into the stat block is done by
/// [`Creature::place_rune`](crate::Creature::place_rune).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneSlots {
    slots: [Option<Rune>; BattleConfig::RUNE_SLOTS],
}

impl RuneSlots {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(slot: u8) -> Result<usize, RuneError> {
        if (Rune::MIN_SLOT..=Rune::MAX_SLOT).contains(&slot) {
            Ok(usize::from(slot - Rune::MIN_SLOT))
        } else {
            Err(RuneError::SlotOutOfRange { slot })
        }
    }

    /// Returns the rune in `slot`, if any. Out-of-range slots read as empty.
    pub fn get(&self, slot: u8) -> Option<&Rune> {
        Self::index(slot).ok().and_then(|i| self.slots[i].as_ref())
    }

    pub fn is_occupied(&self, slot: u8) -> bool {
        self.get(slot).is_some()
    }

    /// Stores `rune` in its own slot, returning whatever was there before.
    pub(crate) fn insert(&mut self, rune: Rune) -> Result<Option<Rune>, RuneError> {
        let index = Self::index(rune.slot())?;
        Ok(self.slots[index].replace(rune))
    }

    /// Takes the rune out of `slot`.
    pub(crate) fn take(&mut self, slot: u8) -> Result<Rune, RuneError> {
        let index = Self::index(slot)?;
        self.slots[index].take().ok_or(RuneError::SlotEmpty { slot })
    }

    /// Occupied slots as `(slot_number, rune)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Rune)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, rune)| rune.as_ref().map(|r| (i as u8 + Rune::MIN_SLOT, r)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
