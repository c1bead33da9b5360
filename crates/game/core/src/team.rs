//! Battle teams and combatant addressing.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::creature::Creature;

/// Which side of a battle a combatant fights on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// Friendly (player) side.
    Team1,
    /// Hostile side.
    Team2,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
        }
    }
}

/// Position of a creature inside a battle: side plus team index.
///
/// Ordering is team1 before team2, then by index; the scheduler's tie-break
/// follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId {
    pub side: Side,
    pub index: usize,
}

impl CombatantId {
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }

    pub const fn team1(index: usize) -> Self {
        Self::new(Side::Team1, index)
    }

    pub const fn team2(index: usize) -> Self {
        Self::new(Side::Team2, index)
    }
}

impl core::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.side, self.index)
    }
}

/// Ordered group of up to five borrowed creatures.
///
/// Insertion order is display order. The team borrows its creatures mutably
/// for its whole lifetime, so battle damage lands on the owner's roster.
#[derive(Debug, Default)]
pub struct Team<'a> {
    members: ArrayVec<&'a mut Creature, { BattleConfig::MAX_TEAM_SIZE }>,
}

impl<'a> Team<'a> {
    /// Builds a team. More than five members collapses to an empty team.
    pub fn new(members: Vec<&'a mut Creature>) -> Self {
        if members.len() > BattleConfig::MAX_TEAM_SIZE {
            return Self::default();
        }
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Team of exactly one creature.
    pub fn solo(creature: &'a mut Creature) -> Self {
        let mut members = ArrayVec::new();
        members.push(creature);
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.members.get(index).map(|c| &**c)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.members.get_mut(index).map(|c| &mut **c)
    }

    /// Two distinct members borrowed at once.
    pub(crate) fn pair_mut(
        &mut self,
        a: usize,
        b: usize,
    ) -> Option<(&mut Creature, &mut Creature)> {
        if a == b || a >= self.len() || b >= self.len() {
            return None;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (left, right) = self.members.split_at_mut(hi);
        let (first, second) = (&mut *left[lo], &mut *right[0]);
        Some(if a < b { (first, second) } else { (second, first) })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.members.iter().map(|c| &**c)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.members.iter_mut().map(|c| &mut **c)
    }

    /// Indices of members with positive HP.
    pub fn living_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
    }

    /// `true` when no member has positive HP (vacuously true when empty).
    pub fn is_wiped_out(&self) -> bool {
        self.iter().all(|c| !c.is_alive())
    }

    /// Sum of member levels.
    pub fn total_level(&self) -> u64 {
        self.iter().map(|c| u64::from(c.level())).sum()
    }

    pub fn restore_all(&mut self) {
        for creature in self.iter_mut() {
            creature.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use crate::creature::CreatureKind;
    use crate::stats::StatBlock;

    fn roster(n: usize) -> Vec<Creature> {
        (0..n)
            .map(|i| {
                Creature::new(
                    format!("c{i}"),
                    CreatureKind::Land,
                    StatBlock::new(100, 10, 10, 10, 10),
                    Vec::new(),
                )
            })
            .collect()
    }

    #[test]
    fn oversized_team_collapses_to_empty() {
        let mut creatures = roster(6);
        let team = Team::new(creatures.iter_mut().collect());
        assert!(team.is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut creatures = roster(3);
        let team = Team::new(creatures.iter_mut().collect());
        let names: Vec<&str> = team.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["c0", "c1", "c2"]);
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut creatures = roster(3);
        let mut team = Team::new(creatures.iter_mut().collect());

        let (a, b) = team.pair_mut(2, 0).unwrap();
        assert_eq!((a.name.as_str(), b.name.as_str()), ("c2", "c0"));
        assert!(team.pair_mut(1, 1).is_none());
        assert!(team.pair_mut(0, 3).is_none());
    }

    #[test]
    fn wiped_out_when_all_fainted() {
        let mut creatures = roster(2);
        creatures[0].stats.hp = BigDecimal::from(0);
        {
            let team = Team::new(creatures.iter_mut().collect());
            assert!(!team.is_wiped_out());
            assert_eq!(team.living_indices().collect::<Vec<_>>(), vec![1]);
        }
        creatures[1].stats.hp = BigDecimal::from(-5);
        let team = Team::new(creatures.iter_mut().collect());
        assert!(team.is_wiped_out());
    }

    #[test]
    fn combatant_ordering_puts_team1_first() {
        assert!(CombatantId::team1(4) < CombatantId::team2(0));
        assert_eq!(CombatantId::team2(1).to_string(), "team2#1");
    }
}
