//! Attack-gauge turn scheduler.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::error::{BattleFault, ErrorSeverity};
use crate::team::{CombatantId, Side};

use super::Battle;

/// Errors that can occur while selecting the next mover.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("battle is already over")]
    BattleOver,

    /// No living combatant has positive attack speed or a full gauge.
    #[error("no living combatant can ever fill its attack gauge")]
    Stalled,

    #[error("no combatant became ready within {limit} ticks")]
    TickLimitExceeded { limit: u32 },
}

impl BattleFault for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BattleOver => ErrorSeverity::Validation,
            Self::Stalled | Self::TickLimitExceeded { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleOver => "TURN_BATTLE_OVER",
            Self::Stalled => "TURN_STALLED",
            Self::TickLimitExceeded { .. } => "TURN_TICK_LIMIT_EXCEEDED",
        }
    }
}

type ReadySet = ArrayVec<CombatantId, { 2 * BattleConfig::MAX_TEAM_SIZE }>;

/// Scheduling methods for Battle.
impl<'a> Battle<'a> {
    /// Ticks the shared clock until someone is ready, then selects the mover.
    ///
    /// Each round collects the living combatants whose gauge is full, then
    /// ticks everybody once. Rounds repeat while nobody was ready, so every
    /// call ticks at least once. Among the ready set the strictly highest
    /// gauge wins; ties go to the first in team1-then-team2 order.
    ///
    /// The winner's gauge is not reset.
    pub fn advance_to_next_actor(&mut self) -> Result<CombatantId, TurnError> {
        if self.is_over() {
            return Err(TurnError::BattleOver);
        }
        if !self.someone_can_become_ready() {
            return Err(TurnError::Stalled);
        }

        let limit = self.config.max_ticks_per_turn;
        let mut ticks = 0u32;
        loop {
            let ready = self.ready_combatants();
            self.tick();
            ticks += 1;

            if let Some(mover) = self.fullest(&ready) {
                self.current = Some(mover);
                self.acted = false;
                return Ok(mover);
            }
            if ticks >= limit {
                return Err(TurnError::TickLimitExceeded { limit });
            }
        }
    }

    /// Adds `attack_speed · 0.07` to every combatant's gauge, fainted or not.
    pub fn tick(&mut self) {
        for creature in self.team1.iter_mut().chain(self.team2.iter_mut()) {
            creature.stats.tick_gauge();
        }
    }

    /// Living combatants in fixed order.
    pub fn living_combatants(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.team1
            .living_indices()
            .map(CombatantId::team1)
            .chain(self.team2.living_indices().map(CombatantId::team2))
    }

    fn ready_combatants(&self) -> ReadySet {
        self.living_combatants()
            .filter(|&id| {
                self.creature(id)
                    .is_some_and(|c| c.stats.gauge_is_full())
            })
            .collect()
    }

    fn fullest(&self, ready: &ReadySet) -> Option<CombatantId> {
        let mut best: Option<(CombatantId, f64)> = None;
        for &id in ready {
            let Some(gauge) = self.creature(id).map(|c| c.stats.attack_gauge) else {
                continue;
            };
            match best {
                Some((_, top)) if gauge <= top => {}
                _ => best = Some((id, gauge)),
            }
        }
        best.map(|(id, _)| id)
    }

    fn someone_can_become_ready(&self) -> bool {
        self.living_combatants().any(|id| {
            self.creature(id)
                .is_some_and(|c| c.stats.attack_speed > 0 || c.stats.gauge_is_full())
        })
    }

    /// Side of the current mover, if any.
    pub fn side_to_move(&self) -> Option<Side> {
        self.current.map(|id| id.side)
    }
}

#[cfg(test)]
mod tests {
    use crate::battle::Battle;
    use crate::creature::{Creature, CreatureKind};
    use crate::stats::StatBlock;
    use crate::team::{CombatantId, Team};
    use bigdecimal::BigDecimal;

    use super::TurnError;

    fn with_speed(speed: u32) -> Creature {
        Creature::new(
            "c",
            CreatureKind::Land,
            StatBlock::new(100, 10, 10, 0, speed),
            Vec::new(),
        )
    }

    #[test]
    fn ticks_at_least_once_and_picks_fastest() {
        let mut a = with_speed(10);
        let mut b = with_speed(20);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        let mover = battle.advance_to_next_actor().unwrap();
        assert_eq!(mover, CombatantId::team2(0));

        let gauge = battle.creature(mover).unwrap().stats.attack_gauge;
        assert!(gauge >= 1.0);
    }

    #[test]
    fn ties_go_to_team1_first() {
        let mut a = with_speed(100);
        let mut b = with_speed(100);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        assert_eq!(battle.advance_to_next_actor(), Ok(CombatantId::team1(0)));
    }

    #[test]
    fn gauge_is_not_reset_so_fastest_acts_again() {
        let mut a = with_speed(50);
        let mut b = with_speed(10);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        for _ in 0..5 {
            assert_eq!(battle.advance_to_next_actor(), Ok(CombatantId::team1(0)));
            battle.end_turn();
        }
    }

    #[test]
    fn fainted_creatures_are_never_selected() {
        let mut a = with_speed(10);
        let mut fast_but_fainted = with_speed(90);
        fast_but_fainted.stats.hp = BigDecimal::from(0);
        let mut b = with_speed(10);
        let mut battle = Battle::trainer(
            Team::new(vec![&mut a, &mut fast_but_fainted]),
            Team::solo(&mut b),
        );

        let mover = battle.advance_to_next_actor().unwrap();
        assert_ne!(mover, CombatantId::team1(1));
    }

    #[test]
    fn zero_speed_everywhere_stalls() {
        let mut a = with_speed(0);
        let mut b = with_speed(0);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        assert_eq!(battle.advance_to_next_actor(), Err(TurnError::Stalled));
    }

    #[test]
    fn every_mover_is_ready_and_maximal() {
        let mut t1: Vec<Creature> = [3, 17, 40].into_iter().map(with_speed).collect();
        let mut t2: Vec<Creature> = [25, 8].into_iter().map(with_speed).collect();
        let mut battle = Battle::trainer(
            Team::new(t1.iter_mut().collect()),
            Team::new(t2.iter_mut().collect()),
        );

        for _ in 0..50 {
            let mover = battle.advance_to_next_actor().unwrap();
            let top = battle.creature(mover).unwrap().stats.attack_gauge;
            assert!(top >= 1.0);
            for id in battle.living_combatants().collect::<Vec<_>>() {
                let gauge = battle.creature(id).unwrap().stats.attack_gauge;
                if gauge >= 1.0 {
                    assert!(gauge <= top);
                }
            }
            battle.end_turn();
        }
    }
}
