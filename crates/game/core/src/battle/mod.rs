//! Battle state machine.
//!
//! A [`Battle`] borrows two [`Team`]s for its lifetime. One turn is:
//!
//! 1. [`advance_to_next_actor`](Battle::advance_to_next_actor) selects the mover
//! 2. the caller submits one command for it ([`resolve_action`](Battle::resolve_action),
//!    or in wild battles [`attempt_capture`](Battle::attempt_capture) / [`flee`](Battle::flee))
//! 3. [`end_turn`](Battle::end_turn) lets the mover recover MP and checks for a wipe-out
//!
//! [`finish`](Battle::finish) consumes the battle, records the survivors and
//! restores every participant.

mod errors;
mod reward;
mod turns;

pub use errors::{BattleError, CaptureError};
pub use reward::Reward;
pub use turns::TurnError;

use crate::action::{ActionError, ActionOutcome, BattleAction, Target, resolve};
use crate::combat::{Ball, capture_succeeds};
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::rng::RngOracle;
use crate::team::{CombatantId, Side, Team};

/// Encounter flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleKind {
    /// Two trainers' teams.
    Trainer,
    /// A team against a single uncontrolled creature.
    Wild,
}

/// Where a battle stands. Every state but `InProgress` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleStatus {
    InProgress,
    Team1Won,
    Team2Won,
    /// Wild only: the wild creature was caught. No winner.
    Captured,
    /// Wild only: team1 fled. No winner.
    Fled,
}

impl BattleStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Team1Won => Some(Side::Team1),
            Self::Team2Won => Some(Side::Team2),
            _ => None,
        }
    }
}

/// Summary handed back by [`Battle::finish`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub kind: BattleKind,
    pub status: BattleStatus,
    /// Present only when team1 won.
    pub reward: Option<Reward>,
    /// Team1 indices still standing when the battle ended.
    pub survivors: Vec<usize>,
    pub turns: u32,
}

/// A single encounter between two borrowed teams.
#[derive(Debug)]
pub struct Battle<'a> {
    team1: Team<'a>,
    team2: Team<'a>,
    kind: BattleKind,
    status: BattleStatus,
    reward: Reward,
    current: Option<CombatantId>,
    acted: bool,
    turns: u32,
    config: BattleConfig,
}

impl<'a> Battle<'a> {
    fn new(team1: Team<'a>, team2: Team<'a>, kind: BattleKind) -> Self {
        let reward = Reward::for_opponent_levels(team2.total_level());
        Self {
            team1,
            team2,
            kind,
            status: BattleStatus::InProgress,
            reward,
            current: None,
            acted: false,
            turns: 0,
            config: BattleConfig::default(),
        }
    }

    /// Battle between two trainers' teams.
    pub fn trainer(team1: Team<'a>, team2: Team<'a>) -> Self {
        Self::new(team1, team2, BattleKind::Trainer)
    }

    /// Battle against one wild creature, which becomes team2.
    pub fn wild(team1: Team<'a>, wild: &'a mut Creature) -> Self {
        Self::new(team1, Team::solo(wild), BattleKind::Wild)
    }

    /// Replaces the default configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn kind(&self) -> BattleKind {
        self.kind
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    pub fn is_captured(&self) -> bool {
        self.status == BattleStatus::Captured
    }

    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Creature whose turn it is, once selected.
    pub fn current_mover(&self) -> Option<CombatantId> {
        self.current
    }

    /// Completed turns.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn roster_of(&self, side: Side) -> &Team<'a> {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut Team<'a> {
        match side {
            Side::Team1 => &mut self.team1,
            Side::Team2 => &mut self.team2,
        }
    }

    pub fn creature(&self, id: CombatantId) -> Option<&Creature> {
        self.roster_of(id.side).get(id.index)
    }

    fn creature_mut(&mut self, id: CombatantId) -> Option<&mut Creature> {
        self.roster_mut(id.side).get_mut(id.index)
    }

    /// Two distinct combatants borrowed at once, in argument order.
    fn pair_mut(
        &mut self,
        a: CombatantId,
        b: CombatantId,
    ) -> Option<(&mut Creature, &mut Creature)> {
        match (a.side, b.side) {
            (Side::Team1, Side::Team2) => {
                Some((self.team1.get_mut(a.index)?, self.team2.get_mut(b.index)?))
            }
            (Side::Team2, Side::Team1) => {
                Some((self.team2.get_mut(a.index)?, self.team1.get_mut(b.index)?))
            }
            (Side::Team1, Side::Team1) => self.team1.pair_mut(a.index, b.index),
            (Side::Team2, Side::Team2) => self.team2.pair_mut(a.index, b.index),
        }
    }

    /// Resolves one action for the current mover.
    ///
    /// Targeting the actor itself resolves as a self-targeted action.
    pub fn resolve_action(
        &mut self,
        action: BattleAction,
        rng: &mut impl RngOracle,
    ) -> Result<ActionOutcome, ActionError> {
        if self.is_over() {
            return Err(ActionError::BattleOver);
        }
        let current = self.current.ok_or(ActionError::NoCurrentMover)?;
        if action.actor != current {
            return Err(ActionError::NotActorsTurn {
                actor: action.actor,
            });
        }
        if self.acted {
            return Err(ActionError::AlreadyActed);
        }
        if self.creature(action.target).is_none() {
            return Err(ActionError::UnknownCombatant { id: action.target });
        }

        let outcome = if action.target == action.actor {
            let user = self
                .creature_mut(action.actor)
                .ok_or(ActionError::UnknownCombatant { id: action.actor })?;
            resolve(action.kind, user, Target::User, rng)?
        } else {
            let (user, target) = self
                .pair_mut(action.actor, action.target)
                .ok_or(ActionError::UnknownCombatant { id: action.target })?;
            resolve(action.kind, user, Target::Other(target), rng)?
        };

        self.acted = true;
        Ok(outcome)
    }

    /// Throws `ball` at the wild creature on a team1 turn.
    ///
    /// Success ends the battle as [`BattleStatus::Captured`]. A miss uses up
    /// the turn.
    pub fn attempt_capture(
        &mut self,
        ball: &Ball,
        rng: &mut impl RngOracle,
    ) -> Result<bool, CaptureError> {
        self.check_wild_command()?;
        let wild = self.team2.get(0).ok_or(CaptureError::NotWildBattle)?;

        let caught = capture_succeeds(ball, &wild.stats, rng);
        self.acted = true;
        if caught {
            self.status = BattleStatus::Captured;
        }
        Ok(caught)
    }

    /// Team1 runs from a wild battle on its turn.
    pub fn flee(&mut self) -> Result<(), CaptureError> {
        self.check_wild_command()?;
        self.acted = true;
        self.status = BattleStatus::Fled;
        Ok(())
    }

    fn check_wild_command(&self) -> Result<(), CaptureError> {
        if self.kind != BattleKind::Wild {
            return Err(CaptureError::NotWildBattle);
        }
        if self.is_over() {
            return Err(CaptureError::BattleOver);
        }
        if self.side_to_move() != Some(Side::Team1) {
            return Err(CaptureError::NotPlayersTurn);
        }
        if self.acted {
            return Err(CaptureError::AlreadyActed);
        }
        Ok(())
    }

    /// Closes the current turn: the mover recovers MP, then a wiped-out side loses.
    pub fn end_turn(&mut self) -> BattleStatus {
        if let Some(mover) = self.current.take() {
            if let Some(creature) = self.creature_mut(mover) {
                creature.recover_mp();
            }
            self.turns += 1;
        }
        self.acted = false;
        self.check_outcome()
    }

    /// Ends an in-progress battle if a side is wiped out.
    ///
    /// Team2 is checked first, so a simultaneous wipe counts as a team1 win.
    /// An empty roster counts as wiped out.
    pub fn check_outcome(&mut self) -> BattleStatus {
        if self.status == BattleStatus::InProgress {
            if self.team2.is_wiped_out() {
                self.status = BattleStatus::Team1Won;
            } else if self.team1.is_wiped_out() {
                self.status = BattleStatus::Team2Won;
            }
        }
        self.status
    }

    /// Ends the battle: records team1 survivors, then restores every participant.
    pub fn finish(mut self) -> BattleReport {
        let survivors = self.team1.living_indices().collect();
        let reward = (self.status == BattleStatus::Team1Won).then(|| self.reward.clone());

        self.team1.restore_all();
        self.team2.restore_all();

        BattleReport {
            kind: self.kind,
            status: self.status,
            reward,
            survivors,
            turns: self.turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::creature::CreatureKind;
    use crate::rng::{FixedRoll, PcgRng};
    use crate::skill::Skill;
    use crate::stats::StatBlock;
    use bigdecimal::BigDecimal;

    fn creature(hp: i64, attack: i64, speed: u32) -> Creature {
        Creature::new(
            "c",
            CreatureKind::Land,
            StatBlock::new(hp, 120, attack, 0, speed),
            Vec::new(),
        )
    }

    fn leveled(level: u32) -> Creature {
        Creature::new(
            "lv",
            CreatureKind::Land,
            StatBlock::new(100, 10, 10, 0, 10).with_level(level),
            Vec::new(),
        )
    }

    #[test]
    fn reward_is_fixed_from_team2_levels() {
        let mut a = leveled(7);
        let mut b = leveled(2);
        let mut c = leveled(3);
        let battle = Battle::trainer(Team::solo(&mut a), Team::new(vec![&mut b, &mut c]));

        assert_eq!(battle.reward().coins, 100_000);
        assert_eq!(battle.reward().creature_exp, 100_000);
    }

    #[test]
    fn one_strong_attack_wins() {
        let mut hero = creature(1000, 1000, 100);
        let mut dummy = creature(500, 0, 100);
        let mut battle = Battle::trainer(Team::solo(&mut hero), Team::solo(&mut dummy));
        let mut rng = PcgRng::new(1);

        let mover = battle.advance_to_next_actor().unwrap();
        assert_eq!(mover, CombatantId::team1(0));
        battle
            .resolve_action(BattleAction::basic_attack(mover, CombatantId::team2(0)), &mut rng)
            .unwrap();
        assert_eq!(battle.end_turn(), BattleStatus::Team1Won);
        assert_eq!(battle.winner(), Some(Side::Team1));

        let report = battle.finish();
        assert_eq!(report.survivors, vec![0]);
        assert_eq!(report.reward.map(|r| r.coins), Some(BigDecimal::from(10)));
        assert_eq!(report.turns, 1);
        assert_eq!(dummy.stats.hp, 500);
    }

    #[test]
    fn only_the_mover_may_act_and_only_once() {
        let mut a = creature(1000, 1, 100);
        let mut b = creature(1000, 1, 10);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));
        let mut rng = FixedRoll(0.5);

        let attack = BattleAction::basic_attack(CombatantId::team2(0), CombatantId::team1(0));
        assert_eq!(
            battle.resolve_action(attack, &mut rng),
            Err(ActionError::NoCurrentMover)
        );

        let mover = battle.advance_to_next_actor().unwrap();
        assert_eq!(
            battle.resolve_action(attack, &mut rng),
            Err(ActionError::NotActorsTurn {
                actor: CombatantId::team2(0)
            })
        );

        let heal = BattleAction::basic_heal(mover);
        battle.resolve_action(heal, &mut rng).unwrap();
        assert_eq!(
            battle.resolve_action(heal, &mut rng),
            Err(ActionError::AlreadyActed)
        );
    }

    #[test]
    fn unknown_target_is_rejected() {
        let mut a = creature(1000, 1, 100);
        let mut b = creature(1000, 1, 10);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        let mover = battle.advance_to_next_actor().unwrap();
        let bad = BattleAction::basic_attack(mover, CombatantId::team2(3));
        assert_eq!(
            battle.resolve_action(bad, &mut FixedRoll(0.0)),
            Err(ActionError::UnknownCombatant {
                id: CombatantId::team2(3)
            })
        );
    }

    #[test]
    fn end_turn_recovers_mover_mp() {
        let mut a = Creature::new(
            "focus",
            CreatureKind::Land,
            StatBlock::new(1000, 120, 1, 0, 100),
            vec![Skill::self_buff("Focus", 60.0, 10.0, 10.0)],
        );
        let mut b = creature(1000, 1, 10);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        let mover = battle.advance_to_next_actor().unwrap();
        battle
            .resolve_action(BattleAction::skill(mover, mover, 0), &mut FixedRoll(0.0))
            .unwrap();
        assert_eq!(battle.creature(mover).unwrap().stats.mp, 60);

        battle.end_turn();
        assert_eq!(battle.creature(mover).unwrap().stats.mp, 70);
    }

    #[test]
    fn wild_capture_and_flee_rules() {
        let mut hero = creature(1000, 1, 100);
        let mut wild = creature(1000, 1, 10);
        wild.stats.hp = BigDecimal::from(0);
        let mut battle = Battle::wild(Team::solo(&mut hero), &mut wild);
        let ball = Ball::new("Great", 0.5);

        assert_eq!(
            battle.attempt_capture(&ball, &mut PcgRng::new(3)),
            Err(CaptureError::NotPlayersTurn)
        );
        battle.advance_to_next_actor().unwrap();
        assert_eq!(battle.attempt_capture(&ball, &mut PcgRng::new(3)), Ok(true));
        assert!(battle.is_captured());
        assert_eq!(battle.winner(), None);
        assert_eq!(battle.flee(), Err(CaptureError::BattleOver));

        let report = battle.finish();
        assert_eq!(report.status, BattleStatus::Captured);
        assert_eq!(report.reward, None);
        assert_eq!(wild.stats.hp, 1000);
    }

    #[test]
    fn trainer_battles_cannot_capture_or_flee() {
        let mut a = creature(1000, 1, 100);
        let mut b = creature(1000, 1, 10);
        let mut battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));
        battle.advance_to_next_actor().unwrap();

        assert_eq!(battle.flee(), Err(CaptureError::NotWildBattle));
        assert_eq!(
            battle.attempt_capture(&Ball::new("b", 1.0), &mut FixedRoll(0.0)),
            Err(CaptureError::NotWildBattle)
        );
    }

    #[test]
    fn empty_team1_loses_before_any_turn() {
        let mut b = creature(10, 0, 10);
        let mut battle = Battle::trainer(Team::default(), Team::solo(&mut b));

        assert_eq!(battle.check_outcome(), BattleStatus::Team2Won);
        assert_eq!(battle.turns(), 0);
    }

    #[test]
    fn team2_win_when_team1_wiped() {
        let mut weak = creature(10, 0, 10);
        let mut strong = creature(1000, 500, 100);
        let mut battle = Battle::trainer(Team::solo(&mut weak), Team::solo(&mut strong));

        let mover = battle.advance_to_next_actor().unwrap();
        assert_eq!(mover, CombatantId::team2(0));
        battle
            .resolve_action(
                BattleAction::new(mover, CombatantId::team1(0), ActionKind::BasicAttack),
                &mut FixedRoll(0.0),
            )
            .unwrap();
        assert_eq!(battle.end_turn(), BattleStatus::Team2Won);
        assert_eq!(
            battle.advance_to_next_actor(),
            Err(TurnError::BattleOver)
        );

        let report = battle.finish();
        assert!(report.survivors.is_empty());
        assert_eq!(report.reward, None);
    }
}
