//! Trainers: creature rosters, battle teams and progression.

use arrayvec::ArrayVec;
use bigdecimal::{BigDecimal, Zero};

use crate::battle::Reward;
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::error::{BattleFault, ErrorSeverity};
use crate::stats::pow10;
use crate::team::Team;

/// Errors from editing a trainer's battle team.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainerError {
    #[error("roster has no creature at index {index}")]
    UnknownCreature { index: usize },

    #[error("creature {index} is already in the battle team")]
    AlreadyInTeam { index: usize },

    #[error("battle team is full")]
    TeamFull,
}

impl BattleFault for TrainerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCreature { .. } | Self::AlreadyInTeam { .. } => ErrorSeverity::Validation,
            Self::TeamFull => ErrorSeverity::Recoverable,
        }
    }
}

/// A trainer (player or CPU).
///
/// The trainer owns its creatures. The battle team is a list of roster
/// indices; [`battle_team`](Self::battle_team) lends those creatures out as a
/// [`Team`] for one battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trainer {
    pub name: String,
    roster: Vec<Creature>,
    team: ArrayVec<usize, { BattleConfig::MAX_TEAM_SIZE }>,
    pub coins: BigDecimal,
    pub exp: BigDecimal,
    pub required_exp: BigDecimal,
    pub level: u32,
    /// Times this trainer has lost as the hostile side.
    pub times_beaten: u32,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Vec::new(),
            team: ArrayVec::new(),
            coins: BigDecimal::zero(),
            exp: BigDecimal::zero(),
            required_exp: BigDecimal::from(BattleConfig::INITIAL_REQUIRED_EXP),
            level: 1,
            times_beaten: 0,
        }
    }

    /// Trainer whose roster is `creatures`, the first five forming the team.
    pub fn with_team(name: impl Into<String>, creatures: Vec<Creature>) -> Self {
        let mut trainer = Self::new(name);
        for creature in creatures {
            let index = trainer.add_to_roster(creature);
            // Beyond five the creature only joins the roster.
            let _ = trainer.add_to_team(index);
        }
        trainer
    }

    pub fn roster(&self) -> &[Creature] {
        &self.roster
    }

    pub fn creature(&self, index: usize) -> Option<&Creature> {
        self.roster.get(index)
    }

    pub fn creature_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.roster.get_mut(index)
    }

    /// Roster indices of the battle team, in battle order.
    pub fn team_indices(&self) -> &[usize] {
        &self.team
    }

    /// Adds a creature to the roster, returning its index.
    pub fn add_to_roster(&mut self, creature: Creature) -> usize {
        self.roster.push(creature);
        self.roster.len() - 1
    }

    pub fn add_to_team(&mut self, index: usize) -> Result<(), TrainerError> {
        if index >= self.roster.len() {
            return Err(TrainerError::UnknownCreature { index });
        }
        if self.team.contains(&index) {
            return Err(TrainerError::AlreadyInTeam { index });
        }
        self.team
            .try_push(index)
            .map_err(|_| TrainerError::TeamFull)
    }

    /// Removes a creature from the battle team (it stays in the roster).
    pub fn remove_from_team(&mut self, index: usize) -> bool {
        match self.team.iter().position(|&i| i == index) {
            Some(pos) => {
                self.team.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Lends the battle-team creatures out, in team order.
    pub fn battle_team(&mut self) -> Team<'_> {
        let order = &self.team;
        let mut picked: Vec<(usize, &mut Creature)> = self
            .roster
            .iter_mut()
            .enumerate()
            .filter_map(|(i, c)| order.iter().position(|&t| t == i).map(|pos| (pos, c)))
            .collect();
        picked.sort_by_key(|(pos, _)| *pos);
        Team::new(picked.into_iter().map(|(_, c)| c).collect())
    }

    /// Levels up while `exp >= required_exp`: `required_exp *= 10^level`.
    pub fn level_up(&mut self) -> u32 {
        let mut gained = 0;
        while self.exp >= self.required_exp {
            self.level += 1;
            self.required_exp *= pow10(u64::from(self.level));
            gained += 1;
        }
        gained
    }

    /// Pays out a battle reward.
    ///
    /// Coins and experience go to the trainer; creature experience goes to
    /// each team member at a position listed in `survivors`.
    pub fn apply_reward(&mut self, reward: &Reward, survivors: &[usize]) {
        self.coins += &reward.coins;
        self.exp += &reward.player_exp;
        self.level_up();

        for &position in survivors {
            let Some(&index) = self.team.get(position) else {
                continue;
            };
            if let Some(creature) = self.roster.get_mut(index) {
                creature.gain_exp(&reward.creature_exp);
            }
        }
    }

    /// Takes in a newly caught creature; it joins the team if there is room.
    /// Returns its roster index.
    pub fn adopt(&mut self, creature: Creature) -> usize {
        let index = self.add_to_roster(creature);
        let _ = self.add_to_team(index);
        index
    }

    /// Records a loss as the hostile side and levels up the roster as far as
    /// each creature's experience allows.
    pub fn record_defeat(&mut self) {
        self.times_beaten += 1;
        for creature in &mut self.roster {
            creature.level_up();
        }
    }
}
