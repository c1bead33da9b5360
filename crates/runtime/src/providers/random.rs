//! Random battle policy used by CPU trainers and wild creatures.

use std::sync::Mutex;

use async_trait::async_trait;
use battle_core::{Battle, BattleAction, CombatantId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::api::{ActionProvider, Result, RuntimeError, TurnCommand};

/// Picks one of three moves with equal probability:
///
/// 1. basic attack on a random living opponent
/// 2. basic heal on itself
/// 3. a random skill of its own; attack and debuff skills go to a random
///    living opponent, heal and buff skills to itself
///
/// The skill draw ignores MP: a skill the creature cannot pay for is still
/// submitted, the engine rejects it and the turn is forfeited. A creature
/// without skills basic-attacks instead. With no opponent left standing it
/// heals.
#[derive(Debug)]
pub struct RandomPolicyProvider {
    rng: Mutex<StdRng>,
}

impl RandomPolicyProvider {
    /// Provider with a reproducible move sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn choose(&self, actor: CombatantId, battle: &Battle<'_>) -> Result<TurnCommand> {
        let Some(creature) = battle.creature(actor) else {
            return Ok(TurnCommand::Pass);
        };
        let mut rng = self.rng.lock().map_err(|_| RuntimeError::ProviderPoisoned)?;

        let opponents: Vec<CombatantId> = battle
            .living_combatants()
            .filter(|id| id.side != actor.side)
            .collect();
        let Some(&opponent) = opponents.choose(&mut *rng) else {
            return Ok(TurnCommand::Act(BattleAction::basic_heal(actor)));
        };
        let attack = BattleAction::basic_attack(actor, opponent);

        let action = match rng.gen_range(0..3u8) {
            0 => attack,
            1 => BattleAction::basic_heal(actor),
            _ => {
                let skills = creature.skills();
                if skills.is_empty() {
                    attack
                } else {
                    let index = rng.gen_range(0..skills.len());
                    if skills[index].category().targets_opponent() {
                        BattleAction::skill(actor, opponent, index)
                    } else {
                        BattleAction::skill(actor, actor, index)
                    }
                }
            }
        };
        Ok(TurnCommand::Act(action))
    }
}

impl Default for RandomPolicyProvider {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[async_trait]
impl ActionProvider for RandomPolicyProvider {
    async fn provide_command(
        &self,
        actor: CombatantId,
        battle: &Battle<'_>,
    ) -> Result<TurnCommand> {
        let command = self.choose(actor, battle)?;
        tracing::trace!(%actor, ?command, "random policy picked");
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{
        ActionKind, BigDecimal, Creature, CreatureKind, DamageMultiplier, Skill, StatBlock, Team,
    };

    fn creature(skills: Vec<Skill>) -> Creature {
        let stats = StatBlock::new(100, 50, 10, 0, 10);
        Creature::new("c", CreatureKind::Water, stats, skills)
    }

    #[tokio::test]
    async fn commands_are_always_legal_targets() {
        let mut a = creature(vec![
            Skill::attack("Slash", 10.0, DamageMultiplier::attack_scaling(1.0), false),
            Skill::heal("Mend", 10.0, 20.0),
            Skill::self_buff("Focus", 10.0, 5.0, 5.0),
            Skill::enemy_debuff("Hex", 10.0, 5.0, 5.0),
        ]);
        let mut b = creature(Vec::new());
        let mut c = creature(Vec::new());
        c.stats.hp = BigDecimal::from(0);
        let battle = Battle::trainer(Team::solo(&mut a), Team::new(vec![&mut b, &mut c]));

        let actor = CombatantId::team1(0);
        let policy = RandomPolicyProvider::seeded(9);
        for _ in 0..200 {
            let TurnCommand::Act(action) = policy.provide_command(actor, &battle).await.unwrap()
            else {
                panic!("random policy only acts");
            };
            assert_eq!(action.actor, actor);
            let expected_target = match action.kind {
                ActionKind::BasicAttack => CombatantId::team2(0),
                ActionKind::BasicHeal => actor,
                ActionKind::UseSkill(0) | ActionKind::UseSkill(3) => CombatantId::team2(0),
                ActionKind::UseSkill(_) => actor,
            };
            assert_eq!(action.target, expected_target);
        }
    }

    #[tokio::test]
    async fn same_seed_same_choices() {
        let mut a = creature(vec![Skill::heal("Mend", 10.0, 20.0)]);
        let mut b = creature(Vec::new());
        let battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));
        let actor = CombatantId::team1(0);

        let first = RandomPolicyProvider::seeded(3);
        let second = RandomPolicyProvider::seeded(3);
        for _ in 0..20 {
            assert_eq!(
                first.provide_command(actor, &battle).await.unwrap(),
                second.provide_command(actor, &battle).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn unaffordable_skill_is_still_submitted() {
        let mut a = creature(vec![Skill::heal("Big Mend", 1_000.0, 20.0)]);
        let mut b = creature(Vec::new());
        let battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        let policy = RandomPolicyProvider::seeded(1);
        let mut drew_skill = false;
        for _ in 0..100 {
            let command = policy
                .provide_command(CombatantId::team1(0), &battle)
                .await
                .unwrap();
            let TurnCommand::Act(action) = command else {
                panic!("random policy only acts");
            };
            drew_skill |= action.kind == ActionKind::UseSkill(0);
        }
        assert!(drew_skill);
    }

    #[tokio::test]
    async fn skillless_creature_never_draws_a_skill() {
        let mut a = creature(Vec::new());
        let mut b = creature(Vec::new());
        let battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

        let policy = RandomPolicyProvider::seeded(5);
        for _ in 0..100 {
            let command = policy
                .provide_command(CombatantId::team1(0), &battle)
                .await
                .unwrap();
            let TurnCommand::Act(action) = command else {
                panic!("random policy only acts");
            };
            assert!(!matches!(action.kind, ActionKind::UseSkill(_)));
        }
    }
}
