use battle_core::{
    ActionOutcome, Battle, BattleAction, BattleFault, BattleKind, BattleStatus, CombatantId,
    Creature, CreatureKind, Side, Skill, StatBlock, Team,
};
use battle_runtime::{
    BasicAttackProvider, BattleEvent, BattleRunner, PassProvider, RandomPolicyProvider,
    RuntimeConfig, RuntimeError, ScriptedProvider, TurnCommand,
};
use tokio::sync::broadcast;

fn creature(hp: i64, attack: i64, defense: i64, speed: u32) -> Creature {
    Creature::new(
        "c",
        CreatureKind::Land,
        StatBlock::new(hp, 100, attack, defense, speed),
        Vec::new(),
    )
}

fn drain(rx: &mut broadcast::Receiver<BattleEvent>) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn single_basic_attack_wins() {
    let mut hero = creature(1000, 1000, 0, 100);
    let mut dummy = creature(500, 0, 0, 100);

    let mut runner = BattleRunner::new(RuntimeConfig::default())
        .with_providers(BasicAttackProvider, PassProvider);
    let mut events = runner.events().subscribe_all();

    let battle = Battle::trainer(Team::solo(&mut hero), Team::solo(&mut dummy));
    let report = runner.run(battle).await.unwrap();

    assert_eq!(report.status, BattleStatus::Team1Won);
    assert_eq!(report.turns, 1);
    assert_eq!(report.survivors, vec![0]);

    let events = drain(&mut events);
    assert!(matches!(
        events.first(),
        Some(BattleEvent::Started {
            kind: BattleKind::Trainer,
            ..
        })
    ));
    let damage = events.iter().find_map(|event| match event {
        BattleEvent::ActionResolved {
            outcome: ActionOutcome::Damaged { amount },
            ..
        } => Some(amount.clone()),
        _ => None,
    });
    assert!(damage.is_some_and(|amount| amount >= 500));
    assert!(matches!(
        events.last(),
        Some(BattleEvent::Ended {
            status: BattleStatus::Team1Won,
            ..
        })
    ));

    // restored after the battle
    assert_eq!(dummy.stats.hp, 500);
    assert_eq!(hero.stats.attack_gauge, 0.0);
}

#[tokio::test]
async fn rejected_command_forfeits_the_turn() {
    let mut hero = Creature::new(
        "hero",
        CreatureKind::Water,
        StatBlock::new(1000, 100, 1000, 0, 100),
        vec![Skill::heal("Mend", 10.0, 50.0)],
    );
    let mut foe = creature(500, 0, 0, 10);

    let actor = CombatantId::team1(0);
    let foe_id = CombatantId::team2(0);
    let script = ScriptedProvider::new([
        TurnCommand::Act(BattleAction::skill(actor, foe_id, 4)),
        TurnCommand::Flee,
        TurnCommand::Act(BattleAction::basic_attack(actor, foe_id)),
    ]);
    let mut runner =
        BattleRunner::new(RuntimeConfig::default()).with_providers(script, PassProvider);
    let mut events = runner.events().subscribe_all();

    let battle = Battle::trainer(Team::solo(&mut hero), Team::solo(&mut foe));
    let report = runner.run(battle).await.unwrap();

    assert_eq!(report.status, BattleStatus::Team1Won);
    assert_eq!(report.turns, 3);

    let codes: Vec<String> = drain(&mut events)
        .into_iter()
        .filter_map(|event| match event {
            BattleEvent::CommandRejected { code, .. } => Some(code),
            _ => None,
        })
        .collect();
    assert_eq!(codes, vec!["ACTION_UNKNOWN_SKILL", "CAPTURE_NOT_WILD_BATTLE"]);
}

#[tokio::test]
async fn random_policy_forfeits_unaffordable_skills() {
    let mut hero = Creature::new(
        "hero",
        CreatureKind::Water,
        StatBlock::new(1000, 100, 60, 0, 100),
        vec![Skill::heal("Big Mend", 1_000.0, 50.0)],
    );
    let mut foe = creature(500, 0, 0, 10);

    let mut runner = BattleRunner::new(RuntimeConfig::default())
        .with_providers(RandomPolicyProvider::seeded(11), PassProvider);
    let mut events = runner.events().subscribe_all();

    let battle = Battle::trainer(Team::solo(&mut hero), Team::solo(&mut foe));
    let report = runner.run(battle).await.unwrap();
    assert_eq!(report.status, BattleStatus::Team1Won);

    let codes: Vec<String> = drain(&mut events)
        .into_iter()
        .filter_map(|event| match event {
            BattleEvent::CommandRejected { code, .. } => Some(code),
            _ => None,
        })
        .collect();
    assert!(!codes.is_empty());
    assert!(codes.iter().all(|code| code == "ACTION_INSUFFICIENT_MP"));
}

#[tokio::test]
async fn turn_limit_aborts_and_restores() {
    let mut a = creature(100, 10, 0, 20);
    let mut b = creature(100, 10, 0, 10);

    let mut runner = BattleRunner::new(RuntimeConfig::default().with_max_turns(5))
        .with_providers(PassProvider, PassProvider);
    let battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

    let err = runner.run(battle).await.unwrap_err();
    assert!(matches!(err, RuntimeError::TurnLimitExceeded { limit: 5 }));
    assert_eq!(err.error_code(), "RUNTIME_TURN_LIMIT_EXCEEDED");
    assert_eq!(a.stats.attack_gauge, 0.0);
}

#[tokio::test]
async fn missing_provider_is_reported() {
    let mut a = creature(100, 10, 0, 20);
    let mut b = creature(100, 10, 0, 10);

    let mut runner = BattleRunner::new(RuntimeConfig::default());
    runner.set_team1_provider(PassProvider);
    let battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));

    let err = runner.run(battle).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::ProviderNotSet { side: Side::Team2 }
    ));
}

#[tokio::test]
async fn empty_roster_ends_without_a_turn() {
    let mut b = creature(100, 10, 0, 10);
    let mut runner = BattleRunner::new(RuntimeConfig::default())
        .with_providers(PassProvider, PassProvider);

    let battle = Battle::trainer(Team::default(), Team::solo(&mut b));
    let report = runner.run(battle).await.unwrap();

    assert_eq!(report.status, BattleStatus::Team2Won);
    assert_eq!(report.turns, 0);
    assert_eq!(report.reward, None);
}

#[tokio::test]
async fn zero_speed_everywhere_is_a_scheduler_error() {
    let mut a = creature(100, 10, 0, 0);
    let mut b = creature(100, 10, 0, 0);
    let mut runner = BattleRunner::new(RuntimeConfig::default())
        .with_providers(PassProvider, PassProvider);

    let battle = Battle::trainer(Team::solo(&mut a), Team::solo(&mut b));
    let err = runner.run(battle).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Turn(_)));
    assert_eq!(err.error_code(), "TURN_STALLED");
}

async fn random_battle(seed: u64) -> battle_core::BattleReport {
    let skills = || {
        vec![
            Skill::heal("Mend", 30.0, 40.0),
            Skill::enemy_debuff("Hex", 20.0, 10.0, 10.0),
        ]
    };
    let mut team1: Vec<Creature> = [18, 11]
        .into_iter()
        .map(|speed| {
            Creature::new(
                "ally",
                CreatureKind::Land,
                StatBlock::new(400, 120, 70, 20, speed),
                skills(),
            )
        })
        .collect();
    let mut team2: Vec<Creature> = [15, 9]
        .into_iter()
        .map(|speed| {
            Creature::new(
                "foe",
                CreatureKind::Water,
                StatBlock::new(400, 120, 70, 20, speed),
                skills(),
            )
        })
        .collect();

    let mut runner = BattleRunner::new(RuntimeConfig::default().with_seed(seed)).with_providers(
        RandomPolicyProvider::seeded(seed),
        RandomPolicyProvider::seeded(seed + 1),
    );
    let battle = Battle::trainer(
        Team::new(team1.iter_mut().collect()),
        Team::new(team2.iter_mut().collect()),
    );
    let report = runner.run(battle).await.unwrap();

    for creature in team1.iter().chain(team2.iter()) {
        assert_eq!(creature.stats.hp, creature.stats.max_hp);
        assert_eq!(creature.stats.mp, creature.stats.max_mp);
        assert!(creature.stats.modifiers.is_neutral());
    }
    report
}

#[tokio::test]
async fn random_battles_finish_and_replay_from_seed() {
    for seed in [1, 7, 42] {
        let first = random_battle(seed).await;
        assert!(first.status.winner().is_some());
        assert_eq!(random_battle(seed).await, first);
    }
}
