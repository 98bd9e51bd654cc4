use battle_core::prelude::*;
use proptest::prelude::*;

fn archetype() -> impl Strategy<Value = Archetype> {
    prop_oneof![
        Just(Archetype::Warrior),
        Just(Archetype::Mage),
        Just(Archetype::Archer),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Attack),
        Just(Action::Special),
        Just(Action::Defend),
        Just(Action::Heal),
    ]
}

fn duel(a: Archetype, b: Archetype, seed: u64) -> BattleEngine {
    BattleEngine::with_seed(
        Participant::with_archetype(ParticipantId::One, "Alice", a),
        Participant::with_archetype(ParticipantId::Two, "Bob", b),
        seed,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn resources_stay_within_bounds(
        a in archetype(),
        b in archetype(),
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..120),
    ) {
        let mut engine = duel(a, b, seed);
        for action in actions {
            let _ = engine.perform(action);
            for id in [ParticipantId::One, ParticipantId::Two] {
                let c = engine.participant(id).combatant().unwrap();
                prop_assert!(c.current_hp() <= c.max_hp());
                prop_assert!(c.current_mp() <= c.max_mp());
                prop_assert_eq!(c.is_alive(), c.current_hp() > 0);
            }
        }
    }

    #[test]
    fn turns_alternate_and_rounds_follow_second_mover(
        a in archetype(),
        b in archetype(),
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..120),
    ) {
        let mut engine = duel(a, b, seed);
        let first = engine.first_mover();
        for action in actions {
            let was_over = engine.is_game_over();
            let current = engine.current_id();
            let round = engine.round();
            let log_len = engine.battle_log().len();

            let result = engine.perform(action);
            if was_over {
                prop_assert_eq!(result, Err(BattleError::GameOver));
                prop_assert_eq!(engine.battle_log().len(), log_len);
                continue;
            }

            let report = result.unwrap();
            prop_assert!(engine.battle_log().len() > log_len);
            if report.game_over {
                prop_assert_eq!(report.current_participant, current);
                prop_assert_eq!(report.round, round);
            } else {
                prop_assert_eq!(report.current_participant, current.other());
                let expected = if current.other() == first { round } else { round + 1 };
                prop_assert_eq!(report.round, expected);
            }
        }
    }

    #[test]
    fn battle_finishes_once_with_correct_winner(
        a in archetype(),
        b in archetype(),
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..200),
    ) {
        let mut engine = duel(a, b, seed);
        for action in actions {
            if let Ok(report) = engine.perform(action) {
                if let ActionOutcome::Attack { damage, .. } = report.outcome {
                    prop_assert!(damage >= 1);
                }
                if report.game_over {
                    let winner = report.winner.unwrap();
                    prop_assert!(engine.participant(winner).is_alive());
                    prop_assert!(!engine.participant(winner.other()).is_alive());
                }
            }
        }

        let p1 = engine.player1();
        let p2 = engine.player2();
        if engine.is_game_over() {
            prop_assert_eq!(p1.total_battles(), 1);
            prop_assert_eq!(p2.total_battles(), 1);
            prop_assert_eq!(p1.wins() + p2.wins(), 1);
        } else {
            prop_assert!(engine.winner().is_none());
            prop_assert_eq!(p1.total_battles() + p2.total_battles(), 0);
        }
    }

    #[test]
    fn reset_matches_fresh_engine(
        a in archetype(),
        b in archetype(),
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..60),
    ) {
        let mut engine = duel(a, b, seed);
        for action in actions {
            let _ = engine.perform(action);
        }
        engine.reset();
        let fresh = duel(a, b, seed);

        prop_assert_eq!(engine.round(), 1);
        prop_assert_eq!(engine.battle_log().len(), 1);
        prop_assert!(engine.winner().is_none());
        prop_assert_eq!(engine.phase(), BattlePhase::NotStarted);
        prop_assert_eq!(engine.current_id(), fresh.current_id());
        prop_assert_eq!(
            engine.game_state().player1.character,
            fresh.game_state().player1.character
        );
        prop_assert_eq!(
            engine.game_state().player2.character,
            fresh.game_state().player2.character
        );
    }
}
