// tests/property_tests.rs
//
// Свойства функции перехода на произвольных последовательностях действий.
//
// Проверяем:
//  1) после каждого шага состояние проходит validate();
//  2) текущий уровень каждого турнира остаётся в [1, число уровней];
//  3) encode -> decode возвращает равное состояние;
//  4) "прочитать всё" идемпотентно;
//  5) ID уведомлений уникальны.

use std::collections::HashSet;

use proptest::prelude::*;

use tournament_floor::engine::{apply, Action};
use tournament_floor::infra::persistence::{decode_state, encode_state};
use tournament_floor::infra::seed::{initial_state, WALK_IN_NAMES};
use tournament_floor::state::TournamentState;

const NOW: u64 = 1_700_000_000_000;

const TOURNAMENT_IDS: [&str; 5] = ["plo", "championship", "redraw-nlh", "closer", "ghost"];

/// Шаг сценария. Игрок для вылета выбирается по индексу среди текущих игроков.
#[derive(Clone, Debug)]
enum Step {
    Tick { tournament: usize, seconds: u32 },
    Next { tournament: usize },
    Prev { tournament: usize },
    Toggle { tournament: usize },
    Add { tournament: usize, name: usize },
    Bust { tournament: usize, player: usize },
    ClearRedraw { tournament: usize },
    MarkAll { tournament: usize },
}

fn step_strategy() -> impl Strategy<Value = Step> {
    let t = 0..TOURNAMENT_IDS.len();
    prop_oneof![
        3 => (t.clone(), 1u32..=2_000).prop_map(|(tournament, seconds)| Step::Tick { tournament, seconds }),
        1 => t.clone().prop_map(|tournament| Step::Next { tournament }),
        1 => t.clone().prop_map(|tournament| Step::Prev { tournament }),
        1 => t.clone().prop_map(|tournament| Step::Toggle { tournament }),
        2 => (t.clone(), 0..WALK_IN_NAMES.len()).prop_map(|(tournament, name)| Step::Add { tournament, name }),
        3 => (t.clone(), 0usize..100).prop_map(|(tournament, player)| Step::Bust { tournament, player }),
        1 => t.clone().prop_map(|tournament| Step::ClearRedraw { tournament }),
        1 => t.prop_map(|tournament| Step::MarkAll { tournament }),
    ]
}

fn tid(idx: usize) -> String {
    TOURNAMENT_IDS[idx].to_string()
}

/// Применить шаг. Время растёт на секунду за каждый тик.
fn run_step(mut state: TournamentState, step: &Step, at: &mut u64) -> TournamentState {
    match step {
        Step::Tick { tournament, seconds } => {
            for _ in 0..*seconds {
                *at += 1_000;
                state = apply(
                    state,
                    Action::TickClock {
                        tournament_id: tid(*tournament),
                    },
                    *at,
                );
            }
            state
        }
        Step::Next { tournament } => apply(state, Action::NextLevel { tournament_id: tid(*tournament) }, *at),
        Step::Prev { tournament } => apply(state, Action::PrevLevel { tournament_id: tid(*tournament) }, *at),
        Step::Toggle { tournament } => apply(state, Action::ToggleClock { tournament_id: tid(*tournament) }, *at),
        Step::Add { tournament, name } => apply(
            state,
            Action::AddPlayer {
                tournament_id: tid(*tournament),
                player_name: WALK_IN_NAMES[*name].to_string(),
            },
            *at,
        ),
        Step::Bust { tournament, player } => {
            let player_id = state
                .tournament(TOURNAMENT_IDS[*tournament])
                .and_then(|t| t.players().nth(*player))
                .map(|p| p.id.clone())
                .unwrap_or_else(|| "nobody".to_string());
            apply(
                state,
                Action::BustPlayer {
                    tournament_id: tid(*tournament),
                    player_id,
                },
                *at,
            )
        }
        Step::ClearRedraw { tournament } => apply(state, Action::ClearRedraw { tournament_id: tid(*tournament) }, *at),
        Step::MarkAll { tournament } => apply(
            state,
            Action::MarkAllNotificationsRead {
                tournament_id: tid(*tournament),
            },
            *at,
        ),
    }
}

fn levels_in_range(state: &TournamentState) -> bool {
    state.tournaments.iter().all(|t| {
        t.current_level >= 1 && t.current_level <= t.blind_structure.last_level()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_for_any_sequence(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let mut state = initial_state(NOW);
        let mut at = NOW;

        for step in &steps {
            state = run_step(state, step, &mut at);
            prop_assert!(state.validate().is_ok(), "invalid after {:?}", step);
            prop_assert!(levels_in_range(&state), "level out of range after {:?}", step);
        }

        let bytes = encode_state(&state).unwrap();
        prop_assert_eq!(decode_state(&bytes).unwrap(), state);
    }

    #[test]
    fn notification_ids_stay_unique(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let mut state = initial_state(NOW);
        let mut at = NOW;
        for step in &steps {
            state = run_step(state, step, &mut at);
        }

        let ids: HashSet<&str> = state.notifications.entries().iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(ids.len(), state.notifications.len());
    }

    #[test]
    fn mark_all_read_is_idempotent(
        steps in prop::collection::vec(step_strategy(), 0..30),
        tournament in 0..TOURNAMENT_IDS.len(),
    ) {
        let mut state = initial_state(NOW);
        let mut at = NOW;
        for step in &steps {
            state = run_step(state, step, &mut at);
        }

        let mark = || Action::MarkAllNotificationsRead { tournament_id: tid(tournament) };
        let once = apply(state, mark(), at);
        let twice = apply(once.clone(), mark(), at);
        prop_assert_eq!(once.unread_count(TOURNAMENT_IDS[tournament]), 0);
        prop_assert_eq!(twice, once);
    }
}
