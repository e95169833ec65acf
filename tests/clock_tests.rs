// tests/clock_tests.rs
//
// Часы уровня.
//
// Проверяем:
//  1) тик при остатке > 1 просто отнимает секунду;
//  2) тик при остатке 1 переходит на следующий уровень и перезагружает длительность,
//     ровно одно уведомление "level";
//  3) тик на последнем уровне при остатке 1 останавливает часы (0, уровень тот же);
//  4) переход на перерыв даёт уведомление о перерыве;
//  5) next level на последнем уровне всё равно перезагружает и уведомляет;
//  6) prev level с уровня 1 остаётся на 1, но перезагружает время, без уведомления;
//  7) при ожидающей пересадке тик ничего не делает;
//  8) уровень всегда в [1, len] после любой последовательности действий.

use tournament_floor::domain::blinds::{BlindLevel, BlindStructure};
use tournament_floor::domain::chips::Chips;
use tournament_floor::domain::notification::NotificationKind;
use tournament_floor::domain::prizepool::Prizepool;
use tournament_floor::domain::redraw::{RedrawAssignment, RedrawPlan};
use tournament_floor::domain::tournament::{Tournament, TournamentStatus};
use tournament_floor::engine::{apply, Action, NotificationLog};
use tournament_floor::infra::ids::IdGenerator;
use tournament_floor::state::TournamentState;
use tournament_floor::time_ctrl::{self, format_clock, TickOutcome};

/// 1: 100/200/200 (20 мин), 2: перерыв 15 мин, 3: 200/400/400 (20 мин).
fn three_levels() -> BlindStructure {
    BlindStructure::new(vec![
        BlindLevel::new(1, 100, 200, 200, 20),
        BlindLevel::break_level(2, 15),
        BlindLevel::new(3, 200, 400, 400, 20),
    ])
}

fn live_tournament(level: u32, remaining: u32, running: bool) -> Tournament {
    Tournament {
        id: "t1".into(),
        name: "Test Event".into(),
        buy_in: Chips(100),
        status: TournamentStatus::Live,
        tables: Vec::new(),
        blind_structure: three_levels(),
        prizepool: Prizepool::default(),
        late_reg_end_level: 1,
        current_level: level,
        clock_running: running,
        clock_time_remaining: remaining,
        hands_per_table: 8,
        starting_chips: Chips(10_000),
        game_type: "No-Limit Hold'em".into(),
        pending_redraw: None,
        paid_out_players: None,
    }
}

fn state_with(t: Tournament) -> TournamentState {
    TournamentState {
        tournaments: vec![t],
        selected_tournament_id: Some("t1".into()),
        notifications: NotificationLog::new(),
        ids: IdGenerator::new(),
    }
}

fn tick(state: TournamentState, at: u64) -> TournamentState {
    apply(
        state,
        Action::TickClock {
            tournament_id: "t1".into(),
        },
        at,
    )
}

#[test]
fn tick_counts_down_one_second() {
    let state = tick(state_with(live_tournament(1, 600, true)), 1_000);

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.clock_time_remaining, 599);
    assert_eq!(t.current_level, 1);
    assert!(state.notifications.is_empty());
}

#[test]
fn paused_clock_does_not_tick() {
    let before = state_with(live_tournament(1, 600, false));
    let after = tick(before.clone(), 1_000);
    assert_eq!(before, after);
}

#[test]
fn tick_at_one_second_rolls_into_break() {
    let state = tick(state_with(live_tournament(1, 1, true)), 5_000);

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.current_level, 2);
    assert_eq!(t.clock_time_remaining, 15 * 60);
    assert!(t.clock_running);

    assert_eq!(state.notifications.len(), 1);
    let n = &state.notifications.entries()[0];
    assert_eq!(n.kind, NotificationKind::Level);
    assert_eq!(n.title, "Break");
    assert_eq!(n.message, "Break time: 15 minutes");
    assert_eq!(n.timestamp, 5_000);
    assert_eq!(n.tournament_id, "t1");
    assert!(!n.read);
}

#[test]
fn tick_out_of_break_cites_new_blinds() {
    let state = tick(state_with(live_tournament(2, 1, true)), 5_000);

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.current_level, 3);
    assert_eq!(t.clock_time_remaining, 20 * 60);

    let n = &state.notifications.entries()[0];
    assert_eq!(n.title, "Level Change");
    assert_eq!(n.message, "Level 3 starting. Blinds 200/400/400");
}

#[test]
fn tick_on_final_level_stops_clock() {
    let state = tick(state_with(live_tournament(3, 1, true)), 5_000);

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.current_level, 3);
    assert_eq!(t.clock_time_remaining, 0);
    assert!(!t.clock_running);
    assert!(state.notifications.is_empty());
}

#[test]
fn tick_outcome_reports_what_happened() {
    let mut t = live_tournament(1, 3, true);
    assert_eq!(time_ctrl::tick(&mut t), TickOutcome::Counted { remaining: 2 });
    assert_eq!(time_ctrl::tick(&mut t), TickOutcome::Counted { remaining: 1 });
    match time_ctrl::tick(&mut t) {
        TickOutcome::LevelAdvanced(change) => {
            assert_eq!(change.from, 1);
            assert_eq!(change.to, 2);
            assert!(change.level.is_break);
        }
        other => panic!("expected level advance, got {:?}", other),
    }

    let mut last = live_tournament(3, 1, true);
    assert_eq!(time_ctrl::tick(&mut last), TickOutcome::Exhausted);
    assert_eq!(time_ctrl::tick(&mut last), TickOutcome::Idle);
}

#[test]
fn next_level_reloads_full_duration() {
    let state = apply(
        state_with(live_tournament(1, 17, true)),
        Action::NextLevel {
            tournament_id: "t1".into(),
        },
        1_000,
    );

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.current_level, 2);
    assert_eq!(t.clock_time_remaining, 15 * 60);
    assert_eq!(state.notifications.len(), 1);
}

#[test]
fn next_level_on_last_level_still_notifies() {
    let state = apply(
        state_with(live_tournament(3, 42, false)),
        Action::NextLevel {
            tournament_id: "t1".into(),
        },
        1_000,
    );

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.current_level, 3);
    assert_eq!(t.clock_time_remaining, 20 * 60);
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(
        state.notifications.entries()[0].message,
        "Level 3 starting. Blinds 200/400/400"
    );
}

#[test]
fn prev_level_from_first_level_reloads_without_notification() {
    let state = apply(
        state_with(live_tournament(1, 5, true)),
        Action::PrevLevel {
            tournament_id: "t1".into(),
        },
        1_000,
    );

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.current_level, 1);
    assert_eq!(t.clock_time_remaining, 20 * 60);
    assert!(state.notifications.is_empty());
}

#[test]
fn prev_level_steps_back_one() {
    let state = apply(
        state_with(live_tournament(3, 5, true)),
        Action::PrevLevel {
            tournament_id: "t1".into(),
        },
        1_000,
    );

    let t = state.tournament("t1").unwrap();
    assert_eq!(t.current_level, 2);
    assert_eq!(t.clock_time_remaining, 15 * 60);
}

#[test]
fn toggle_flips_running_flag_only() {
    let state = apply(
        state_with(live_tournament(1, 100, true)),
        Action::ToggleClock {
            tournament_id: "t1".into(),
        },
        1_000,
    );
    let t = state.tournament("t1").unwrap();
    assert!(!t.clock_running);
    assert_eq!(t.clock_time_remaining, 100);
    assert!(state.notifications.is_empty());
}

#[test]
fn pending_redraw_freezes_ticks() {
    let mut t = live_tournament(1, 1, true);
    t.pending_redraw = Some(RedrawPlan::new(vec![RedrawAssignment {
        player_id: "p1".into(),
        player_name: "Someone".into(),
        from_table: 1,
        from_seat: 1,
        to_table: 2,
        to_seat: 3,
    }]));

    let before = state_with(t);
    let after = tick(before.clone(), 1_000);
    assert_eq!(before, after);
}

#[test]
fn level_stays_in_range_for_scripted_sequence() {
    let mut state = state_with(live_tournament(1, 2, true));
    let actions = [
        "next", "next", "next", "next", "tick", "prev", "prev", "prev", "prev", "tick", "tick",
        "next", "tick", "prev", "next", "next", "tick",
    ];

    for (i, a) in actions.iter().enumerate() {
        let tournament_id = "t1".to_string();
        let action = match *a {
            "next" => Action::NextLevel { tournament_id },
            "prev" => Action::PrevLevel { tournament_id },
            _ => Action::TickClock { tournament_id },
        };
        state = apply(state, action, i as u64);

        let t = state.tournament("t1").unwrap();
        assert!(t.current_level >= 1);
        assert!(t.current_level <= t.blind_structure.last_level());
    }
}

#[test]
fn clock_display_format() {
    assert_eq!(format_clock(1_047), "17:27");
    assert_eq!(format_clock(2_847), "47:27");
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(59), "00:59");
}
