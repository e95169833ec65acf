// tests/registrar_tests.rs
//
// Регистрация и вылет игроков.
//
// Проверяем:
//  1) новый игрок садится за самый пустой стол на младшее свободное место;
//  2) при равенстве занятости выигрывает стол, стоящий раньше;
//  3) нет свободных мест / нет турнира -> no-op без уведомления;
//  4) вылет освобождает место и даёт ровно одно уведомление "action";
//  5) вылет неизвестного игрока не меняет состояние ни на байт.

use tournament_floor::domain::blinds::{BlindLevel, BlindStructure};
use tournament_floor::domain::chips::Chips;
use tournament_floor::domain::notification::NotificationKind;
use tournament_floor::domain::player::Player;
use tournament_floor::domain::prizepool::Prizepool;
use tournament_floor::domain::table::{Seat, Table};
use tournament_floor::domain::tournament::{Tournament, TournamentStatus};
use tournament_floor::engine::{apply, Action, NotificationLog};
use tournament_floor::infra::ids::IdGenerator;
use tournament_floor::state::TournamentState;
use tournament_floor::tournament::registrar::find_open_seat;

/// Турнир с заданной занятостью столов; места заполняются с первого.
fn tournament_with_occupancy(occupancy: &[usize], seats: u8) -> Tournament {
    let tables = occupancy
        .iter()
        .enumerate()
        .map(|(idx, &filled)| {
            let number = idx as u32 + 1;
            let table_id = format!("t1-table-{number}");
            let seats = (1..=seats)
                .map(|pos| Seat {
                    position: pos,
                    player: (usize::from(pos) <= filled).then(|| {
                        Player::new(
                            format!("p-{number}-{pos}"),
                            format!("Player {number}-{pos}"),
                            Chips(25_000),
                            table_id.clone(),
                            pos,
                        )
                    }),
                })
                .collect();
            Table {
                id: table_id,
                number,
                seats,
            }
        })
        .collect();

    Tournament {
        id: "t1".into(),
        name: "$400 PLO".into(),
        buy_in: Chips(400),
        status: TournamentStatus::Live,
        tables,
        blind_structure: BlindStructure::new(vec![BlindLevel::new(1, 100, 200, 200, 30)]),
        prizepool: Prizepool::default(),
        late_reg_end_level: 1,
        current_level: 1,
        clock_running: true,
        clock_time_remaining: 900,
        hands_per_table: seats,
        starting_chips: Chips(20_000),
        game_type: "Pot-Limit Omaha".into(),
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

fn add(state: TournamentState, name: &str, at: u64) -> TournamentState {
    apply(
        state,
        Action::AddPlayer {
            tournament_id: "t1".into(),
            player_name: name.into(),
        },
        at,
    )
}

fn bust(state: TournamentState, player_id: &str) -> TournamentState {
    apply(
        state,
        Action::BustPlayer {
            tournament_id: "t1".into(),
            player_id: player_id.into(),
        },
        2_000,
    )
}

#[test]
fn add_player_fills_emptiest_table_lowest_seat() {
    let state = add(state_with(tournament_with_occupancy(&[8, 8, 6, 8], 8)), "Alex Mercer", 1_000);

    let t = state.tournament("t1").unwrap();
    let counts: Vec<usize> = t.tables.iter().map(Table::seated_count).collect();
    assert_eq!(counts, vec![8, 8, 7, 8]);

    let seat = &t.tables[2].seats[6];
    let player = seat.player.as_ref().expect("seat 7 of table 3 is taken");
    assert_eq!(player.name, "Alex Mercer");
    assert_eq!(player.chip_count, Chips(20_000));
    assert_eq!(player.table_id, "t1-table-3");
    assert_eq!(player.seat_number, 7);
    assert_eq!(player.id, "player-1000-1");

    assert_eq!(state.notifications.len(), 1);
    let n = &state.notifications.entries()[0];
    assert_eq!(n.kind, NotificationKind::Action);
    assert_eq!(n.title, "Player Added");
    assert_eq!(n.message, "Alex Mercer seated at Table 3, Seat 7");

    assert!(t.validate().is_ok());
}

#[test]
fn tie_on_occupancy_keeps_table_order() {
    let t = tournament_with_occupancy(&[8, 5, 5, 7], 8);
    let seat = find_open_seat(&t).unwrap();
    assert_eq!(seat.table_number, 2);
    assert_eq!(seat.position, 6);
}

#[test]
fn lowest_empty_seat_wins_even_with_gaps() {
    let mut t = tournament_with_occupancy(&[6], 8);
    t.tables[0].seats[1].player = None;

    let seat = find_open_seat(&t).unwrap();
    assert_eq!(seat.position, 2);
}

#[test]
fn two_registrations_in_one_millisecond_get_distinct_ids() {
    let state = state_with(tournament_with_occupancy(&[2, 2], 8));
    let state = add(state, "Jordan Blake", 1_000);
    let state = add(state, "Casey Quinn", 1_000);

    let t = state.tournament("t1").unwrap();
    let ids: Vec<&str> = t.players().map(|p| p.id.as_str()).collect();
    assert!(ids.contains(&"player-1000-1"));
    assert!(ids.contains(&"player-1000-2"));

    let n = state.notifications.entries();
    assert_ne!(n[0].id, n[1].id);
}

#[test]
fn add_player_with_no_free_seat_is_noop() {
    let before = state_with(tournament_with_occupancy(&[8, 8], 8));
    let after = add(before.clone(), "Alex Mercer", 1_000);
    assert_eq!(before, after);
}

#[test]
fn add_player_to_unknown_tournament_is_noop() {
    let before = state_with(tournament_with_occupancy(&[3], 8));
    let after = apply(
        before.clone(),
        Action::AddPlayer {
            tournament_id: "nope".into(),
            player_name: "Alex Mercer".into(),
        },
        1_000,
    );
    assert_eq!(before, after);
}

#[test]
fn bust_clears_seat_and_notifies_once() {
    let state = bust(state_with(tournament_with_occupancy(&[8, 8, 8], 8)), "p-2-5");

    let t = state.tournament("t1").unwrap();
    assert!(t.tables[1].seats[4].is_empty());
    assert!(t.find_player("p-2-5").is_none());
    assert_eq!(t.player_count(), 23);

    assert_eq!(state.notifications.len(), 1);
    let n = &state.notifications.entries()[0];
    assert_eq!(n.kind, NotificationKind::Action);
    assert_eq!(n.title, "Player Busted");
    assert_eq!(n.message, "Player 2-5 eliminated from Table 2, Seat 5");
}

#[test]
fn bust_unknown_player_is_byte_identical() {
    let before = state_with(tournament_with_occupancy(&[8, 7, 8], 8));
    let bytes_before = serde_json::to_vec(&before).unwrap();

    let after = bust(before, "player-does-not-exist");
    let bytes_after = serde_json::to_vec(&after).unwrap();

    assert_eq!(bytes_before, bytes_after);
}

#[test]
fn bust_in_unknown_tournament_is_noop() {
    let before = state_with(tournament_with_occupancy(&[8, 8], 8));
    let after = apply(
        before.clone(),
        Action::BustPlayer {
            tournament_id: "other".into(),
            player_id: "p-1-1".into(),
        },
        2_000,
    );
    assert_eq!(before, after);
}
