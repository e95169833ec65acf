// src/bin/floor_dev_cli.rs
//
// Дев-консоль зала: по строке JSON на действие, `?` перед JSON – запрос.
//
//   {"type":"BUST_PLAYER","tournamentId":"plo","playerId":"player-3"}
//   ?{"type":"GET_CLOCK"}
//   tick 60      – прокрутить часы всех идущих турниров на 60 секунд
//   walkin plo   – посадить игрока со случайным именем
//   quit

use std::io::{self, BufRead, Write};

use tournament_floor::api::{handle_query, parse_action, parse_query};
use tournament_floor::infra::persistence::{self, FileSlot, InMemorySlot, SnapshotSlot};
use tournament_floor::infra::rng::SystemRng;
use tournament_floor::infra::seed::random_walk_in_name;
use tournament_floor::{Action, FloorConfig, FloorStore};

fn main() {
    env_logger::init();

    let config = match FloorConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {e}");
            std::process::exit(2);
        }
    };

    let mut slot: Box<dyn SnapshotSlot> = match &config.state_path {
        Some(path) => Box::new(FileSlot::new(path)),
        None => Box::new(InMemorySlot::new()),
    };

    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let mut store = FloorStore::new(persistence::load_or_seed(slot.as_ref(), config.seed, now));

    println!("=== FLOOR DEV CLI ===");
    print_lobby(&store);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin error: {e}");
                break;
            }
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        if let Some(secs) = line.strip_prefix("tick") {
            let secs: u32 = secs.trim().parse().unwrap_or(1);
            for _ in 0..secs {
                for tournament_id in store.state().tickable_tournament_ids() {
                    store.dispatch(Action::TickClock { tournament_id });
                }
            }
            save(slot.as_mut(), &store);
            print_lobby(&store);
            continue;
        }

        if let Some(tournament_id) = line.strip_prefix("walkin") {
            let action = Action::AddPlayer {
                tournament_id: tournament_id.trim().to_string(),
                player_name: random_walk_in_name(&mut SystemRng).to_string(),
            };
            let changed = store.dispatch(action);
            println!("changed: {changed}");
            if changed {
                save(slot.as_mut(), &store);
            }
            continue;
        }

        if let Some(raw) = line.strip_prefix('?') {
            let result = parse_query(raw.as_bytes())
                .and_then(|q| handle_query(store.state(), q, store.now_ms()));
            match result.map(|r| serde_json::to_string_pretty(&r)) {
                Ok(Ok(json)) => println!("{json}"),
                Ok(Err(e)) => eprintln!("encode error: {e}"),
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }

        match parse_action(line.as_bytes()) {
            Ok(Action::ResetToInitial { seed }) => {
                match persistence::reset(slot.as_mut(), seed.or(config.seed), store.now_ms()) {
                    Ok(fresh) => {
                        store.replace(fresh);
                        save(slot.as_mut(), &store);
                        print_lobby(&store);
                    }
                    Err(e) => eprintln!("reset failed: {e}"),
                }
            }
            Ok(action) => {
                let changed = store.dispatch(action);
                println!("changed: {changed}");
                if changed {
                    save(slot.as_mut(), &store);
                }
            }
            Err(e) => eprintln!("{e}"),
        }

        let _ = io::stdout().flush();
    }
}

fn save(slot: &mut dyn SnapshotSlot, store: &FloorStore) {
    if let Err(e) = persistence::save(slot, store.state()) {
        eprintln!("save failed: {e}");
    }
}

fn print_lobby(store: &FloorStore) {
    let state = store.state();
    for t in &state.tournaments {
        let marker = if state.selected_tournament_id.as_deref() == Some(t.id.as_str()) {
            '>'
        } else {
            ' '
        };
        println!(
            "{marker} {:<14} {:<22} L{:<3} {} {:>4} players  unread {}",
            t.id,
            t.name,
            t.current_level,
            tournament_floor::time_ctrl::format_clock(t.clock_time_remaining),
            t.player_count(),
            state.unread_count(&t.id),
        );
    }
}
