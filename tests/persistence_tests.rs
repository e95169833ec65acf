// tests/persistence_tests.rs
//
// Снимки состояния.
//
// Проверяем:
//  1) encode -> decode возвращает равное состояние (в том числе после переходов);
//  2) битые байты / пустой слот / нарушенные инварианты -> сид-данные;
//  3) файловый слот: запись, чтение, очистка;
//  4) reset очищает слот.

use tournament_floor::engine::{apply, Action};
use tournament_floor::infra::persistence::{
    decode_state, encode_state, load_or_seed, reset, save, FileSlot, InMemorySlot,
    PersistenceError, SnapshotSlot,
};
use tournament_floor::infra::seed::initial_state;

const NOW: u64 = 1_700_000_000_000;

#[test]
fn snapshot_round_trip_after_activity() {
    let mut state = initial_state(NOW);
    state = apply(
        state,
        Action::AddPlayer {
            tournament_id: "plo".into(),
            player_name: "Riley Morgan".into(),
        },
        NOW + 1,
    );
    state = apply(
        state,
        Action::BustPlayer {
            tournament_id: "championship".into(),
            player_id: "player-60".into(),
        },
        NOW + 2,
    );

    let bytes = encode_state(&state).unwrap();
    let decoded = decode_state(&bytes).unwrap();
    assert_eq!(decoded, state);

    // Счётчики ID тоже переживают снимок.
    let a = apply(
        decoded,
        Action::AddPlayer {
            tournament_id: "plo".into(),
            player_name: "Taylor Nash".into(),
        },
        NOW + 3,
    );
    let b = apply(
        state,
        Action::AddPlayer {
            tournament_id: "plo".into(),
            player_name: "Taylor Nash".into(),
        },
        NOW + 3,
    );
    assert_eq!(a, b);
}

#[test]
fn corrupted_bytes_fall_back_to_seed() {
    let slot = InMemorySlot::with_bytes(b"{\"tournaments\": [oops".to_vec());
    assert_eq!(load_or_seed(&slot, None, NOW), initial_state(NOW));

    assert!(matches!(
        decode_state(b"not json"),
        Err(PersistenceError::Decode(_))
    ));
}

#[test]
fn empty_slot_gives_seed() {
    let slot = InMemorySlot::new();
    assert_eq!(load_or_seed(&slot, None, NOW), initial_state(NOW));
}

#[test]
fn invalid_snapshot_falls_back_to_seed() {
    let mut state = initial_state(NOW);
    state.tournaments[0].tables[0].seats.pop();

    let bytes = serde_json::to_vec(&state).unwrap();
    assert!(matches!(decode_state(&bytes), Err(PersistenceError::Invalid(_))));

    let slot = InMemorySlot::with_bytes(bytes);
    assert_eq!(load_or_seed(&slot, None, NOW), initial_state(NOW));
}

#[test]
fn saved_snapshot_is_loaded_back() {
    let state = apply(
        initial_state(NOW),
        Action::SelectTournament {
            tournament_id: "championship".into(),
        },
        NOW,
    );

    let mut slot = InMemorySlot::new();
    save(&mut slot, &state).unwrap();

    let loaded = load_or_seed(&slot, None, NOW + 60_000);
    assert_eq!(loaded, state);
}

#[test]
fn file_slot_write_read_clear() {
    let dir = std::env::temp_dir().join(format!("floor-slot-{}", std::process::id()));
    let path = dir.join("state.json");
    let mut slot = FileSlot::new(&path);

    assert_eq!(slot.read().unwrap(), None);

    let state = initial_state(NOW);
    save(&mut slot, &state).unwrap();
    assert!(path.exists());
    assert_eq!(load_or_seed(&slot, Some(1), NOW), state);

    slot.clear().unwrap();
    assert_eq!(slot.read().unwrap(), None);
    // Повторная очистка не ошибка.
    slot.clear().unwrap();

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reset_clears_slot_and_returns_seed() {
    let mut slot = InMemorySlot::new();
    save(&mut slot, &initial_state(NOW - 1)).unwrap();

    let fresh = reset(&mut slot, None, NOW).unwrap();
    assert_eq!(fresh, initial_state(NOW));
    assert_eq!(slot.read().unwrap(), None);
}

#[test]
fn in_memory_slot_clones_share_content() {
    let mut writer = InMemorySlot::new();
    let reader = writer.clone();

    writer.write(b"abc").unwrap();
    assert_eq!(reader.read().unwrap(), Some(b"abc".to_vec()));
}
