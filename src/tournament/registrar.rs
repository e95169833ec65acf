// src/tournament/registrar.rs
//! Регистрация (посадка нового игрока) и вылет (снятие с места).

use crate::domain::notification::{NotificationDraft, NotificationKind};
use crate::domain::player::Player;
use crate::domain::tournament::Tournament;
use crate::domain::{PlayerId, SeatPosition, TableId};

/// Свободное место, выбранное для нового игрока.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSeat {
    pub table_index: usize,
    pub table_id: TableId,
    pub table_number: u32,
    pub position: SeatPosition,
}

/// Игрок, снятый со стола.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BustedPlayer {
    pub player: Player,
    pub table_number: u32,
}

/// Выбор места для регистрации.
///
/// Политика "самый пустой стол, младшее место":
/// 1. берём столы, где есть хотя бы одно свободное место;
/// 2. стабильно сортируем по числу занятых мест (при равенстве
///    сохраняется исходный порядок столов);
/// 3. за первым столом берём свободное место с наименьшим номером.
///
/// Жадно и локально: будущий дисбаланс не предсказываем.
pub fn find_open_seat(t: &Tournament) -> Option<OpenSeat> {
    let mut candidates: Vec<(usize, usize)> = t
        .tables
        .iter()
        .enumerate()
        .filter(|(_, table)| table.has_empty_seat())
        .map(|(idx, table)| (idx, table.seated_count()))
        .collect();

    // sort_by_key стабилен.
    candidates.sort_by_key(|&(_, seated)| seated);

    let (table_index, _) = *candidates.first()?;
    let table = &t.tables[table_index];
    let seat = table.first_empty_seat()?;

    Some(OpenSeat {
        table_index,
        table_id: table.id.clone(),
        table_number: table.number,
        position: seat.position,
    })
}

/// Посадить нового игрока на выбранное место.
///
/// Игрок получает стартовый стек турнира, обратная ссылка ставится на это место.
/// Возвращает уведомление о регистрации или None, если место уже занято / не существует.
pub fn seat_new_player(
    t: &mut Tournament,
    seat: &OpenSeat,
    player_id: PlayerId,
    name: &str,
) -> Option<NotificationDraft> {
    let starting_chips = t.starting_chips;
    let tournament_id = t.id.clone();

    let table = t.tables.get_mut(seat.table_index)?;
    let slot = table.seat_mut(seat.position)?;
    if !slot.is_empty() {
        return None;
    }

    slot.player = Some(Player::new(
        player_id,
        name,
        starting_chips,
        seat.table_id.clone(),
        seat.position,
    ));

    Some(registration_notification(&tournament_id, name, seat))
}

/// Уведомление о посадке нового игрока.
pub fn registration_notification(tournament_id: &str, name: &str, seat: &OpenSeat) -> NotificationDraft {
    NotificationDraft::new(
        NotificationKind::Action,
        "Player Added",
        format!(
            "{} seated at Table {}, Seat {}",
            name, seat.table_number, seat.position
        ),
        tournament_id,
    )
}

/// Вылет игрока: ищем его на всех местах всех столов и освобождаем место.
///
/// Сам игрок просто отбрасывается (без архива).
/// None – игрок не найден, ничего не изменилось.
pub fn bust_player(t: &mut Tournament, player_id: &PlayerId) -> Option<BustedPlayer> {
    t.tables.iter_mut().find_map(|table| {
        let number = table.number;
        table.unseat(player_id).map(|player| BustedPlayer {
            player,
            table_number: number,
        })
    })
}

/// Уведомление о вылете. Номер места берём из обратной ссылки игрока.
pub fn bust_notification(tournament_id: &str, busted: &BustedPlayer) -> NotificationDraft {
    NotificationDraft::new(
        NotificationKind::Action,
        "Player Busted",
        format!(
            "{} eliminated from Table {}, Seat {}",
            busted.player.name, busted.table_number, busted.player.seat_number
        ),
        tournament_id,
    )
}
