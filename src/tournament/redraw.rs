// src/tournament/redraw.rs
//! Координатор полной пересадки (redraw).

use crate::domain::notification::{NotificationDraft, NotificationKind};
use crate::domain::redraw::{RedrawAssignment, RedrawPlan};
use crate::domain::tournament::Tournament;

/// Завершение пересадки.
///
/// - план снимается;
/// - часы запускаются безусловно (даже если стояли до пересадки);
/// - возвращается уведомление о завершении.
///
/// Игроков по местам НЕ двигаем: пересадку в зале делает флор-менеджер,
/// система только фиксирует её завершение.
pub fn complete_redraw(t: &mut Tournament) -> NotificationDraft {
    t.pending_redraw = None;
    t.clock_running = true;

    NotificationDraft::new(
        NotificationKind::Redraw,
        "Redraw Complete",
        "All players have been redrawn to their new seats. Clock resumed.",
        t.id.clone(),
    )
}

/// Построить план полной пересадки сдвигом.
///
/// Все сидящие игроки выписываются по порядку столов и мест; игрок i
/// получает позицию (i + offset) mod N, которая раскладывается на
/// стол `pos / seats_per_table + 1` и место `pos % seats_per_table + 1`.
pub fn plan_rotation(t: &Tournament, offset: usize, seats_per_table: u8) -> RedrawPlan {
    let seats_per_table = seats_per_table.max(1) as usize;

    let origins: Vec<(&str, &str, u32, u8)> = t
        .tables
        .iter()
        .flat_map(|table| {
            table.seats.iter().filter_map(move |seat| {
                seat.player
                    .as_ref()
                    .map(|p| (p.id.as_str(), p.name.as_str(), table.number, seat.position))
            })
        })
        .collect();

    let total = origins.len();
    if total == 0 {
        return RedrawPlan::default();
    }

    let assignments = origins
        .into_iter()
        .enumerate()
        .map(|(i, (player_id, player_name, from_table, from_seat))| {
            let pos = (i + offset) % total;
            RedrawAssignment {
                player_id: player_id.to_string(),
                player_name: player_name.to_string(),
                from_table,
                from_seat,
                to_table: (pos / seats_per_table) as u32 + 1,
                to_seat: (pos % seats_per_table) as u8 + 1,
            }
        })
        .collect();

    RedrawPlan::new(assignments)
}
