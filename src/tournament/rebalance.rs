// src/tournament/rebalance.rs
//! Детектор ребаланса: советы по переносу игроков между столами.

use crate::domain::notification::{NotificationDraft, NotificationKind};
use crate::domain::tournament::Tournament;
use crate::domain::{PlayerId, SeatPosition};

/// Разница в игроках, начиная с которой стол считается недобранным.
pub const REBALANCE_THRESHOLD: usize = 2;

/// Рекомендация перенести одного игрока с самого полного стола
/// на первое свободное место недобранного стола.
///
/// Это только совет: рассадку детектор не меняет.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebalanceSuggestion {
    pub player_id: PlayerId,
    pub player_name: String,
    pub from_table: u32,
    pub from_seat: SeatPosition,
    pub to_table: u32,
    pub to_seat: SeatPosition,
    /// Сколько игроков сейчас за недобранным столом.
    pub short_count: usize,
}

impl RebalanceSuggestion {
    pub fn to_notification(&self, tournament_id: &str) -> NotificationDraft {
        NotificationDraft::new(
            NotificationKind::Redraw,
            "Table Rebalance Needed",
            format!(
                "Table {} has {} players. Move {} (Table {}, Seat {}) to Table {}, Seat {}",
                self.to_table,
                self.short_count,
                self.player_name,
                self.from_table,
                self.from_seat,
                self.to_table,
                self.to_seat
            ),
            tournament_id,
        )
    }
}

/// Снимок заполненности столов: (индекс стола, занято мест).
pub fn table_occupancy(t: &Tournament) -> Vec<(usize, usize)> {
    t.tables
        .iter()
        .enumerate()
        .map(|(idx, table)| (idx, table.seated_count()))
        .collect()
}

/// Основной алгоритм детектора.
///
/// - считаем занятые места по столам;
/// - `max` = максимум по столам;
/// - для каждого непустого стола с `max - count >= REBALANCE_THRESHOLD`
///   ровно одна рекомендация: первый игрок первого стола с `max` игроков
///   -> первое свободное место недобранного стола.
///
/// Одна рекомендация на недобранный стол, а не на игрока.
pub fn detect(t: &Tournament) -> Vec<RebalanceSuggestion> {
    let occupancy = table_occupancy(t);

    let max = match occupancy.iter().map(|&(_, c)| c).max() {
        Some(m) => m,
        None => return Vec::new(),
    };

    let fullest = match occupancy.iter().find(|&&(_, c)| c == max) {
        Some(&(idx, _)) => &t.tables[idx],
        None => return Vec::new(),
    };

    let mut suggestions = Vec::new();

    for &(idx, count) in &occupancy {
        if count == 0 || max - count < REBALANCE_THRESHOLD {
            continue;
        }

        let short = &t.tables[idx];
        let from = fullest.first_occupied_seat();
        let to = short.first_empty_seat();

        if let (Some(from), Some(to)) = (from, to) {
            if let Some(player) = &from.player {
                suggestions.push(RebalanceSuggestion {
                    player_id: player.id.clone(),
                    player_name: player.name.clone(),
                    from_table: fullest.number,
                    from_seat: from.position,
                    to_table: short.number,
                    to_seat: to.position,
                    short_count: count,
                });
            }
        }
    }

    suggestions
}

/// Уведомления по всем рекомендациям, в порядке столов.
pub fn rebalance_notifications(t: &Tournament) -> Vec<NotificationDraft> {
    detect(t)
        .iter()
        .map(|s| s.to_notification(&t.id))
        .collect()
}

/// Сбалансированы ли непустые столы (разница меньше порога).
pub fn is_balanced(t: &Tournament) -> bool {
    detect(t).is_empty()
}
