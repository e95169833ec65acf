// src/time_ctrl/clock.rs
//! Часы уровня: обратный отсчёт и переход по расписанию блайндов.

use serde::{Deserialize, Serialize};

use crate::domain::blinds::BlindLevel;
use crate::domain::notification::{NotificationDraft, NotificationKind};
use crate::domain::tournament::Tournament;

/// Смена уровня (по тику или вручную).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelChange {
    pub from: u32,
    pub to: u32,
    /// Новый текущий уровень.
    pub level: BlindLevel,
}

/// Результат одного тика.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Часы стоят (или зал заморожен пересадкой) – ничего не изменилось.
    Idle,
    /// Минус одна секунда.
    Counted { remaining: u32 },
    /// Уровень закончился, перешли на следующий.
    LevelAdvanced(LevelChange),
    /// Уровни закончились: часы остановлены, остаток = 0.
    Exhausted,
}

/// Один тик (одна прошедшая секунда).
///
/// Логика:
/// - часы стоят или есть ожидающая пересадка -> ничего;
/// - осталось больше 1 секунды -> минус секунда;
/// - иначе переходим на следующий уровень и перезагружаем его длительность;
///   если следующего уровня нет -> стоп, остаток 0, уровень не меняется.
pub fn tick(t: &mut Tournament) -> TickOutcome {
    if !t.clock_running || t.is_frozen() {
        return TickOutcome::Idle;
    }

    if t.clock_time_remaining > 1 {
        t.clock_time_remaining -= 1;
        return TickOutcome::Counted {
            remaining: t.clock_time_remaining,
        };
    }

    let next = t.current_level + 1;
    match t.blind_structure.level_by_number(next).cloned() {
        Some(level) => {
            let from = t.current_level;
            t.current_level = next;
            t.clock_time_remaining = level.duration_secs();
            TickOutcome::LevelAdvanced(LevelChange {
                from,
                to: next,
                level,
            })
        }
        None => {
            t.clock_running = false;
            t.clock_time_remaining = 0;
            TickOutcome::Exhausted
        }
    }
}

/// Ручной переход на следующий уровень ("next level").
///
/// Уровень не выходит за конец расписания; длительность всегда
/// перезагружается полностью, смена уровня возвращается даже на последнем
/// уровне (тогда `from == to`).
pub fn advance(t: &mut Tournament) -> Option<LevelChange> {
    let last = t.blind_structure.last_level();
    if last == 0 {
        return None;
    }
    let from = t.current_level;
    let to = (from + 1).min(last);
    let level = t.blind_structure.level_by_number(to)?.clone();
    t.current_level = to;
    t.clock_time_remaining = level.duration_secs();
    Some(LevelChange { from, to, level })
}

/// Ручной откат на предыдущий уровень ("previous level").
///
/// Не ниже 1, длительность перезагружается. Уведомления нет: это "undo"
/// оператора, а не событие турнира.
pub fn retreat(t: &mut Tournament) {
    let prev = t.current_level.saturating_sub(1).max(1);
    if let Some(level) = t.blind_structure.level_by_number(prev) {
        t.current_level = prev;
        t.clock_time_remaining = level.duration_secs();
    }
}

/// Пауза / старт часов.
pub fn toggle(t: &mut Tournament) {
    t.clock_running = !t.clock_running;
}

/// Уведомление о смене уровня.
pub fn level_notification(tournament_id: &str, change: &LevelChange) -> NotificationDraft {
    let level = &change.level;
    if level.is_break {
        NotificationDraft::new(
            NotificationKind::Level,
            "Break",
            format!("Break time: {} minutes", level.duration_minutes),
            tournament_id,
        )
    } else {
        NotificationDraft::new(
            NotificationKind::Level,
            "Level Change",
            format!(
                "Level {} starting. Blinds {}/{}/{}",
                change.to, level.small_blind, level.big_blind, level.ante
            ),
            tournament_id,
        )
    }
}

/// Формат табло: 1047 -> "17:27".
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
