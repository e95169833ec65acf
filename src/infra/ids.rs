use serde::{Deserialize, Serialize};

use crate::domain::{NotificationId, PlayerId, TimestampMs};

/// Генерация ID на основе монотонных счётчиков.
///
/// Живёт внутри `TournamentState` и сериализуется вместе с ним, поэтому
/// переход состояния остаётся чистой функцией: одинаковое состояние +
/// одинаковое действие + одинаковое время дают одинаковые ID.
/// Счётчик в ID делает его уникальным даже для двух записей
/// в одну и ту же миллисекунду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdGenerator {
    notification_counter: u64,
    player_counter: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            notification_counter: 1,
            player_counter: 1,
        }
    }

    /// Продолжить нумерацию после сид-данных.
    pub fn starting_at(notification_counter: u64, player_counter: u64) -> Self {
        Self {
            notification_counter: notification_counter.max(1),
            player_counter: player_counter.max(1),
        }
    }

    pub fn next_notification_id(&mut self, at: TimestampMs) -> NotificationId {
        let seq = self.notification_counter;
        self.notification_counter += 1;
        format!("notif-{at}-{seq}")
    }

    pub fn next_player_id(&mut self, at: TimestampMs) -> PlayerId {
        let seq = self.player_counter;
        self.player_counter += 1;
        format!("player-{at}-{seq}")
    }
}
