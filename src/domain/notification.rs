use serde::{Deserialize, Serialize};

use crate::domain::{NotificationId, TimestampMs, TournamentId};

/// Тип события в ленте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Redraw,
    Level,
    Registration,
    Action,
    Alert,
}

/// Запись в ленте уведомлений. После создания меняется только `read`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: TimestampMs,
    pub read: bool,
    pub tournament_id: TournamentId,
}

/// Уведомление до попадания в ленту: id и время проставляет лог.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub tournament_id: TournamentId,
}

impl NotificationDraft {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        tournament_id: impl Into<TournamentId>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            tournament_id: tournament_id.into(),
        }
    }

    pub fn into_notification(self, id: NotificationId, timestamp: TimestampMs) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            timestamp,
            read: false,
            tournament_id: self.tournament_id,
        }
    }
}
