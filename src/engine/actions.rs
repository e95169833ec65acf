use serde::{Deserialize, Serialize};

use crate::domain::notification::NotificationDraft;
use crate::domain::{NotificationId, PlayerId, TournamentId};
use crate::state::TournamentState;

/// Действие над состоянием зала. Закрытый набор вариантов.
///
/// На проводе: JSON с тегом `type` ("BUST_PLAYER", "TICK_CLOCK", ...),
/// неизвестный тег отвергается при разборе (см. `api::commands::parse_action`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Выбрать турнир (id может не существовать).
    SelectTournament { tournament_id: TournamentId },

    /// Вылет игрока.
    BustPlayer {
        tournament_id: TournamentId,
        player_id: PlayerId,
    },

    /// Регистрация нового игрока на самый пустой стол.
    AddPlayer {
        tournament_id: TournamentId,
        player_name: String,
    },

    /// Пауза / старт часов.
    ToggleClock { tournament_id: TournamentId },

    /// Прошла одна секунда.
    TickClock { tournament_id: TournamentId },

    /// Следующий уровень вручную.
    NextLevel { tournament_id: TournamentId },

    /// Предыдущий уровень вручную.
    PrevLevel { tournament_id: TournamentId },

    /// Добавить произвольное уведомление (например, alert от флор-менеджера).
    AddNotification { notification: NotificationDraft },

    MarkNotificationRead { notification_id: NotificationId },

    MarkAllNotificationsRead { tournament_id: TournamentId },

    /// Пересадка завершена: снять план и запустить часы.
    ClearRedraw { tournament_id: TournamentId },

    /// Вернуть сид-данные. `seed` задаёт стеки игроков; None – детерминированный разброс.
    ResetToInitial {
        #[serde(default)]
        seed: Option<u64>,
    },

    /// Полная замена состояния (например, загруженный снимок).
    LoadState { state: Box<TournamentState> },
}

impl Action {
    /// Все теги, которые понимает разбор.
    pub const KINDS: [&'static str; 13] = [
        "SELECT_TOURNAMENT",
        "BUST_PLAYER",
        "ADD_PLAYER",
        "TOGGLE_CLOCK",
        "TICK_CLOCK",
        "NEXT_LEVEL",
        "PREV_LEVEL",
        "ADD_NOTIFICATION",
        "MARK_NOTIFICATION_READ",
        "MARK_ALL_NOTIFICATIONS_READ",
        "CLEAR_REDRAW",
        "RESET_TO_INITIAL",
        "LOAD_STATE",
    ];

    /// Имя тега (для логов).
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SelectTournament { .. } => "SELECT_TOURNAMENT",
            Action::BustPlayer { .. } => "BUST_PLAYER",
            Action::AddPlayer { .. } => "ADD_PLAYER",
            Action::ToggleClock { .. } => "TOGGLE_CLOCK",
            Action::TickClock { .. } => "TICK_CLOCK",
            Action::NextLevel { .. } => "NEXT_LEVEL",
            Action::PrevLevel { .. } => "PREV_LEVEL",
            Action::AddNotification { .. } => "ADD_NOTIFICATION",
            Action::MarkNotificationRead { .. } => "MARK_NOTIFICATION_READ",
            Action::MarkAllNotificationsRead { .. } => "MARK_ALL_NOTIFICATIONS_READ",
            Action::ClearRedraw { .. } => "CLEAR_REDRAW",
            Action::ResetToInitial { .. } => "RESET_TO_INITIAL",
            Action::LoadState { .. } => "LOAD_STATE",
        }
    }

    /// Турнир, к которому относится действие (если относится).
    pub fn tournament_id(&self) -> Option<&str> {
        match self {
            Action::SelectTournament { tournament_id }
            | Action::BustPlayer { tournament_id, .. }
            | Action::AddPlayer { tournament_id, .. }
            | Action::ToggleClock { tournament_id }
            | Action::TickClock { tournament_id }
            | Action::NextLevel { tournament_id }
            | Action::PrevLevel { tournament_id }
            | Action::MarkAllNotificationsRead { tournament_id }
            | Action::ClearRedraw { tournament_id } => Some(tournament_id),
            Action::AddNotification { notification } => Some(&notification.tournament_id),
            Action::MarkNotificationRead { .. }
            | Action::ResetToInitial { .. }
            | Action::LoadState { .. } => None,
        }
    }
}
