use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::notification::Notification;
use crate::domain::tournament::{Tournament, TournamentError};
use crate::domain::TournamentId;
use crate::engine::notification_log::NotificationLog;
use crate::infra::ids::IdGenerator;

/// Глобальное состояние турнирного зала (aggregate root).
///
/// Важное:
/// - владеет им только стор (`FloorStore`) или рантайм, остальные компоненты
///   получают ссылки в пределах одного перехода;
/// - меняется только через `engine::apply`;
/// - целиком сериализуется в один снимок (serde_json).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentState {
    /// Турниры в порядке отображения; id уникальны.
    pub tournaments: Vec<Tournament>,

    /// Выбранный турнир. Может указывать на несуществующий id.
    pub selected_tournament_id: Option<TournamentId>,

    /// Лента уведомлений (append-only).
    pub notifications: NotificationLog,

    /// Счётчики для ID новых игроков и уведомлений.
    #[serde(default)]
    pub ids: IdGenerator,
}

impl TournamentState {
    pub fn tournament(&self, id: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn tournament_mut(&mut self, id: &str) -> Option<&mut Tournament> {
        self.tournaments.iter_mut().find(|t| t.id == id)
    }

    /// Выбранный турнир, если выбор разрешается.
    pub fn selected_tournament(&self) -> Option<&Tournament> {
        self.selected_tournament_id
            .as_deref()
            .and_then(|id| self.tournament(id))
    }

    /// Лента турнира: новые сверху.
    pub fn feed(&self, tournament_id: &str) -> Vec<&Notification> {
        self.notifications.feed(tournament_id)
    }

    pub fn unread_count(&self, tournament_id: &str) -> usize {
        self.notifications.unread_count(tournament_id)
    }

    /// Непрочитанные для выбранного турнира (0, если выбор не разрешается).
    pub fn unread_count_selected(&self) -> usize {
        self.selected_tournament_id
            .as_deref()
            .map_or(0, |id| self.unread_count(id))
    }

    /// Турниры, которым положен тик: часы идут и нет ожидающей пересадки.
    pub fn tickable_tournament_ids(&self) -> Vec<TournamentId> {
        self.tournaments
            .iter()
            .filter(|t| t.clock_running && !t.is_frozen())
            .map(|t| t.id.clone())
            .collect()
    }

    /// Проверка инвариантов всего состояния.
    pub fn validate(&self) -> Result<(), TournamentError> {
        let mut seen = HashSet::new();
        for t in &self.tournaments {
            if !seen.insert(t.id.as_str()) {
                return Err(TournamentError::DuplicateTournament {
                    tournament_id: t.id.clone(),
                });
            }
            t.validate()?;
        }
        Ok(())
    }
}
