//! Лента уведомлений: append-only журнал доменных событий.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::domain::notification::{Notification, NotificationDraft};
use crate::domain::TimestampMs;
use crate::infra::ids::IdGenerator;

/// Журнал уведомлений всех турниров.
///
/// Записи не удаляются и не меняются, кроме флага `read`.
/// Порядок хранения = порядок добавления.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Notification>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    /// Добавить черновики в порядке их появления; ID выдаёт `ids`.
    pub fn append_drafts(
        &mut self,
        drafts: impl IntoIterator<Item = NotificationDraft>,
        ids: &mut IdGenerator,
        at: TimestampMs,
    ) {
        for draft in drafts {
            let id = ids.next_notification_id(at);
            self.entries.push(draft.into_notification(id, at));
        }
    }

    /// Пометить одну запись прочитанной. Нет такой записи – ничего не делаем.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(n) = self.entries.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    /// Пометить прочитанными все записи турнира (идемпотентно).
    pub fn mark_all_read(&mut self, tournament_id: &str) {
        self.entries
            .iter_mut()
            .filter(|n| n.tournament_id == tournament_id)
            .for_each(|n| n.read = true);
    }

    pub fn unread_count(&self, tournament_id: &str) -> usize {
        self.entries
            .iter()
            .filter(|n| n.tournament_id == tournament_id && !n.read)
            .count()
    }

    /// Лента турнира для отображения: по убыванию времени.
    /// При равном времени раньше идёт запись, добавленная позже.
    pub fn feed(&self, tournament_id: &str) -> Vec<&Notification> {
        let mut feed: Vec<&Notification> = self
            .entries
            .iter()
            .rev()
            .filter(|n| n.tournament_id == tournament_id)
            .collect();
        feed.sort_by_key(|n| Reverse(n.timestamp));
        feed
    }
}
