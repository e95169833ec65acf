//! Стор зала: владеет состоянием и применяет действия по одному.

use std::sync::Arc;

use crate::domain::tournament::Tournament;
use crate::domain::{TimestampMs, TournamentId};
use crate::engine::actions::Action;
use crate::engine::transition::apply;
use crate::infra::time::{SystemTime, TimeSource};
use crate::state::TournamentState;

/// Хранилище состояния зала – единственный писатель.
///
/// Все действия идут через `dispatch` по одному; параллельного применения
/// к одному снимку нет по построению (`&mut self`).
pub struct FloorStore {
    state: TournamentState,
    time: Arc<dyn TimeSource>,
}

impl FloorStore {
    pub fn new(state: TournamentState) -> Self {
        Self::with_time(state, Arc::new(SystemTime))
    }

    pub fn with_time(state: TournamentState, time: Arc<dyn TimeSource>) -> Self {
        Self { state, time }
    }

    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    /// Снимок для сохранения / отчётов.
    pub fn snapshot(&self) -> TournamentState {
        self.state.clone()
    }

    pub fn into_state(self) -> TournamentState {
        self.state
    }

    pub fn now_ms(&self) -> TimestampMs {
        self.time.now_ms()
    }

    /// Полностью заменить состояние (сброс из рантайма).
    pub fn replace(&mut self, state: TournamentState) -> bool {
        let changed = state != self.state;
        self.state = state;
        changed
    }

    /// Применить действие. Возвращает true, если состояние изменилось.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let at = self.time.now_ms();
        let kind = action.kind();
        let is_tick = matches!(action, Action::TickClock { .. });
        let is_clear_redraw = matches!(action, Action::ClearRedraw { .. });
        let baseline = Baseline::capture(&self.state, &action);
        let notifications_before = self.state.notifications.len();

        let previous = std::mem::take(&mut self.state);
        self.state = apply(previous, action, at);
        let changed = baseline.changed(&self.state);

        if let Baseline::Tournament { id, before, .. } = &baseline {
            if let (Some(before), Some(after)) = (before, self.state.tournament(id)) {
                if after.current_level != before.current_level {
                    log::info!(
                        "Tournament {}: level {} -> {}",
                        id,
                        before.current_level,
                        after.current_level
                    );
                }
            }
            if changed && is_clear_redraw {
                log::info!("Tournament {}: redraw complete, clock resumed", id);
            }
        }

        let appended = self
            .state
            .notifications
            .len()
            .saturating_sub(notifications_before);
        if !is_tick || appended > 0 {
            log::debug!("{} applied (changed: {}, notifications: +{})", kind, changed, appended);
        }

        changed
    }
}

/// Что запомнить до перехода, чтобы понять, изменилось ли состояние.
///
/// Действия над одним турниром меняют только его поля и дописывают ленту,
/// поэтому для них хватает копии одного турнира и длины ленты.
enum Baseline {
    Tournament {
        id: TournamentId,
        before: Option<Tournament>,
        notifications: usize,
    },
    Full(TournamentState),
}

impl Baseline {
    fn capture(state: &TournamentState, action: &Action) -> Self {
        match action {
            Action::BustPlayer { tournament_id, .. }
            | Action::AddPlayer { tournament_id, .. }
            | Action::ToggleClock { tournament_id }
            | Action::TickClock { tournament_id }
            | Action::NextLevel { tournament_id }
            | Action::PrevLevel { tournament_id }
            | Action::ClearRedraw { tournament_id } => Baseline::Tournament {
                id: tournament_id.clone(),
                before: state.tournament(tournament_id).cloned(),
                notifications: state.notifications.len(),
            },
            _ => Baseline::Full(state.clone()),
        }
    }

    fn changed(&self, after: &TournamentState) -> bool {
        match self {
            Baseline::Tournament {
                id,
                before,
                notifications,
            } => {
                after.tournament(id) != before.as_ref()
                    || after.notifications.len() != *notifications
            }
            Baseline::Full(before) => after != before,
        }
    }
}
