//! Функция перехода: `apply(state, action, at) -> state'`.
//!
//! Чистая функция: без I/O, без часов и без глобального RNG.
//! Время приходит аргументом `at`, ID выдаёт `IdGenerator` внутри состояния.
//! Любое "не найдено" (турнир, игрок, уведомление) – тихий no-op.

use crate::domain::notification::NotificationDraft;
use crate::domain::tournament::Tournament;
use crate::domain::TimestampMs;
use crate::engine::actions::Action;
use crate::infra::ids::IdGenerator;
use crate::infra::rng::DeterministicRng;
use crate::infra::seed;
use crate::state::TournamentState;
use crate::time_ctrl::{self, TickOutcome};
use crate::tournament::{rebalance, redraw, registrar};

/// Применить действие к состоянию.
///
/// Для действий над турниром:
///   1) ищем турнир по id (нет – состояние не меняется);
///   2) меняем только его поля;
///   3) уведомления добавляются в ленту в порядке появления;
///   4) остальные турниры и уведомления не трогаем.
pub fn apply(mut state: TournamentState, action: Action, at: TimestampMs) -> TournamentState {
    match action {
        Action::SelectTournament { tournament_id } => {
            state.selected_tournament_id = Some(tournament_id);
        }

        Action::BustPlayer {
            tournament_id,
            player_id,
        } => {
            with_tournament(&mut state, &tournament_id, at, |t, _| {
                let busted = match registrar::bust_player(t, &player_id) {
                    Some(b) => b,
                    None => return Vec::new(),
                };
                let mut drafts = vec![registrar::bust_notification(&t.id, &busted)];
                drafts.extend(rebalance::rebalance_notifications(t));
                drafts
            });
        }

        Action::AddPlayer {
            tournament_id,
            player_name,
        } => {
            with_tournament(&mut state, &tournament_id, at, |t, ids| {
                let seat = match registrar::find_open_seat(t) {
                    Some(s) => s,
                    None => return Vec::new(),
                };
                let player_id = ids.next_player_id(at);
                registrar::seat_new_player(t, &seat, player_id, &player_name)
                    .into_iter()
                    .collect()
            });
        }

        Action::ToggleClock { tournament_id } => {
            with_tournament(&mut state, &tournament_id, at, |t, _| {
                time_ctrl::toggle(t);
                Vec::new()
            });
        }

        Action::TickClock { tournament_id } => {
            with_tournament(&mut state, &tournament_id, at, |t, _| match time_ctrl::tick(t) {
                TickOutcome::LevelAdvanced(change) => {
                    vec![time_ctrl::level_notification(&t.id, &change)]
                }
                TickOutcome::Idle | TickOutcome::Counted { .. } | TickOutcome::Exhausted => {
                    Vec::new()
                }
            });
        }

        Action::NextLevel { tournament_id } => {
            with_tournament(&mut state, &tournament_id, at, |t, _| {
                time_ctrl::advance(t)
                    .map(|change| time_ctrl::level_notification(&t.id, &change))
                    .into_iter()
                    .collect()
            });
        }

        Action::PrevLevel { tournament_id } => {
            with_tournament(&mut state, &tournament_id, at, |t, _| {
                time_ctrl::retreat(t);
                Vec::new()
            });
        }

        Action::AddNotification { notification } => {
            let TournamentState {
                notifications, ids, ..
            } = &mut state;
            notifications.append_drafts([notification], ids, at);
        }

        Action::MarkNotificationRead { notification_id } => {
            state.notifications.mark_read(&notification_id);
        }

        Action::MarkAllNotificationsRead { tournament_id } => {
            state.notifications.mark_all_read(&tournament_id);
        }

        Action::ClearRedraw { tournament_id } => {
            with_tournament(&mut state, &tournament_id, at, |t, _| {
                vec![redraw::complete_redraw(t)]
            });
        }

        Action::ResetToInitial { seed: rng_seed } => {
            state = match rng_seed {
                Some(s) => seed::initial_state_with(&mut DeterministicRng::from_seed(s), at),
                None => seed::initial_state(at),
            };
        }

        Action::LoadState { state: loaded } => {
            // Снимок с нарушенными инвариантами не принимаем.
            if loaded.validate().is_ok() {
                state = *loaded;
            }
        }
    }

    state
}

/// Найти турнир, изменить его и дописать получившиеся уведомления.
fn with_tournament<F>(state: &mut TournamentState, tournament_id: &str, at: TimestampMs, f: F)
where
    F: FnOnce(&mut Tournament, &mut IdGenerator) -> Vec<NotificationDraft>,
{
    let TournamentState {
        tournaments,
        notifications,
        ids,
        ..
    } = state;

    let tournament = match tournaments.iter_mut().find(|t| t.id == tournament_id) {
        Some(t) => t,
        None => return,
    };

    let drafts = f(tournament, ids);
    notifications.append_drafts(drafts, ids, at);
}
