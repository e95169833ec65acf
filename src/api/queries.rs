use serde::{Deserialize, Serialize};

use crate::domain::notification::Notification;
use crate::domain::player::Player;
use crate::domain::redraw::RedrawPlan;
use crate::domain::tournament::Tournament;
use crate::domain::{TimestampMs, TournamentId};
use crate::reports::{render_report, Report, ReportKind};
use crate::state::TournamentState;

use super::dto::{ClockViewDto, TournamentListItemDto, TournamentStatsDto};
use super::errors::ApiError;

/// Запросы "только чтение".
///
/// `tournament_id: None` означает выбранный турнир.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Query {
    /// Полный снимок состояния.
    GetState,

    ListTournaments,

    GetTournament {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
    },

    GetStats {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
    },

    GetClock {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
    },

    /// Лента турнира, новые сверху.
    GetFeed {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
    },

    GetUnreadCount {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
    },

    GetRedrawPlan {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
    },

    /// Поиск игроков по имени (диалог вылета).
    SearchPlayers {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
        #[serde(default)]
        query: String,
    },

    GetReport {
        #[serde(default)]
        tournament_id: Option<TournamentId>,
        kind: ReportKind,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryResponse {
    State(Box<TournamentState>),
    Tournaments(Vec<TournamentListItemDto>),
    Tournament(Box<Tournament>),
    Stats(TournamentStatsDto),
    Clock(ClockViewDto),
    Feed(Vec<Notification>),
    UnreadCount(usize),
    RedrawPlan(Option<RedrawPlan>),
    Players(Vec<Player>),
    Report(Report),
}

/// Выполнить запрос над снимком. `now` нужен только отчётам.
pub fn handle_query(
    state: &TournamentState,
    query: Query,
    now: TimestampMs,
) -> Result<QueryResponse, ApiError> {
    let response = match query {
        Query::GetState => QueryResponse::State(Box::new(state.clone())),

        Query::ListTournaments => QueryResponse::Tournaments(TournamentListItemDto::list(state)),

        Query::GetTournament { tournament_id } => {
            let t = resolve(state, tournament_id.as_deref())?;
            QueryResponse::Tournament(Box::new(t.clone()))
        }

        Query::GetStats { tournament_id } => {
            QueryResponse::Stats(resolve(state, tournament_id.as_deref())?.into())
        }

        Query::GetClock { tournament_id } => {
            QueryResponse::Clock(resolve(state, tournament_id.as_deref())?.into())
        }

        Query::GetFeed { tournament_id } => {
            // Лента существует и для удалённого турнира.
            let id = feed_target(state, tournament_id)?;
            QueryResponse::Feed(state.feed(&id).into_iter().cloned().collect())
        }

        Query::GetUnreadCount { tournament_id } => match tournament_id {
            Some(id) => QueryResponse::UnreadCount(state.unread_count(&id)),
            None => QueryResponse::UnreadCount(state.unread_count_selected()),
        },

        Query::GetRedrawPlan { tournament_id } => {
            let t = resolve(state, tournament_id.as_deref())?;
            QueryResponse::RedrawPlan(t.pending_redraw.clone())
        }

        Query::SearchPlayers {
            tournament_id,
            query,
        } => {
            let t = resolve(state, tournament_id.as_deref())?;
            QueryResponse::Players(t.search_players(&query).into_iter().cloned().collect())
        }

        Query::GetReport {
            tournament_id,
            kind,
        } => {
            let t = resolve(state, tournament_id.as_deref())?;
            QueryResponse::Report(render_report(t, kind, now))
        }
    };

    Ok(response)
}

/// Разобрать запрос из JSON.
pub fn parse_query(bytes: &[u8]) -> Result<Query, ApiError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn resolve<'a>(state: &'a TournamentState, id: Option<&str>) -> Result<&'a Tournament, ApiError> {
    let id = match id.or(state.selected_tournament_id.as_deref()) {
        Some(id) => id,
        None => return Err(ApiError::BadRequest("no tournament selected".into())),
    };
    state
        .tournament(id)
        .ok_or_else(|| ApiError::TournamentNotFound(id.to_string()))
}

fn feed_target(state: &TournamentState, id: Option<TournamentId>) -> Result<TournamentId, ApiError> {
    id.or_else(|| state.selected_tournament_id.clone())
        .ok_or_else(|| ApiError::BadRequest("no tournament selected".into()))
}
