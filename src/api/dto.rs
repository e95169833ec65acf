use serde::{Deserialize, Serialize};

use crate::domain::blinds::BlindLevel;
use crate::domain::chips::Chips;
use crate::domain::prizepool::PrizepoolEntry;
use crate::domain::tournament::{Tournament, TournamentStatus};
use crate::domain::TournamentId;
use crate::state::TournamentState;
use crate::time_ctrl::format_clock;

/// Строка списка турниров (сайдбар).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentListItemDto {
    pub tournament_id: TournamentId,
    pub name: String,
    pub status: TournamentStatus,
    pub players_remaining: usize,
    pub unread_notifications: usize,
    pub selected: bool,
}

impl TournamentListItemDto {
    pub fn list(state: &TournamentState) -> Vec<Self> {
        state
            .tournaments
            .iter()
            .map(|t| Self {
                tournament_id: t.id.clone(),
                name: t.name.clone(),
                status: t.status,
                players_remaining: t.player_count(),
                unread_notifications: state.unread_count(&t.id),
                selected: state.selected_tournament_id.as_deref() == Some(t.id.as_str()),
            })
            .collect()
    }
}

/// Панель статистики турнира.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentStatsDto {
    pub tournament_id: TournamentId,
    pub players_remaining: usize,
    pub active_tables: usize,
    pub average_stack: Chips,
    pub total_chips: Chips,
    pub places_paid: u32,
    pub in_the_money: bool,
    pub next_payout: Option<PrizepoolEntry>,
    pub late_registration_open: bool,
    pub late_reg_end_level: u32,
    pub pending_redraw: bool,
}

impl From<&Tournament> for TournamentStatsDto {
    fn from(t: &Tournament) -> Self {
        Self {
            tournament_id: t.id.clone(),
            players_remaining: t.player_count(),
            active_tables: t.active_table_count(),
            average_stack: t.average_stack(),
            total_chips: t.total_chips(),
            places_paid: t.prizepool.places_paid,
            in_the_money: t.in_the_money(),
            next_payout: t.next_payout().cloned(),
            late_registration_open: t.late_registration_open(),
            late_reg_end_level: t.late_reg_end_level,
            pending_redraw: t.is_frozen(),
        }
    }
}

/// Часы турнира в виде для экрана.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClockViewDto {
    pub tournament_id: TournamentId,
    pub current_level: u32,
    /// "MM:SS"
    pub display: String,
    pub seconds_remaining: u32,
    pub running: bool,
    pub frozen: bool,
    pub on_break: bool,
    pub current: Option<BlindLevel>,
    pub next: Option<BlindLevel>,
    /// Номер ближайшего перерыва после текущего уровня.
    pub next_break_level: Option<u32>,
}

impl From<&Tournament> for ClockViewDto {
    fn from(t: &Tournament) -> Self {
        Self {
            tournament_id: t.id.clone(),
            current_level: t.current_level,
            display: format_clock(t.clock_time_remaining),
            seconds_remaining: t.clock_time_remaining,
            running: t.clock_running,
            frozen: t.is_frozen(),
            on_break: t.is_on_break(),
            current: t.current_blind_level().cloned(),
            next: t.next_blind_level().cloned(),
            next_break_level: t.next_break().map(|b| b.level),
        }
    }
}
