// src/domain/tournament.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::blinds::{BlindLevel, BlindStructure};
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::prizepool::{PaidOutPlayer, Prizepool, PrizepoolEntry};
use crate::domain::redraw::RedrawPlan;
use crate::domain::table::Table;
use crate::domain::TournamentId;

/// Статус турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Live,
}

/// Основной объект турнира.
///
/// Инварианты:
///   - `current_level` всегда валидный номер уровня в `blind_structure`;
///   - у каждого стола ровно `hands_per_table` мест;
///   - обратная ссылка игрока совпадает с местом, которое его держит;
///   - `clock_time_remaining` имеет смысл только при `status == Live`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub buy_in: Chips,
    pub status: TournamentStatus,
    pub tables: Vec<Table>,
    pub blind_structure: BlindStructure,
    pub prizepool: Prizepool,
    /// До какого уровня (включительно) открыта поздняя регистрация.
    pub late_reg_end_level: u32,
    /// Текущий уровень (1-based).
    pub current_level: u32,
    pub clock_running: bool,
    /// Сколько секунд осталось до конца уровня.
    pub clock_time_remaining: u32,
    /// Мест за каждым столом.
    pub hands_per_table: u8,
    pub starting_chips: Chips,
    pub game_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_redraw: Option<RedrawPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_out_players: Option<Vec<PaidOutPlayer>>,
}

impl Tournament {
    pub fn current_blind_level(&self) -> Option<&BlindLevel> {
        self.blind_structure.level_by_number(self.current_level)
    }

    pub fn next_blind_level(&self) -> Option<&BlindLevel> {
        self.blind_structure.level_by_number(self.current_level + 1)
    }

    /// Следующий перерыв после текущего уровня.
    pub fn next_break(&self) -> Option<&BlindLevel> {
        self.blind_structure.next_break_after(self.current_level)
    }

    pub fn is_live(&self) -> bool {
        self.status == TournamentStatus::Live
    }

    /// Есть ли ожидающий план пересадки ("зал заморожен").
    pub fn is_frozen(&self) -> bool {
        self.pending_redraw.is_some()
    }

    pub fn is_on_break(&self) -> bool {
        self.current_blind_level().map_or(false, |l| l.is_break)
    }

    pub fn late_registration_open(&self) -> bool {
        self.current_level <= self.late_reg_end_level
    }

    /// Все сидящие игроки в порядке столов и мест.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.tables.iter().flat_map(|t| t.players())
    }

    pub fn player_count(&self) -> usize {
        self.tables.iter().map(Table::seated_count).sum()
    }

    /// Столы, за которыми сидит хотя бы один игрок.
    pub fn active_table_count(&self) -> usize {
        self.tables.iter().filter(|t| t.seated_count() > 0).count()
    }

    pub fn has_empty_seat(&self) -> bool {
        self.tables.iter().any(Table::has_empty_seat)
    }

    pub fn total_chips(&self) -> Chips {
        self.players().map(|p| p.chip_count).sum()
    }

    /// Средний стек, округлённый до целого (0, если игроков нет).
    pub fn average_stack(&self) -> Chips {
        let count = self.player_count() as u64;
        if count == 0 {
            return Chips::ZERO;
        }
        let total = self.total_chips().0;
        Chips((total + count / 2) / count)
    }

    /// В деньгах: игроков осталось не больше, чем оплачиваемых мест.
    pub fn in_the_money(&self) -> bool {
        self.prizepool.places_paid > 0
            && self.player_count() as u32 <= self.prizepool.places_paid
    }

    /// Выплата следующему вылетевшему (только в деньгах).
    pub fn next_payout(&self) -> Option<&PrizepoolEntry> {
        if !self.in_the_money() {
            return None;
        }
        self.prizepool.next_payout(self.player_count() as u32)
    }

    pub fn table_by_number(&self, number: u32) -> Option<&Table> {
        self.tables.iter().find(|t| t.number == number)
    }

    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.players().find(|p| p.id == player_id)
    }

    /// Поиск игроков по подстроке имени без учёта регистра (диалог вылета).
    pub fn search_players<'a>(&'a self, query: &str) -> Vec<&'a Player> {
        let needle = query.trim().to_lowercase();
        self.players()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Проверка инвариантов (нужна при загрузке снимка извне).
    pub fn validate(&self) -> Result<(), TournamentError> {
        self.blind_structure
            .validate()
            .map_err(|reason| TournamentError::InvalidBlindStructure {
                tournament_id: self.id.clone(),
                reason,
            })?;

        if self.blind_structure.level_by_number(self.current_level).is_none() {
            return Err(TournamentError::LevelOutOfRange {
                tournament_id: self.id.clone(),
                level: self.current_level,
                levels: self.blind_structure.last_level(),
            });
        }

        let mut table_numbers = HashSet::new();
        let mut player_ids = HashSet::new();

        for table in &self.tables {
            if !table_numbers.insert(table.number) {
                return Err(TournamentError::DuplicateTableNumber {
                    tournament_id: self.id.clone(),
                    number: table.number,
                });
            }

            if table.seats.len() != self.hands_per_table as usize {
                return Err(TournamentError::SeatCountMismatch {
                    table: table.number,
                    expected: self.hands_per_table,
                    found: table.seats.len(),
                });
            }

            let mut positions = HashSet::new();
            for seat in &table.seats {
                if seat.position == 0
                    || seat.position > self.hands_per_table
                    || !positions.insert(seat.position)
                {
                    return Err(TournamentError::InvalidSeatPosition {
                        table: table.number,
                        position: seat.position,
                    });
                }

                if let Some(player) = &seat.player {
                    if !player.is_seated_at(&table.id, seat.position) {
                        return Err(TournamentError::BackReferenceMismatch {
                            player_id: player.id.clone(),
                            table: table.number,
                            position: seat.position,
                        });
                    }
                    if !player_ids.insert(player.id.as_str()) {
                        return Err(TournamentError::DuplicatePlayer {
                            tournament_id: self.id.clone(),
                            player_id: player.id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Нарушения инвариантов турнира или состояния зала.
///
/// Переходы состояния никогда не возвращают ошибок; эти варианты появляются
/// только при проверке внешних данных (снимок из хранилища, ручная сборка).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("Duplicate tournament id: {tournament_id}")]
    DuplicateTournament { tournament_id: TournamentId },

    #[error("Tournament {tournament_id}: invalid blind structure: {reason}")]
    InvalidBlindStructure {
        tournament_id: TournamentId,
        reason: String,
    },

    #[error("Tournament {tournament_id}: current level {level} outside 1..={levels}")]
    LevelOutOfRange {
        tournament_id: TournamentId,
        level: u32,
        levels: u32,
    },

    #[error("Tournament {tournament_id}: table number {number} used twice")]
    DuplicateTableNumber {
        tournament_id: TournamentId,
        number: u32,
    },

    #[error("Table {table}: expected {expected} seats, found {found}")]
    SeatCountMismatch {
        table: u32,
        expected: u8,
        found: usize,
    },

    #[error("Table {table}: invalid or duplicated seat position {position}")]
    InvalidSeatPosition { table: u32, position: u8 },

    #[error("Player {player_id} back-reference does not match Table {table}, Seat {position}")]
    BackReferenceMismatch {
        player_id: String,
        table: u32,
        position: u8,
    },

    #[error("Tournament {tournament_id}: player {player_id} seated twice")]
    DuplicatePlayer {
        tournament_id: TournamentId,
        player_id: String,
    },
}
