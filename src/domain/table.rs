use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::{PlayerId, SeatPosition, TableId};

/// Место за столом. Держит не больше одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    /// Номер места (1..=hands_per_table), уникален в пределах стола.
    pub position: SeatPosition,
    pub player: Option<Player>,
}

impl Seat {
    pub fn empty(position: SeatPosition) -> Self {
        Self {
            position,
            player: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_none()
    }
}

/// Турнирный стол.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,
    /// Отображаемый номер стола (1-based, стабилен, уникален в турнире).
    pub number: u32,
    /// Места по порядку: seats[i].position == i + 1.
    pub seats: Vec<Seat>,
}

impl Table {
    /// Пустой стол на `seat_count` мест.
    pub fn new(id: impl Into<TableId>, number: u32, seat_count: u8) -> Self {
        Self {
            id: id.into(),
            number,
            seats: (1..=seat_count).map(Seat::empty).collect(),
        }
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn has_empty_seat(&self) -> bool {
        self.seats.iter().any(Seat::is_empty)
    }

    /// Свободное место с наименьшим номером.
    pub fn first_empty_seat(&self) -> Option<&Seat> {
        self.seats
            .iter()
            .filter(|s| s.is_empty())
            .min_by_key(|s| s.position)
    }

    /// Первое занятое место (по порядку мест).
    pub fn first_occupied_seat(&self) -> Option<&Seat> {
        self.seats.iter().find(|s| !s.is_empty())
    }

    pub fn seat_mut(&mut self, position: SeatPosition) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.position == position)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().filter_map(|s| s.player.as_ref())
    }

    /// Освободить место игрока. Возвращает снятого игрока.
    pub fn unseat(&mut self, player_id: &PlayerId) -> Option<Player> {
        self.seats
            .iter_mut()
            .find(|s| s.player.as_ref().map(|p| &p.id) == Some(player_id))
            .and_then(|s| s.player.take())
    }
}
