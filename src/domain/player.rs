use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatPosition, TableId};

/// Игрок в зале.
///
/// `table_id` / `seat_number` – обратная ссылка на место, которое держит игрока.
/// Должна совпадать с фактическим местом после каждой пересадки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub chip_count: Chips,
    pub table_id: TableId,
    pub seat_number: SeatPosition,
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        chip_count: Chips,
        table_id: impl Into<TableId>,
        seat_number: SeatPosition,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chip_count,
            table_id: table_id.into(),
            seat_number,
        }
    }

    /// Совпадает ли обратная ссылка с местом `(table_id, position)`.
    pub fn is_seated_at(&self, table_id: &str, position: SeatPosition) -> bool {
        self.table_id == table_id && self.seat_number == position
    }
}
