use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, SeatPosition};

/// Одна строка плана полной пересадки: откуда и куда идёт игрок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedrawAssignment {
    pub player_id: PlayerId,
    pub player_name: String,
    pub from_table: u32,
    pub from_seat: SeatPosition,
    pub to_table: u32,
    pub to_seat: SeatPosition,
}

/// Ожидающий подтверждения план пересадки.
///
/// Само наличие плана у турнира означает "зал заморожен": часы стоят,
/// на табло висит баннер пересадки.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RedrawPlan {
    pub assignments: Vec<RedrawAssignment>,
}

impl RedrawPlan {
    pub fn new(assignments: Vec<RedrawAssignment>) -> Self {
        Self { assignments }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RedrawAssignment> {
        self.assignments.iter()
    }

    /// Группировка по столу назначения; внутри стола сортировка по месту.
    pub fn by_destination(&self) -> BTreeMap<u32, Vec<&RedrawAssignment>> {
        let mut grouped: BTreeMap<u32, Vec<&RedrawAssignment>> = BTreeMap::new();
        for a in &self.assignments {
            grouped.entry(a.to_table).or_default().push(a);
        }
        for list in grouped.values_mut() {
            list.sort_by_key(|a| a.to_seat);
        }
        grouped
    }

    pub fn assignment_for(&self, player_id: &str) -> Option<&RedrawAssignment> {
        self.assignments.iter().find(|a| a.player_id == player_id)
    }
}
