//! Доменная модель турнирного зала: турниры, столы, места, игроки,
//! структура блайндов, призовой фонд, пересадки и уведомления.

pub mod blinds;
pub mod chips;
pub mod notification;
pub mod player;
pub mod prizepool;
pub mod redraw;
pub mod table;
pub mod tournament;

// Идентификаторы строковые: их выдают сид-данные ("plo", "player-12")
// и IdGenerator внутри состояния.
pub type TournamentId = String;
pub type TableId = String;
pub type PlayerId = String;
pub type NotificationId = String;

/// Номер места за столом (1..=hands_per_table).
pub type SeatPosition = u8;

/// Unix timestamp в миллисекундах.
pub type TimestampMs = u64;

pub use blinds::*;
pub use chips::*;
pub use notification::*;
pub use player::*;
pub use prizepool::*;
pub use redraw::*;
pub use table::*;
pub use tournament::*;
