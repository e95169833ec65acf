//! Движок состояния зала.
//!
//! Высокоуровневый объект: `FloorStore`
//! Основные операции:
//!   - `apply` – чистый переход состояния по действию
//!   - `FloorStore::dispatch` – применить действие с текущим временем
//!   - `NotificationLog` – лента событий, которую наполняют переходы

pub mod actions;
pub mod notification_log;
pub mod store;
pub mod transition;

pub use actions::Action;
pub use notification_log::NotificationLog;
pub use store::FloorStore;
pub use transition::apply;
