//! Турнирный зал: состояние живых турниров и чистая функция перехода.
//!
//! Слои:
//! - `domain` – турниры, столы, места, игроки, блайнды, призовые;
//! - `engine` – действия, `apply(state, action, at)`, стор, лента уведомлений;
//! - `time_ctrl` – часы уровня;
//! - `tournament` – регистрация/вылет, ребаланс, пересадка, актор зала;
//! - `infra` – ID, RNG, время, сид-данные, снимки;
//! - `api` / `reports` – граница наружу.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod reports;
pub mod state;
pub mod time_ctrl;
pub mod tournament;

pub use config::{ConfigError, FloorConfig};
pub use engine::{apply, Action, FloorStore};
pub use state::TournamentState;
