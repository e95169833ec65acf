// src/tournament/mod.rs
//! Турнирная логика поверх домена: регистрация/вылет, детектор
//! ребаланса, координатор пересадки и рантайм часов.

pub mod rebalance;
pub mod redraw;
pub mod registrar;
pub mod runtime;

pub use rebalance::{detect as detect_rebalance, RebalanceSuggestion, REBALANCE_THRESHOLD};
pub use redraw::{complete_redraw, plan_rotation};
pub use registrar::{bust_player, find_open_seat, seat_new_player, BustedPlayer, OpenSeat};
pub use runtime::{FloorHandle, FloorRuntime, RuntimeError};
