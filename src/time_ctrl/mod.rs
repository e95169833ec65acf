// src/time_ctrl/mod.rs
//! Контроль времени турнира: часы уровня.
//!
//! Здесь собираем:
//! - тик часов (`tick`) с переходом уровня по истечении;
//! - ручные переходы (`advance` / `retreat`) и паузу (`toggle`);
//! - текст уведомления о смене уровня.

pub mod clock;

pub use clock::{
    advance, format_clock, level_notification, retreat, tick, toggle, LevelChange, TickOutcome,
};
