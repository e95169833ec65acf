//! Инфраструктурный слой вокруг ядра зала:
//! - генерация ID;
//! - RNG и источник времени;
//! - сид-данные;
//! - хранение снимков (in-memory / файл).

pub mod ids;
pub mod persistence;
pub mod rng;
pub mod seed;
pub mod time;

pub use ids::*;
pub use persistence::*;
pub use rng::*;
pub use time::*;
