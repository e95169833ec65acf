use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::domain::TimestampMs;

/// Источник "текущего времени" для стора.
///
/// Переход состояния получает время только аргументом; читать часы
/// разрешено лишь на границе (стор / рантайм).
pub trait TimeSource: Send + Sync {
    fn now_ms(&self) -> TimestampMs;
}

/// Настенные часы (UTC).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now_ms(&self) -> TimestampMs {
        Utc::now().timestamp_millis().max(0) as TimestampMs
    }
}

/// Ручные часы для тестов: время двигается только через `set` / `advance`.
#[derive(Debug, Default)]
pub struct FixedTime {
    now: AtomicU64,
}

impl FixedTime {
    pub fn new(now: TimestampMs) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn set(&self, now: TimestampMs) {
        self.now.store(now, Ordering::Relaxed);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::Relaxed);
    }
}

impl TimeSource for FixedTime {
    fn now_ms(&self) -> TimestampMs {
        self.now.load(Ordering::Relaxed)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now_ms(&self) -> TimestampMs {
        (**self).now_ms()
    }
}
