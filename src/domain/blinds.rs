// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Один уровень расписания.
/// Пример: level = 3, SB = 200, BB = 400, ante = 400, duration_minutes = 30.
///
/// Если `is_break == true`, блайнды и анте игнорируются: это перерыв.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlindLevel {
    /// Порядковый номер уровня (1, 2, 3, ...), совпадает с позицией в расписании.
    pub level: u32,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Размер анте в фишках (0, если нет).
    pub ante: Chips,
    /// Длительность уровня в минутах.
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub is_break: bool,
}

impl BlindLevel {
    pub fn new(level: u32, small_blind: u64, big_blind: u64, ante: u64, duration_minutes: u32) -> Self {
        Self {
            level,
            small_blind: Chips::new(small_blind),
            big_blind: Chips::new(big_blind),
            ante: Chips::new(ante),
            duration_minutes,
            is_break: false,
        }
    }

    /// Перерыв: блайндов нет, только длительность.
    pub fn break_level(level: u32, duration_minutes: u32) -> Self {
        Self {
            level,
            small_blind: Chips::ZERO,
            big_blind: Chips::ZERO,
            ante: Chips::ZERO,
            duration_minutes,
            is_break: true,
        }
    }

    /// Длительность уровня в секундах (столько ставит часам перезагрузка уровня).
    pub fn duration_secs(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.duration_minutes == 0 {
            return Err(format!("BlindLevel {}: duration = 0", self.level));
        }
        if self.is_break {
            return Ok(());
        }
        if self.big_blind.is_zero() {
            return Err(format!("BlindLevel {}: big_blind = 0", self.level));
        }
        if self.big_blind < self.small_blind {
            return Err(format!(
                "BlindLevel {}: big_blind ({}) < small_blind ({})",
                self.level, self.big_blind, self.small_blind
            ));
        }
        Ok(())
    }
}

/// Расписание уровней турнира. Чистая таблица поиска по номеру уровня.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BlindStructure {
    pub levels: Vec<BlindLevel>,
}

impl BlindStructure {
    pub fn new(levels: Vec<BlindLevel>) -> Self {
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Номер последнего уровня (0 для пустого расписания).
    pub fn last_level(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Уровень по номеру (1-based). Номер = позиция в векторе, поэтому индексируем напрямую.
    pub fn level_by_number(&self, number: u32) -> Option<&BlindLevel> {
        if number == 0 {
            return None;
        }
        self.levels.get(number as usize - 1)
    }

    /// Ближайший перерыв строго после уровня `after`.
    pub fn next_break_after(&self, after: u32) -> Option<&BlindLevel> {
        self.levels
            .iter()
            .find(|lvl| lvl.level > after && lvl.is_break)
    }

    pub fn total_duration_minutes(&self) -> u32 {
        self.levels.iter().map(|lvl| lvl.duration_minutes).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.levels.is_empty() {
            return Err("BlindStructure: empty levels".into());
        }

        for (idx, lvl) in self.levels.iter().enumerate() {
            let expected = idx as u32 + 1;
            if lvl.level != expected {
                return Err(format!(
                    "BlindStructure: expected level {}, got {}",
                    expected, lvl.level
                ));
            }
            lvl.validate()?;
        }

        Ok(())
    }
}
