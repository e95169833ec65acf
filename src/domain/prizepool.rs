// src/domain/prizepool.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Строка раскладки призового фонда: "1st" или диапазон "11th-12th".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrizepoolEntry {
    pub place: String,
    pub amount: Chips,
    pub percentage: f64,
}

impl PrizepoolEntry {
    pub fn new(place: impl Into<String>, amount: u64, percentage: f64) -> Self {
        Self {
            place: place.into(),
            amount: Chips::new(amount),
            percentage,
        }
    }

    /// Диапазон мест, который покрывает строка.
    pub fn places(&self) -> Option<PlaceRange> {
        PlaceRange::parse(&self.place)
    }
}

/// Диапазон мест (включительно): "7th" -> 7..=7, "11th-12th" -> 11..=12.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceRange {
    pub low: u32,
    pub high: u32,
}

impl PlaceRange {
    pub fn parse(label: &str) -> Option<Self> {
        let mut parts = label.splitn(2, '-');
        let low = leading_number(parts.next()?)?;
        let high = match parts.next() {
            Some(rest) => leading_number(rest)?,
            None => low,
        };
        if high < low {
            return None;
        }
        Some(Self { low, high })
    }

    pub fn contains(&self, place: u32) -> bool {
        (self.low..=self.high).contains(&place)
    }
}

/// Число в начале строки: "11th" -> 11.
fn leading_number(s: &str) -> Option<u32> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Призовой фонд турнира.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prizepool {
    pub guaranteed: Chips,
    pub total_entries: u32,
    pub total_pool: Chips,
    pub places_paid: u32,
    pub breakdown: Vec<PrizepoolEntry>,
}

impl Prizepool {
    /// Строка раскладки, в диапазон которой попадает место `place`.
    pub fn payout_for_place(&self, place: u32) -> Option<&PrizepoolEntry> {
        self.breakdown
            .iter()
            .find(|e| e.places().map_or(false, |r| r.contains(place)))
    }

    /// Выплата следующему вылетевшему: он займёт место `players_remaining`.
    /// None, если до денег ещё не дошли.
    pub fn next_payout(&self, players_remaining: u32) -> Option<&PrizepoolEntry> {
        if players_remaining == 0 || players_remaining > self.places_paid {
            return None;
        }
        self.payout_for_place(players_remaining)
    }
}

/// Игрок, уже получивший выплату.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaidOutPlayer {
    pub place: u32,
    pub place_label: String,
    pub player_name: String,
    pub amount: Chips,
}
