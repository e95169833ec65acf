//! Текстовые отчёты по турниру (сводка, блайнды, выплаты, рассадка).
//!
//! Отчёт строится из снимка турнира и ничего не меняет.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::tournament::{Tournament, TournamentStatus};
use crate::domain::TimestampMs;
use crate::time_ctrl::format_clock;

const LABEL_WIDTH: usize = 24;
const DASH: &str = "-";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    #[serde(rename = "tournament-summary")]
    Summary,
    BlindStructure,
    PayoutSchedule,
    SeatingChart,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Summary,
        ReportKind::BlindStructure,
        ReportKind::PayoutSchedule,
        ReportKind::SeatingChart,
    ];

    /// Идентификатор для имени файла и API.
    pub fn id(self) -> &'static str {
        match self {
            ReportKind::Summary => "tournament-summary",
            ReportKind::BlindStructure => "blind-structure",
            ReportKind::PayoutSchedule => "payout-schedule",
            ReportKind::SeatingChart => "seating-chart",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Summary => "Tournament Summary",
            ReportKind::BlindStructure => "Blind Structure",
            ReportKind::PayoutSchedule => "Payout Schedule",
            ReportKind::SeatingChart => "Seating Chart",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportKind::Summary => "Overview of event details, current level, players, and clock",
            ReportKind::BlindStructure => "Full schedule of blinds and antes",
            ReportKind::PayoutSchedule => "Prizepool breakdown and place payouts",
            ReportKind::SeatingChart => "Tables and player assignments",
        }
    }
}

/// Готовый отчёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub title: String,
    pub filename: String,
    pub body: String,
}

/// Имя файла: имя турнира, где всё кроме ASCII букв/цифр заменено на '-'.
pub fn report_filename(tournament: &Tournament, kind: ReportKind) -> String {
    let stem: String = tournament
        .name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}-{}.txt", stem, kind.id())
}

pub fn render_report(tournament: &Tournament, kind: ReportKind, generated_at: TimestampMs) -> Report {
    let mut out = ReportWriter::default();

    out.raw(&tournament.name);
    out.raw(&format!(
        "Generated {} | {} Event",
        format_timestamp(generated_at),
        status_label(tournament.status)
    ));
    out.blank();
    out.title(kind.label());

    match kind {
        ReportKind::Summary => summary(&mut out, tournament),
        ReportKind::BlindStructure => blind_structure(&mut out, tournament),
        ReportKind::PayoutSchedule => payout_schedule(&mut out, tournament),
        ReportKind::SeatingChart => seating_chart(&mut out, tournament),
    }

    Report {
        kind,
        title: format!("{} - {}", tournament.name, kind.label()),
        filename: report_filename(tournament, kind),
        body: out.finish(),
    }
}

fn summary(out: &mut ReportWriter, t: &Tournament) {
    out.section("Event Details");
    out.line("Buy-in", &currency(t.buy_in));
    out.line("Game Type", &t.game_type);
    out.line("Starting Chips", &t.starting_chips.to_string());
    out.line("Late Registration Ends", &format!("Level {}", t.late_reg_end_level));

    out.section("Current Status");
    out.line("Players Remaining", &t.player_count().to_string());
    out.line("Tables", &t.tables.len().to_string());
    out.line("Current Level", &t.current_level.to_string());

    if let Some(level) = t.current_blind_level().filter(|l| !l.is_break) {
        out.line("Blinds", &format!("{} / {}", level.small_blind, level.big_blind));
        if !level.ante.is_zero() {
            out.line("Ante", &level.ante.to_string());
        }
        out.line("Level Duration", &format!("{} min", level.duration_minutes));
    }

    if t.is_live() {
        out.line("Clock", &format_clock(t.clock_time_remaining));
        out.line("Clock Status", if t.clock_running { "Running" } else { "Paused" });
    }

    out.section("Prizepool");
    out.line("Guaranteed", &currency(t.prizepool.guaranteed));
    out.line("Total Pool", &currency(t.prizepool.total_pool));
    out.line("Places Paid", &t.prizepool.places_paid.to_string());

    if let Some(paid) = t.paid_out_players.as_ref().filter(|p| !p.is_empty()) {
        out.section("Payouts Awarded");
        for p in paid {
            out.line(
                &format!("{} place", p.place_label),
                &format!("{}: {}", p.player_name, currency(p.amount)),
            );
        }
    }
}

fn blind_structure(out: &mut ReportWriter, t: &Tournament) {
    out.row(&["Level", "Small Blind", "Big Blind", "Ante", "Duration"]);
    for level in &t.blind_structure.levels {
        let duration = format!("{} min", level.duration_minutes);
        if level.is_break {
            out.row(&["Break", DASH, DASH, DASH, &duration]);
        } else {
            let ante = if level.ante.is_zero() {
                DASH.to_string()
            } else {
                level.ante.to_string()
            };
            out.row(&[
                &level.level.to_string(),
                &level.small_blind.to_string(),
                &level.big_blind.to_string(),
                &ante,
                &duration,
            ]);
        }
    }
}

fn payout_schedule(out: &mut ReportWriter, t: &Tournament) {
    out.raw(&format!("Total Prizepool: {}", currency(t.prizepool.total_pool)));
    out.raw(&format!("Places Paid: {}", t.prizepool.places_paid));
    out.blank();
    out.row(&["Place", "Amount", "Percentage"]);
    for entry in &t.prizepool.breakdown {
        out.row(&[
            &entry.place,
            &currency(entry.amount),
            &format!("{}%", entry.percentage),
        ]);
    }
}

fn seating_chart(out: &mut ReportWriter, t: &Tournament) {
    for table in &t.tables {
        out.section(&format!("Table {}", table.number));
        out.row(&["Seat", "Player", "Chips"]);
        for seat in &table.seats {
            match &seat.player {
                Some(p) => out.row(&[
                    &seat.position.to_string(),
                    &p.name,
                    &p.chip_count.to_string(),
                ]),
                None => out.row(&[&seat.position.to_string(), DASH, DASH]),
            }
        }
    }
}

fn currency(amount: Chips) -> String {
    format!("${amount}")
}

fn status_label(status: TournamentStatus) -> &'static str {
    match status {
        TournamentStatus::Upcoming => "UPCOMING",
        TournamentStatus::Live => "LIVE",
    }
}

fn format_timestamp(ms: TimestampMs) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ms.to_string())
}

#[derive(Default)]
struct ReportWriter {
    buf: String,
}

impl ReportWriter {
    fn raw(&mut self, text: &str) {
        let _ = writeln!(self.buf, "{text}");
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn title(&mut self, text: &str) {
        self.raw(text);
        self.raw(&"=".repeat(text.len()));
    }

    fn section(&mut self, text: &str) {
        self.blank();
        self.raw(text);
        self.raw(&"-".repeat(text.len()));
    }

    fn line(&mut self, label: &str, value: &str) {
        let _ = writeln!(self.buf, "{label:<LABEL_WIDTH$}{value}");
    }

    fn row(&mut self, cells: &[&str]) {
        let line: String = cells.iter().map(|c| format!("{c:<14}")).collect();
        self.raw(line.trim_end());
    }

    fn finish(self) -> String {
        self.buf
    }
}
