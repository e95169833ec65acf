//! Начальные данные зала: шесть турниров с рассадкой, расписаниями и призовыми.
//!
//! Фабрика детерминирована: стеки берутся из переданного `RandomSource`,
//! без него используется фиксированный разброс. Эти же данные – цель
//! действия "сброс".

use crate::domain::blinds::{BlindLevel, BlindStructure};
use crate::domain::chips::Chips;
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::player::Player;
use crate::domain::prizepool::{Prizepool, PrizepoolEntry};
use crate::domain::table::{Seat, Table};
use crate::domain::tournament::{Tournament, TournamentStatus};
use crate::domain::TimestampMs;
use crate::engine::notification_log::NotificationLog;
use crate::infra::ids::IdGenerator;
use crate::infra::rng::RandomSource;
use crate::state::TournamentState;
use crate::tournament::redraw::plan_rotation;

const PLAYER_NAMES: [&str; 80] = [
    "James Chen", "Maria Rodriguez", "David Kim", "Sarah Thompson",
    "Michael Park", "Jennifer Walsh", "Robert Liu", "Amanda Foster",
    "William Zhang", "Emily Carter", "Daniel Nguyen", "Jessica Moore",
    "Christopher Lee", "Ashley Davis", "Matthew Wilson", "Stephanie Brown",
    "Andrew Martinez", "Nicole Taylor", "Joshua Anderson", "Samantha Thomas",
    "Kevin Hernandez", "Rachel Garcia", "Brandon Jackson", "Lauren White",
    "Tyler Robinson", "Megan Clark", "Ryan Lewis", "Brittany Hall",
    "Justin Young", "Kayla Allen", "Aaron King", "Olivia Wright",
    "Nathan Scott", "Hannah Green", "Patrick Adams", "Victoria Baker",
    "Sean Gonzalez", "Courtney Nelson", "Derek Hill", "Amber Ramirez",
    "Marcus Campbell", "Tiffany Mitchell", "Troy Roberts", "Christina Turner",
    "Dustin Phillips", "Vanessa Evans", "Cody Edwards", "Monica Collins",
    "Brett Stewart", "Diana Sanchez", "Shane Morris", "Laura Rogers",
    "Grant Reed", "Natalie Cook", "Blake Morgan", "Michelle Bell",
    "Ivan Murphy", "Heather Bailey", "Oscar Rivera", "Alexis Cooper",
    "Felix Howard", "Jade Ward", "Leo Torres", "Sophia Peterson",
    "Hugo Gray", "Chloe Ramirez", "Theo James", "Ella Flores",
    "Max Bennett", "Lily Wood", "Simon Barnes", "Zoe Ross",
    "Caleb Henderson", "Ruby Coleman", "Owen Jenkins", "Nora Perry",
    "Elijah Powell", "Maya Long", "Isaac Patterson", "Stella Hughes",
];

const FINAL_TABLE_NAMES: [&str; 7] = [
    "Viktor Blom", "Vanessa Selbst", "Phil Ivey",
    "Daniel Negreanu", "Bryn Kenney", "Maria Ho", "Jason Koon",
];

const REDRAW_NAMES: [&str; 24] = [
    "Tommy Angelo", "Liv Boeree", "Chris Moneymaker", "Annette Obrestad",
    "Erik Seidel", "Kathy Liebert", "Gus Hansen", "Jennifer Tilly",
    "Scotty Nguyen", "Vanessa Rousso", "Barry Greenstein", "Annie Duke",
    "Allen Cunningham", "Liz Lieu", "Mike Matusow", "Evelyn Ng",
    "John Juanda", "Linda Johnson", "Ted Forrest", "Joanne Liu",
    "Huck Seed", "Jan Fisher", "Men Nguyen", "Barbara Enright",
];

/// Имена для регистрации "с улицы", если оператор не ввёл имя.
pub const WALK_IN_NAMES: [&str; 16] = [
    "Alex Mercer", "Jordan Blake", "Casey Quinn", "Riley Morgan",
    "Taylor Nash", "Quinn Avery", "Sage Donovan", "Phoenix Hart",
    "Reese Canton", "Avery Sinclair", "Parker Wolfe", "Dakota Lane",
    "Morgan Steele", "Cameron Drake", "Jamie Frost", "Rowan Pierce",
];

/// Смещение сдвига в плане пересадки $1K NLH.
const REDRAW_ROTATION_OFFSET: usize = 7;

/// Случайное имя для регистрации без имени.
pub fn random_walk_in_name<R: RandomSource>(rng: &mut R) -> &'static str {
    rng.pick(&WALK_IN_NAMES).copied().unwrap_or(WALK_IN_NAMES[0])
}

/// Фиксированный "разброс" вместо RNG: стеки разные, но воспроизводимые.
#[derive(Clone, Debug, Default)]
pub struct EvenSpread {
    step: u64,
}

impl RandomSource for EvenSpread {
    fn between(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        // 37 взаимно просто со 100: за 100 шагов проходим все доли.
        let fraction = (self.step * 37) % 100;
        self.step += 1;
        low + (high - low) * fraction / 100
    }
}

/// Сид-данные без RNG (полностью детерминированные).
pub fn initial_state(now: TimestampMs) -> TournamentState {
    initial_state_with(&mut EvenSpread::default(), now)
}

/// Сид-данные со стеками из `rng`.
pub fn initial_state_with<R: RandomSource>(rng: &mut R, now: TimestampMs) -> TournamentState {
    let mut players = PlayerFactory { next_id: 1, rng };

    // PLO: 8 столов по 8 мест, 58 игроков, часть мест пустая.
    let plo_tables = players.tables(
        "plo",
        8,
        8,
        &PLAYER_NAMES[..58],
        (8_000, 45_000),
        &[(3, &[7]), (6, &[4, 8]), (7, &[2]), (8, &[5, 6])],
    );

    // Финальный стол Championship: 9 мест, 7 игроков.
    let ft_tables = players.tables(
        "championship",
        1,
        9,
        &FINAL_TABLE_NAMES,
        (800_000, 3_200_000),
        &[(1, &[8, 9])],
    );

    // $1K NLH: 3 полных стола по 8 перед пересадкой.
    let redraw_tables = players.tables(
        "redraw-nlh",
        3,
        8,
        &REDRAW_NAMES,
        (20_000, 75_000),
        &[],
    );

    let next_player = players.next_id;

    let mut redraw_nlh = Tournament {
        id: "redraw-nlh".into(),
        name: "$1,000 NLH".into(),
        buy_in: Chips(1_000),
        status: TournamentStatus::Live,
        tables: redraw_tables,
        blind_structure: redraw_nlh_blinds(),
        prizepool: redraw_nlh_prizepool(),
        late_reg_end_level: 8,
        current_level: 10,
        clock_running: false,
        clock_time_remaining: 1_800,
        hands_per_table: 8,
        starting_chips: Chips(30_000),
        game_type: "No-Limit Hold'em".into(),
        pending_redraw: None,
        paid_out_players: None,
    };
    redraw_nlh.pending_redraw = Some(plan_rotation(&redraw_nlh, REDRAW_ROTATION_OFFSET, 8));

    let tournaments = vec![
        Tournament {
            id: "plo".into(),
            name: "$400 PLO".into(),
            buy_in: Chips(400),
            status: TournamentStatus::Live,
            tables: plo_tables,
            blind_structure: plo_blinds(),
            prizepool: plo_prizepool(),
            late_reg_end_level: 8,
            current_level: 5,
            clock_running: true,
            clock_time_remaining: 1_047,
            hands_per_table: 8,
            starting_chips: Chips(20_000),
            game_type: "Pot-Limit Omaha".into(),
            pending_redraw: None,
            paid_out_players: None,
        },
        Tournament {
            id: "championship".into(),
            name: "$5,000 Championship".into(),
            buy_in: Chips(5_000),
            status: TournamentStatus::Live,
            tables: ft_tables,
            blind_structure: championship_blinds(),
            prizepool: championship_prizepool(),
            late_reg_end_level: 9,
            current_level: 22,
            clock_running: false,
            clock_time_remaining: 2_847,
            hands_per_table: 9,
            starting_chips: Chips(50_000),
            game_type: "No-Limit Hold'em".into(),
            pending_redraw: None,
            paid_out_players: None,
        },
        redraw_nlh,
        upcoming(
            "deepstack",
            "$500 Deepstack",
            500,
            deepstack_blinds(),
            deepstack_prizepool(),
            8,
            9,
            30_000,
        ),
        upcoming(
            "seniors",
            "$200 Seniors Event",
            200,
            seniors_blinds(),
            seniors_prizepool(),
            10,
            9,
            20_000,
        ),
        upcoming(
            "closer",
            "$750 Closer",
            750,
            closer_blinds(),
            closer_prizepool(),
            6,
            8,
            25_000,
        ),
    ];

    let notifications = seed_notifications(now);
    // Сид-ленту нумеровали вручную (notif-1..notif-9 с пропусками).
    let next_notification = 10;

    TournamentState {
        tournaments,
        selected_tournament_id: Some("plo".into()),
        notifications: NotificationLog::from_entries(notifications),
        ids: IdGenerator::starting_at(next_notification, next_player),
    }
}

struct PlayerFactory<'a, R: RandomSource> {
    next_id: u64,
    rng: &'a mut R,
}

impl<R: RandomSource> PlayerFactory<'_, R> {
    /// Столы турнира: игроки рассаживаются по порядку, пропуская места из `empty_seats`.
    fn tables(
        &mut self,
        tournament_id: &str,
        table_count: u32,
        hands_per_table: u8,
        names: &[&str],
        chip_range: (u64, u64),
        empty_seats: &[(u32, &[u8])],
    ) -> Vec<Table> {
        let mut names = names.iter();
        let mut tables = Vec::with_capacity(table_count as usize);

        for number in 1..=table_count {
            let table_id = format!("{tournament_id}-table-{number}");
            let skip: &[u8] = empty_seats
                .iter()
                .find(|(n, _)| *n == number)
                .map_or(&[], |(_, seats)| seats);

            let mut seats = Vec::with_capacity(hands_per_table as usize);
            for position in 1..=hands_per_table {
                let player = if skip.contains(&position) {
                    None
                } else {
                    names
                        .next()
                        .map(|name| self.player(name, &table_id, position, chip_range))
                };
                seats.push(Seat { position, player });
            }

            tables.push(Table {
                id: table_id,
                number,
                seats,
            });
        }

        tables
    }

    fn player(&mut self, name: &str, table_id: &str, position: u8, (low, high): (u64, u64)) -> Player {
        let id = format!("player-{}", self.next_id);
        self.next_id += 1;
        let chips = Chips(self.rng.between(low, high)).round_to(100);
        Player::new(id, name, chips, table_id, position)
    }
}

#[allow(clippy::too_many_arguments)]
fn upcoming(
    id: &str,
    name: &str,
    buy_in: u64,
    blind_structure: BlindStructure,
    prizepool: Prizepool,
    late_reg_end_level: u32,
    hands_per_table: u8,
    starting_chips: u64,
) -> Tournament {
    let first_level_secs = blind_structure
        .level_by_number(1)
        .map_or(0, BlindLevel::duration_secs);

    Tournament {
        id: id.into(),
        name: name.into(),
        buy_in: Chips(buy_in),
        status: TournamentStatus::Upcoming,
        tables: Vec::new(),
        blind_structure,
        prizepool,
        late_reg_end_level,
        current_level: 1,
        clock_running: false,
        clock_time_remaining: first_level_secs,
        hands_per_table,
        starting_chips: Chips(starting_chips),
        game_type: "No-Limit Hold'em".into(),
        pending_redraw: None,
        paid_out_players: None,
    }
}

fn seed_notifications(now: TimestampMs) -> Vec<Notification> {
    let rows: [(&str, NotificationKind, &str, &str, u64, bool, &str); 7] = [
        ("notif-1", NotificationKind::Level, "Level Change",
         "Level 5 starting. Blinds 400/800/800", 120_000, false, "plo"),
        ("notif-2", NotificationKind::Redraw, "Table Rebalance Needed",
         "Table 6 has 6 players. Move Dustin Phillips (Table 6, Seat 3) to Table 3, Seat 7", 300_000, false, "plo"),
        ("notif-3", NotificationKind::Registration, "Late Registration",
         "Late registration for $400 PLO closes at end of Level 8", 600_000, true, "plo"),
        ("notif-6", NotificationKind::Alert, "Final Table",
         "Final table reached. 7 players remaining. Clock paused.", 60_000, false, "championship"),
        ("notif-7", NotificationKind::Level, "Level Change",
         "Level 22 starting. Blinds 25,000/50,000/50,000", 180_000, true, "championship"),
        ("notif-8", NotificationKind::Redraw, "3-Table Redraw Required",
         "24 players remaining. Complete redraw to 3 tables of 8. Clock paused.", 30_000, false, "redraw-nlh"),
        ("notif-9", NotificationKind::Level, "Level Change",
         "Level 10 starting. Blinds 1,000/2,000/2,000", 240_000, true, "redraw-nlh"),
    ];

    rows.iter()
        .map(|&(id, kind, title, message, ago, read, tournament_id)| Notification {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: now.saturating_sub(ago),
            read,
            tournament_id: tournament_id.into(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Расписания блайндов
// ---------------------------------------------------------------------------

/// Уровни из строк (sb, bb, ante, минуты); sb = bb = 0 означает перерыв.
fn schedule(rows: &[(u64, u64, u64, u32)]) -> BlindStructure {
    let levels = rows
        .iter()
        .enumerate()
        .map(|(idx, &(sb, bb, ante, minutes))| {
            let level = idx as u32 + 1;
            if sb == 0 && bb == 0 {
                BlindLevel::break_level(level, minutes)
            } else {
                BlindLevel::new(level, sb, bb, ante, minutes)
            }
        })
        .collect();
    BlindStructure::new(levels)
}

fn plo_blinds() -> BlindStructure {
    schedule(&[
        (100, 200, 200, 30),
        (200, 300, 300, 30),
        (200, 400, 400, 30),
        (300, 600, 600, 30),
        (400, 800, 800, 30),
        (0, 0, 0, 15),
        (500, 1_000, 1_000, 30),
        (600, 1_200, 1_200, 30),
        (800, 1_600, 1_600, 30),
        (1_000, 2_000, 2_000, 30),
        (0, 0, 0, 15),
        (1_500, 3_000, 3_000, 30),
        (2_000, 4_000, 4_000, 30),
        (2_500, 5_000, 5_000, 30),
        (3_000, 6_000, 6_000, 30),
    ])
}

fn redraw_nlh_blinds() -> BlindStructure {
    // Та же структура, что у PLO.
    plo_blinds()
}

fn deepstack_blinds() -> BlindStructure {
    schedule(&[
        (100, 100, 100, 30),
        (100, 200, 200, 30),
        (100, 300, 300, 30),
        (200, 400, 400, 30),
        (200, 500, 500, 30),
        (0, 0, 0, 15),
        (300, 600, 600, 30),
        (400, 800, 800, 30),
        (500, 1_000, 1_000, 30),
        (600, 1_200, 1_200, 30),
        (0, 0, 0, 15),
        (800, 1_600, 1_600, 30),
        (1_000, 2_000, 2_000, 30),
        (1_500, 3_000, 3_000, 30),
        (2_000, 4_000, 4_000, 30),
    ])
}

fn closer_blinds() -> BlindStructure {
    schedule(&[
        (100, 200, 200, 30),
        (200, 400, 400, 30),
        (300, 600, 600, 30),
        (400, 800, 800, 30),
        (500, 1_000, 1_000, 30),
        (0, 0, 0, 15),
        (600, 1_200, 1_200, 30),
        (800, 1_600, 1_600, 30),
        (1_000, 2_000, 2_000, 30),
        (1_500, 3_000, 3_000, 30),
        (0, 0, 0, 15),
        (2_000, 4_000, 4_000, 30),
        (2_500, 5_000, 5_000, 30),
        (3_000, 6_000, 6_000, 30),
        (4_000, 8_000, 8_000, 30),
    ])
}

fn seniors_blinds() -> BlindStructure {
    schedule(&[
        (50, 100, 100, 40),
        (100, 200, 200, 40),
        (100, 300, 300, 40),
        (200, 400, 400, 40),
        (200, 500, 500, 40),
        (0, 0, 0, 20),
        (300, 600, 600, 40),
        (400, 800, 800, 40),
        (500, 1_000, 1_000, 40),
        (600, 1_200, 1_200, 40),
        (0, 0, 0, 20),
        (800, 1_600, 1_600, 40),
        (1_000, 2_000, 2_000, 40),
        (1_500, 3_000, 3_000, 40),
        (2_000, 4_000, 4_000, 40),
    ])
}

fn championship_blinds() -> BlindStructure {
    schedule(&[
        (100, 200, 200, 60),
        (200, 400, 400, 60),
        (300, 600, 600, 60),
        (400, 800, 800, 60),
        (500, 1_000, 1_000, 60),
        (0, 0, 0, 20),
        (600, 1_200, 1_200, 60),
        (800, 1_600, 1_600, 60),
        (1_000, 2_000, 2_000, 60),
        (1_500, 3_000, 3_000, 60),
        (0, 0, 0, 20),
        (2_000, 4_000, 4_000, 60),
        (3_000, 6_000, 6_000, 60),
        (4_000, 8_000, 8_000, 60),
        (5_000, 10_000, 10_000, 60),
        (0, 0, 0, 20),
        (8_000, 15_000, 15_000, 60),
        (10_000, 20_000, 20_000, 60),
        (15_000, 30_000, 30_000, 60),
        (20_000, 40_000, 40_000, 60),
        (0, 0, 0, 20),
        (25_000, 50_000, 50_000, 60),
        (30_000, 60_000, 60_000, 60),
        (40_000, 80_000, 80_000, 60),
        (50_000, 100_000, 100_000, 60),
    ])
}

// ---------------------------------------------------------------------------
// Призовые фонды
// ---------------------------------------------------------------------------

fn prizepool(
    guaranteed: u64,
    total_entries: u32,
    total_pool: u64,
    places_paid: u32,
    rows: &[(&str, u64, f64)],
) -> Prizepool {
    Prizepool {
        guaranteed: Chips(guaranteed),
        total_entries,
        total_pool: Chips(total_pool),
        places_paid,
        breakdown: rows
            .iter()
            .map(|&(place, amount, pct)| PrizepoolEntry::new(place, amount, pct))
            .collect(),
    }
}

fn plo_prizepool() -> Prizepool {
    prizepool(40_000, 112, 44_800, 15, &[
        ("1st", 12_544, 28.0),
        ("2nd", 8_512, 19.0),
        ("3rd", 5_824, 13.0),
        ("4th", 4_032, 9.0),
        ("5th", 3_136, 7.0),
        ("6th", 2_464, 5.5),
        ("7th", 1_971, 4.4),
        ("8th", 1_568, 3.5),
        ("9th", 1_254, 2.8),
        ("10th", 986, 2.2),
        ("11th-12th", 762, 1.7),
        ("13th-15th", 583, 1.3),
    ])
}

fn deepstack_prizepool() -> Prizepool {
    prizepool(50_000, 0, 50_000, 15, &[
        ("1st", 14_000, 28.0),
        ("2nd", 9_500, 19.0),
        ("3rd", 6_500, 13.0),
        ("4th", 4_500, 9.0),
        ("5th", 3_500, 7.0),
        ("6th", 2_750, 5.5),
        ("7th", 2_200, 4.4),
        ("8th", 1_750, 3.5),
        ("9th-10th", 1_250, 2.5),
        ("11th-15th", 750, 1.5),
    ])
}

fn closer_prizepool() -> Prizepool {
    prizepool(75_000, 0, 75_000, 15, &[
        ("1st", 21_000, 28.0),
        ("2nd", 14_250, 19.0),
        ("3rd", 9_750, 13.0),
        ("4th", 6_750, 9.0),
        ("5th", 5_250, 7.0),
        ("6th", 4_125, 5.5),
        ("7th", 3_300, 4.4),
        ("8th", 2_625, 3.5),
        ("9th-10th", 1_875, 2.5),
        ("11th-15th", 1_125, 1.5),
    ])
}

fn seniors_prizepool() -> Prizepool {
    prizepool(20_000, 0, 20_000, 10, &[
        ("1st", 5_600, 28.0),
        ("2nd", 3_800, 19.0),
        ("3rd", 2_600, 13.0),
        ("4th", 1_800, 9.0),
        ("5th", 1_400, 7.0),
        ("6th", 1_100, 5.5),
        ("7th-8th", 900, 4.5),
        ("9th-10th", 700, 3.5),
    ])
}

fn championship_prizepool() -> Prizepool {
    prizepool(500_000, 118, 590_000, 18, &[
        ("1st", 159_300, 27.0),
        ("2nd", 106_200, 18.0),
        ("3rd", 76_700, 13.0),
        ("4th", 53_100, 9.0),
        ("5th", 41_300, 7.0),
        ("6th", 32_450, 5.5),
        ("7th", 25_960, 4.4),
        ("8th", 20_650, 3.5),
        ("9th", 16_520, 2.8),
        ("10th", 12_980, 2.2),
        ("11th-12th", 10_030, 1.7),
        ("13th-15th", 7_670, 1.3),
        ("16th-18th", 5_900, 1.0),
    ])
}

fn redraw_nlh_prizepool() -> Prizepool {
    prizepool(100_000, 132, 132_000, 18, &[
        ("1st", 35_640, 27.0),
        ("2nd", 23_760, 18.0),
        ("3rd", 17_160, 13.0),
        ("4th", 11_880, 9.0),
        ("5th", 9_240, 7.0),
        ("6th", 7_260, 5.5),
        ("7th-8th", 5_280, 4.0),
        ("9th-12th", 3_300, 2.5),
        ("13th-18th", 2_112, 1.6),
    ])
}
