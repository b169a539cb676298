//! Booking state - the single owner of every picker value
//!
//! Pickers never keep their selection. The values below are passed to them
//! as props on every render and replaced only by the reducer.

/// Months offered by the date picker
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Periods offered next to the time slots
pub const PERIODS: [&str; 2] = ["AM", "PM"];

/// Court formats offered by the tournament selector
pub const TOURNAMENTS: [&str; 5] = ["Singles", "Doubles", "Mixed", "Americano", "Mexicano"];

/// Which screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Booking,
    /// Confirmation view; the pickers are unmounted while it shows
    Summary,
}

/// Which picker receives keyboard input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Date,
    Time,
    Tournament,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Date => Focus::Time,
            Focus::Time => Focus::Tournament,
            Focus::Tournament => Focus::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Date => Focus::Tournament,
            Focus::Time => Focus::Date,
            Focus::Tournament => Focus::Time,
        }
    }
}

/// Everything the booking UI renders
#[derive(Clone, Debug, PartialEq)]
pub struct BookingState {
    pub screen: Screen,
    pub focus: Focus,

    /// Day-of-month items
    pub days: Vec<u32>,
    /// Half-hour slots on a 12-hour clock
    pub times: Vec<String>,
    pub tournaments: Vec<String>,

    pub day: u32,
    pub month: &'static str,
    pub time: String,
    pub period: &'static str,
    pub tournament: String,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            screen: Screen::Booking,
            focus: Focus::Date,
            days: (1..=31).collect(),
            times: half_hour_slots(),
            tournaments: TOURNAMENTS.iter().map(|t| t.to_string()).collect(),
            day: 1,
            month: MONTHS[0],
            time: "10:00".into(),
            period: PERIODS[0],
            tournament: TOURNAMENTS[0].into(),
        }
    }
}

impl BookingState {
    /// One-line description of the current booking
    pub fn summary(&self) -> String {
        format!(
            "{} {} at {} {}, {}",
            self.day, self.month, self.time, self.period, self.tournament
        )
    }
}

/// `1:00`, `1:30`, ... `12:30`
pub fn half_hour_slots() -> Vec<String> {
    (1..=12)
        .flat_map(|hour| [format!("{hour}:00"), format!("{hour}:30")])
        .collect()
}
