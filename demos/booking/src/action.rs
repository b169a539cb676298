//! Booking actions
//!
//! Picker actions are built by the `on_change` callbacks handed to each
//! picker; the rest come from the screen's own keys.

use scroll_picker_core::Action;

use crate::state::Focus;

#[derive(Clone, Debug, PartialEq)]
pub enum BookingAction {
    // ===== Picker commits =====
    /// Date picker settled on `(day, month)`
    DateChange(u32, &'static str),

    /// Time picker settled on `(time, period)`
    TimeChange(String, &'static str),

    /// Tournament selector settled on a format
    TournamentChange(String),

    // ===== UI =====
    FocusSet(Focus),
    FocusNext,
    FocusPrev,

    /// Show the confirmation screen
    ScreenConfirm,

    /// Back to the pickers
    ScreenBack,

    Quit,
}

impl Action for BookingAction {
    fn name(&self) -> &'static str {
        match self {
            BookingAction::DateChange(..) => "DateChange",
            BookingAction::TimeChange(..) => "TimeChange",
            BookingAction::TournamentChange(_) => "TournamentChange",
            BookingAction::FocusSet(_) => "FocusSet",
            BookingAction::FocusNext => "FocusNext",
            BookingAction::FocusPrev => "FocusPrev",
            BookingAction::ScreenConfirm => "ScreenConfirm",
            BookingAction::ScreenBack => "ScreenBack",
            BookingAction::Quit => "Quit",
        }
    }

    fn summary(&self) -> String {
        match self {
            BookingAction::DateChange(day, month) => format!("DateChange({day} {month})"),
            BookingAction::TimeChange(time, period) => format!("TimeChange({time} {period})"),
            other => format!("{:?}", other),
        }
    }
}
