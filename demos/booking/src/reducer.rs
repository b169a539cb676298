//! Reducer - the only place booking values change
//!
//! Returns `true` when the UI should re-render. Committing the value a picker
//! already holds is a no-op, so a tap on the held item costs no frame.

use crate::action::BookingAction;
use crate::state::{BookingState, Screen};

pub fn reducer(state: &mut BookingState, action: BookingAction) -> bool {
    match action {
        // ===== Picker commits =====
        BookingAction::DateChange(day, month) => {
            let changed = state.day != day || state.month != month;
            state.day = day;
            state.month = month;
            changed
        }

        BookingAction::TimeChange(time, period) => {
            let changed = state.time != time || state.period != period;
            state.time = time;
            state.period = period;
            changed
        }

        BookingAction::TournamentChange(tournament) => {
            if state.tournament == tournament {
                return false;
            }
            state.tournament = tournament;
            true
        }

        // ===== UI =====
        BookingAction::FocusSet(focus) => {
            if state.focus == focus {
                return false;
            }
            state.focus = focus;
            true
        }

        BookingAction::FocusNext => {
            state.focus = state.focus.next();
            true
        }

        BookingAction::FocusPrev => {
            state.focus = state.focus.prev();
            true
        }

        BookingAction::ScreenConfirm => set_screen(state, Screen::Summary),
        BookingAction::ScreenBack => set_screen(state, Screen::Booking),

        // Handled in the main loop
        BookingAction::Quit => false,
    }
}

fn set_screen(state: &mut BookingState, screen: Screen) -> bool {
    if state.screen == screen {
        return false;
    }
    state.screen = screen;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;

    #[test]
    fn test_time_change_stores_pair() {
        let mut state = BookingState::default();
        let changed = reducer(&mut state, BookingAction::TimeChange("11:30".into(), "AM"));
        assert!(changed);
        assert_eq!((state.time.as_str(), state.period), ("11:30", "AM"));
    }

    #[test]
    fn test_recommit_of_held_value_is_no_change() {
        let mut state = BookingState::default();
        assert!(!reducer(&mut state, BookingAction::DateChange(1, "Jan")));
        assert!(!reducer(
            &mut state,
            BookingAction::TournamentChange("Singles".into())
        ));
    }

    #[test]
    fn test_date_change_updates_either_half() {
        let mut state = BookingState::default();
        assert!(reducer(&mut state, BookingAction::DateChange(1, "Feb")));
        assert!(reducer(&mut state, BookingAction::DateChange(14, "Feb")));
        assert_eq!((state.day, state.month), (14, "Feb"));
    }

    #[test]
    fn test_focus() {
        let mut state = BookingState::default();
        assert!(!reducer(&mut state, BookingAction::FocusSet(Focus::Date)));
        assert!(reducer(&mut state, BookingAction::FocusNext));
        assert_eq!(state.focus, Focus::Time);
        assert!(reducer(&mut state, BookingAction::FocusPrev));
        assert_eq!(state.focus, Focus::Date);
        assert!(reducer(&mut state, BookingAction::FocusSet(Focus::Tournament)));
    }

    #[test]
    fn test_screens() {
        let mut state = BookingState::default();
        assert!(reducer(&mut state, BookingAction::ScreenConfirm));
        assert!(!reducer(&mut state, BookingAction::ScreenConfirm));
        assert_eq!(state.screen, Screen::Summary);
        assert!(reducer(&mut state, BookingAction::ScreenBack));
        assert_eq!(state.screen, Screen::Booking);
    }

    #[test]
    fn test_quit_does_not_render() {
        let mut state = BookingState::default();
        assert!(!reducer(&mut state, BookingAction::Quit));
    }
}
