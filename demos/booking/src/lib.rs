//! Court booking screen built from scroll-picker components
//!
//! - State: [`state::BookingState`] owns every picker value
//! - Actions: [`action::BookingAction`], produced by picker callbacks and keys
//! - Reducer: [`reducer::reducer`]
//! - UI: [`ui::BookingUi`] holds the pickers' view state

pub mod action;
pub mod config;
pub mod reducer;
pub mod state;
pub mod ui;
