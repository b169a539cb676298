//! Discrete scroll pickers for scroll-picker apps
//!
//! Pickers are controlled components: the host owns the selected value,
//! renders the picker with it, and stores whatever `on_change` reports.
//! A picker only keeps view state (scroll offset, gesture phase).
//!
//! # Components
//!
//! - [`DiscreteAxisScroller`] - one axis of items snapping to fixed slots
//! - [`DualAxisTimePicker`] - two axes sharing a `(primary, secondary)` pair
//! - [`CenteredOptionSelector`] - one axis padded so the held item is centered
//!
//! The headless [`AxisState`] machine behind all three is public for hosts
//! that draw their own widgets.
//!
//! # Example
//!
//! ```ignore
//! use scroll_picker::{DualAxisProps, DualAxisTimePicker};
//!
//! // In your render function:
//! picker.render(frame, area, DualAxisProps {
//!     primary_items: &state.times,
//!     secondary_items: &state.periods,
//!     value: (&state.time, &state.period),
//!     layout: &config.layout,
//!     keymap: &config.keymap,
//!     is_focused: state.focus == Focus::Time,
//!     on_change: |time, period| Action::TimeChange(time, period),
//! });
//! ```
//!
//! Actions returned from `handle_event` should reach the store before the
//! next event or render, so the next props already carry the new value.

pub mod axis;
mod centered;
mod dual_axis;
pub mod geometry;
pub mod layout;
mod scroller;
mod view;

pub use axis::{AxisEffect, AxisInput, AxisPhase, AxisState, SLOTS_PER_FRAME};
pub use centered::{CenteredOptionSelector, CenteredProps};
pub use dual_axis::{DualAxisProps, DualAxisTimePicker, DualFocus};
pub use geometry::{CENTER_SPACER_DIVISOR, LEGACY_CENTER_SPACER_DIVISOR};
pub use layout::{Centering, ConfigError, Orientation, PickerLayout};
pub use scroller::{DiscreteAxisScroller, ScrollerProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Centering, CenteredOptionSelector, CenteredProps, DiscreteAxisScroller, DualAxisProps,
        DualAxisTimePicker, DualFocus, Orientation, PickerLayout, ScrollerProps,
    };
}
