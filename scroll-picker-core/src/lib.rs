//! Core traits and types for scroll-picker
//!
//! This crate provides the framework pieces the picker components are built
//! on, following a Redux/Elm-inspired architecture:
//!
//! - **Action**: host-defined values a picker callback produces
//! - **Store**: the host's state container; owns every controlled value
//! - **Component**: controlled UI elements that render from props
//! - **Transition**: result of one state-machine step (render flag + effects)
//! - **Keymap**: configurable key strings per picker command
//!
//! # Controlled components
//!
//! A picker never owns its value. The host renders it with the current value,
//! the picker reports a committed selection as an action, the host's reducer
//! stores it, and the next render hands the new value back.
//!
//! Every action a picker returns must be dispatched before the next event is
//! handed to any picker. Each event first brings the axis in line with the
//! value in props; a commit still waiting in a queue makes the axis jump
//! back to the previous value.
//!
//! ```ignore
//! loop {
//!     terminal.draw(|frame| picker.render(frame, frame.area(), props(store.state())))?;
//!
//!     let Some(raw) = event_rx.recv().await else { break };
//!     let event = process_raw_event(raw);
//!     for action in picker.handle_event(&event, props(store.state())) {
//!         store.dispatch(action);
//!     }
//! }
//! ```

pub mod action;
pub mod bus;
pub mod component;
pub mod effect;
pub mod event;
pub mod keybindings;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::Action;
pub use component::Component;

// Event system exports
pub use bus::{process_raw_event, spawn_event_poller, spawn_ticker, RawEvent};
pub use event::{rect_contains, EventKind};

// Keymap exports
pub use keybindings::{format_key_for_display, parse_key_string, PickerCommand, PickerKeymap};

// Store exports
pub use store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

// Effect exports
pub use effect::Transition;

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{buffer_to_string_plain, key, RenderHarness};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::bus::{process_raw_event, spawn_event_poller, spawn_ticker, RawEvent};
    pub use crate::component::Component;
    pub use crate::effect::Transition;
    pub use crate::event::{rect_contains, EventKind};
    pub use crate::keybindings::{PickerCommand, PickerKeymap};
    pub use crate::store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
