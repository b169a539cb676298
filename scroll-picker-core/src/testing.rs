//! Test utilities for picker components and their hosts
//!
//! - [`key`]: create a `KeyEvent` from a string (e.g., `key("ctrl+p")`)
//! - [`mouse_down`], [`mouse_drag`], [`mouse_up`], [`scroll`]: pointer events
//! - [`RenderHarness`]: render a component into an in-memory buffer
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use scroll_picker_core::testing::{mouse_down, mouse_up};
//!
//! let actions: Vec<_> = picker
//!     .handle_event(&mouse_down(2, 5), props())
//!     .into_iter()
//!     .chain(picker.handle_event(&mouse_up(2, 5), props()))
//!     .collect();
//! assert_emitted!(actions, Action::SlotChange(_));
//! ```

use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use scroll_picker_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("q");
/// assert_eq!(k.code, KeyCode::Char('q'));
///
/// let k = key("ctrl+p");
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a key `EventKind` from a key string.
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Left button press at a cell
pub fn mouse_down(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Left button drag to a cell
pub fn mouse_drag(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

/// Left button release at a cell
pub fn mouse_up(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

/// One scroll wheel notch (`delta` 1 = down, -1 = up)
pub fn scroll(column: u16, row: u16, delta: isize) -> EventKind {
    EventKind::Scroll { column, row, delta }
}

/// Renders components into an in-memory terminal for assertions.
///
/// ```
/// use scroll_picker_core::testing::RenderHarness;
/// use ratatui::widgets::Paragraph;
///
/// let mut render = RenderHarness::new(10, 1);
/// let out = render.render_to_string_plain(|frame| {
///     frame.render_widget(Paragraph::new("10:00"), frame.area());
/// });
/// assert!(out.starts_with("10:00"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal creation");
        Self { terminal }
    }

    /// Render one frame and return the resulting buffer
    pub fn render<F>(&mut self, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(|frame| draw(frame))
            .expect("test terminal draw");
        self.terminal.backend().buffer().clone()
    }

    /// Render one frame and return its text, one line per row, styles dropped
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(draw);
        buffer_to_string_plain(&buffer)
    }
}

/// Convert a buffer to plain text, one line per row, trailing spaces trimmed
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

fn buffer_rect_to_string_plain(buffer: &Buffer, area: Rect) -> String {
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Assert that a specific action was emitted.
///
/// ```ignore
/// assert_emitted!(actions, Action::TimeChange(t, _) if t == "11:30");
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_helpers() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("x").code, KeyCode::Char('x'));
        assert!(matches!(key_event("enter"), EventKind::Key(k) if k.code == KeyCode::Enter));
    }

    #[test]
    fn test_mouse_helpers() {
        match mouse_drag(4, 9) {
            EventKind::Mouse(m) => {
                assert_eq!(m.kind, MouseEventKind::Drag(MouseButton::Left));
                assert_eq!((m.column, m.row), (4, 9));
            }
            other => panic!("expected mouse event, got {:?}", other),
        }
        assert!(matches!(scroll(0, 0, 1), EventKind::Scroll { delta: 1, .. }));
    }

    #[test]
    fn test_render_harness_plain_text() {
        let mut render = RenderHarness::new(8, 2);
        let out = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("AM\nPM"), frame.area());
        });
        assert_eq!(out, "AM\nPM\n");
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Pick(&'static str),
        Other,
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Pick("PM"), TestAction::Other];

        assert_emitted!(actions, TestAction::Pick("PM"));
        assert_emitted!(actions, TestAction::Pick(p) if *p == "PM");
        assert_not_emitted!(actions, TestAction::Pick("AM"));
        assert_eq!(count_emitted!(actions, TestAction::Pick(_)), 1);
    }
}
