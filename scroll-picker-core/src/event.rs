//! Event types delivered to components

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;

/// The event payload handed to `Component::handle_event`
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse press/drag/release event
    Mouse(MouseEvent),
    /// Scroll wheel notch with position and direction (`1` down, `-1` up)
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// Frame tick; drives corrective scroll animations
    Tick,
}

impl EventKind {
    /// Whether this event should end the application regardless of focus
    pub fn is_quit(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            }
            _ => false,
        }
    }
}

/// Check if a point lies inside an area
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
