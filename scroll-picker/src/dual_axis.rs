//! Two scrollers sharing one `(primary, secondary)` value

use std::fmt::Display;
use std::marker::PhantomData;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use scroll_picker_core::{Component, EventKind, PickerCommand, PickerKeymap};
use tracing::debug;

use crate::layout::{Orientation, PickerLayout};
use crate::view::{AxisProps, AxisView};

/// Which axis of a dual picker receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DualFocus {
    #[default]
    Primary,
    Secondary,
}

/// Props for [`DualAxisTimePicker`]
pub struct DualAxisProps<'a, P, S, A> {
    pub primary_items: &'a [P],
    pub secondary_items: &'a [S],
    /// Currently held pair (owned by the host)
    pub value: (&'a P, &'a S),
    /// Layout shared by both axes
    pub layout: &'a PickerLayout,
    pub keymap: &'a PickerKeymap,
    pub is_focused: bool,
    /// Called with the full pair whenever either axis commits
    pub on_change: fn(P, S) -> A,
}

/// A picker made of a primary and a secondary axis, e.g. `(time, AM/PM)`.
///
/// Each axis settles independently and reports the whole pair: a primary
/// commit carries the held secondary and vice versa. Neither axis sees the
/// other; both are brought up to date from the pair in props.
///
/// The primary axis takes two thirds of the area. The keymap's focus commands
/// move keyboard input between the axes; mouse input goes to the axis under
/// the cursor.
pub struct DualAxisTimePicker<P, S> {
    primary: AxisView,
    secondary: AxisView,
    focus: DualFocus,
    _items: PhantomData<fn() -> (P, S)>,
}

impl<P, S> Default for DualAxisTimePicker<P, S> {
    fn default() -> Self {
        Self {
            primary: AxisView::default(),
            secondary: AxisView::default(),
            focus: DualFocus::default(),
            _items: PhantomData,
        }
    }
}

impl<P, S> DualAxisTimePicker<P, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis that currently receives keyboard input
    pub fn focus(&self) -> DualFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: DualFocus) {
        self.focus = focus;
    }

    /// Whether neither axis has pending work
    pub fn is_at_rest(&self) -> bool {
        self.primary.is_at_rest() && self.secondary.is_at_rest()
    }

    /// Current `(primary, secondary)` offsets, once mounted
    pub fn offsets(&self) -> Option<(f32, f32)> {
        let primary = self.primary.axis()?.offset();
        let secondary = self.secondary.axis()?.offset();
        Some((primary, secondary))
    }

    /// Cancel pending work on both axes until the next render remounts them
    pub fn unmount(&mut self) {
        self.primary.unmount();
        self.secondary.unmount();
    }

    fn split(area: Rect, orientation: Orientation) -> (Rect, Rect) {
        // Axes sit side by side across the scroll direction.
        let direction = match orientation {
            Orientation::Vertical => Direction::Horizontal,
            Orientation::Horizontal => Direction::Vertical,
        };
        let chunks = Layout::default()
            .direction(direction)
            .constraints([Constraint::Fill(2), Constraint::Fill(1)])
            .split(area);
        (chunks[0], chunks[1])
    }
}

impl<P, S, A> Component<A> for DualAxisTimePicker<P, S>
where
    P: PartialEq + Clone + Display + 'static,
    S: PartialEq + Clone + Display + 'static,
{
    type Props<'a> = DualAxisProps<'a, P, S, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if let EventKind::Key(key) = event {
            if props.is_focused {
                match props.keymap.command(*key) {
                    Some(PickerCommand::FocusPrev) if self.focus != DualFocus::Primary => {
                        debug!("dual picker focus -> primary");
                        self.focus = DualFocus::Primary;
                        return Vec::new();
                    }
                    Some(PickerCommand::FocusNext) if self.focus != DualFocus::Secondary => {
                        debug!("dual picker focus -> secondary");
                        self.focus = DualFocus::Secondary;
                        return Vec::new();
                    }
                    _ => {}
                }
            }
        }

        let (primary_value, secondary_value) = props.value;
        let primary = AxisProps {
            items: props.primary_items,
            value: primary_value,
            layout: props.layout,
            lead: 0.0,
        };
        let secondary = AxisProps {
            items: props.secondary_items,
            value: secondary_value,
            layout: props.layout,
            lead: 0.0,
        };

        let primary_keys = props.is_focused && self.focus == DualFocus::Primary;
        let secondary_keys = props.is_focused && self.focus == DualFocus::Secondary;

        let mut actions = Vec::new();
        for index in self.primary.handle(event, primary, props.keymap, primary_keys) {
            actions.push((props.on_change)(
                props.primary_items[index].clone(),
                secondary_value.clone(),
            ));
        }
        for index in self.secondary.handle(event, secondary, props.keymap, secondary_keys) {
            actions.push((props.on_change)(
                primary_value.clone(),
                props.secondary_items[index].clone(),
            ));
        }
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (primary_area, secondary_area) = Self::split(area, props.layout.orientation);
        let (primary_value, secondary_value) = props.value;

        let primary = AxisProps {
            items: props.primary_items,
            value: primary_value,
            layout: props.layout,
            lead: 0.0,
        };
        self.primary.prepare(primary_area, primary);
        self.primary.draw(
            frame.buffer_mut(),
            primary,
            props.is_focused && self.focus == DualFocus::Primary,
        );

        let secondary = AxisProps {
            items: props.secondary_items,
            value: secondary_value,
            layout: props.layout,
            lead: 0.0,
        };
        self.secondary.prepare(secondary_area, secondary);
        self.secondary.draw(
            frame.buffer_mut(),
            secondary,
            props.is_focused && self.focus == DualFocus::Secondary,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroll_picker_core::testing::{key_event, mouse_down, mouse_up, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Time(&'static str, &'static str),
    }

    const TIMES: [&str; 4] = ["10:00", "10:30", "11:00", "11:30"];
    const PERIODS: [&str; 2] = ["AM", "PM"];

    fn draw(picker: &mut DualAxisTimePicker<&'static str, &'static str>, value: (&'static str, &'static str)) -> String {
        let layout = PickerLayout::vertical(1.0, 4.0);
        let keymap = PickerKeymap::default();
        let mut render = RenderHarness::new(18, 4);
        render.render_to_string_plain(|frame| {
            let props = DualAxisProps {
                primary_items: &TIMES,
                secondary_items: &PERIODS,
                value: (&value.0, &value.1),
                layout: &layout,
                keymap: &keymap,
                is_focused: true,
                on_change: TestAction::Time,
            };
            let area = frame.area();
            picker.render(frame, area, props);
        })
    }

    fn send(
        picker: &mut DualAxisTimePicker<&'static str, &'static str>,
        event: EventKind,
        value: (&'static str, &'static str),
    ) -> Vec<TestAction> {
        let layout = PickerLayout::vertical(1.0, 4.0);
        let keymap = PickerKeymap::default();
        let props = DualAxisProps {
            primary_items: &TIMES,
            secondary_items: &PERIODS,
            value: (&value.0, &value.1),
            layout: &layout,
            keymap: &keymap,
            is_focused: true,
            on_change: TestAction::Time,
        };
        picker.handle_event(&event, props).into_iter().collect()
    }

    #[test]
    fn test_render_lays_axes_side_by_side() {
        let mut picker = DualAxisTimePicker::new();
        let output = draw(&mut picker, ("10:30", "PM"));
        let first = output.lines().next().unwrap_or_default();
        assert!(first.contains("10:30"));
        assert!(first.contains("PM"));
        assert!(!output.contains("AM"));
        assert_eq!(picker.offsets(), Some((1.0, 1.0)));
    }

    #[test]
    fn test_keys_drive_focused_axis_only() {
        let mut picker = DualAxisTimePicker::new();
        draw(&mut picker, ("10:00", "AM"));

        let actions = send(&mut picker, key_event("j"), ("10:00", "AM"));
        assert_eq!(actions, vec![TestAction::Time("10:30", "AM")]);

        assert!(send(&mut picker, key_event("tab"), ("10:00", "AM")).is_empty());
        assert_eq!(picker.focus(), DualFocus::Secondary);

        let actions = send(&mut picker, key_event("j"), ("10:00", "AM"));
        assert_eq!(actions, vec![TestAction::Time("10:00", "PM")]);
    }

    #[test]
    fn test_focus_keys_fall_through_at_edges() {
        let mut picker = DualAxisTimePicker::new();
        draw(&mut picker, ("10:00", "AM"));
        assert!(send(&mut picker, key_event("h"), ("10:00", "AM")).is_empty());
        assert_eq!(picker.focus(), DualFocus::Primary);
    }

    #[test]
    fn test_click_routes_to_axis_under_cursor() {
        let mut picker = DualAxisTimePicker::new();
        draw(&mut picker, ("10:00", "AM"));

        // Secondary column starts at x = 12 in an 18-wide area.
        send(&mut picker, mouse_down(14, 1), ("10:00", "AM"));
        let actions = send(&mut picker, mouse_up(14, 1), ("10:00", "AM"));
        assert_eq!(actions, vec![TestAction::Time("10:00", "PM")]);

        send(&mut picker, mouse_down(3, 2), ("10:00", "PM"));
        let actions = send(&mut picker, mouse_up(3, 2), ("10:00", "PM"));
        assert_eq!(actions, vec![TestAction::Time("11:00", "PM")]);
    }
}
