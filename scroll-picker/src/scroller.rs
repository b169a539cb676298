//! Single-axis discrete scroller

use std::fmt::Display;
use std::marker::PhantomData;

use ratatui::{layout::Rect, Frame};
use scroll_picker_core::{Component, EventKind, PickerKeymap};

use crate::layout::PickerLayout;
use crate::view::{AxisProps, AxisView};

/// Props for [`DiscreteAxisScroller`]
pub struct ScrollerProps<'a, T, A> {
    /// Items, one per slot, in display order
    pub items: &'a [T],
    /// Currently held value (owned by the host)
    pub value: &'a T,
    pub layout: &'a PickerLayout,
    pub keymap: &'a PickerKeymap,
    /// Whether keyboard input goes to this picker
    pub is_focused: bool,
    /// Called with the newly selected item after a settle or tap
    pub on_change: fn(T) -> A,
}

/// A scrollable list of items that snaps to fixed-size slots.
///
/// The held value is rendered at the start of the viewport. Dragging with the
/// mouse, the scroll wheel and the keymap's prev/next/first/last commands all
/// settle on a slot; `on_change` fires when that slot holds a different item.
/// Clicking an item (or the commit key) always fires `on_change`.
///
/// Tick events drive the animation that corrects a settle between slots; a
/// host should keep delivering them while [`DiscreteAxisScroller::is_at_rest`]
/// is false.
pub struct DiscreteAxisScroller<T> {
    view: AxisView,
    _items: PhantomData<fn() -> T>,
}

impl<T> Default for DiscreteAxisScroller<T> {
    fn default() -> Self {
        Self {
            view: AxisView::default(),
            _items: PhantomData,
        }
    }
}

impl<T> DiscreteAxisScroller<T> {
    /// Create a scroller; it mounts on its first render
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is animating or waiting to be applied
    pub fn is_at_rest(&self) -> bool {
        self.view.is_at_rest()
    }

    /// Current scroll offset, once mounted
    pub fn offset(&self) -> Option<f32> {
        self.view.axis().map(|axis| axis.offset())
    }

    /// Cancel pending work and ignore input until the next render remounts it
    pub fn unmount(&mut self) {
        self.view.unmount();
    }
}

fn axis_props<'a, T, A>(props: &ScrollerProps<'a, T, A>) -> AxisProps<'a, T> {
    AxisProps {
        items: props.items,
        value: props.value,
        layout: props.layout,
        lead: 0.0,
    }
}

impl<T, A> Component<A> for DiscreteAxisScroller<T>
where
    T: PartialEq + Clone + Display + 'static,
{
    type Props<'a> = ScrollerProps<'a, T, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let commits = self
            .view
            .handle(event, axis_props(&props), props.keymap, props.is_focused);
        commits
            .into_iter()
            .map(move |index| (props.on_change)(props.items[index].clone()))
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let axis = axis_props(&props);
        self.view.prepare(area, axis);
        self.view.draw(frame.buffer_mut(), axis, props.is_focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroll_picker_core::testing::{key_event, mouse_down, mouse_drag, mouse_up, scroll, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Slot(&'static str),
    }

    const SLOTS: [&str; 7] = ["9:00", "9:30", "10:00", "10:30", "11:00", "11:30", "12:00"];

    struct Fixture {
        scroller: DiscreteAxisScroller<&'static str>,
        layout: PickerLayout,
        keymap: PickerKeymap,
        render: RenderHarness,
    }

    impl Fixture {
        fn new(value: &'static str) -> Self {
            Self::with_layout(PickerLayout::vertical(1.0, 5.0), 5, value)
        }

        fn with_layout(layout: PickerLayout, height: u16, value: &'static str) -> Self {
            let mut fixture = Self {
                scroller: DiscreteAxisScroller::new(),
                layout,
                keymap: PickerKeymap::default(),
                render: RenderHarness::new(8, height),
            };
            fixture.draw(value);
            fixture
        }

        fn draw(&mut self, value: &'static str) -> String {
            let scroller = &mut self.scroller;
            let layout = &self.layout;
            let keymap = &self.keymap;
            self.render.render_to_string_plain(|frame| {
                let props = ScrollerProps {
                    items: &SLOTS,
                    value: &value,
                    layout,
                    keymap,
                    is_focused: true,
                    on_change: TestAction::Slot,
                };
                let area = frame.area();
                scroller.render(frame, area, props);
            })
        }

        fn send(&mut self, event: EventKind, value: &'static str) -> Vec<TestAction> {
            let props = ScrollerProps {
                items: &SLOTS,
                value: &value,
                layout: &self.layout,
                keymap: &self.keymap,
                is_focused: true,
                on_change: TestAction::Slot,
            };
            self.scroller.handle_event(&event, props).into_iter().collect()
        }
    }

    #[test]
    fn test_render_starts_at_held_value() {
        let mut fixture = Fixture::new("10:00");
        let output = fixture.draw("10:00");
        let rows: Vec<_> = output.lines().map(str::trim).collect();
        assert_eq!(rows, vec!["10:00", "10:30", "11:00", "11:30", "12:00"]);
        assert_eq!(fixture.scroller.offset(), Some(2.0));
    }

    #[test]
    fn test_fractional_item_size_draws_whole_slots() {
        // 1.5 units per item round to 2-row slots; labels sit on each slot's second row.
        let mut fixture = Fixture::with_layout(PickerLayout::vertical(1.5, 6.0), 6, "9:00");
        let output = fixture.draw("9:00");
        let rows: Vec<_> = output.lines().map(str::trim).collect();
        assert_eq!(rows, vec!["", "9:00", "", "9:30", "", "10:00"]);

        fixture.send(mouse_down(3, 5), "9:00");
        assert_eq!(fixture.send(mouse_up(3, 5), "9:00"), vec![TestAction::Slot("10:00")]);
    }

    #[test]
    fn test_keys_settle_on_neighbours() {
        let mut fixture = Fixture::new("10:00");
        assert_eq!(fixture.send(key_event("j"), "10:00"), vec![TestAction::Slot("10:30")]);
        assert_eq!(fixture.send(key_event("k"), "10:00"), vec![TestAction::Slot("9:30")]);
        assert_eq!(fixture.send(key_event("end"), "10:00"), vec![TestAction::Slot("12:00")]);
        assert_eq!(fixture.send(key_event("g"), "10:00"), vec![TestAction::Slot("9:00")]);
    }

    #[test]
    fn test_key_at_bounds_is_silent() {
        let mut fixture = Fixture::new("9:00");
        assert!(fixture.send(key_event("k"), "9:00").is_empty());
        assert!(fixture.send(key_event("home"), "9:00").is_empty());
    }

    #[test]
    fn test_commit_key_re_emits_held_value() {
        let mut fixture = Fixture::new("11:00");
        assert_eq!(fixture.send(key_event("enter"), "11:00"), vec![TestAction::Slot("11:00")]);
    }

    #[test]
    fn test_unfocused_ignores_keys_but_not_mouse() {
        let mut fixture = Fixture::new("10:00");
        let props = ScrollerProps {
            items: &SLOTS,
            value: &"10:00",
            layout: &fixture.layout,
            keymap: &fixture.keymap,
            is_focused: false,
            on_change: TestAction::Slot,
        };
        let actions: Vec<_> = fixture
            .scroller
            .handle_event(&key_event("j"), props)
            .into_iter()
            .collect();
        assert!(actions.is_empty());

        assert_eq!(fixture.send(scroll(2, 2, 1), "10:00"), vec![TestAction::Slot("10:30")]);
    }

    #[test]
    fn test_click_taps_item_under_cursor() {
        let mut fixture = Fixture::new("10:00");
        assert!(fixture.send(mouse_down(3, 3), "10:00").is_empty());
        assert_eq!(fixture.send(mouse_up(3, 3), "10:00"), vec![TestAction::Slot("11:30")]);
    }

    #[test]
    fn test_mouse_drag_settles_once() {
        let mut fixture = Fixture::new("10:00");
        fixture.send(mouse_down(3, 4), "10:00");
        assert!(fixture.send(mouse_drag(3, 3), "10:00").is_empty());
        assert!(fixture.send(mouse_drag(3, 2), "10:00").is_empty());
        assert!(!fixture.scroller.is_at_rest());

        let actions = fixture.send(mouse_up(3, 2), "10:00");
        assert_eq!(actions, vec![TestAction::Slot("11:00")]);
        assert!(fixture.scroller.is_at_rest());
    }

    #[test]
    fn test_press_outside_area_is_ignored() {
        let mut fixture = Fixture::new("10:00");
        fixture.send(mouse_down(20, 2), "10:00");
        assert!(fixture.send(mouse_up(20, 2), "10:00").is_empty());
    }

    #[test]
    fn test_unmounted_scroller_ignores_input() {
        let mut fixture = Fixture::new("10:00");
        fixture.scroller.unmount();
        assert!(fixture.send(key_event("enter"), "10:00").is_empty());

        // The next render mounts it again at the held value.
        fixture.draw("11:00");
        assert_eq!(fixture.scroller.offset(), Some(4.0));
        assert_eq!(fixture.send(key_event("enter"), "11:00"), vec![TestAction::Slot("11:00")]);
    }

    #[test]
    fn test_host_value_change_redraws_without_emitting() {
        let mut fixture = Fixture::new("9:00");
        let output = fixture.draw("11:00");
        assert_eq!(output.lines().next().map(str::trim), Some("11:00"));
        assert!(fixture.send(EventKind::Tick, "11:00").is_empty());
        assert!(fixture.scroller.is_at_rest());
    }
}
