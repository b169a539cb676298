//! Single-axis selector that keeps the held item at the viewport's center

use std::fmt::Display;
use std::marker::PhantomData;

use ratatui::{layout::Rect, Frame};
use scroll_picker_core::{Component, EventKind, PickerKeymap};

use crate::layout::{Centering, PickerLayout};
use crate::view::{AxisProps, AxisView};

/// Props for [`CenteredOptionSelector`]
pub struct CenteredProps<'a, T, A> {
    pub items: &'a [T],
    /// Currently held value (owned by the host)
    pub value: &'a T,
    pub layout: &'a PickerLayout,
    pub keymap: &'a PickerKeymap,
    /// Spacer formula padding the real items
    pub centering: Centering,
    pub is_focused: bool,
    pub on_change: fn(T) -> A,
}

/// A scroller whose items are padded by a spacer slot at each end.
///
/// The spacers are `centering.spacer(layout)` long, so with
/// [`Centering::Standard`] the held item rests at the exact center of the
/// viewport, including the first and last item. Spacers are never drawn,
/// selected or tapped; settling works on the real items only.
pub struct CenteredOptionSelector<T> {
    view: AxisView,
    _items: PhantomData<fn() -> T>,
}

impl<T> Default for CenteredOptionSelector<T> {
    fn default() -> Self {
        Self {
            view: AxisView::default(),
            _items: PhantomData,
        }
    }
}

impl<T> CenteredOptionSelector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_at_rest(&self) -> bool {
        self.view.is_at_rest()
    }

    /// Current offset into the real items, once mounted
    pub fn offset(&self) -> Option<f32> {
        self.view.axis().map(|axis| axis.offset())
    }

    pub fn unmount(&mut self) {
        self.view.unmount();
    }
}

fn axis_props<'a, T, A>(props: &CenteredProps<'a, T, A>) -> AxisProps<'a, T> {
    AxisProps {
        items: props.items,
        value: props.value,
        layout: props.layout,
        lead: props.centering.spacer(props.layout),
    }
}

impl<T, A> Component<A> for CenteredOptionSelector<T>
where
    T: PartialEq + Clone + Display + 'static,
{
    type Props<'a> = CenteredProps<'a, T, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.view
            .handle(event, axis_props(&props), props.keymap, props.is_focused)
            .into_iter()
            .map(|index| (props.on_change)(props.items[index].clone()))
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
    use scroll_picker_core::testing::{key_event, mouse_down, mouse_drag, mouse_up, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Pick(String),
    }

    fn options() -> Vec<String> {
        ["Singles", "Doubles", "Mixed"].map(String::from).to_vec()
    }

    fn draw(selector: &mut CenteredOptionSelector<String>, value: &str, centering: Centering) -> String {
        let items = options();
        let value = value.to_string();
        let layout = PickerLayout::vertical(1.0, 5.0);
        let keymap = PickerKeymap::default();
        let mut render = RenderHarness::new(10, 5);
        render.render_to_string_plain(|frame| {
            let props = CenteredProps {
                items: &items,
                value: &value,
                layout: &layout,
                keymap: &keymap,
                centering,
                is_focused: true,
                on_change: TestAction::Pick,
            };
            let area = frame.area();
            selector.render(frame, area, props);
        })
    }

    fn send(selector: &mut CenteredOptionSelector<String>, event: EventKind, value: &str) -> Vec<TestAction> {
        let items = options();
        let value = value.to_string();
        let layout = PickerLayout::vertical(1.0, 5.0);
        let keymap = PickerKeymap::default();
        let props = CenteredProps {
            items: &items,
            value: &value,
            layout: &layout,
            keymap: &keymap,
            centering: Centering::Standard,
            is_focused: true,
            on_change: TestAction::Pick,
        };
        selector.handle_event(&event, props).into_iter().collect()
    }

    #[test]
    fn test_first_item_rests_at_center() {
        let mut selector = CenteredOptionSelector::new();
        let output = draw(&mut selector, "Singles", Centering::Standard);
        let rows: Vec<_> = output.lines().map(str::trim).collect();
        assert_eq!(rows, vec!["", "", "Singles", "Doubles", "Mixed"]);
    }

    #[test]
    fn test_last_item_rests_at_center() {
        let mut selector = CenteredOptionSelector::new();
        let output = draw(&mut selector, "Mixed", Centering::Standard);
        let rows: Vec<_> = output.lines().map(str::trim).collect();
        assert_eq!(rows, vec!["Singles", "Doubles", "Mixed", "", ""]);
        assert_eq!(selector.offset(), Some(2.0));
    }

    #[test]
    fn test_legacy_centering_sits_above_center() {
        // (5 - 1) / 2.5 = 1.6 cells of padding: the held item lands on row 1.
        let mut selector = CenteredOptionSelector::new();
        let output = draw(&mut selector, "Singles", Centering::Legacy);
        let rows: Vec<_> = output.lines().map(str::trim).collect();
        assert_eq!(rows[1], "Singles");
    }

    #[test]
    fn test_spacers_are_not_tappable() {
        let mut selector = CenteredOptionSelector::new();
        draw(&mut selector, "Singles", Centering::Standard);

        send(&mut selector, mouse_down(4, 0), "Singles");
        assert!(send(&mut selector, mouse_up(4, 0), "Singles").is_empty());

        send(&mut selector, mouse_down(4, 3), "Singles");
        let actions = send(&mut selector, mouse_up(4, 3), "Singles");
        assert_eq!(actions, vec![TestAction::Pick("Doubles".into())]);
    }

    #[test]
    fn test_drag_into_spacer_settles_on_end_item() {
        let mut selector = CenteredOptionSelector::new();
        draw(&mut selector, "Doubles", Centering::Standard);

        // Pull the list down three rows, past the leading spacer.
        send(&mut selector, mouse_down(4, 1), "Doubles");
        for row in [2, 3, 4] {
            assert!(send(&mut selector, mouse_drag(4, row), "Doubles").is_empty());
        }
        let actions = send(&mut selector, mouse_up(4, 4), "Doubles");
        assert_eq!(actions, vec![TestAction::Pick("Singles".into())]);
        assert_eq!(selector.offset(), Some(0.0));

        // And up past the trailing one.
        draw(&mut selector, "Doubles", Centering::Standard);
        send(&mut selector, mouse_down(4, 4), "Doubles");
        for row in [3, 2, 1, 0] {
            assert!(send(&mut selector, mouse_drag(4, row), "Doubles").is_empty());
        }
        let actions = send(&mut selector, mouse_up(4, 0), "Doubles");
        assert_eq!(actions, vec![TestAction::Pick("Mixed".into())]);
        assert_eq!(selector.offset(), Some(2.0));
    }

    #[test]
    fn test_keys_stay_on_real_items() {
        let mut selector = CenteredOptionSelector::new();
        draw(&mut selector, "Singles", Centering::Standard);
        assert!(send(&mut selector, key_event("k"), "Singles").is_empty());
        assert_eq!(
            send(&mut selector, key_event("end"), "Singles"),
            vec![TestAction::Pick("Mixed".into())]
        );
    }
}
