//! Component trait for controlled UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A controlled UI component that renders from props and emits actions
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data needed for rendering, including the
///    controlled value
/// 2. `handle_event` returns actions, never mutates host state
/// 3. `render` is a function of props plus internal view state
///
/// View-local state (scroll offset, gesture phase, pending animation) lives in
/// `&mut self`. The selected value does not: it is owned by the host and
/// re-injected through props on every call, so a component never has to guess
/// whether a value change was caused by itself.
///
/// # Example
///
/// ```ignore
/// use scroll_picker_core::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// struct ToggleProps {
///     on: bool,
///     is_focused: bool,
///     on_change: fn(bool) -> AppAction,
/// }
///
/// impl Component<AppAction> for Toggle {
///     type Props<'a> = ToggleProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         if !props.is_focused {
///             return None;
///         }
///         match event {
///             EventKind::Key(key) if key.code == KeyCode::Enter => Some((props.on_change)(!props.on)),
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = if props.on { "[x]" } else { "[ ]" };
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
