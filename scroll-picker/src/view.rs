//! Terminal binding of one axis: hit-testing, input mapping and drawing
//!
//! Every picker component owns one [`AxisView`] per axis. The view turns
//! crossterm input into [`AxisInput`]s, feeds them to the axis together with
//! the items and value from props, and hands back the indices that were
//! committed. Components translate those into host actions.

use std::fmt::Display;

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
};
use scroll_picker_core::{rect_contains, EventKind, PickerCommand, PickerKeymap};
use tracing::trace;

use crate::axis::{AxisEffect, AxisInput, AxisState};
use crate::geometry::{clamp_offset, index_of, is_usable_size, slot_at};
use crate::layout::{Orientation, PickerLayout};

/// An in-progress left button press on this axis
#[derive(Debug, Clone, Copy)]
struct Press {
    /// Cell the press started on, along the scroll direction
    origin: u16,
    /// Last cell seen, along the scroll direction
    last: u16,
    dragged: bool,
}

/// Everything an axis needs from the component's props for one call
pub(crate) struct AxisProps<'a, T> {
    pub items: &'a [T],
    pub value: &'a T,
    pub layout: &'a PickerLayout,
    /// Offset of the first real slot from the start of the area
    pub lead: f32,
}

impl<T> Clone for AxisProps<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AxisProps<'_, T> {}

#[derive(Debug, Default)]
pub(crate) struct AxisView {
    axis: Option<AxisState>,
    area: Rect,
    press: Option<Press>,
}

impl AxisView {
    pub(crate) fn axis(&self) -> Option<&AxisState> {
        self.axis.as_ref()
    }

    /// Whether no animation, jump or gesture is pending
    pub(crate) fn is_at_rest(&self) -> bool {
        self.press.is_none() && self.axis.as_ref().map_or(true, AxisState::is_at_rest)
    }

    pub(crate) fn unmount(&mut self) {
        self.press = None;
        if let Some(axis) = self.axis.as_mut() {
            axis.unmount();
        }
    }

    /// Record the render area and bring the axis up to date with props.
    ///
    /// The first render (or the first after an unmount or a slot size change)
    /// mounts the axis at the held value.
    pub(crate) fn prepare<T: PartialEq>(&mut self, area: Rect, props: AxisProps<'_, T>) {
        self.area = area;
        let item_size = props.layout.item_size;
        match self.axis.as_mut() {
            Some(axis) if axis.is_mounted() && axis.item_size() == item_size => {
                axis.step(AxisInput::Sync, props.items, props.value);
            }
            _ => {
                self.press = None;
                self.axis = Some(AxisState::mount(props.items, props.value, item_size));
            }
        }
    }

    /// Feed one event through the axis; returns the committed indices.
    ///
    /// Key events are only considered when `keys` is true. Events before the
    /// first render, or after an unmount, are ignored.
    pub(crate) fn handle<T: PartialEq>(
        &mut self,
        event: &EventKind,
        props: AxisProps<'_, T>,
        keymap: &PickerKeymap,
        keys: bool,
    ) -> Vec<usize> {
        let Some(axis) = self.axis.as_mut().filter(|axis| axis.is_mounted()) else {
            return Vec::new();
        };
        axis.step(AxisInput::Sync, props.items, props.value);

        let inputs = self.inputs_for(event, props, keymap, keys);
        let Some(axis) = self.axis.as_mut() else {
            return Vec::new();
        };

        let mut commits = Vec::new();
        for input in inputs {
            let result = axis.step(input, props.items, props.value);
            for effect in result.effects {
                match effect {
                    AxisEffect::Commit(index) => commits.push(index),
                    AxisEffect::ScrollTo { offset, animated } => {
                        trace!(offset, animated, "axis scrolling");
                    }
                }
            }
        }
        commits
    }

    fn inputs_for<T: PartialEq>(
        &mut self,
        event: &EventKind,
        props: AxisProps<'_, T>,
        keymap: &PickerKeymap,
        keys: bool,
    ) -> Vec<AxisInput> {
        let orientation = props.layout.orientation;
        match event {
            EventKind::Tick => vec![AxisInput::Frame],
            EventKind::Key(key) if keys => match keymap.command(*key) {
                Some(PickerCommand::Prev) => self.step_by(-1, props),
                Some(PickerCommand::Next) => self.step_by(1, props),
                Some(PickerCommand::First) => self.settle_at(0.0, props),
                Some(PickerCommand::Last) => self.settle_at(f32::INFINITY, props),
                Some(PickerCommand::Commit) if !props.items.is_empty() => {
                    vec![AxisInput::Tap(index_of(props.items, props.value))]
                }
                _ => Vec::new(),
            },
            EventKind::Scroll { column, row, delta } => {
                if rect_contains(self.area, *column, *row) {
                    self.step_by(*delta, props)
                } else {
                    Vec::new()
                }
            }
            EventKind::Mouse(mouse) => {
                let along = match orientation {
                    Orientation::Vertical => mouse.row,
                    Orientation::Horizontal => mouse.column,
                };
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.press = rect_contains(self.area, mouse.column, mouse.row).then_some(
                            Press {
                                origin: along,
                                last: along,
                                dragged: false,
                            },
                        );
                        Vec::new()
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        let Some(press) = self.press.as_mut() else {
                            return Vec::new();
                        };
                        let mut inputs = Vec::new();
                        if !press.dragged {
                            press.dragged = true;
                            inputs.push(AxisInput::DragStart);
                        }
                        // Pulling the content up moves the offset forward.
                        let delta = f32::from(press.last) - f32::from(along);
                        press.last = along;
                        if delta != 0.0 {
                            inputs.push(AxisInput::DragBy(delta / cell_scale(props.layout)));
                        }
                        inputs
                    }
                    MouseEventKind::Up(MouseButton::Left) => match self.press.take() {
                        Some(press) if press.dragged => {
                            let offset = self.axis.as_ref().map_or(0.0, AxisState::offset);
                            vec![AxisInput::MomentumEnd { offset }]
                        }
                        Some(press) => self
                            .slot_under(press.origin, props)
                            .map(AxisInput::Tap)
                            .into_iter()
                            .collect(),
                        None => Vec::new(),
                    },
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    /// A gesture that ends `slots` slots away from where the axis is heading
    fn step_by<T>(&self, slots: isize, props: AxisProps<'_, T>) -> Vec<AxisInput> {
        let Some(axis) = self.axis.as_ref() else {
            return Vec::new();
        };
        let target = axis.resting_offset() + slots as f32 * props.layout.item_size;
        self.settle_at(target, props)
    }

    /// A gesture that starts and ends at once, at `offset` (clamped)
    fn settle_at<T>(&self, offset: f32, props: AxisProps<'_, T>) -> Vec<AxisInput> {
        let offset = clamp_offset(offset, props.items.len(), props.layout.item_size);
        vec![AxisInput::DragStart, AxisInput::MomentumEnd { offset }]
    }

    /// Real slot drawn under cell `along` (absolute), if any
    fn slot_under<T>(&self, along: u16, props: AxisProps<'_, T>) -> Option<usize> {
        let axis = self.axis.as_ref()?;
        let start = match props.layout.orientation {
            Orientation::Vertical => self.area.y,
            Orientation::Horizontal => self.area.x,
        };
        let relative = f32::from(along.checked_sub(start)?);
        slot_at(
            (relative - props.lead.floor()) / cell_scale(props.layout) + axis.offset(),
            props.layout.item_size,
            props.items.len(),
        )
    }

    /// Draw the visible slots into the area recorded by [`AxisView::prepare`]
    pub(crate) fn draw<T: PartialEq + Display>(
        &self,
        buf: &mut Buffer,
        props: AxisProps<'_, T>,
        focused: bool,
    ) {
        let area = self.area;
        let layout = props.layout;
        let Some(axis) = self.axis.as_ref() else {
            return;
        };
        if props.items.is_empty() || area.is_empty() || !is_usable_size(layout.item_size) {
            return;
        }

        let cells = i32::from(layout.slot_cells());
        let extent = i32::from(match layout.orientation {
            Orientation::Vertical => area.height,
            Orientation::Horizontal => area.width,
        });
        let lead = props.lead.floor();
        let scroll = axis.offset() * cell_scale(layout);

        for (index, item) in props.items.iter().enumerate() {
            let start = (lead + (index as i32 * cells) as f32 - scroll).floor() as i32;
            let end = start + cells;
            if end <= 0 {
                continue;
            }
            if start >= extent {
                break;
            }

            let style = item_style(item == props.value, focused);
            let (from, to) = (start.max(0), end.min(extent));
            let label = item.to_string();
            let width = Span::raw(label.as_str()).width() as i32;

            match layout.orientation {
                Orientation::Vertical => {
                    let slot = Rect::new(area.x, area.y + from as u16, area.width, (to - from) as u16);
                    buf.set_style(slot, style);
                    let row = start + cells / 2;
                    if (from..to).contains(&row) {
                        let x = area.x + (i32::from(area.width) - width).max(0) as u16 / 2;
                        buf.set_stringn(x, area.y + row as u16, &label, usize::from(area.width), style);
                    }
                }
                Orientation::Horizontal => {
                    let slot = Rect::new(area.x + from as u16, area.y, (to - from) as u16, area.height);
                    buf.set_style(slot, style);
                    let column = (start + (cells - width).max(0) / 2).max(from);
                    if column < to {
                        let row = area.y + area.height / 2;
                        buf.set_stringn(area.x + column as u16, row, &label, (to - column) as usize, style);
                    }
                }
            }
        }
    }
}

/// Screen cells per layout unit.
///
/// Slots are drawn `slot_cells()` wide, so a fractional `item_size` is
/// stretched to whole cells instead of overlapping its neighbours.
fn cell_scale(layout: &PickerLayout) -> f32 {
    if is_usable_size(layout.item_size) {
        f32::from(layout.slot_cells()) / layout.item_size
    } else {
        1.0
    }
}

fn item_style(selected: bool, focused: bool) -> Style {
    match (selected, focused) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        (false, _) => Style::default().fg(Color::DarkGray),
    }
}
