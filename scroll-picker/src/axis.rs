//! Axis state machine: reconciles a continuous scroll offset with a
//! discrete, host-controlled value.
//!
//! One [`AxisState`] exists per mounted axis. It owns only view-local data
//! (offset, gesture phase, queued jump); the item list and the selected value
//! are passed in on every step, exactly as the host renders them.
//!
//! ```text
//!            sync (value moved)               frame
//!   Idle ──────────────────────▶ ProgrammaticJump ─────▶ Idle
//!    │
//!    │ drag start        momentum end            frame (arrived)
//!    ├──────────▶ Dragging ──────────▶ Settling ──────────────▶ Idle
//!    │                                 (commit unless unchanged)
//!    │ tap                  frame (arrived)
//!    └──────────▶ TapSettle ──────────────▶ Idle
//!                 (always commits)
//! ```
//!
//! Only momentum end (from `Dragging`) and tap emit [`AxisEffect::Commit`].
//! Mounting and host value changes move the offset silently. A jump that
//! arrives while the axis is not `Idle` is queued and applied when the axis
//! comes back to rest.

use scroll_picker_core::Transition;
use tracing::{debug, trace};

use crate::geometry::{
    clamp_offset, index_of, is_usable_size, max_offset, offset_for_index, snap_index,
    OFFSET_EPSILON,
};

/// Slots the corrective animation covers per frame.
pub const SLOTS_PER_FRAME: f32 = 1.0;

/// Gesture phase of an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisPhase {
    /// At rest; offset equals `index(value) * item_size`
    Idle,
    /// A user gesture is in flight
    Dragging,
    /// Animating to the slot a gesture settled on
    Settling { target: f32 },
    /// Animating to a tapped slot
    TapSettle { target: f32 },
    /// Non-animated jump to the host's value, completed on the next frame
    ProgrammaticJump { target: f32 },
}

impl AxisPhase {
    fn name(&self) -> &'static str {
        match self {
            AxisPhase::Idle => "idle",
            AxisPhase::Dragging => "dragging",
            AxisPhase::Settling { .. } => "settling",
            AxisPhase::TapSettle { .. } => "tap_settle",
            AxisPhase::ProgrammaticJump { .. } => "programmatic_jump",
        }
    }

    /// Offset the axis is heading to, if any
    pub fn target(&self) -> Option<f32> {
        match *self {
            AxisPhase::Settling { target }
            | AxisPhase::TapSettle { target }
            | AxisPhase::ProgrammaticJump { target } => Some(target),
            AxisPhase::Idle | AxisPhase::Dragging => None,
        }
    }
}

/// Inputs an axis reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisInput {
    /// The host rendered with (possibly new) items and value
    Sync,
    /// A user gesture began
    DragStart,
    /// The gesture moved the content by `delta` layout units
    DragBy(f32),
    /// The gesture (and its momentum) ended at raw offset `offset`
    MomentumEnd { offset: f32 },
    /// Slot `index` was tapped
    Tap(usize),
    /// One animation frame elapsed
    Frame,
}

/// Work an axis asks its owner to perform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisEffect {
    /// Report `items[index]` to the host's `on_change`
    Commit(usize),
    /// Move the viewport to `offset`
    ScrollTo { offset: f32, animated: bool },
}

/// View-local state of one mounted axis
#[derive(Debug, Clone)]
pub struct AxisState {
    phase: AxisPhase,
    offset: f32,
    item_size: f32,
    len: usize,
    queued_jump: Option<usize>,
    mounted: bool,
}

impl AxisState {
    /// Mount an axis at `index(value)` without animation and without
    /// committing anything.
    pub fn mount<T: PartialEq>(items: &[T], value: &T, item_size: f32) -> Self {
        let len = items.len();
        let offset = if is_usable_size(item_size) {
            offset_for_index(index_of(items, value), item_size)
        } else {
            0.0
        };
        trace!(len, item_size, offset, "axis mounted");
        Self {
            phase: AxisPhase::Idle,
            offset,
            item_size,
            len,
            queued_jump: None,
            mounted: true,
        }
    }

    /// Current phase
    pub fn phase(&self) -> AxisPhase {
        self.phase
    }

    /// Current (possibly mid-gesture) offset
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset the axis will come to rest at if nothing else happens
    pub fn resting_offset(&self) -> f32 {
        self.phase.target().unwrap_or(self.offset)
    }

    /// Slot length this axis was mounted with
    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    /// Whether the axis is `Idle` with nothing queued
    pub fn is_at_rest(&self) -> bool {
        self.phase == AxisPhase::Idle && self.queued_jump.is_none()
    }

    /// Whether the axis still accepts input
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Index of the jump waiting for the axis to return to `Idle`
    pub fn queued_jump(&self) -> Option<usize> {
        self.queued_jump
    }

    /// Cancel pending animations and queued jumps; ignore all later input
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        trace!(phase = self.phase.name(), "axis unmounted");
        if let Some(target) = self.phase.target() {
            // A cancelled jump still lands; a cancelled animation stays put.
            if matches!(self.phase, AxisPhase::ProgrammaticJump { .. }) {
                self.offset = target;
            }
        }
        self.phase = AxisPhase::Idle;
        self.queued_jump = None;
        self.mounted = false;
    }

    /// Feed one input, given the items and value the host currently renders
    pub fn step<T: PartialEq>(&mut self, input: AxisInput, items: &[T], value: &T) -> Transition<AxisEffect> {
        if !self.mounted {
            return Transition::unchanged();
        }

        let resized = self.track_len(items.len());
        if self.is_inert() {
            return if resized {
                Transition::changed()
            } else {
                Transition::unchanged()
            };
        }

        let result = match input {
            AxisInput::Sync => self.sync(items, value),
            AxisInput::DragStart => self.drag_start(),
            AxisInput::DragBy(delta) => self.drag_by(delta),
            AxisInput::MomentumEnd { offset } => self.momentum_end(offset, items, value),
            AxisInput::Tap(index) => self.tap(index),
            AxisInput::Frame => self.frame(),
        };

        if resized {
            result.mark_changed()
        } else {
            result
        }
    }

    fn is_inert(&self) -> bool {
        self.len == 0 || !is_usable_size(self.item_size)
    }

    /// Follow a change in item count, keeping every offset in range
    fn track_len(&mut self, len: usize) -> bool {
        if len == self.len {
            return false;
        }
        self.len = len;
        if len == 0 {
            self.phase = AxisPhase::Idle;
            self.offset = 0.0;
            self.queued_jump = None;
            return true;
        }
        self.offset = clamp_offset(self.offset, len, self.item_size);
        self.phase = match self.phase {
            AxisPhase::Settling { target } => AxisPhase::Settling {
                target: clamp_offset(target, len, self.item_size),
            },
            AxisPhase::TapSettle { target } => AxisPhase::TapSettle {
                target: clamp_offset(target, len, self.item_size),
            },
            AxisPhase::ProgrammaticJump { target } => AxisPhase::ProgrammaticJump {
                target: clamp_offset(target, len, self.item_size),
            },
            phase => phase,
        };
        self.queued_jump = self.queued_jump.map(|index| index.min(len - 1));
        true
    }

    fn enter(&mut self, phase: AxisPhase) {
        if self.phase != phase {
            trace!(from = self.phase.name(), to = phase.name(), "axis phase");
            self.phase = phase;
        }
    }

    fn sync<T: PartialEq>(&mut self, items: &[T], value: &T) -> Transition<AxisEffect> {
        let index = index_of(items, value);
        let target = offset_for_index(index, self.item_size);

        match self.phase {
            AxisPhase::Idle => {
                self.queued_jump = None;
                if same_offset(self.offset, target) {
                    Transition::unchanged()
                } else {
                    self.jump(target)
                }
            }
            AxisPhase::ProgrammaticJump { target: current } => {
                if same_offset(current, target) {
                    Transition::unchanged()
                } else {
                    self.jump(target)
                }
            }
            AxisPhase::Dragging => {
                self.queue(index);
                Transition::unchanged()
            }
            AxisPhase::Settling { target: heading } | AxisPhase::TapSettle { target: heading } => {
                if same_offset(heading, target) {
                    self.queued_jump = None;
                } else {
                    self.queue(index);
                }
                Transition::unchanged()
            }
        }
    }

    fn queue(&mut self, index: usize) {
        if self.queued_jump != Some(index) {
            debug!(index, phase = self.phase.name(), "jump queued until axis is idle");
            self.queued_jump = Some(index);
        }
    }

    fn jump(&mut self, target: f32) -> Transition<AxisEffect> {
        self.offset = target;
        self.enter(AxisPhase::ProgrammaticJump { target });
        Transition::changed_with(AxisEffect::ScrollTo {
            offset: target,
            animated: false,
        })
    }

    fn drag_start(&mut self) -> Transition<AxisEffect> {
        match self.phase {
            AxisPhase::Dragging => Transition::unchanged(),
            AxisPhase::ProgrammaticJump { target } => {
                self.offset = target;
                self.enter(AxisPhase::Dragging);
                Transition::changed()
            }
            AxisPhase::Settling { .. } | AxisPhase::TapSettle { .. } => {
                // The gesture takes over from the animation where it stands.
                self.queued_jump = None;
                self.enter(AxisPhase::Dragging);
                Transition::changed()
            }
            AxisPhase::Idle => {
                self.enter(AxisPhase::Dragging);
                Transition::changed()
            }
        }
    }

    fn drag_by(&mut self, delta: f32) -> Transition<AxisEffect> {
        if self.phase != AxisPhase::Dragging || !delta.is_finite() {
            return Transition::unchanged();
        }
        let next = clamp_offset(self.offset + delta, self.len, self.item_size);
        if same_offset(next, self.offset) {
            return Transition::unchanged();
        }
        self.offset = next;
        Transition::changed()
    }

    fn momentum_end<T: PartialEq>(
        &mut self,
        raw_offset: f32,
        items: &[T],
        value: &T,
    ) -> Transition<AxisEffect> {
        // Momentum that follows our own scrolls is not a user settle.
        if self.phase != AxisPhase::Dragging {
            trace!(phase = self.phase.name(), "momentum end outside a gesture ignored");
            return Transition::unchanged();
        }
        let Some(index) = snap_index(raw_offset, self.item_size, self.len) else {
            return Transition::unchanged();
        };

        self.offset = clamp_offset(raw_offset, self.len, self.item_size);
        let target = offset_for_index(index, self.item_size);

        let mut result = Transition::changed();
        if items[index] != *value {
            debug!(index, "axis settled on a new item");
            // The host will re-inject the committed value; anything queued
            // during the gesture is older than this commit.
            self.queued_jump = None;
            result = result.with(AxisEffect::Commit(index));
        }

        self.enter(AxisPhase::Settling { target });
        result.merge(self.animate_or_arrive(target))
    }

    fn tap(&mut self, index: usize) -> Transition<AxisEffect> {
        if index >= self.len || self.phase == AxisPhase::Dragging {
            return Transition::unchanged();
        }
        if let AxisPhase::ProgrammaticJump { target } = self.phase {
            self.offset = target;
        }
        debug!(index, "axis tapped");
        self.queued_jump = None;
        let target = offset_for_index(index, self.item_size);
        self.enter(AxisPhase::TapSettle { target });
        Transition::changed_with(AxisEffect::Commit(index)).merge(self.animate_or_arrive(target))
    }

    /// Start the corrective animation, or finish at once if already there
    fn animate_or_arrive(&mut self, target: f32) -> Transition<AxisEffect> {
        if same_offset(self.offset, target) {
            self.offset = target;
            self.arrive()
        } else {
            Transition::effect(AxisEffect::ScrollTo {
                offset: target,
                animated: true,
            })
        }
    }

    fn frame(&mut self) -> Transition<AxisEffect> {
        match self.phase {
            AxisPhase::Idle | AxisPhase::Dragging => Transition::unchanged(),
            AxisPhase::ProgrammaticJump { target } => {
                self.offset = target;
                self.arrive().mark_changed()
            }
            AxisPhase::Settling { target } | AxisPhase::TapSettle { target } => {
                let step = self.item_size * SLOTS_PER_FRAME;
                let remaining = target - self.offset;
                if remaining.abs() <= step {
                    self.offset = target;
                    self.arrive().mark_changed()
                } else {
                    self.offset += step.copysign(remaining);
                    Transition::changed()
                }
            }
        }
    }

    /// Back at rest: apply whatever jump was queued meanwhile
    fn arrive(&mut self) -> Transition<AxisEffect> {
        self.enter(AxisPhase::Idle);
        match self.queued_jump.take() {
            Some(index) => {
                let target = offset_for_index(index, self.item_size);
                if same_offset(self.offset, target) {
                    Transition::unchanged()
                } else {
                    self.jump(target)
                }
            }
            None => Transition::unchanged(),
        }
    }

    /// Largest offset a gesture can reach on this axis
    pub fn max_offset(&self) -> f32 {
        max_offset(self.len, self.item_size)
    }
}

fn same_offset(a: f32, b: f32) -> bool {
    (a - b).abs() <= OFFSET_EPSILON
}
