//! Effect-carrying step results
//!
//! A component's internal state machine is written as pure transition
//! functions. Instead of performing work (emitting a callback, moving the
//! viewport) a transition *describes* it:
//!
//! ```ignore
//! fn step(state: &mut S, input: I) -> Transition<E>
//! ```
//!
//! The caller then interprets the effects. This keeps "did I just cause my
//! own event" questions out of the state machine entirely: the machine never
//! observes its own output.
//!
//! # Example
//!
//! ```
//! use scroll_picker_core::Transition;
//!
//! #[derive(Debug, PartialEq)]
//! enum Effect {
//!     Commit(usize),
//! }
//!
//! fn release(selected: &mut usize, landed: usize) -> Transition<Effect> {
//!     if *selected == landed {
//!         return Transition::unchanged();
//!     }
//!     *selected = landed;
//!     Transition::changed_with(Effect::Commit(landed))
//! }
//!
//! let mut selected = 0;
//! assert!(!release(&mut selected, 0).has_effects());
//! assert_eq!(release(&mut selected, 2).effects, vec![Effect::Commit(2)]);
//! ```

/// Result of feeding one input to a state machine.
///
/// Contains both the render indicator and any effects to be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<E> {
    /// Whether view state was modified (a re-render is needed).
    pub changed: bool,
    /// Effects to be processed by the caller, in order.
    pub effects: Vec<E>,
}

impl<E> Default for Transition<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> Transition<E> {
    /// No state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed but no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect but no state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the changed flag to true.
    #[inline]
    pub fn mark_changed(mut self) -> Self {
        self.changed = true;
        self
    }

    /// Fold another step's result into this one, keeping effect order.
    #[inline]
    pub fn merge(mut self, other: Transition<E>) -> Self {
        self.changed |= other.changed;
        self.effects.extend(other.effects);
        self
    }

    /// Returns true if there are any effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
