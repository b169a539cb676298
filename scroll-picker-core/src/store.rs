//! Host state container
//!
//! Pickers are controlled: the selected value lives here, in the host's
//! store, and flows back into the picker as props on the next render. The
//! host dispatches whatever a picker returns before it handles the next
//! event, so the picker never sees its own commit as stale.

use crate::Action;
use tracing::debug;

/// A reducer applies one action to the host state
///
/// Returns `true` if the state changed and a re-render is needed. Pickers
/// re-emit the held value on a tap; reducers should report that as no change.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Host state plus the reducer that owns every change to it
///
/// # Example
/// ```
/// use scroll_picker_core::{Action, Store};
///
/// #[derive(Default)]
/// struct Booking {
///     slot: String,
/// }
///
/// #[derive(Clone, Debug)]
/// enum BookingAction {
///     SlotChange(String),
/// }
///
/// impl Action for BookingAction {
///     fn name(&self) -> &'static str {
///         "SlotChange"
///     }
/// }
///
/// fn reducer(state: &mut Booking, action: BookingAction) -> bool {
///     match action {
///         BookingAction::SlotChange(slot) => {
///             if state.slot == slot {
///                 return false;
///             }
///             state.slot = slot;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(Booking::default(), reducer);
/// assert!(store.dispatch(BookingAction::SlotChange("10:00".into())));
/// assert!(!store.dispatch(BookingAction::SlotChange("10:00".into())));
/// assert_eq!(store.state().slot, "10:00");
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self { state, reducer }
    }

    /// Apply an action; `true` if a re-render is needed
    pub fn dispatch(&mut self, action: A) -> bool {
        (self.reducer)(&mut self.state, action)
    }

    /// The state the next render hands to the pickers
    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Observer told about every action once the reducer has run
pub trait Middleware<A: Action> {
    fn dispatched(&mut self, action: &A, state_changed: bool);
}

/// A [`Store`] whose dispatches are reported to a [`Middleware`]
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Apply an action, then report it; `true` if a re-render is needed
    pub fn dispatch(&mut self, action: A) -> bool {
        let changed = self.store.dispatch(action.clone());
        self.middleware.dispatched(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

/// Logs every dispatched action through `tracing` and keeps a tally.
///
/// Actions the reducer ignored are counted apart: for a picker host these
/// are mostly taps on the item that was already held.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    applied: usize,
    unchanged: usize,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions that changed the state
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Actions that left the state as it was
    pub fn unchanged(&self) -> usize {
        self.unchanged
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn dispatched(&mut self, action: &A, state_changed: bool) {
        if state_changed {
            self.applied += 1;
            debug!(
                action = %action.name(),
                summary = %action.summary(),
                "Action applied"
            );
        } else {
            self.unchanged += 1;
            debug!(action = %action.name(), "Action left state unchanged");
        }
    }
}
