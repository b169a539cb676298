//! Action trait for host state changes produced by pickers

use std::fmt::Debug;

/// Marker trait for actions a picker callback can produce
///
/// Pickers never touch host state. A committed selection becomes an action
/// (built by the `on_change` callback in the picker's props) which the host
/// dispatches to its [`Store`](crate::Store).
///
/// Actions should be:
/// - Clone: they may be logged or sent to several handlers
/// - Debug: for logging
/// - Send + 'static: hosts may hand them to async tasks
///
/// # Example
/// ```
/// use scroll_picker_core::Action;
///
/// #[derive(Clone, Debug)]
/// enum BookingAction {
///     TimeChange(String, String),
///     Quit,
/// }
///
/// impl Action for BookingAction {
///     fn name(&self) -> &'static str {
///         match self {
///             BookingAction::TimeChange(..) => "TimeChange",
///             BookingAction::Quit => "Quit",
///         }
///     }
/// }
///
/// assert_eq!(BookingAction::Quit.name(), "Quit");
/// ```
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;

    /// Short human-readable description for logs
    ///
    /// Defaults to the `Debug` representation.
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
