//! Slot geometry shared by every picker variant
//!
//! All functions are total: empty lists, zero or non-finite slot sizes and
//! out-of-range offsets resolve to a clamped answer (or `None`) instead of
//! dividing by zero or indexing out of bounds.

/// Spacer divisor that places the first/last real item at the exact center
/// of the viewport.
pub const CENTER_SPACER_DIVISOR: f32 = 2.0;

/// Spacer divisor of the second selector variant. Leaves items slightly
/// before center; kept as its own constant rather than folded into
/// [`CENTER_SPACER_DIVISOR`].
pub const LEGACY_CENTER_SPACER_DIVISOR: f32 = 2.5;

/// Offsets closer than this are treated as equal.
pub const OFFSET_EPSILON: f32 = 1e-3;

/// Position of the first item equal to `value`, or `0` when absent.
///
/// Duplicates always resolve to their first occurrence.
///
/// ```
/// use scroll_picker::geometry::index_of;
///
/// let items = ["AM", "PM", "AM"];
/// assert_eq!(index_of(&items, &"PM"), 1);
/// assert_eq!(index_of(&items, &"AM"), 0);
/// assert_eq!(index_of(&items, &"noon"), 0);
/// ```
pub fn index_of<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().position(|item| item == value).unwrap_or(0)
}

/// Whether a slot size can be divided by.
pub fn is_usable_size(item_size: f32) -> bool {
    item_size.is_finite() && item_size > 0.0
}

/// Offset at which slot `index` is at rest.
pub fn offset_for_index(index: usize, item_size: f32) -> f32 {
    index as f32 * item_size
}

/// Largest offset a gesture may reach: the last slot at rest.
pub fn max_offset(len: usize, item_size: f32) -> f32 {
    if len == 0 || !is_usable_size(item_size) {
        return 0.0;
    }
    offset_for_index(len - 1, item_size)
}

/// Clamp an offset into `[0, max_offset]`. NaN clamps to 0.
pub fn clamp_offset(offset: f32, len: usize, item_size: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max_offset(len, item_size))
}

/// Snap a raw offset to the nearest slot: `round(offset / item_size)`
/// clamped into `[0, len - 1]`.
///
/// Returns `None` for an empty list or an unusable slot size.
///
/// ```
/// use scroll_picker::geometry::snap_index;
///
/// assert_eq!(snap_index(200.0, 40.0, 7), Some(5));
/// assert_eq!(snap_index(219.0, 40.0, 7), Some(5));
/// assert_eq!(snap_index(221.0, 40.0, 7), Some(6));
/// assert_eq!(snap_index(-35.0, 40.0, 7), Some(0));
/// assert_eq!(snap_index(9_000.0, 40.0, 7), Some(6));
/// assert_eq!(snap_index(80.0, 40.0, 0), None);
/// ```
pub fn snap_index(offset: f32, item_size: f32, len: usize) -> Option<usize> {
    if len == 0 || !is_usable_size(item_size) {
        return None;
    }
    if offset.is_nan() {
        return Some(0);
    }
    let slot = (offset / item_size).round();
    if slot <= 0.0 {
        Some(0)
    } else {
        Some((slot as usize).min(len - 1))
    }
}

/// Length of each spacer slot that pads a centered selector's real items.
///
/// `(viewport_length - item_size) / divisor`, never negative.
///
/// ```
/// use scroll_picker::geometry::{spacer_length, CENTER_SPACER_DIVISOR, LEGACY_CENTER_SPACER_DIVISOR};
///
/// assert_eq!(spacer_length(300.0, 100.0, CENTER_SPACER_DIVISOR), 100.0);
/// assert_eq!(spacer_length(300.0, 100.0, LEGACY_CENTER_SPACER_DIVISOR), 80.0);
/// assert_eq!(spacer_length(50.0, 100.0, CENTER_SPACER_DIVISOR), 0.0);
/// ```
pub fn spacer_length(viewport_length: f32, item_size: f32, divisor: f32) -> f32 {
    if !is_usable_size(divisor) {
        return 0.0;
    }
    let spacer = (viewport_length - item_size) / divisor;
    if spacer.is_finite() {
        spacer.max(0.0)
    } else {
        0.0
    }
}

/// Slot under a position measured from the start of the item run.
///
/// Positions before the first slot or past the last one are `None`; hit
/// testing does not clamp.
pub fn slot_at(position: f32, item_size: f32, len: usize) -> Option<usize> {
    if len == 0 || !is_usable_size(item_size) || position.is_nan() || position < 0.0 {
        return None;
    }
    let slot = (position / item_size).floor() as usize;
    (slot < len).then_some(slot)
}
