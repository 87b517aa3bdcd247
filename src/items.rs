//! Item Collection Helpers
//!
//! Pure helpers for the optimistic remove/restore cycle. The screen removes
//! a row before the DELETE request resolves; whether a failed request puts
//! the row back is a policy choice, not hardwired behavior.

use crate::models::Item;

/// What to do with an optimistically removed item when the remote delete fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Log the failure and leave the item removed (local and server state
    /// may diverge)
    #[default]
    KeepRemoved,
    /// Reinsert the item at its original index
    RestoreOnError,
}

/// Remove the item with `id`, preserving the order of the rest.
/// Returns the removed item and its index so it can be restored.
pub fn remove_item(items: &mut Vec<Item>, id: u32) -> Option<(usize, Item)> {
    let index = items.iter().position(|item| item.id == id)?;
    Some((index, items.remove(index)))
}

/// Put a removed item back where it was. An index past the end (other rows
/// were deleted meanwhile) appends.
pub fn restore_item(items: &mut Vec<Item>, index: usize, item: Item) {
    items.insert(index.min(items.len()), item);
}
