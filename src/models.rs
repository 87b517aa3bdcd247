//! Frontend Models
//!
//! Data structures matching the items endpoint.

use serde::{Deserialize, Serialize};

/// One fetched item (matches the `/items.json` payload).
/// Immutable once loaded; rows borrow it for rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub what: String,
    pub when: String,
}
