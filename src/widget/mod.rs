//! Retained UI tree the tooltip overlay reads from.

mod element;
mod geometry;
mod tree;

pub use element::{Element, PickingMode};
pub use geometry::{Rect, Vec2};
pub use tree::ElementTree;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique element ID.
pub fn next_element_id() -> u64 {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
}
