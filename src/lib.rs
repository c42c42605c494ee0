//! Tooltip Overlay
//!
//! A screen-space tooltip for retained-mode UI trees. Once per frame the
//! overlay resolves which element's tooltip applies under the pointer and
//! keeps a floating label in sync with it.

pub mod config;
pub mod error;
pub mod panel;
pub mod registry;
pub mod tooltip;
pub mod widget;
pub mod xml;

pub use config::{AnchorMode, TooltipConfig};
pub use error::{Error, Result};
pub use panel::Panel;
pub use registry::OverlayRegistry;
pub use tooltip::{resolve, PositionMode, Resolution, TickOutcome, TooltipOverlay};
