//! Pure placement math for the overlay label.
//!
//! No tree access here: callers pass the anchor point, the container extent
//! and the measured label size, and get back the final top-left corner.

use crate::widget::{Rect, Vec2};

/// Distance kept between the label and the container's far edges.
pub const EDGE_MARGIN: f32 = 5.0;

/// Default displacement from the pointer: right and up.
pub const POINTER_OFFSET: Vec2 = Vec2 { x: 15.0, y: -15.0 };

/// Default displacement from the hovered element's bottom-left corner.
pub const ELEMENT_OFFSET: Vec2 = Vec2 { x: 25.0, y: 5.0 };

/// Where the label is anchored before clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionMode {
    /// Follow the pointer, displaced by `offset`.
    Pointer { offset: Vec2 },
    /// Stick to the hovered element's bottom-left corner, displaced by
    /// `offset`. Tooltips from elements outside the tracked root are
    /// ignored in this mode.
    Element { offset: Vec2 },
}

impl Default for PositionMode {
    fn default() -> Self {
        Self::Pointer { offset: POINTER_OFFSET }
    }
}

impl PositionMode {
    pub fn is_element_anchored(&self) -> bool {
        matches!(self, Self::Element { .. })
    }
}

/// Raw pointer-anchored position (panel space).
pub fn pointer_anchor(pointer_local: Vec2, offset: Vec2) -> Vec2 {
    pointer_local + offset
}

/// Raw element-anchored position: bottom-left corner of `bound` plus `offset`.
pub fn element_anchor(bound: Rect, offset: Vec2) -> Vec2 {
    Vec2::new(bound.x_min() + offset.x, bound.y_max() + offset.y)
}

/// Clamp one coordinate to `[0, container - label - margin]`.
///
/// When the label does not fit, the lower bound wins and the label is
/// pinned at 0. NaN input clamps to 0.
pub fn clamp_axis(raw: f32, container: f32, label: f32, margin: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    let max = container - label - margin;
    let clamped = if max.is_nan() { raw } else { raw.min(max) };
    clamped.max(0.0)
}

/// Clamp both axes independently so the label stays inside `container`.
pub fn clamp_to_container(raw: Vec2, container: Vec2, label: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        clamp_axis(raw.x, container.x, label.x, margin),
        clamp_axis(raw.y, container.y, label.y, margin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pulls_back_from_far_edge() {
        // Label 40 wide in a 100 wide container, raw x = 90.
        assert_eq!(clamp_axis(90.0, 100.0, 40.0, EDGE_MARGIN), 55.0);
    }

    #[test]
    fn test_clamp_keeps_in_range_values() {
        assert_eq!(clamp_axis(20.0, 100.0, 40.0, EDGE_MARGIN), 20.0);
        assert_eq!(clamp_axis(-12.0, 100.0, 40.0, EDGE_MARGIN), 0.0);
    }

    #[test]
    fn test_oversized_label_pins_to_origin() {
        assert_eq!(clamp_axis(30.0, 100.0, 120.0, EDGE_MARGIN), 0.0);
        assert_eq!(clamp_axis(30.0, 100.0, 96.0, EDGE_MARGIN), 0.0);
    }

    #[test]
    fn test_clamp_never_returns_nan() {
        assert_eq!(clamp_axis(f32::NAN, 100.0, 40.0, EDGE_MARGIN), 0.0);
        assert_eq!(clamp_axis(10.0, f32::NAN, 40.0, EDGE_MARGIN), 10.0);
        assert_eq!(clamp_axis(f32::INFINITY, 100.0, 40.0, EDGE_MARGIN), 55.0);
        assert_eq!(clamp_axis(f32::NEG_INFINITY, 100.0, 40.0, EDGE_MARGIN), 0.0);
    }

    #[test]
    fn test_clamp_bounds_hold_across_grid() {
        let container = Vec2::new(300.0, 200.0);
        for lw in [0.0, 10.0, 150.0, 295.0] {
            for raw in [-50.0, 0.0, 42.5, 199.0, 280.0, 1000.0] {
                let label = Vec2::new(lw, lw / 2.0);
                let p = clamp_to_container(Vec2::new(raw, raw), container, label, EDGE_MARGIN);
                assert!(p.x >= 0.0 && p.x <= container.x - label.x - EDGE_MARGIN, "x={} lw={}", p.x, lw);
                assert!(p.y >= 0.0 && p.y <= container.y - label.y - EDGE_MARGIN, "y={} lw={}", p.y, lw);
            }
        }
    }

    #[test]
    fn test_element_anchor_uses_bottom_left() {
        let bound = Rect::new(100.0, 40.0, 60.0, 20.0);
        assert_eq!(element_anchor(bound, ELEMENT_OFFSET), Vec2::new(125.0, 65.0));
    }

    #[test]
    fn test_pointer_anchor_moves_right_and_up() {
        assert_eq!(pointer_anchor(Vec2::new(50.0, 50.0), POINTER_OFFSET), Vec2::new(65.0, 35.0));
    }
}
