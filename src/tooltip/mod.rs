//! Tooltip overlay: per-frame pointer resolution and label placement.
//!
//! Each frame the overlay converts the pointer sample into panel space,
//! picks the element under it, walks up to the nearest ancestor carrying a
//! tooltip, and shows, moves or hides its floating label. Text, position and
//! visibility are only written when they actually change.

mod label;
mod position;

pub use label::LabelMetrics;
pub use position::{
    clamp_axis, clamp_to_container, element_anchor, pointer_anchor, PositionMode, EDGE_MARGIN,
    ELEMENT_OFFSET, POINTER_OFFSET,
};

use crate::config::TooltipConfig;
use crate::error::{Error, Result};
use crate::panel::Panel;
use crate::widget::{Element, PickingMode, Vec2};

/// Tooltip found under the pointer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    /// Tooltip text, empty when nothing applies.
    pub text: String,
    /// Element that carries `text`.
    pub element: Option<u64>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Mutable overlay state, memoized between frames.
#[derive(Debug, Clone, Default)]
pub struct TooltipState {
    /// Last pointer sample; `None` before the first frame.
    pub last_pointer: Option<Vec2>,
    pub last_text: String,
    pub last_element: Option<u64>,
    pub label_visible: bool,
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Panel torn down or root gone; nothing happened.
    NotReady,
    /// Pointer unchanged while the label is visible.
    Skipped,
    Hidden,
    /// Label shown at `position` (panel space).
    Shown { text: String, position: Vec2 },
}

/// Resolve the tooltip under a raw (Y-up, screen-space) pointer sample.
///
/// Returns the nearest ancestor-or-self of the picked element with a
/// non-empty tooltip, or an empty resolution.
pub fn resolve(panel: &Panel, pointer: Vec2) -> Resolution {
    let local = panel.pointer_to_panel(pointer);
    let Some(hit) = panel.pick(local) else {
        return Resolution::default();
    };
    let found = panel
        .tree
        .ancestors(hit)
        .find_map(|e| e.tooltip_text().map(|t| (e.id, t.to_string())));
    tracing::trace!("resolve {:?} -> hit {} -> {:?}", local, hit, found);
    match found {
        Some((id, text)) => Resolution { text, element: Some(id) },
        None => Resolution::default(),
    }
}

/// Floating tooltip label bound to one document root.
#[derive(Debug)]
pub struct TooltipOverlay {
    root: u64,
    label: u64,
    mode: PositionMode,
    margin: f32,
    metrics: LabelMetrics,
    state: TooltipState,
}

impl TooltipOverlay {
    /// Create the label under `root`, hidden and excluded from picking.
    ///
    /// Fails with [`Error::InvalidRoot`] if `root` is not a live element of
    /// `panel`.
    pub fn attach(panel: &mut Panel, root: u64, config: &TooltipConfig) -> Result<Self> {
        if !panel.contains(root) {
            return Err(Error::InvalidRoot(root));
        }

        let mut label = Element::new(None, Some(root));
        label.add_to_class_list(&config.label_class);
        label.picking_mode = PickingMode::Ignore;
        label.visible = false;
        let label = panel.tree.insert(label);

        tracing::debug!("tooltip overlay attached to {} (label {})", root, label);
        Ok(Self {
            root,
            label,
            mode: config.position_mode(),
            margin: config.margin,
            metrics: config.label_metrics,
            state: TooltipState::default(),
        })
    }

    /// Remove the label from the tree.
    pub fn detach(self, panel: &mut Panel) {
        panel.tree.remove(self.label);
        tracing::debug!("tooltip overlay detached from {}", self.root);
    }

    pub fn root(&self) -> u64 {
        self.root
    }

    pub fn label(&self) -> u64 {
        self.label
    }

    pub fn mode(&self) -> PositionMode {
        self.mode
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Whether the panel, root and label are all still alive.
    pub fn is_ready(&self, panel: &Panel) -> bool {
        panel.contains(self.root) && panel.contains(self.label)
    }

    /// Run one frame. Call after layout for the frame is final.
    pub fn tick(&mut self, panel: &mut Panel, pointer: Vec2) -> TickOutcome {
        if !self.is_ready(panel) {
            return TickOutcome::NotReady;
        }
        // Stationary pointer over a visible tooltip: nothing to do. Content
        // changes under a still pointer are not picked up until it moves.
        if self.state.last_pointer == Some(pointer) && self.state.label_visible {
            return TickOutcome::Skipped;
        }
        self.state.last_pointer = Some(pointer);

        let mut resolution = resolve(panel, pointer);
        if self.mode.is_element_anchored() && !self.owns(panel, resolution.element) {
            resolution = Resolution::default();
        }

        if resolution.text != self.state.last_text {
            panel.tree.set_text(self.label, &resolution.text);
            panel.tree.set_size(self.label, self.metrics.measure(&resolution.text));
            self.state.last_text = resolution.text.clone();
        }
        self.state.last_element = resolution.element;

        if resolution.is_empty() {
            self.set_label_visible(panel, false);
            return TickOutcome::Hidden;
        }

        self.set_label_visible(panel, true);
        let position = self.position(panel, pointer, resolution.element);
        let root_origin = panel
            .tree
            .world_bound(self.root)
            .map(|r| r.origin())
            .unwrap_or(Vec2::ZERO);
        panel
            .tree
            .set_position(self.label, Vec2::new(position.x - root_origin.x, position.y - root_origin.y));

        TickOutcome::Shown { text: resolution.text, position }
    }

    /// Whether `element` lies under the tracked root.
    fn owns(&self, panel: &Panel, element: Option<u64>) -> bool {
        element.is_some_and(|id| panel.tree.is_descendant(id, self.root))
    }

    /// Final panel-space label position for the current anchor, clamped to
    /// the visual tree.
    pub fn position(&self, panel: &Panel, pointer: Vec2, element: Option<u64>) -> Vec2 {
        let pointer_local = panel.pointer_to_panel(pointer);
        let raw = match self.mode {
            PositionMode::Pointer { offset } => pointer_anchor(pointer_local, offset),
            PositionMode::Element { offset } => match element.and_then(|id| panel.tree.world_bound(id)) {
                Some(bound) => element_anchor(bound, offset),
                None => pointer_anchor(pointer_local, offset),
            },
        };
        let label_size = panel
            .tree
            .get(self.label)
            .map(|e| e.layout.size())
            .unwrap_or(Vec2::ZERO);
        clamp_to_container(raw, panel.layout_size(), label_size, self.margin)
    }

    fn set_label_visible(&mut self, panel: &mut Panel, visible: bool) {
        if panel.tree.set_visible(self.label, visible) {
            tracing::debug!(
                "tooltip on {}: {} '{}'",
                self.root,
                if visible { "show" } else { "hide" },
                self.state.last_text
            );
        }
        self.state.label_visible = visible;
    }
}
