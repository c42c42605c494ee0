//! Element - a node in the retained UI tree.

use super::{next_element_id, Rect};

/// Whether hit-testing may return this element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickingMode {
    #[default]
    Position,
    Ignore,
}

impl PickingMode {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "position" => Some(Self::Position),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }
}

/// A node in the UI tree.
#[derive(Debug)]
pub struct Element {
    /// Unique element ID.
    pub id: u64,
    /// Optional lookup name.
    pub name: Option<String>,
    /// Tooltip annotation; inherited by descendants for pointer resolution.
    pub tooltip: Option<String>,
    /// Bounds relative to the parent. Offsets are explicit, there is no
    /// flow layout, so every element is absolutely positioned.
    pub layout: Rect,
    /// Parent element ID (non-owning).
    pub parent_id: Option<u64>,
    /// Child element IDs, back to front.
    pub children: Vec<u64>,
    /// Whether the element is visible.
    pub visible: bool,
    pub picking_mode: PickingMode,
    /// Text content (labels).
    pub text: Option<String>,
    /// Style classes.
    pub class_list: Vec<String>,
}

impl Element {
    pub fn new(name: Option<String>, parent_id: Option<u64>) -> Self {
        Self {
            id: next_element_id(),
            name,
            tooltip: None,
            layout: Rect::default(),
            parent_id,
            children: Vec::new(),
            visible: true,
            picking_mode: PickingMode::Position,
            text: None,
            class_list: Vec::new(),
        }
    }

    /// Builder-style bounds setter.
    pub fn with_layout(mut self, layout: Rect) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Tooltip text if present and non-empty.
    pub fn tooltip_text(&self) -> Option<&str> {
        self.tooltip.as_deref().filter(|t| !t.is_empty())
    }

    pub fn add_to_class_list(&mut self, class: &str) {
        if !self.has_class(class) {
            self.class_list.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }

    pub fn is_pickable(&self) -> bool {
        self.visible && self.picking_mode == PickingMode::Position
    }
}
