//! Screen-space panel hosting one or more UI documents.
//!
//! A panel owns an element tree whose top node (the visual tree) covers the
//! whole screen. Each document root is a direct child of the visual tree, so
//! several documents can overlap and share one pointer. Screen space has Y
//! growing upward; panel space has Y growing downward and is scaled by
//! `scale` panel units per screen pixel.

use crate::widget::{Element, ElementTree, PickingMode, Rect, Vec2};

#[derive(Debug)]
pub struct Panel {
    pub tree: ElementTree,
    visual_tree: u64,
    documents: Vec<u64>,
    screen_width: f32,
    screen_height: f32,
    scale: f32,
    torn_down: bool,
}

impl Panel {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let mut tree = ElementTree::new();
        let mut root = Element::new(None, None)
            .with_layout(Rect::new(0.0, 0.0, screen_width, screen_height));
        root.picking_mode = PickingMode::Ignore;
        let visual_tree = tree.insert(root);
        Self {
            tree,
            visual_tree,
            documents: Vec::new(),
            screen_width,
            screen_height,
            scale: 1.0,
            torn_down: false,
        }
    }

    /// ID of the top-level element spanning the panel.
    pub fn visual_tree(&self) -> u64 {
        self.visual_tree
    }

    /// Add a document root spanning the full panel. The root itself is
    /// transparent to picking; only its content can be hit.
    pub fn add_document(&mut self, name: &str) -> u64 {
        let size = self.layout_size();
        let mut root = Element::new(Some(name.to_string()), Some(self.visual_tree))
            .with_layout(Rect::new(0.0, 0.0, size.x, size.y));
        root.picking_mode = PickingMode::Ignore;
        let id = self.tree.insert(root);
        self.documents.push(id);
        tracing::debug!("panel: added document '{}' ({})", name, id);
        id
    }

    /// Remove a document root and everything under it.
    pub fn remove_document(&mut self, id: u64) {
        self.documents.retain(|&d| d != id);
        self.tree.remove(id);
    }

    /// Document roots in insertion order.
    pub fn documents(&self) -> &[u64] {
        &self.documents
    }

    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> f32 {
        self.screen_height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        self.sync_layout_size();
    }

    /// Panel units per screen pixel. Non-positive or non-finite values are
    /// ignored.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
            self.sync_layout_size();
        }
    }

    fn sync_layout_size(&mut self) {
        let size = Vec2::new(self.screen_width / self.scale, self.screen_height / self.scale);
        self.tree.set_size(self.visual_tree, size);
        for &doc in &self.documents {
            self.tree.set_size(doc, size);
        }
    }

    /// Extent of the visual tree in panel units.
    pub fn layout_size(&self) -> Vec2 {
        self.tree
            .get(self.visual_tree)
            .map(|e| e.layout.size())
            .unwrap_or(Vec2::ZERO)
    }

    /// Mirror a screen-space point vertically (Y-up to Y-down).
    pub fn flip_y(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x, self.screen_height - screen.y)
    }

    /// Convert a Y-down screen point into panel space.
    pub fn screen_to_panel(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x / self.scale, screen.y / self.scale)
    }

    /// Convert a raw (Y-up) pointer sample into panel space.
    pub fn pointer_to_panel(&self, pointer: Vec2) -> Vec2 {
        self.screen_to_panel(self.flip_y(pointer))
    }

    /// Topmost element under a panel-space point.
    pub fn pick(&self, point: Vec2) -> Option<u64> {
        self.tree.pick(self.visual_tree, point)
    }

    /// Whether `id` is a live element of this panel.
    pub fn contains(&self, id: u64) -> bool {
        !self.torn_down && self.tree.contains(id)
    }

    pub fn tear_down(&mut self) {
        self.torn_down = true;
        tracing::debug!("panel torn down");
    }

    pub fn is_live(&self) -> bool {
        !self.torn_down
    }
}
