//! Arena of elements keyed by ID, with hit-testing and parent walks.

use super::{Element, Rect, Vec2};
use std::collections::HashMap;

/// Registry of all elements in one UI tree.
#[derive(Debug, Default)]
pub struct ElementTree {
    /// Elements by ID.
    elements: HashMap<u64, Element>,
    /// Element IDs by name.
    names: HashMap<String, u64>,
    /// Set by every visual mutation, cleared by `take_render_dirty`.
    render_dirty: bool,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element and append it as the last child of its parent.
    pub fn insert(&mut self, element: Element) -> u64 {
        let id = element.id;
        if let Some(ref name) = element.name {
            self.names.insert(name.clone(), id);
        }
        if let Some(parent_id) = element.parent_id {
            match self.elements.get_mut(&parent_id) {
                Some(parent) => parent.children.push(id),
                None => tracing::warn!("element {} inserted under unknown parent {}", id, parent_id),
            }
        }
        self.elements.insert(id, element);
        self.render_dirty = true;
        id
    }

    /// Remove an element and its whole subtree.
    pub fn remove(&mut self, id: u64) {
        let Some(element) = self.elements.remove(&id) else { return };
        if let Some(parent) = element.parent_id.and_then(|pid| self.elements.get_mut(&pid)) {
            parent.children.retain(|&c| c != id);
        }
        if let Some(ref name) = element.name {
            if self.names.get(name) == Some(&id) {
                self.names.remove(name);
            }
        }
        for child in element.children {
            self.remove(child);
        }
        self.render_dirty = true;
    }

    pub fn contains(&self, id: u64) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by ID.
    pub fn get(&self, id: u64) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable element by ID without marking the tree dirty.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Get an element by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Element> {
        self.names.get(name).and_then(|id| self.elements.get(id))
    }

    /// Get an element ID by name.
    pub fn get_id_by_name(&self, name: &str) -> Option<u64> {
        self.names.get(name).copied()
    }

    pub fn parent(&self, id: u64) -> Option<u64> {
        self.elements.get(&id).and_then(|e| e.parent_id)
    }

    /// Iterate `id` and then each of its ancestors up to the tree root.
    pub fn ancestors(&self, id: u64) -> impl Iterator<Item = &Element> + '_ {
        std::iter::successors(self.elements.get(&id), move |e| {
            e.parent_id.and_then(|pid| self.elements.get(&pid))
        })
    }

    /// Whether `id` is `ancestor` or lies somewhere below it.
    pub fn is_descendant(&self, id: u64, ancestor: u64) -> bool {
        self.ancestors(id).any(|e| e.id == ancestor)
    }

    /// Depth in the parent hierarchy (root = 0).
    pub fn depth(&self, id: u64) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// Rendered bounds in tree space: the element's layout shifted by
    /// every ancestor's offset.
    pub fn world_bound(&self, id: u64) -> Option<Rect> {
        let element = self.elements.get(&id)?;
        let origin = self
            .ancestors(id)
            .skip(1)
            .fold(Vec2::ZERO, |acc, e| acc + e.layout.origin());
        Some(element.layout.translated(origin))
    }

    /// Deepest, topmost element under `point`, searching the subtree of
    /// `root`. Hidden subtrees are skipped; elements that ignore picking
    /// are skipped but their children are still searched.
    pub fn pick(&self, root: u64, point: Vec2) -> Option<u64> {
        let parent_origin = self
            .parent(root)
            .and_then(|pid| self.world_bound(pid))
            .map(|r| r.origin())
            .unwrap_or(Vec2::ZERO);
        self.pick_in(root, parent_origin, point)
    }

    fn pick_in(&self, id: u64, parent_origin: Vec2, point: Vec2) -> Option<u64> {
        let element = self.elements.get(&id)?;
        if !element.visible {
            return None;
        }
        let bound = element.layout.translated(parent_origin);
        // Later children are drawn on top, so they win.
        for &child in element.children.iter().rev() {
            if let Some(hit) = self.pick_in(child, bound.origin(), point) {
                return Some(hit);
            }
        }
        (element.is_pickable() && bound.contains(point)).then_some(id)
    }

    /// Set text content. Returns `false` (and writes nothing) when unchanged.
    pub fn set_text(&mut self, id: u64, text: &str) -> bool {
        let Some(element) = self.elements.get_mut(&id) else { return false };
        if element.text.as_deref() == Some(text) {
            return false;
        }
        element.text = Some(text.to_string());
        self.render_dirty = true;
        true
    }

    /// Set visibility. Returns `false` when unchanged.
    pub fn set_visible(&mut self, id: u64, visible: bool) -> bool {
        let Some(element) = self.elements.get_mut(&id) else { return false };
        if element.visible == visible {
            return false;
        }
        element.visible = visible;
        self.render_dirty = true;
        true
    }

    /// Set the `left`/`top` offset. Returns `false` when unchanged.
    pub fn set_position(&mut self, id: u64, pos: Vec2) -> bool {
        let Some(element) = self.elements.get_mut(&id) else { return false };
        if element.layout.origin() == pos {
            return false;
        }
        element.layout.x = pos.x;
        element.layout.y = pos.y;
        self.render_dirty = true;
        true
    }

    /// Set the resolved size. Returns `false` when unchanged.
    pub fn set_size(&mut self, id: u64, size: Vec2) -> bool {
        let Some(element) = self.elements.get_mut(&id) else { return false };
        if element.layout.size() == size {
            return false;
        }
        element.layout.width = size.x;
        element.layout.height = size.y;
        self.render_dirty = true;
        true
    }

    /// Return and clear the dirty flag.
    pub fn take_render_dirty(&mut self) -> bool {
        std::mem::take(&mut self.render_dirty)
    }
}
