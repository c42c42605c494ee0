//! One tooltip overlay per document root.
//!
//! `attach_all` is run at startup (and may be re-run when documents are
//! added); roots that already have an overlay are left alone. Overlays whose
//! root disappears are dropped on the next tick.

use crate::config::TooltipConfig;
use crate::error::Result;
use crate::panel::Panel;
use crate::tooltip::{TickOutcome, TooltipOverlay};
use crate::widget::Vec2;

#[derive(Debug, Default)]
pub struct OverlayRegistry {
    overlays: Vec<TooltipOverlay>,
    config: TooltipConfig,
}

impl OverlayRegistry {
    pub fn new(config: TooltipConfig) -> Self {
        Self { overlays: Vec::new(), config }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Attach an overlay to `root` unless one exists. Returns whether a new
    /// overlay was created.
    pub fn attach(&mut self, panel: &mut Panel, root: u64) -> Result<bool> {
        if self.get(root).is_some() {
            return Ok(false);
        }
        let overlay = TooltipOverlay::attach(panel, root, &self.config)?;
        self.overlays.push(overlay);
        Ok(true)
    }

    /// Attach an overlay to every document root of `panel` that lacks one.
    /// Returns the number of overlays created.
    pub fn attach_all(&mut self, panel: &mut Panel) -> Result<usize> {
        let roots = panel.documents().to_vec();
        let mut attached = 0;
        for root in roots {
            if self.attach(panel, root)? {
                attached += 1;
            }
        }
        Ok(attached)
    }

    /// Detach and drop the overlay for `root`, if any.
    pub fn detach(&mut self, panel: &mut Panel, root: u64) {
        if let Some(idx) = self.overlays.iter().position(|o| o.root() == root) {
            self.overlays.remove(idx).detach(panel);
        }
    }

    pub fn get(&self, root: u64) -> Option<&TooltipOverlay> {
        self.overlays.iter().find(|o| o.root() == root)
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Tick every overlay with the same pointer sample.
    pub fn tick_all(&mut self, panel: &mut Panel, pointer: Vec2) -> Vec<(u64, TickOutcome)> {
        if panel.is_live() {
            self.overlays.retain(|o| {
                let alive = panel.tree.contains(o.root());
                if !alive {
                    tracing::debug!("dropping tooltip overlay for removed root {}", o.root());
                }
                alive
            });
        }
        self.overlays
            .iter_mut()
            .map(|o| (o.root(), o.tick(panel, pointer)))
            .collect()
    }
}
