//! Tooltip overlay configuration persistence.
//!
//! Stores overlay preferences (anchor mode, offsets, edge margin, label
//! metrics) as JSON at `~/.local/share/tooltip-overlay/config.json`. Missing
//! or unreadable files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tooltip::{LabelMetrics, PositionMode, EDGE_MARGIN, ELEMENT_OFFSET, POINTER_OFFSET};
use crate::widget::Vec2;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tooltip-overlay")
        .join("config.json")
}

/// Which anchor the label follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    #[default]
    Pointer,
    Element,
}

/// Persisted overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipConfig {
    #[serde(default)]
    pub mode: AnchorMode,
    #[serde(default = "default_pointer_offset")]
    pub pointer_offset: Vec2,
    #[serde(default = "default_element_offset")]
    pub element_offset: Vec2,
    #[serde(default = "default_margin")]
    pub margin: f32,
    #[serde(default = "default_label_class")]
    pub label_class: String,
    #[serde(default)]
    pub label_metrics: LabelMetrics,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_pointer_offset() -> Vec2 { POINTER_OFFSET }
fn default_element_offset() -> Vec2 { ELEMENT_OFFSET }
fn default_margin() -> f32 { EDGE_MARGIN }
fn default_label_class() -> String { "tooltip-label".into() }

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            mode: AnchorMode::default(),
            pointer_offset: default_pointer_offset(),
            element_offset: default_element_offset(),
            margin: default_margin(),
            label_class: default_label_class(),
            label_metrics: LabelMetrics::default(),
            path: default_path(),
        }
    }
}

impl TooltipConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("invalid tooltip config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::debug!("no tooltip config at {}: {}", path.display(), e);
                Self::default()
            }
        };
        config.path = path.to_path_buf();
        config
    }

    /// Persist current config to the path it was loaded from.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Positioning mode with the configured offset for the selected anchor.
    pub fn position_mode(&self) -> PositionMode {
        match self.mode {
            AnchorMode::Pointer => PositionMode::Pointer { offset: self.pointer_offset },
            AnchorMode::Element => PositionMode::Element { offset: self.element_offset },
        }
    }
}
