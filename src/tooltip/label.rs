//! Label sizing.

use serde::{Deserialize, Serialize};

use crate::widget::Vec2;

/// Fixed-advance text metrics used to size the overlay label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    #[serde(default = "default_char_width")]
    pub char_width: f32,
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    #[serde(default = "default_padding")]
    pub padding: f32,
}

fn default_char_width() -> f32 { 7.0 }
fn default_line_height() -> f32 { 14.0 }
fn default_padding() -> f32 { 4.0 }

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            char_width: default_char_width(),
            line_height: default_line_height(),
            padding: default_padding(),
        }
    }
}

impl LabelMetrics {
    /// Rendered size of a single-line label. Empty text measures to zero.
    pub fn measure(&self, text: &str) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        let chars = text.chars().count() as f32;
        Vec2::new(
            chars * self.char_width + self.padding * 2.0,
            self.line_height + self.padding * 2.0,
        )
    }
}
