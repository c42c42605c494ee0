//! XML type definitions for layout files.

use serde::Deserialize;

/// Root element of a layout file.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename = "Ui")]
pub struct UiXml {
    /// Screen width in pixels.
    #[serde(rename = "@width")]
    pub width: f32,
    /// Screen height in pixels.
    #[serde(rename = "@height")]
    pub height: f32,
    /// Panel units per screen pixel.
    #[serde(rename = "@scale")]
    pub scale: Option<f32>,
    #[serde(rename = "Document", default)]
    pub documents: Vec<DocumentXml>,
}

/// A document root; each one gets its own overlay.
#[derive(Debug, Deserialize, Clone)]
pub struct DocumentXml {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "Element", default)]
    pub elements: Vec<ElementXml>,
}

/// Element definition in XML. Coordinates are relative to the parent.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ElementXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@x")]
    pub x: Option<f32>,
    #[serde(rename = "@y")]
    pub y: Option<f32>,
    #[serde(rename = "@width")]
    pub width: Option<f32>,
    #[serde(rename = "@height")]
    pub height: Option<f32>,
    #[serde(rename = "@tooltip")]
    pub tooltip: Option<String>,
    #[serde(rename = "@hidden")]
    pub hidden: Option<bool>,
    /// `position` (default) or `ignore`.
    #[serde(rename = "@picking")]
    pub picking: Option<String>,
    #[serde(rename = "Element", default)]
    pub children: Vec<ElementXml>,
}
