//! Layout files: XML descriptions of a panel and its documents.
//!
//! ```xml
//! <Ui width="800" height="600" scale="1">
//!   <Document name="Hud">
//!     <Element name="Toolbar" x="10" y="10" width="200" height="40" tooltip="Tools">
//!       <Element name="Save" x="5" y="5" width="60" height="30" tooltip="Save"/>
//!     </Element>
//!   </Document>
//! </Ui>
//! ```

mod parse;
mod types;

pub use parse::{parse_xml, parse_xml_file};
pub use types::{DocumentXml, ElementXml, UiXml};

use crate::error::Result;
use crate::panel::Panel;
use crate::widget::{Element, PickingMode, Rect};
use std::path::Path;

/// Build a panel from parsed layout XML.
pub fn build_panel(ui: &UiXml) -> Panel {
    let mut panel = Panel::new(ui.width, ui.height);
    if let Some(scale) = ui.scale {
        panel.set_scale(scale);
    }
    for doc in &ui.documents {
        let root = panel.add_document(&doc.name);
        for element in &doc.elements {
            insert_element(&mut panel, root, element);
        }
    }
    panel
}

/// Parse and build a panel from a layout string.
pub fn load_panel(xml: &str) -> Result<Panel> {
    Ok(build_panel(&parse_xml(xml)?))
}

/// Parse and build a panel from a layout file.
pub fn load_panel_file(path: &Path) -> Result<Panel> {
    Ok(build_panel(&parse_xml_file(path)?))
}

fn insert_element(panel: &mut Panel, parent: u64, xml: &ElementXml) {
    let layout = Rect::new(
        xml.x.unwrap_or(0.0),
        xml.y.unwrap_or(0.0),
        xml.width.unwrap_or(0.0),
        xml.height.unwrap_or(0.0),
    );
    let mut element = Element::new(xml.name.clone(), Some(parent)).with_layout(layout);
    element.tooltip = xml.tooltip.clone();
    element.visible = !xml.hidden.unwrap_or(false);
    if let Some(ref picking) = xml.picking {
        match PickingMode::from_str(picking) {
            Some(mode) => element.picking_mode = mode,
            None => tracing::warn!("unknown picking mode '{}' on {:?}", picking, xml.name),
        }
    }
    let id = panel.tree.insert(element);
    for child in &xml.children {
        insert_element(panel, id, child);
    }
}
