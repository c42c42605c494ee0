//! Frame-by-frame tests for the tooltip overlay.
//!
//! Pointer samples are in screen pixels with Y growing upward, so a point
//! `y` pixels below the top of a 600 px screen is sampled as `600 - y`.

use tooltip_overlay::tooltip::{LabelMetrics, PositionMode};
use tooltip_overlay::widget::{Element, Rect, Vec2};
use tooltip_overlay::{
    resolve, AnchorMode, Panel, Resolution, TickOutcome, TooltipConfig, TooltipOverlay,
};

const SCREEN_H: f32 = 600.0;

/// Pointer sample for a panel-space point on an unscaled 600 px screen.
fn at(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, SCREEN_H - y)
}

fn add(panel: &mut Panel, parent: u64, name: &str, rect: Rect, tooltip: Option<&str>) -> u64 {
    let mut e = Element::new(Some(name.to_string()), Some(parent)).with_layout(rect);
    e.tooltip = tooltip.map(str::to_string);
    panel.tree.insert(e)
}

/// root -> panel(0,0 400x300) -> button(10,10 100x40)
struct Fixture {
    panel: Panel,
    root: u64,
    group: u64,
    button: u64,
}

fn fixture(group_tip: Option<&str>, button_tip: Option<&str>) -> Fixture {
    let mut panel = Panel::new(800.0, SCREEN_H);
    let root = panel.add_document("Hud");
    let group = add(&mut panel, root, "panel", Rect::new(0.0, 0.0, 400.0, 300.0), group_tip);
    let button = add(&mut panel, group, "button", Rect::new(10.0, 10.0, 100.0, 40.0), button_tip);
    Fixture { panel, root, group, button }
}

fn config(mode: AnchorMode) -> TooltipConfig {
    let mut config = TooltipConfig::default();
    config.mode = mode;
    config
}

fn label_text(panel: &Panel, overlay: &TooltipOverlay) -> Option<String> {
    panel.tree.get(overlay.label()).and_then(|e| e.text.clone())
}

fn label_visible(panel: &Panel, overlay: &TooltipOverlay) -> bool {
    panel.tree.get(overlay.label()).is_some_and(|e| e.visible)
}

#[test]
fn test_hovering_annotated_button_shows_its_tooltip() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();

    assert_eq!(
        resolve(&f.panel, at(20.0, 20.0)),
        Resolution { text: "Save".into(), element: Some(f.button) }
    );

    let outcome = overlay.tick(&mut f.panel, at(20.0, 20.0));
    assert!(matches!(outcome, TickOutcome::Shown { ref text, .. } if text == "Save"));
    assert!(label_visible(&f.panel, &overlay));
    assert_eq!(label_text(&f.panel, &overlay).as_deref(), Some("Save"));
    assert_eq!(overlay.state().last_element, Some(f.button));
}

#[test]
fn test_moving_to_empty_space_hides_and_resets_text() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();

    overlay.tick(&mut f.panel, at(20.0, 20.0));
    let outcome = overlay.tick(&mut f.panel, at(700.0, 500.0));

    assert_eq!(outcome, TickOutcome::Hidden);
    assert!(!label_visible(&f.panel, &overlay));
    assert_eq!(overlay.state().last_text, "");
    assert_eq!(overlay.state().last_element, None);
    assert_eq!(label_text(&f.panel, &overlay).as_deref(), Some(""));
}

#[test]
fn test_unannotated_button_inherits_parent_tooltip() {
    let mut f = fixture(Some("Panel info"), None);
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();

    let r = resolve(&f.panel, at(20.0, 20.0));
    assert_eq!(r, Resolution { text: "Panel info".into(), element: Some(f.group) });
    assert!(matches!(
        overlay.tick(&mut f.panel, at(20.0, 20.0)),
        TickOutcome::Shown { ref text, .. } if text == "Panel info"
    ));
}

#[test]
fn test_innermost_annotation_wins() {
    let f = fixture(Some("Panel info"), Some("Save"));
    assert_eq!(resolve(&f.panel, at(20.0, 20.0)).element, Some(f.button));
    assert_eq!(resolve(&f.panel, at(200.0, 200.0)).element, Some(f.group));
}

#[test]
fn test_label_clamped_against_right_edge() {
    let mut panel = Panel::new(100.0, 100.0);
    let root = panel.add_document("Hud");
    add(&mut panel, root, "wide", Rect::new(0.0, 0.0, 100.0, 100.0), Some("Save"));

    let mut config = TooltipConfig::default();
    config.label_metrics = LabelMetrics { char_width: 10.0, line_height: 14.0, padding: 0.0 };
    let mut overlay = TooltipOverlay::attach(&mut panel, root, &config).unwrap();

    // Panel-space pointer (75, 50): raw label x = 90, width 40 -> 100 - 40 - 5.
    let outcome = overlay.tick(&mut panel, Vec2::new(75.0, 50.0));
    assert_eq!(
        outcome,
        TickOutcome::Shown { text: "Save".into(), position: Vec2::new(55.0, 35.0) }
    );
    let label = panel.tree.get(overlay.label()).unwrap();
    assert_eq!(label.layout, Rect::new(55.0, 35.0, 40.0, 14.0));
}

#[test]
fn test_label_near_top_left_is_never_negative() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();

    // Pointer offset moves the label up by 15, past the top edge.
    match overlay.tick(&mut f.panel, at(11.0, 11.0)) {
        TickOutcome::Shown { position, .. } => {
            assert_eq!(position, Vec2::new(26.0, 0.0));
        }
        other => panic!("expected tooltip, got {other:?}"),
    }
}

#[test]
fn test_stationary_pointer_skips_work() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();

    overlay.tick(&mut f.panel, at(20.0, 20.0));
    f.panel.tree.take_render_dirty();
    let before = f.panel.tree.get(overlay.label()).unwrap().layout;

    assert_eq!(overlay.tick(&mut f.panel, at(20.0, 20.0)), TickOutcome::Skipped);
    assert!(!f.panel.tree.take_render_dirty());
    assert_eq!(f.panel.tree.get(overlay.label()).unwrap().layout, before);
}

#[test]
fn test_stationary_pointer_keeps_stale_text() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();
    overlay.tick(&mut f.panel, at(20.0, 20.0));

    f.panel.tree.get_mut(f.button).unwrap().tooltip = Some("Save as".into());
    assert_eq!(overlay.tick(&mut f.panel, at(20.0, 20.0)), TickOutcome::Skipped);
    assert_eq!(label_text(&f.panel, &overlay).as_deref(), Some("Save"));

    // Moving one pixel picks up the new text.
    assert!(matches!(
        overlay.tick(&mut f.panel, at(21.0, 20.0)),
        TickOutcome::Shown { ref text, .. } if text == "Save as"
    ));
}

#[test]
fn test_moving_within_same_tooltip_does_not_rewrite_text() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();
    overlay.tick(&mut f.panel, at(20.0, 20.0));

    f.panel.tree.get_mut(overlay.label()).unwrap().text = Some("marker".into());
    overlay.tick(&mut f.panel, at(30.0, 25.0));
    // Text memo still says "Save", so the label text is left alone.
    assert_eq!(label_text(&f.panel, &overlay).as_deref(), Some("marker"));
}

#[test]
fn test_hidden_label_is_rechecked_every_frame() {
    let mut f = fixture(None, None);
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();

    assert_eq!(overlay.tick(&mut f.panel, at(20.0, 20.0)), TickOutcome::Hidden);
    f.panel.tree.get_mut(f.button).unwrap().tooltip = Some("Late".into());
    assert!(matches!(
        overlay.tick(&mut f.panel, at(20.0, 20.0)),
        TickOutcome::Shown { ref text, .. } if text == "Late"
    ));
}

#[test]
fn test_resolve_is_independent_of_tick_history() {
    let mut f = fixture(Some("Panel info"), Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();
    let probe = at(200.0, 100.0);
    let before = resolve(&f.panel, probe);

    for p in [at(20.0, 20.0), at(700.0, 500.0), probe, at(15.0, 15.0)] {
        overlay.tick(&mut f.panel, p);
    }
    assert_eq!(resolve(&f.panel, probe), before);
}

#[test]
fn test_element_mode_anchors_below_element() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &config(AnchorMode::Element)).unwrap();
    assert!(overlay.mode().is_element_anchored());

    // Button world bound is (10,10 100x40): bottom-left (10,50) + (25,5).
    for p in [at(20.0, 20.0), at(90.0, 45.0)] {
        assert_eq!(
            overlay.tick(&mut f.panel, p),
            TickOutcome::Shown { text: "Save".into(), position: Vec2::new(35.0, 55.0) }
        );
    }
}

#[test]
fn test_element_mode_ignores_other_documents() {
    let mut f = fixture(None, Some("Save"));
    let other = f.panel.add_document("Popup");
    add(&mut f.panel, other, "popup", Rect::new(50.0, 0.0, 200.0, 200.0), Some("Popup tip"));

    let mut mine = TooltipOverlay::attach(&mut f.panel, f.root, &config(AnchorMode::Element)).unwrap();
    let mut theirs = TooltipOverlay::attach(&mut f.panel, other, &config(AnchorMode::Element)).unwrap();

    // The popup document is on top, so it owns the pick over the button.
    assert_eq!(mine.tick(&mut f.panel, at(60.0, 20.0)), TickOutcome::Hidden);
    assert!(!label_visible(&f.panel, &mine));
    assert!(matches!(
        theirs.tick(&mut f.panel, at(60.0, 20.0)),
        TickOutcome::Shown { ref text, .. } if text == "Popup tip"
    ));

    // Left of the popup the button is reachable again.
    assert!(matches!(
        mine.tick(&mut f.panel, at(20.0, 20.0)),
        TickOutcome::Shown { ref text, .. } if text == "Save"
    ));
    assert_eq!(theirs.tick(&mut f.panel, at(20.0, 20.0)), TickOutcome::Hidden);
}

#[test]
fn test_pointer_mode_follows_any_document() {
    let mut f = fixture(None, Some("Save"));
    let other = f.panel.add_document("Popup");
    add(&mut f.panel, other, "popup", Rect::new(0.0, 0.0, 200.0, 200.0), Some("Popup tip"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();

    assert_eq!(overlay.mode(), PositionMode::default());
    assert!(matches!(
        overlay.tick(&mut f.panel, at(20.0, 20.0)),
        TickOutcome::Shown { ref text, .. } if text == "Popup tip"
    ));
}

#[test]
fn test_scaled_panel_converts_pointer() {
    let mut f = fixture(None, Some("Save"));
    f.panel.set_scale(2.0);
    // Panel (20,20) is screen (40, 600 - 40) at scale 2.
    let r = resolve(&f.panel, Vec2::new(40.0, SCREEN_H - 40.0));
    assert_eq!(r.element, Some(f.button));
}

#[test]
fn test_torn_down_panel_makes_tick_a_no_op() {
    let mut f = fixture(None, Some("Save"));
    let mut overlay = TooltipOverlay::attach(&mut f.panel, f.root, &TooltipConfig::default()).unwrap();
    overlay.tick(&mut f.panel, at(20.0, 20.0));
    f.panel.tear_down();

    assert_eq!(overlay.tick(&mut f.panel, at(700.0, 500.0)), TickOutcome::NotReady);
    assert!(overlay.state().label_visible);
    assert_eq!(overlay.state().last_pointer, Some(at(20.0, 20.0)));
}
