//! Tooltip overlay simulator - replays a pointer path over a layout file.
//!
//! Usage:
//!   tooltip-sim replay layout.xml -p 30,570 -p 40,570   # one frame per sample
//!   tooltip-sim replay layout.xml --mode element -p 30,570
//!   tooltip-sim dump-tree layout.xml                    # print the element tree

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tooltip_overlay::widget::Vec2;
use tooltip_overlay::xml::load_panel_file;
use tooltip_overlay::{AnchorMode, OverlayRegistry, Panel, TickOutcome, TooltipConfig};

#[derive(Parser)]
#[command(name = "tooltip-sim")]
#[command(about = "Replay pointer samples over a UI layout and report tooltip state")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tick the overlays once per pointer sample
    Replay {
        /// Layout XML file
        layout: PathBuf,

        /// Pointer sample in screen pixels, Y up (repeatable): X,Y
        #[arg(short, long = "pointer", value_parser = parse_point)]
        pointers: Vec<Vec2>,

        /// Anchor mode (overrides the config file)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Config file (defaults to the user data directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the element tree of a layout
    DumpTree {
        /// Layout XML file
        layout: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pointer,
    Element,
}

impl From<ModeArg> for AnchorMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Pointer => AnchorMode::Pointer,
            ModeArg::Element => AnchorMode::Element,
        }
    }
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { layout, pointers, mode, config } => {
            let mut config = match config {
                Some(path) => TooltipConfig::load_from(&path),
                None => TooltipConfig::load(),
            };
            if let Some(mode) = mode {
                config.mode = mode.into();
            }
            let mut panel = load_panel_file(&layout)?;
            replay(&mut panel, config, &pointers)?;
        }
        Commands::DumpTree { layout } => {
            let panel = load_panel_file(&layout)?;
            dump_tree(&panel, panel.visual_tree());
        }
    }
    Ok(())
}

fn replay(panel: &mut Panel, config: TooltipConfig, pointers: &[Vec2]) -> tooltip_overlay::Result<()> {
    let mut registry = OverlayRegistry::new(config);
    let attached = registry.attach_all(panel)?;
    tracing::info!("attached {} overlay(s)", attached);

    for (frame, &pointer) in pointers.iter().enumerate() {
        for (root, outcome) in registry.tick_all(panel, pointer) {
            let doc = panel
                .tree
                .get(root)
                .and_then(|e| e.name.as_deref())
                .unwrap_or("?");
            println!("frame {frame:>3} ({:.0},{:.0}) {doc}: {}", pointer.x, pointer.y, describe(&outcome));
        }
    }
    Ok(())
}

fn describe(outcome: &TickOutcome) -> String {
    match outcome {
        TickOutcome::NotReady => "not ready".to_string(),
        TickOutcome::Skipped => "unchanged".to_string(),
        TickOutcome::Hidden => "hidden".to_string(),
        TickOutcome::Shown { text, position } => {
            format!("\"{}\" at ({:.1}, {:.1})", text, position.x, position.y)
        }
    }
}

fn dump_tree(panel: &Panel, id: u64) {
    let Some(element) = panel.tree.get(id) else { return };
    let indent = "  ".repeat(panel.tree.depth(id));
    let r = element.layout;
    let mut line = format!(
        "{indent}{} [{:.0},{:.0} {:.0}x{:.0}]",
        element.name.as_deref().unwrap_or("(anon)"),
        r.x,
        r.y,
        r.width,
        r.height
    );
    if let Some(tip) = element.tooltip_text() {
        line.push_str(&format!(" tooltip=\"{tip}\""));
    }
    if !element.visible {
        line.push_str(" hidden");
    }
    println!("{line}");
    for &child in &element.children {
        dump_tree(panel, child);
    }
}
