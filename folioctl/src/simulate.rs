use std::{fs, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Args, ValueEnum};
use folio_config::{CarouselPreset, Config, MotionKind};
use folio_core::carousel::{
    CarouselConfig, CarouselEngine, CarouselKey, Layout, ManualScheduler,
};
use folio_model::{CarouselItem, ContentId, ContentKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Auto,
    HoverZone,
    Damped,
}

impl From<ModeArg> for MotionKind {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => MotionKind::Auto,
            ModeArg::HoverZone => MotionKind::HoverZone,
            ModeArg::Damped => MotionKind::Damped,
        }
    }
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Carousel whose configured preset is used as the starting point
    #[arg(long, default_value = "representative-works")]
    carousel: ContentKind,

    /// Interaction mode (overrides the preset)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Base speed in px per frame (overrides the preset)
    #[arg(long)]
    speed: Option<f64>,

    /// Copies of the item list on the track (overrides the preset)
    #[arg(long)]
    repeat: Option<usize>,

    /// Stop while hovered in auto mode
    #[arg(long, default_value_t = false)]
    pause_on_hover: bool,

    /// Frames to run
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// JSON array of items (`id`, optional `title`, optional `width`)
    #[arg(long)]
    items: Option<PathBuf>,

    /// Number of generated items when --items is not given
    #[arg(long, default_value_t = 5)]
    count: usize,

    /// Width of items that don't carry their own, in px
    #[arg(long, default_value_t = 240.0)]
    item_width: f64,

    /// Gap after every item in px (overrides the preset)
    #[arg(long)]
    gap: Option<f64>,

    /// Visible width of the container in px
    #[arg(long, default_value_t = 960.0)]
    viewport: f64,

    /// Pointer enters the container after this many frames
    #[arg(long)]
    hover_at: Option<u64>,

    /// Pointer leaves the container after this many frames
    #[arg(long)]
    leave_at: Option<u64>,

    /// Pointer x within the container once it has entered, in px
    #[arg(long)]
    pointer_x: Option<f64>,

    /// Print a row every N frames (0 prints only the summary)
    #[arg(long, default_value_t = 60)]
    every: u64,

    /// Print the summary as JSON and skip per-frame rows
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// An item read from `--items` or generated.
#[derive(Debug, Clone, Deserialize)]
pub struct SimItem {
    pub id: ContentId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
}

impl CarouselItem for SimItem {
    type Key = ContentId;

    fn key(&self) -> ContentId {
        self.id
    }
}

impl SimItem {
    fn label(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => format!("#{}", self.id),
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    carousel: String,
    mode: &'static str,
    items: usize,
    frames: u64,
    position: f64,
    velocity: f64,
    pass_width: Option<f64>,
    travelled: f64,
    laps: f64,
    cells: usize,
    fallback_cells: usize,
    item_at_origin: Option<ContentId>,
}

pub fn run(args: &SimulateArgs, config: &Config) -> anyhow::Result<()> {
    let preset = preset_for(args, config);
    let carousel_config = CarouselConfig::try_from(&preset)
        .context("invalid carousel settings")?;
    let items = load_items(args)?;
    let key = CarouselKey::from(args.carousel);
    info!(
        carousel = ?key,
        mode = carousel_config.mode.name(),
        items = items.len(),
        "simulating"
    );

    let layout = Layout::Items {
        widths: items
            .iter()
            .map(|item| item.width.unwrap_or(args.item_width))
            .collect(),
        gap: args.gap.unwrap_or(preset.gap_px),
        viewport_width: args.viewport,
    };

    let mut sched = ManualScheduler::new();
    let mut engine = CarouselEngine::new(carousel_config, items)
        .context("invalid carousel settings")?;
    engine.mount(&mut sched);
    if !engine.on_layout(&layout, &mut sched) && !engine.items().is_empty() {
        engine.unmount(&mut sched);
        bail!("item widths and gap must be finite, non-negative and add up to a non-zero pass");
    }

    // Untitled items stand in for a card whose image failed to load.
    let view = engine.render(|item| {
        item.title
            .clone()
            .filter(|title| !title.trim().is_empty())
            .ok_or_else(|| format!("item {} has no title", item.id))
    });

    let print_rows = !args.json && args.every > 0 && !engine.items().is_empty();
    if print_rows {
        println!("{:>6} {:>12} {:>10}  item", "frame", "position", "velocity");
    }
    let mut travelled = 0.0;
    for frame in 0..args.frames {
        if args.hover_at == Some(frame) {
            engine.pointer_enter();
            if let Some(x) = args.pointer_x {
                engine.pointer_move(x, args.viewport);
            }
        }
        if args.leave_at == Some(frame) {
            engine.pointer_leave();
        }
        for handle in sched.drain() {
            if engine.on_frame(handle, &mut sched).is_some() {
                travelled += engine.velocity();
            }
        }
        if print_rows && (frame + 1) % args.every == 0 {
            let item = engine
                .item_at(0.0)
                .map(|idx| engine.items()[idx].label())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>6} {:>12.3} {:>10.4}  {}",
                engine.frames_elapsed(),
                engine.position(),
                engine.velocity(),
                item
            );
        }
    }

    let pass_width = engine.pass_width();
    let summary = Summary {
        carousel: args.carousel.to_string(),
        mode: engine.config().mode.name(),
        items: engine.items().len(),
        frames: engine.frames_elapsed(),
        position: engine.position(),
        velocity: engine.velocity(),
        pass_width,
        travelled,
        laps: pass_width.map_or(0.0, |w| travelled / w),
        cells: view.cells.len(),
        fallback_cells: view.fallback_count(),
        item_at_origin: engine.item_at(0.0).map(|idx| engine.items()[idx].id),
    };
    engine.unmount(&mut sched);
    debug!(
        requested = sched.requested(),
        cancelled = sched.cancelled(),
        pending = sched.pending(),
        "frame clock released"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn preset_for(args: &SimulateArgs, config: &Config) -> CarouselPreset {
    let mut preset = match args.carousel {
        ContentKind::CoverArts => config.carousels.cover_arts.clone(),
        ContentKind::RepresentativeWorks => {
            config.carousels.representative_works.clone()
        }
        ContentKind::ResearchHighlights => {
            config.carousels.research_highlights.clone()
        }
    };
    if let Some(mode) = args.mode {
        preset.mode = mode.into();
    }
    if let Some(speed) = args.speed {
        preset.base_speed = speed;
    }
    if let Some(repeat) = args.repeat {
        preset.repeat_factor = repeat;
    }
    if args.pause_on_hover {
        preset.pause_on_hover = true;
    }
    preset
}

fn load_items(args: &SimulateArgs) -> anyhow::Result<Vec<SimItem>> {
    let Some(path) = args.items.as_ref() else {
        return Ok((1..=args.count)
            .map(|n| SimItem {
                id: ContentId(n as i64),
                title: Some(format!("Item {n}")),
                width: None,
            })
            .collect());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| {
            format!("failed to parse items from {}", path.display())
        })
}

fn print_summary(summary: &Summary) {
    if summary.items == 0 {
        println!("no items; nothing to animate");
        return;
    }
    println!("carousel   {} ({})", summary.carousel, summary.mode);
    println!(
        "items      {} ({} cells, {} fallback)",
        summary.items, summary.cells, summary.fallback_cells
    );
    println!("frames     {}", summary.frames);
    println!("position   {:.3}", summary.position);
    println!("velocity   {:.4}", summary.velocity);
    if let Some(pass_width) = summary.pass_width {
        println!("pass width {pass_width:.1}");
    }
    println!("travelled  {:.3} ({:.2} laps)", summary.travelled, summary.laps);
    if let Some(id) = summary.item_at_origin {
        println!("leftmost   #{id}");
    }
}
