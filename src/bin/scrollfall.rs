use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "scrollfall", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a single frame for a scroll position.
    Frame(FrameArgs),
    /// Sample frames across the whole scroll range, one JSON line each.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Vertical scroll offset in pixels.
    #[arg(long, allow_negative_numbers = true)]
    scroll_top: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,

    /// Total content height in pixels. At or below the viewport height the
    /// page does not scroll and progress stays 0.
    #[arg(long, allow_negative_numbers = true)]
    content_height: f64,

    /// Scene JSON with layer classes and depths. Defaults to all layers at depth 0.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Number of intervals; `steps + 1` frames are printed.
    #[arg(long, default_value_t = 20)]
    steps: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,

    /// Total content height in pixels.
    #[arg(long, default_value_t = 5400.0, allow_negative_numbers = true)]
    content_height: f64,

    /// Scene JSON with layer classes and depths.
    #[arg(long)]
    scene: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Computed frame parameters.
    Json,
    /// Style writes as `target: property = value` lines.
    Css,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn load_scene(path: Option<&Path>) -> anyhow::Result<scrollfall::SceneConfig> {
    match path {
        Some(p) => scrollfall::SceneConfig::from_path(p)
            .with_context(|| format!("load scene '{}'", p.display())),
        None => Ok(scrollfall::SceneConfig::default()),
    }
}

fn check_dims(viewport_height: f64, content_height: f64) -> anyhow::Result<()> {
    if !(viewport_height.is_finite() && viewport_height > 0.0) {
        anyhow::bail!("--viewport-height must be a positive number");
    }
    if !content_height.is_finite() {
        anyhow::bail!("--content-height must be finite");
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    check_dims(args.viewport_height, args.content_height)?;
    if !args.scroll_top.is_finite() {
        anyhow::bail!("--scroll-top must be finite");
    }
    let scene = load_scene(args.scene.as_deref())?;
    let driver = scrollfall::ScrollDriver::new(&scene);
    let viewport =
        scrollfall::Viewport::new(args.scroll_top, args.viewport_height, args.content_height);

    let mut writes = Vec::new();
    let frame = driver.on_signal(scrollfall::Signal::Scroll, viewport, &mut writes);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &frame).context("write frame JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Css => {
            for w in &writes {
                writeln!(out, "{}", describe(w))?;
            }
        }
    }
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    check_dims(args.viewport_height, args.content_height)?;
    if args.steps == 0 {
        anyhow::bail!("--steps must be > 0");
    }
    let scene = load_scene(args.scene.as_deref())?;
    let driver = scrollfall::ScrollDriver::new(&scene);
    let scrollable = (args.content_height - args.viewport_height).max(0.0);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..=args.steps {
        let scroll_top = scrollable * f64::from(i) / f64::from(args.steps);
        let viewport =
            scrollfall::Viewport::new(scroll_top, args.viewport_height, args.content_height);
        let frame = driver.frame(viewport);
        serde_json::to_writer(&mut out, &frame).context("write frame JSON")?;
        writeln!(out)?;
    }
    Ok(())
}

fn describe(w: &scrollfall::StyleAssignment) -> String {
    fn target_name(t: scrollfall::StyleTarget) -> String {
        match t {
            scrollfall::StyleTarget::Character => "character".to_string(),
            scrollfall::StyleTarget::Layer(id) => id.to_string(),
            scrollfall::StyleTarget::Caption => "caption".to_string(),
            scrollfall::StyleTarget::Title => "title".to_string(),
        }
    }

    match w {
        scrollfall::StyleAssignment::Transform { target, css } => {
            format!("{}: transform = {css}", target_name(*target))
        }
        scrollfall::StyleAssignment::Opacity { target, value } => {
            format!("{}: opacity = {value}", target_name(*target))
        }
    }
}
