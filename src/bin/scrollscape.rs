use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollscape::{RevealState, ScrollDirection, Stage, StageConfig, TargetId};

#[derive(Parser, Debug)]
#[command(name = "scrollscape", version)]
struct Cli {
    /// Log lifecycle events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the particle field (and everything else in the stage) for a number of frames.
    Simulate(SimulateArgs),
    /// Print the morph keyframe segment and path at a scroll progress.
    Morph(MorphArgs),
    /// Print reveal states after entering at a scroll progress and playing for a while.
    Reveal(RevealArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input stage JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames to run.
    #[arg(long)]
    frames: u32,

    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Scroll progress applied before the first frame.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Write the last frame as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MorphArgs {
    /// Input stage JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll progress in `[0, 1]`.
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct RevealArgs {
    /// Input stage JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll progress in `[0, 1]`.
    #[arg(long)]
    progress: f64,

    /// Seconds of playback after the trigger.
    #[arg(long, default_value_t = 0.0)]
    time: f64,
}

#[derive(serde::Serialize)]
struct RevealRow {
    target: TargetId,
    state: RevealState,
    transform: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Morph(args) => cmd_morph(args),
        Command::Reveal(args) => cmd_reveal(args),
    }
}

fn read_stage(path: &Path) -> anyhow::Result<StageConfig> {
    StageConfig::from_path(path).with_context(|| format!("load stage '{}'", path.display()))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = read_stage(&args.in_path)?;
    let mut stage = Stage::start(&cfg).context("start stage")?;

    stage.scroll(args.scroll);
    let mut last = stage.frame(0.0);
    for _ in 0..args.frames {
        last = stage.frame(args.dt);
    }

    let stats = stage.stats().context("stage stopped before the summary")?;
    println!(
        "frames={} particles={} respawns={} elapsed={:.3}",
        args.frames, stats.count, stats.respawns, stats.elapsed
    );

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), &last)
            .with_context(|| format!("write frame JSON '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }

    stage.stop();
    Ok(())
}

fn cmd_morph(args: MorphArgs) -> anyhow::Result<()> {
    let cfg = read_stage(&args.in_path)?;
    let Some(track) = cfg.morph else {
        anyhow::bail!("stage '{}' has no morph track", args.in_path.display());
    };
    let sample = track.map_progress(args.progress);
    println!(
        "{} {} {}",
        sample.index,
        sample.local_t,
        track.path_at(args.progress)
    );
    Ok(())
}

fn cmd_reveal(args: RevealArgs) -> anyhow::Result<()> {
    let cfg = read_stage(&args.in_path)?;
    let mut rows = Vec::new();
    for seq_cfg in &cfg.reveals {
        let mut seq = seq_cfg.build();
        seq.on_scroll_progress(args.progress, ScrollDirection::Forward);
        seq.advance(args.time);
        rows.extend(seq.states().into_iter().map(|(target, state)| RevealRow {
            target,
            transform: state.css_transform(),
            state,
        }));
    }
    let json = serde_json::to_string_pretty(&rows).context("serialize reveal states")?;
    println!("{json}");
    Ok(())
}
