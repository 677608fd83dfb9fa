//! meshgrad - mesh-gradient renderer CLI
//!
//! Renders a warped 4-corner gradient through the effects pipeline and
//! writes it as a PNG. Point correspondences and colors round-trip
//! through JSON presets.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod export;
mod preset;

#[derive(Parser)]
#[command(name = "meshgrad")]
#[command(author, version, about = "Mesh-gradient renderer")]
#[command(long_about = "
Renders a continuous color field deformed by point correspondences,
composited through levels and an optional effect pass.

Examples:
  meshgrad render -o out.png                      # defaults, 800x800
  meshgrad render -W 1920 -H 1080 --space oklab -o wall.png
  meshgrad render --effect dither --dither-algorithm atkinson -o d.png
  meshgrad render --preset saved.json --markers -o debug.png
  meshgrad preset -o saved.json                   # write default preset
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a gradient to PNG
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Write a default preset JSON
    #[command(visible_alias = "p")]
    Preset(PresetArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Output PNG path
    #[arg(short, long, default_value = "mesh-gradient.png")]
    output: PathBuf,

    /// Output width in pixels
    #[arg(short = 'W', long, default_value = "800")]
    width: u32,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: u32,

    /// Preset JSON with points and colors
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Corner colors as #rrggbb: top-left top-right bottom-left bottom-right
    #[arg(short, long, num_args = 4, value_names = ["TL", "TR", "BL", "BR"])]
    colors: Option<Vec<String>>,

    /// Interpolation space: rgb, oklab, hsl, lch
    #[arg(short, long, default_value = "rgb")]
    space: String,

    /// Levels black point
    #[arg(long, default_value = "0.0")]
    levels_low: f32,

    /// Levels midtone gamma control
    #[arg(long, default_value = "1.0")]
    levels_mid: f32,

    /// Levels white point
    #[arg(long, default_value = "1.0")]
    levels_high: f32,

    /// Effect: none, pixelate, dither, rainbow
    #[arg(short, long, default_value = "none")]
    effect: String,

    /// Pixelate grid size in device pixels
    #[arg(long, default_value = "8")]
    pixel_size: u32,

    /// Dither cell size in device pixels
    #[arg(long, default_value = "4")]
    dither_size: u32,

    /// Dither algorithm: ordered, floyd, atkinson
    #[arg(long, default_value = "ordered")]
    dither_algorithm: String,

    /// Rainbow intensity (1 complementary, 2 triadic, 3+ tetradic)
    #[arg(long, default_value = "1")]
    rainbow_intensity: u32,

    /// Render the inverse orientation instead of the forward one
    #[arg(long)]
    inverse: bool,

    /// Draw control-point markers (exports normally omit them)
    #[arg(short, long)]
    markers: bool,
}

#[derive(Args)]
struct PresetArgs {
    /// Output path; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        Commands::Preset(args) => commands::preset::run(args, cli.verbose),
    }
}
