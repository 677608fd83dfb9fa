//! Render command: full pipeline to PNG.

use crate::RenderArgs;
use crate::export;
use crate::preset::Preset;
use anyhow::{Context, Result, bail};
use meshgrad_color::ColorField;
use meshgrad_core::{
    ColorSpace, DitherAlgorithm, EffectKind, Frame, Levels, RenderConfig, Rgba,
};
use meshgrad_render::Compositor;
use meshgrad_warp::Orientation;
use tracing::{debug, info};

fn parse_color_space(s: &str) -> Result<ColorSpace> {
    Ok(match s {
        "rgb" => ColorSpace::Rgb,
        "oklab" => ColorSpace::Oklab,
        "hsl" => ColorSpace::Hsl,
        "lch" => ColorSpace::Lch,
        other => bail!("unknown color space {other:?} (rgb, oklab, hsl, lch)"),
    })
}

fn parse_dither_algorithm(s: &str) -> Result<DitherAlgorithm> {
    Ok(match s {
        "ordered" => DitherAlgorithm::Ordered,
        "floyd" => DitherAlgorithm::Floyd,
        "atkinson" => DitherAlgorithm::Atkinson,
        other => bail!("unknown dither algorithm {other:?} (ordered, floyd, atkinson)"),
    })
}

fn parse_effect(args: &RenderArgs) -> Result<EffectKind> {
    Ok(match args.effect.as_str() {
        "none" => EffectKind::None,
        "pixelate" => EffectKind::Pixelate {
            pixel_size: args.pixel_size,
        },
        "dither" => EffectKind::Dither {
            dither_size: args.dither_size,
            algorithm: parse_dither_algorithm(&args.dither_algorithm)?,
        },
        "rainbow" => EffectKind::Rainbow {
            intensity: args.rainbow_intensity,
        },
        other => bail!("unknown effect {other:?} (none, pixelate, dither, rainbow)"),
    })
}

/// Runs the render command.
pub fn run(args: RenderArgs, verbose: bool) -> Result<()> {
    let mut preset = match &args.preset {
        Some(path) => Preset::load(path)?,
        None => Preset::default_arrangement(),
    };

    // CLI colors override the preset's.
    if let Some(hexes) = &args.colors {
        for (slot, hex) in preset.colors.iter_mut().zip(hexes) {
            *slot = Rgba::from_hex(hex)
                .with_context(|| format!("invalid corner color {hex:?}"))?;
        }
    }

    let config = RenderConfig {
        color_space: parse_color_space(&args.space)?,
        levels: Levels::new(args.levels_low, args.levels_mid, args.levels_high),
        effect: parse_effect(&args)?,
    };

    let set = preset.to_set()?;
    let aspect = args.width as f32 / args.height as f32;
    let colors = ColorField::new(preset.colors, aspect);
    let orientation = if args.inverse {
        Orientation::Inverse
    } else {
        Orientation::Forward
    };

    debug!(
        width = args.width,
        height = args.height,
        npoints = set.len(),
        ?orientation,
        "rendering"
    );

    let mut compositor = Compositor::new(args.width, args.height)?;
    compositor.set_show_markers(args.markers);
    let mut out = Frame::new(args.width, args.height)?;
    compositor.draw(&set, orientation, &colors, &config, &mut out)?;

    export::write_png(&args.output, &out)?;
    info!(output = %args.output.display(), "wrote PNG");
    if verbose {
        println!(
            "Rendered {}x{} ({} points) -> {}",
            args.width,
            args.height,
            set.len(),
            args.output.display()
        );
    }
    Ok(())
}
