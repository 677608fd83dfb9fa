//! Shareable preset state.
//!
//! A preset is the compact serialized form of the point arrays and the
//! four corner colors. Feeding one back reconstructs the engine state
//! through `CorrespondenceSet::from_parts`; colors travel in their
//! `#rrggbb` boundary form.

use anyhow::{Context, Result, bail};
use meshgrad_core::Rgba;
use meshgrad_math::Vec2;
use meshgrad_warp::CorrespondenceSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default corner colors (TL, TR, BL, BR): light, accent, primary, dark.
pub const DEFAULT_COLORS: [&str; 4] = ["#f4e9d8", "#3cb9a5", "#c96f4a", "#2b2118"];

/// Persisted point arrays and corner colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// Source points, one `[x, y]` per pair.
    pub source: Vec<[f32; 2]>,
    /// Destination points, one `[x, y]` per pair.
    pub destination: Vec<[f32; 2]>,
    /// Live pair count.
    pub npoints: usize,
    /// Corner colors (TL, TR, BL, BR) as `#rrggbb`.
    pub colors: [Rgba; 4],
}

impl Preset {
    /// The default arrangement: four identity pairs at `(+-0.5, +-0.5)`.
    pub fn default_arrangement() -> Self {
        let points: Vec<[f32; 2]> = vec![
            [-0.5, -0.5],
            [-0.5, 0.5],
            [0.5, -0.5],
            [0.5, 0.5],
        ];
        let colors = DEFAULT_COLORS.map(|hex| {
            Rgba::from_hex(hex).expect("default palette is valid hex")
        });
        Self {
            source: points.clone(),
            destination: points,
            npoints: 4,
            colors,
        }
    }

    /// Captures a preset from live engine state.
    pub fn from_set(set: &CorrespondenceSet, colors: [Rgba; 4]) -> Self {
        Self {
            source: set.arena().sources().iter().map(|p| p.to_array()).collect(),
            destination: set
                .arena()
                .destinations()
                .iter()
                .map(|p| p.to_array())
                .collect(),
            npoints: set.len(),
            colors,
        }
    }

    /// Reconstructs a solved correspondence set.
    pub fn to_set(&self) -> Result<CorrespondenceSet> {
        let src: Vec<Vec2> = self.source.iter().map(|&p| Vec2::from_array(p)).collect();
        let dst: Vec<Vec2> = self
            .destination
            .iter()
            .map(|&p| Vec2::from_array(p))
            .collect();
        let set = CorrespondenceSet::from_parts(&src, &dst, self.npoints)
            .context("preset holds an invalid point triple")?;
        Ok(set)
    }

    /// Reads a preset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read preset {}", path.display()))?;
        let preset: Preset = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse preset {}", path.display()))?;
        if preset.npoints > preset.source.len() || preset.npoints > preset.destination.len() {
            bail!(
                "preset npoints {} exceeds stored points ({} sources, {} destinations)",
                preset.npoints,
                preset.source.len(),
                preset.destination.len()
            );
        }
        Ok(preset)
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize preset")
    }
}
