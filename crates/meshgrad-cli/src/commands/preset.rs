//! Preset command: emit the default preset JSON.

use crate::PresetArgs;
use crate::preset::Preset;
use anyhow::{Context, Result};

/// Runs the preset command.
pub fn run(args: PresetArgs, verbose: bool) -> Result<()> {
    let preset = Preset::default_arrangement();
    let json = preset.to_json()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if verbose {
                println!("Wrote default preset to {}", path.display());
            }
        }
        None => println!("{json}"),
    }
    Ok(())
}
