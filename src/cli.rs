use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a JSON file overriding the default interaction tunables.
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Start with the resize feedback audio muted.
    #[arg(long, default_value_t = false)]
    pub mute: bool,
}

/// Interaction tunables loadable from disk. Every field is optional so a
/// settings file only has to name what it overrides.
#[derive(Debug, Clone, Default, Deserialize, Resource)]
#[serde(default)]
pub struct ResizeSettings {
    pub shrink_sensitivity: Option<f32>,
    pub min_scale_factor: Option<f32>,
    /// Asset path of the clip looped while enlarging. Synthesized when absent.
    pub enlarge_clip: Option<String>,
    /// Asset path of the clip looped while shrinking. Synthesized when absent.
    pub shrink_clip: Option<String>,
    pub volume: Option<f32>,
}

pub fn load_settings(path: &Path) -> anyhow::Result<ResizeSettings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse settings file {}", path.display()))
}
