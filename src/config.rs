/*
 * Configuration Module
 *
 * Command line arguments and the launch configuration handed to the nannou
 * model function. nannou takes plain function pointers, so the parsed
 * configuration is installed once before the app starts and read back when
 * the window is built.
 */

use std::sync::OnceLock;

use clap::Parser;
use thiserror::Error;

use crate::params::{FieldParams, ParamsError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid field parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("launch configuration was already installed")]
    AlreadyInstalled,
}

/// Animated particle field background.
#[derive(Debug, Parser)]
#[command(name = "particle-field")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Initial window width (defaults to 80% of the primary monitor)
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height (defaults to 80% of the primary monitor)
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for reproducible particle placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pairs closer than this are joined by a line
    #[arg(long, default_value_t = 200.0)]
    pub link_distance: f32,

    /// Radius around the pointer inside which particles are pushed away
    #[arg(long, default_value_t = 100.0)]
    pub pointer_radius: f32,

    /// Strength of the pointer push at the pointer itself
    #[arg(long, default_value_t = 2.0)]
    pub pointer_force: f32,

    /// Probability that a particle is placed in an edge band
    #[arg(long, default_value_t = 0.7)]
    pub edge_bias: f32,

    /// Width of the edge band
    #[arg(long, default_value_t = 100.0)]
    pub edge_band: f32,

    /// Scale applied to the random drift velocity
    #[arg(long, default_value_t = 0.2)]
    pub damping: f32,

    /// Start with the control panel hidden (toggle with H)
    #[arg(long)]
    pub hide_panel: bool,

    /// Log filter directive, e.g. "particle_field=debug" (falls back to RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LaunchConfig {
    pub window_size: Option<(u32, u32)>,
    pub seed: Option<u64>,
    pub params: FieldParams,
}

impl Args {
    // Turn the arguments into a validated launch configuration
    pub fn into_launch_config(self) -> Result<LaunchConfig, AppError> {
        let params = FieldParams {
            link_distance: self.link_distance,
            pointer_radius: self.pointer_radius,
            pointer_force: self.pointer_force,
            edge_bias_probability: self.edge_bias,
            edge_band: self.edge_band,
            velocity_damping: self.damping,
            show_panel: !self.hide_panel,
            ..FieldParams::default()
        };
        params.validate()?;

        let window_size = match (self.width, self.height) {
            (Some(width), Some(height)) => Some((width, height)),
            (Some(width), None) => Some((width, scale_dimension(width, 9, 16))),
            (None, Some(height)) => Some((scale_dimension(height, 16, 9), height)),
            (None, None) => None,
        };

        Ok(LaunchConfig { window_size, seed: self.seed, params })
    }
}

// Scale a window dimension by num/den, saturating instead of overflowing
fn scale_dimension(value: u32, num: u64, den: u64) -> u32 {
    u32::try_from(u64::from(value) * num / den).unwrap_or(u32::MAX)
}

static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();

pub fn install(config: LaunchConfig) -> Result<(), AppError> {
    LAUNCH_CONFIG.set(config).map_err(|_| AppError::AlreadyInstalled)
}

// The installed configuration, or defaults when none was installed
pub fn launch_config() -> LaunchConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_default()
}
