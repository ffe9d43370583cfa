/*
 * Particle Field
 *
 * A decorative animated background: slowly drifting discs that bounce off
 * the window edges, are joined by fading lines when close together, and
 * scatter away from the mouse pointer. Particle count and size scale with
 * the window width and the field restarts whenever the window is resized.
 */

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use particle_field::app::{model, update};
use particle_field::config::{self, Args};

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let launch = args
        .into_launch_config()
        .context("invalid command line configuration")?;
    config::install(launch)?;

    nannou::app(model)
        .update(update)
        .run();

    Ok(())
}
