/*
 * Particle Field - Module Definitions
 *
 * This file defines the module structure for the particle field application.
 * The simulation core (params, particle, pointer, field, frame_loop, surface,
 * viewport) has no window dependency beyond nannou's math types and can be
 * driven headless; app, input and ui wire it into a nannou window.
 */

// Re-export key components for easier access
pub use field::ParticleField;
pub use frame_loop::{CancellationToken, FrameLoop, LoopState};
pub use params::{configure, FieldParams, FieldScale, ParamsError};
pub use particle::{sample_placement, Particle};
pub use pointer::PointerState;
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use viewport::Viewport;
pub use app::Model;

// Define modules
pub mod params;
pub mod particle;
pub mod pointer;
pub mod field;
pub mod frame_loop;
pub mod surface;
pub mod viewport;
pub mod debug;
pub mod overlay;
pub mod config;
pub mod app;
pub mod ui;
pub mod input;
