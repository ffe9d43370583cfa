/*
 * Application Module
 *
 * This module defines the main application model and logic for the particle
 * field. It handles window creation, the per-frame update and rendering.
 *
 * Every piece of mutable state (particle set, pointer record, tunables, frame
 * loop) lives on the Model and is handed explicitly to the event handlers in
 * the input module.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, trace};

use crate::config;
use crate::debug::FrameStats;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::input::{key_pressed, mouse_exited, mouse_moved, raw_window_event, resized};
use crate::overlay::{NavToggle, RegistrationForm};
use crate::surface::DrawSurface;
use crate::ui::{self, Overlays};
use crate::viewport::Viewport;

// Used when neither the command line nor the monitor gives a size
const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 720);

// Main model for the application
pub struct Model {
    pub field: ParticleField,
    pub frame_loop: FrameLoop,
    pub egui: Egui,
    pub stats: FrameStats,
    pub rng: StdRng,
    pub nav: NavToggle,
    pub registration: RegistrationForm,
}

// Window size: explicit, or 80% of the primary monitor
fn window_size(app: &App, requested: Option<(u32, u32)>) -> (u32, u32) {
    if let Some(size) = requested {
        return size;
    }
    match app.primary_monitor() {
        Some(monitor) => {
            let monitor_size = monitor.size();
            (
                (monitor_size.width as f32 * 0.8) as u32,
                (monitor_size.height as f32 * 0.8) as u32,
            )
        }
        None => FALLBACK_WINDOW_SIZE,
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = config::launch_config();

    // Escape goes through the frame loop's cancellation instead
    app.set_exit_on_escape(false);

    let (window_width, window_height) = window_size(app, config.window_size);

    let window_id = match app
        .new_window()
        .title("Particle Field")
        .size(window_width, window_height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .resized(resized)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(err) => {
            error!(error = ?err, "failed to create window");
            std::process::exit(1);
        }
    };

    let Some(window) = app.window(window_id) else {
        error!("window disappeared right after creation");
        std::process::exit(1);
    };

    let egui = Egui::from_window(&window);
    let viewport = Viewport::from_rect(window.rect());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut field = match ParticleField::new(viewport, config.params) {
        Ok(field) => field,
        Err(err) => {
            error!(%err, "invalid particle field parameters");
            std::process::exit(1);
        }
    };
    field.reset(&mut rng);

    let mut frame_loop = FrameLoop::new();
    frame_loop.start();

    info!(
        width = viewport.width,
        height = viewport.height,
        seed = ?config.seed,
        "particle field ready"
    );

    Model {
        field,
        frame_loop,
        egui,
        stats: FrameStats::default(),
        rng,
        nav: NavToggle::default(),
        registration: RegistrationForm::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Cancellation is honored before anything else in the frame
    if !model.frame_loop.begin_frame() {
        info!(frames = model.frame_loop.frames(), "shutting down");
        app.quit();
        return;
    }

    model.stats.fps = app.fps();
    model.stats.frame_time = update.since_last;
    model.stats.particles = model.field.particles.len();

    model.egui.set_elapsed_time(update.since_start);

    let outcome = ui::update_ui(
        &mut model.egui,
        &mut model.field.params,
        &model.stats,
        &model.field.pointer,
        Overlays {
            nav: &mut model.nav,
            registration: &mut model.registration,
        },
    );

    if outcome.params_changed {
        debug!(
            link_distance = model.field.params.link_distance,
            pointer_radius = model.field.params.pointer_radius,
            pointer_force = model.field.params.pointer_force,
            "field parameters changed"
        );
    }
    if outcome.placement_changed {
        debug!("placement parameters changed, applied on next reset");
    }
    if outcome.reset_particles {
        model.field.reset(&mut model.rng);
    }

    if !model.field.params.pause_simulation {
        model.field.step();
    }

    trace!(
        fps = model.stats.fps,
        links = model.stats.links_drawn.get(),
        "frame"
    );
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    let mut surface = DrawSurface::new(&draw, model.field.viewport());
    let links = model.field.render(&mut surface);
    model.stats.links_drawn.set(links);

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(error = ?err, "failed to render particle field");
    }

    // Draw the egui UI on top
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(error = ?err, "failed to render control panel");
    }
}
