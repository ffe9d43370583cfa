/*
 * UI Module
 *
 * This module builds the control panel with nannou_egui. It exposes sliders
 * for the field tunables, the page overlays and the frame statistics.
 * Parameter change detection compares against a ParamSnapshot taken
 * before the widgets run.
 */

use nannou_egui::{egui, Egui};

use crate::debug::FrameStats;
use crate::overlay::{NavToggle, RegistrationForm};
use crate::params::{FieldParams, ParamSnapshot};
use crate::pointer::PointerState;

// What the app has to do after this frame's UI pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiOutcome {
    pub reset_particles: bool,
    // Placement tunables only apply to the next reset
    pub placement_changed: bool,
    pub params_changed: bool,
}

pub struct Overlays<'a> {
    pub nav: &'a mut NavToggle,
    pub registration: &'a mut RegistrationForm,
}

// Update the UI and report whether particles should be respawned
pub fn update_ui(
    egui: &mut Egui,
    params: &mut FieldParams,
    stats: &FrameStats,
    pointer: &PointerState,
    overlays: Overlays<'_>,
) -> UiOutcome {
    let mut reset_particles = false;

    // Take a snapshot of current parameter values for change detection
    let snapshot = ParamSnapshot::of(params);

    let ctx = egui.begin_frame();

    egui::Window::new("Navigation")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            overlays.nav.show(ui);
            ui.separator();
            ui.collapsing("Register", |ui| overlays.registration.show(ui));
        });

    if params.show_panel {
        egui::Window::new("Particle Field")
            .default_pos([10.0, 200.0])
            .show(&ctx, |ui| {
                ui.collapsing("Placement", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.edge_bias_probability, FieldParams::get_probability_range())
                            .text("Edge Bias"),
                    );
                    ui.add(egui::Slider::new(&mut params.edge_band, FieldParams::get_edge_band_range()).text("Edge Band"));

                    if ui.button("Reset Particles").clicked() {
                        reset_particles = true;
                    }
                });

                ui.collapsing("Links & Pointer", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.link_distance, FieldParams::get_link_distance_range())
                            .text("Link Distance"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.pointer_radius, FieldParams::get_pointer_radius_range())
                            .text("Pointer Radius"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.pointer_force, FieldParams::get_pointer_force_range())
                            .text("Pointer Force"),
                    );
                });

                ui.collapsing("Stats", |ui| {
                    ui.label(format!("FPS: {:.1}", stats.fps));
                    ui.label(format!("Frame time: {:.2} ms", stats.frame_time_ms()));
                    ui.label(format!("Particles: {}", stats.particles));
                    ui.label(format!("Links: {}", stats.links_drawn.get()));
                    match pointer.position {
                        Some(position) => ui.label(format!("Pointer: ({:.0}, {:.0})", position.x, position.y)),
                        None => ui.label("Pointer: outside"),
                    };
                });

                ui.checkbox(&mut params.pause_simulation, "Pause");
                ui.label("H hides this panel, Esc quits");
            });
    }

    // Detect parameter changes
    let (placement_changed, params_changed) = snapshot.detect_changes(params);

    UiOutcome {
        reset_particles,
        placement_changed,
        params_changed,
    }
}
