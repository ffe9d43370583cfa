/*
 * Input Module
 *
 * This module handles window events for the particle field:
 * - Pointer movement updates the pointer record (surface coordinates)
 * - Pointer leaving the window clears it
 * - Resizing restarts the field for the new viewport
 * - Escape cancels the frame loop, H toggles the control panel
 *
 * None of these trigger a render; the frame loop owns the render cadence.
 */

use nannou::prelude::*;
use tracing::debug;

use crate::app::Model;
use crate::viewport::Viewport;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let position = model.field.viewport().to_surface(pos);
    model.field.pointer.moved(position);
}

// Cursor left the window
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.field.pointer.left();
    debug!("pointer left the window");
}

// Window resized: reconfigure and respawn every particle
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    let viewport = Viewport::new(size.x, size.y);
    if viewport == model.field.viewport() {
        return;
    }
    model.field.resize(viewport, &mut model.rng);
}

// Keyboard shortcuts, ignored while a text field has focus
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Escape => {
            debug!("escape pressed, cancelling frame loop");
            model.frame_loop.stop();
        }
        Key::H => {
            model.field.params.show_panel = !model.field.params.show_panel;
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
