/*
 * Particle Module
 *
 * This module defines the Particle struct and its behavior.
 * Each particle:
 * 1. Drifts with a constant, slow velocity
 * 2. Bounces off the surface edges by inverting its velocity
 * 3. Gets pushed away when the pointer comes close
 *
 * Placement sampling is kept separate from construction so the edge-bias
 * policy can be exercised on its own.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;
use crate::pointer::PointerState;
use crate::surface::Surface;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

// Which edge of an axis a biased coordinate is pulled towards
fn edge_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f32, band: f32) -> f32 {
    // Clamp so a narrow surface never places particles outside itself
    let band = band.min(extent).max(0.0);
    if rng.gen_bool(0.5) {
        rng.gen::<f32>() * band
    } else {
        extent - rng.gen::<f32>() * band
    }
}

/// Sample a starting position for a particle.
///
/// The position is uniform over the viewport, except that with probability
/// `edge_bias_probability` one axis (picked evenly) is redrawn from the band
/// of width `edge_band` next to one of that axis' two edges.
pub fn sample_placement<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, params: &FieldParams) -> Vec2 {
    let width = viewport.width.max(0.0);
    let height = viewport.height.max(0.0);

    let mut position = vec2(rng.gen::<f32>() * width, rng.gen::<f32>() * height);

    if rng.gen_bool(params.edge_bias_probability as f64) {
        if rng.gen_bool(0.5) {
            position.x = edge_coordinate(rng, width, params.edge_band);
        } else {
            position.y = edge_coordinate(rng, height, params.edge_band);
        }
    }

    position
}

// Draw a drift velocity: each component uniform in [-1, 1), then damped
pub fn sample_velocity<R: Rng + ?Sized>(rng: &mut R, damping: f32) -> Vec2 {
    let vx = rng.gen_range(-1.0..1.0);
    let vy = rng.gen_range(-1.0..1.0);
    vec2(vx, vy) * damping
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self { position, velocity, radius }
    }

    // Create a particle with random placement, size and drift
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: Viewport,
        params: &FieldParams,
        size_multiplier: f32,
    ) -> Self {
        let position = sample_placement(rng, viewport, params);
        let radius = rng.gen_range(params.size_range.clone()) * size_multiplier;
        let velocity = sample_velocity(rng, params.velocity_damping);
        Self::new(position, velocity, radius)
    }

    // Advance the particle by one frame
    pub fn update(&mut self, viewport: Viewport, pointer: &PointerState, pointer_force: f32) {
        self.position += self.velocity;

        // Reflect off the edges; the overshoot is corrected by the next steps
        if self.position.x < 0.0 || self.position.x > viewport.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > viewport.height {
            self.velocity.y = -self.velocity.y;
        }

        self.position -= pointer.repulsion(self.position, pointer_force);
    }

    pub fn distance(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }

    // Draw the particle as a filled disc
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.radius);
    }
}
