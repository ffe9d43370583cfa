/*
 * Particle Field Module
 *
 * This module defines the ParticleField struct, the owner of the particle set,
 * the viewport, the tunables and the pointer record. It scales the particle
 * count and size with the viewport width, advances every particle once per
 * frame and renders discs plus connective lines between close pairs.
 *
 * The link pass compares every unordered pair, which is fine for the at most
 * 170 particles the breakpoint table produces.
 */

use rand::Rng;
use tracing::{debug, info, warn};

use crate::params::{configure, FieldParams, FieldScale, ParamsError};
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::Surface;
use crate::viewport::Viewport;

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    pub pointer: PointerState,
    viewport: Viewport,
    scale: FieldScale,
}

impl ParticleField {
    // Create an empty field sized for the viewport; call reset to populate it.
    // The params are validated here so reset and step can rely on them.
    pub fn new(viewport: Viewport, params: FieldParams) -> Result<Self, ParamsError> {
        params.validate()?;
        let pointer = PointerState::new(params.pointer_radius);
        Ok(Self {
            particles: Vec::new(),
            params,
            pointer,
            viewport,
            scale: configure(viewport.width),
        })
    }

    // Build a field around a preset particle set, bypassing random placement
    pub fn with_particles(
        viewport: Viewport,
        params: FieldParams,
        particles: Vec<Particle>,
    ) -> Result<Self, ParamsError> {
        let mut field = Self::new(viewport, params)?;
        field.particles = particles;
        Ok(field)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scale(&self) -> FieldScale {
        self.scale
    }

    // Discard every particle and spawn a fresh set for the current viewport
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.viewport.is_degenerate() {
            warn!(
                width = self.viewport.width,
                height = self.viewport.height,
                "placing particles on an empty viewport"
            );
        }

        self.scale = configure(self.viewport.width);
        let FieldScale { particle_count, size_multiplier } = self.scale;

        self.particles.clear();
        self.particles.reserve(particle_count);
        for _ in 0..particle_count {
            let particle = Particle::spawn(rng, self.viewport, &self.params, size_multiplier);
            self.particles.push(particle);
        }

        info!(
            particles = particle_count,
            size_multiplier,
            width = self.viewport.width,
            height = self.viewport.height,
            "particle field reset"
        );
    }

    // Adopt a new viewport size and restart the field from scratch
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        self.reset(rng);
    }

    // Advance every particle by one frame
    pub fn step(&mut self) {
        // Keep the pointer record in sync with the tunable
        self.pointer.radius = self.params.pointer_radius;

        let viewport = self.viewport;
        let force = self.params.pointer_force;
        for particle in &mut self.particles {
            particle.update(viewport, &self.pointer, force);
        }
    }

    // Clear the surface and draw every particle and every connective line.
    // Returns the number of lines drawn.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        surface.clear(self.viewport);

        let mut links = 0;
        for (i, particle) in self.particles.iter().enumerate() {
            particle.draw(surface);

            for other in &self.particles[i + 1..] {
                if let Some(opacity) = self.params.link_opacity(particle.distance(other)) {
                    surface.stroke_line(particle.position, other.position, opacity);
                    links += 1;
                }
            }
        }

        links
    }

    // One full frame: advance, then redraw
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }
}
