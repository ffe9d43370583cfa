/*
 * Pointer Module
 *
 * Tracks the last known pointer position in surface coordinates together with
 * the radius inside which particles are pushed away. The record is written by
 * window events and only read by the simulation step.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl PointerState {
    pub fn new(radius: f32) -> Self {
        Self { position: None, radius }
    }

    pub fn moved(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    // Pointer left the surface
    pub fn left(&mut self) {
        self.position = None;
    }

    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }

    /// Displacement to subtract from a particle at `particle` so it moves away
    /// from the pointer.
    ///
    /// The magnitude falls off linearly from `force` at the pointer to zero at
    /// the edge of the interaction radius. A particle sitting exactly on the
    /// pointer has no defined direction and is left in place.
    pub fn repulsion(&self, particle: Vec2, force: f32) -> Vec2 {
        let Some(pointer) = self.position else {
            return Vec2::ZERO;
        };

        let offset = pointer - particle;
        let distance = offset.length();
        if distance >= self.radius {
            return Vec2::ZERO;
        }

        let falloff = (self.radius - distance) / self.radius;
        offset.normalize_or_zero() * falloff * force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_pointer_never_repels() {
        let pointer = PointerState::new(100.0);
        assert_eq!(pointer.repulsion(vec2(0.0, 0.0), 2.0), Vec2::ZERO);
    }

    #[test]
    fn leave_clears_the_position() {
        let mut pointer = PointerState::new(100.0);
        pointer.moved(vec2(10.0, 20.0));
        assert!(pointer.is_present());
        pointer.left();
        assert!(!pointer.is_present());
        assert_eq!(pointer.radius, 100.0);
    }

    #[test]
    fn repulsion_points_at_the_pointer_with_linear_falloff() {
        let mut pointer = PointerState::new(100.0);
        pointer.moved(vec2(150.0, 100.0));

        // Particle 50 units left of the pointer: half strength, along +x
        let push = pointer.repulsion(vec2(100.0, 100.0), 2.0);
        assert!((push.x - 1.0).abs() < 1e-6);
        assert!(push.y.abs() < 1e-6);

        // Subtracting it moves the particle further left, away from the pointer
        assert!(vec2(100.0, 100.0).x - push.x < 100.0);
    }

    #[test]
    fn no_repulsion_at_or_beyond_the_radius() {
        let mut pointer = PointerState::new(100.0);
        pointer.moved(vec2(0.0, 0.0));
        assert_eq!(pointer.repulsion(vec2(100.0, 0.0), 2.0), Vec2::ZERO);
        assert_eq!(pointer.repulsion(vec2(0.0, 150.0), 2.0), Vec2::ZERO);
    }

    #[test]
    fn zero_distance_does_not_produce_nan() {
        let mut pointer = PointerState::new(100.0);
        pointer.moved(vec2(42.0, 42.0));
        let push = pointer.repulsion(vec2(42.0, 42.0), 2.0);
        assert!(push.is_finite());
        assert_eq!(push, Vec2::ZERO);
    }
}
