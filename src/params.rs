/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct holding every tunable of the
 * particle field: edge-bias placement, connective link distance, pointer
 * interaction and drift damping. The defaults reproduce the classic look of
 * the background; all of them can be overridden from the command line or the
 * control panel. It also provides the viewport breakpoint table and the
 * snapshot-based change detection used by the UI.
 */

use std::ops::{Range, RangeInclusive};
use thiserror::Error;

// Errors raised when a set of tunables cannot drive a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },

    #[error("{name} must be greater than zero, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("particle size range {start}..{end} is empty")]
    EmptySizeRange { start: f32, end: f32 },
}

/// Particle count and size multiplier chosen for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScale {
    pub particle_count: usize,
    pub size_multiplier: f32,
}

// Breakpoints ordered from the widest viewport down. Lower bounds are inclusive.
const BREAKPOINTS: [(f32, FieldScale); 3] = [
    (2500.0, FieldScale { particle_count: 170, size_multiplier: 1.5 }),
    (1920.0, FieldScale { particle_count: 100, size_multiplier: 1.2 }),
    (1280.0, FieldScale { particle_count: 80, size_multiplier: 1.0 }),
];

const NARROW_SCALE: FieldScale = FieldScale { particle_count: 60, size_multiplier: 0.8 };

/// Map a viewport width to its particle count and size multiplier.
///
/// Total over every `f32`: anything below the smallest breakpoint, including
/// negative widths and NaN, gets the narrow-screen settings.
pub fn configure(viewport_width: f32) -> FieldScale {
    BREAKPOINTS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map(|(_, scale)| *scale)
        .unwrap_or(NARROW_SCALE)
}

// Tunables for placement, motion and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct FieldParams {
    // Probability that a new particle is pulled into an edge band
    pub edge_bias_probability: f32,
    // Width of the band along each edge, in surface units
    pub edge_band: f32,
    // Pairs closer than this are joined by a line
    pub link_distance: f32,
    pub link_opacity_floor: f32,
    pub pointer_radius: f32,
    pub pointer_force: f32,
    // Scales the U[-1, 1) velocity draw into a slow drift
    pub velocity_damping: f32,
    // Base radius range before the viewport size multiplier
    pub size_range: Range<f32>,
    pub pause_simulation: bool,
    pub show_panel: bool,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSnapshot {
    edge_bias_probability: f32,
    edge_band: f32,
    link_distance: f32,
    pointer_radius: f32,
    pointer_force: f32,
    pause_simulation: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            edge_bias_probability: 0.7,
            edge_band: 100.0,
            link_distance: 200.0,
            link_opacity_floor: 0.1,
            pointer_radius: 100.0,
            pointer_force: 2.0,
            velocity_damping: 0.2,
            size_range: 1.0..6.0,
            pause_simulation: false,
            show_panel: true,
        }
    }
}

impl FieldParams {
    // Reject tunables that would break placement sampling or produce NaN positions
    pub fn validate(&self) -> Result<(), ParamsError> {
        let Range { start, end } = self.size_range;
        for (name, value) in [
            ("edge band", self.edge_band),
            ("link distance", self.link_distance),
            ("pointer radius", self.pointer_radius),
            ("pointer force", self.pointer_force),
            ("velocity damping", self.velocity_damping),
            ("minimum particle size", start),
            ("maximum particle size", end),
        ] {
            if value.is_infinite() {
                return Err(ParamsError::NonFinite { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.edge_bias_probability) {
            return Err(ParamsError::InvalidProbability {
                name: "edge bias probability",
                value: self.edge_bias_probability,
            });
        }
        if !(0.0..=1.0).contains(&self.link_opacity_floor) {
            return Err(ParamsError::InvalidProbability {
                name: "link opacity floor",
                value: self.link_opacity_floor,
            });
        }

        for (name, value) in [
            ("edge band", self.edge_band),
            ("link distance", self.link_distance),
            ("pointer radius", self.pointer_radius),
        ] {
            if !(value > 0.0) {
                return Err(ParamsError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("pointer force", self.pointer_force),
            ("velocity damping", self.velocity_damping),
        ] {
            if !(value >= 0.0) {
                return Err(ParamsError::Negative { name, value });
            }
        }

        if !(start < end) {
            return Err(ParamsError::EmptySizeRange { start, end });
        }
        if !(start > 0.0) {
            return Err(ParamsError::NonPositive { name: "minimum particle size", value: start });
        }

        Ok(())
    }

    // Opacity of a connective line between two particles `distance` apart,
    // or None when they are too far apart to be linked
    pub fn link_opacity(&self, distance: f32) -> Option<f32> {
        if distance < self.link_distance {
            Some(f32::max(self.link_opacity_floor, 1.0 - distance / self.link_distance))
        } else {
            None
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_probability_range() -> RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_edge_band_range() -> RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn get_link_distance_range() -> RangeInclusive<f32> {
        20.0..=500.0
    }

    pub fn get_pointer_radius_range() -> RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn get_pointer_force_range() -> RangeInclusive<f32> {
        0.0..=10.0
    }
}

impl ParamSnapshot {
    // Take a snapshot of current parameter values for change detection
    pub fn of(params: &FieldParams) -> Self {
        Self {
            edge_bias_probability: params.edge_bias_probability,
            edge_band: params.edge_band,
            link_distance: params.link_distance,
            pointer_radius: params.pointer_radius,
            pointer_force: params.pointer_force,
            pause_simulation: params.pause_simulation,
        }
    }

    // Check whether any parameter changed since this snapshot.
    // Returns (placement_changed, any_changed).
    pub fn detect_changes(&self, params: &FieldParams) -> (bool, bool) {
        let placement_changed = self.edge_bias_probability != params.edge_bias_probability
            || self.edge_band != params.edge_band;

        (placement_changed, *self != Self::of(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_on_the_lower_bound() {
        assert_eq!(configure(2500.0), FieldScale { particle_count: 170, size_multiplier: 1.5 });
        assert_eq!(configure(2499.0), FieldScale { particle_count: 100, size_multiplier: 1.2 });
        assert_eq!(configure(1920.0), FieldScale { particle_count: 100, size_multiplier: 1.2 });
        assert_eq!(configure(1919.0), FieldScale { particle_count: 80, size_multiplier: 1.0 });
        assert_eq!(configure(1280.0), FieldScale { particle_count: 80, size_multiplier: 1.0 });
        assert_eq!(configure(1279.9), FieldScale { particle_count: 60, size_multiplier: 0.8 });
    }

    #[test]
    fn configure_is_total() {
        let allowed = [170, 100, 80, 60];
        for width in [f32::NEG_INFINITY, -10.0, 0.0, 640.0, 1e9, f32::INFINITY, f32::NAN] {
            let scale = configure(width);
            assert!(allowed.contains(&scale.particle_count), "width {width}");
        }
        assert_eq!(configure(f32::NAN).particle_count, 60);
        assert_eq!(configure(f32::INFINITY).particle_count, 170);
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(FieldParams::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_tunables() {
        let params = FieldParams { edge_bias_probability: 1.5, ..FieldParams::default() };
        assert!(matches!(params.validate(), Err(ParamsError::InvalidProbability { .. })));

        let params = FieldParams { link_distance: 0.0, ..FieldParams::default() };
        assert!(matches!(params.validate(), Err(ParamsError::NonPositive { name: "link distance", .. })));

        let params = FieldParams { pointer_radius: f32::NAN, ..FieldParams::default() };
        assert!(params.validate().is_err());

        let params = FieldParams { pointer_force: -1.0, ..FieldParams::default() };
        assert!(matches!(params.validate(), Err(ParamsError::Negative { .. })));

        let params = FieldParams { size_range: 3.0..3.0, ..FieldParams::default() };
        assert!(matches!(params.validate(), Err(ParamsError::EmptySizeRange { .. })));

        let params = FieldParams { size_range: 0.0..3.0, ..FieldParams::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn validate_rejects_infinite_tunables() {
        for params in [
            FieldParams { pointer_radius: f32::INFINITY, ..FieldParams::default() },
            FieldParams { link_distance: f32::INFINITY, ..FieldParams::default() },
            FieldParams { edge_band: f32::INFINITY, ..FieldParams::default() },
            FieldParams { pointer_force: f32::INFINITY, ..FieldParams::default() },
            FieldParams { velocity_damping: f32::INFINITY, ..FieldParams::default() },
            FieldParams { size_range: 1.0..f32::INFINITY, ..FieldParams::default() },
        ] {
            assert!(
                matches!(params.validate(), Err(ParamsError::NonFinite { .. })),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn link_opacity_falls_off_linearly_to_the_floor() {
        let params = FieldParams::default();
        assert_eq!(params.link_opacity(0.0), Some(1.0));
        assert!((params.link_opacity(100.0).unwrap() - 0.5).abs() < 1e-6);
        assert!((params.link_opacity(199.999).unwrap() - 0.1).abs() < 1e-4);
        assert_eq!(params.link_opacity(200.0), None);
        assert_eq!(params.link_opacity(250.0), None);
    }

    #[test]
    fn change_detection_separates_placement_from_motion() {
        let mut params = FieldParams::default();
        let snapshot = ParamSnapshot::of(&params);
        assert_eq!(snapshot.detect_changes(&params), (false, false));

        params.pointer_radius = 150.0;
        assert_eq!(snapshot.detect_changes(&params), (false, true));

        let snapshot = ParamSnapshot::of(&params);
        params.edge_band = 50.0;
        assert_eq!(snapshot.detect_changes(&params), (true, true));
    }
}
