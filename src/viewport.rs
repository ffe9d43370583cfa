/*
 * Viewport Module
 *
 * This module defines the Viewport struct describing the drawing surface.
 * The particle field works in surface coordinates: origin at the top-left
 * corner, x to the right, y downward. nannou windows are centered with y
 * pointing up, so this module provides the conversions between the two.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Size of a nannou window rectangle
    pub fn from_rect(window_rect: Rect) -> Self {
        Self::new(window_rect.w(), window_rect.h())
    }

    // A hidden or minimized window can report an empty surface
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    // Convert a point from surface space to nannou window space
    pub fn to_window(&self, point: Vec2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Convert a point from nannou window space to surface space
    pub fn to_surface(&self, point: Point2) -> Vec2 {
        vec2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}
