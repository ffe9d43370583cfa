/*
 * Surface Module
 *
 * This module defines the drawing primitives the particle field needs:
 * clearing the surface, filling a disc and stroking a line with opacity.
 * All coordinates are surface coordinates (top-left origin, y down).
 *
 * Two implementations are provided:
 * - DrawSurface renders through a nannou Draw into a window
 * - RecordingSurface keeps the commands for tests and benchmarks
 */

use nannou::prelude::*;

use crate::viewport::Viewport;

pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32);
}

pub const BACKGROUND_COLOR: Srgb<u8> = WHITE;
pub const LINE_WEIGHT: f32 = 1.0;

// Renders onto a nannou Draw, converting to window coordinates
pub struct DrawSurface<'a> {
    draw: &'a Draw,
    viewport: Viewport,
}

impl<'a> DrawSurface<'a> {
    pub fn new(draw: &'a Draw, viewport: Viewport) -> Self {
        Self { draw, viewport }
    }
}

impl Surface for DrawSurface<'_> {
    fn clear(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.draw.background().color(BACKGROUND_COLOR);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.draw
            .ellipse()
            .xy(self.viewport.to_window(center))
            .radius(radius)
            .color(BLACK);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        self.draw
            .line()
            .start(self.viewport.to_window(from))
            .end(self.viewport.to_window(to))
            .weight(LINE_WEIGHT)
            .color(rgba(0.0, 0.0, 0.0, opacity));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { viewport: Viewport },
    Disc { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2, opacity: f32 },
}

// Keeps every draw call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Line { from, to, opacity } => Some((from, to, opacity)),
            _ => None,
        })
    }

    pub fn discs(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Disc { center, radius } => Some((center, radius)),
            _ => None,
        })
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Clear { .. }))
            .count()
    }

    // Forget the recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.commands.push(DrawCommand::Clear { viewport });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Disc { center, radius });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        self.commands.push(DrawCommand::Line { from, to, opacity });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_order_and_filters_by_kind() {
        let mut surface = RecordingSurface::new();
        surface.clear(Viewport::new(10.0, 10.0));
        surface.fill_circle(vec2(1.0, 2.0), 3.0);
        surface.stroke_line(vec2(0.0, 0.0), vec2(5.0, 5.0), 0.5);

        assert_eq!(surface.commands.len(), 3);
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.discs().collect::<Vec<_>>(), vec![(vec2(1.0, 2.0), 3.0)]);
        assert_eq!(surface.lines().count(), 1);

        surface.reset();
        assert!(surface.commands.is_empty());
    }
}
