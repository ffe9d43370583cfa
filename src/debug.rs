/*
 * Debug Information Module
 *
 * This module defines the FrameStats struct holding the performance metrics
 * shown in the control panel:
 * - FPS (frames per second)
 * - Frame time
 * - Number of particles
 * - Connective lines drawn in the last frame
 */

use std::cell::Cell;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_time: Duration,
    pub particles: usize,
    // Written from the view callback, which only gets a shared reference
    pub links_drawn: Cell<usize>,
}

impl FrameStats {
    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}
