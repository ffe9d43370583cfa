/*
 * Frame Loop Module
 *
 * Explicit run control for the animation. The loop is either stopped or
 * running; starting it hands out a cancellation token that any holder can
 * trip. The token is checked at the top of every frame, before the field is
 * advanced, so a cancelled loop never runs a partial frame.
 *
 * The windowed host drives frames from nannou's update callback. Headless
 * callers (tests, benchmarks) use run_frames with a fixed frame budget.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::field::ParticleField;
use crate::surface::Surface;

#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    token: CancellationToken,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
            token: CancellationToken::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    // Total frames advanced since the loop was created
    pub fn frames(&self) -> u64 {
        self.frames
    }

    // Start running with a fresh token, returning a handle to cancel it
    pub fn start(&mut self) -> CancellationToken {
        if self.state == LoopState::Stopped {
            self.token = CancellationToken::new();
            self.state = LoopState::Running;
            info!("frame loop started");
        }
        self.token.clone()
    }

    pub fn stop(&mut self) {
        self.token.cancel();
    }

    /// Called at the top of every frame. Returns true when the frame should
    /// advance; observes a pending cancellation and moves to `Stopped`.
    pub fn begin_frame(&mut self) -> bool {
        match self.state {
            LoopState::Stopped => false,
            LoopState::Running if self.token.is_cancelled() => {
                self.state = LoopState::Stopped;
                info!(frames = self.frames, "frame loop cancelled");
                false
            }
            LoopState::Running => {
                self.frames += 1;
                true
            }
        }
    }

    // Run at most `budget` ticks of the field, returning how many actually ran
    pub fn run_frames<S: Surface + ?Sized>(
        &mut self,
        field: &mut ParticleField,
        surface: &mut S,
        budget: usize,
    ) -> usize {
        let mut executed = 0;
        while executed < budget && self.begin_frame() {
            field.tick(surface);
            executed += 1;
        }
        debug!(executed, budget, "frame budget finished");
        executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FieldParams;
    use crate::particle::Particle;
    use crate::surface::RecordingSurface;
    use crate::viewport::Viewport;
    use nannou::prelude::*;

    fn drifting_field() -> ParticleField {
        ParticleField::with_particles(
            Viewport::new(800.0, 600.0),
            FieldParams::default(),
            vec![Particle::new(vec2(100.0, 100.0), vec2(0.1, 0.0), 2.0)],
        )
        .unwrap()
    }

    #[test]
    fn a_new_loop_is_stopped_and_runs_nothing() {
        let mut frame_loop = FrameLoop::new();
        let mut field = drifting_field();
        let mut surface = RecordingSurface::new();

        assert_eq!(frame_loop.state(), LoopState::Stopped);
        assert_eq!(frame_loop.run_frames(&mut field, &mut surface, 10), 0);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn running_loop_respects_the_frame_budget() {
        let mut frame_loop = FrameLoop::new();
        let mut field = drifting_field();
        let mut surface = RecordingSurface::new();

        frame_loop.start();
        assert_eq!(frame_loop.run_frames(&mut field, &mut surface, 25), 25);
        assert_eq!(frame_loop.state(), LoopState::Running);
        assert_eq!(frame_loop.frames(), 25);
        assert_eq!(surface.clear_count(), 25);
        assert!((field.particles[0].position.x - 102.5).abs() < 1e-3);
    }

    #[test]
    fn cancellation_is_observed_at_the_next_frame() {
        let mut frame_loop = FrameLoop::new();
        let mut field = drifting_field();
        let mut surface = RecordingSurface::new();

        let token = frame_loop.start();
        assert_eq!(frame_loop.run_frames(&mut field, &mut surface, 3), 3);

        token.cancel();
        let before = field.particles.clone();
        assert_eq!(frame_loop.run_frames(&mut field, &mut surface, 10), 0);
        assert_eq!(frame_loop.state(), LoopState::Stopped);
        assert_eq!(field.particles, before);
    }

    #[test]
    fn stop_cancels_and_start_resumes_with_a_fresh_token() {
        let mut frame_loop = FrameLoop::new();
        let first = frame_loop.start();
        frame_loop.stop();
        assert!(first.is_cancelled());
        assert!(!frame_loop.begin_frame());
        assert_eq!(frame_loop.state(), LoopState::Stopped);

        let second = frame_loop.start();
        assert!(!second.is_cancelled());
        assert!(frame_loop.begin_frame());
    }

    #[test]
    fn token_can_be_tripped_from_another_thread() {
        let mut frame_loop = FrameLoop::new();
        let token = frame_loop.start();
        std::thread::spawn(move || token.cancel()).join().unwrap();
        assert!(!frame_loop.begin_frame());
    }
}
