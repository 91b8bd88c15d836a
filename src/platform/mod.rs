//! Platform abstraction layer
//!
//! Host-side timing shared by the browser and native entry points: real
//! frame time goes in, a number of fixed simulation steps comes out.

pub mod autopilot;

pub use autopilot::Autopilot;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Fixed-step accumulator with an FPS counter
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    /// Timestamp of the previous frame (ms), if any
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Register a frame at `time_ms` and return how many ticks to run.
    ///
    /// The first frame counts as one tick of time. Long stalls are clamped
    /// to `MAX_FRAME_DT` and at most `MAX_SUBSTEPS` ticks run per frame.
    pub fn frame(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time_ms);
        self.track_fps(time_ms);
        self.advance(dt)
    }

    /// Add `dt` seconds of real time and drain whole ticks
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Leftover time not yet simulated (seconds)
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Forget accumulated time (e.g. after the tab was hidden)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let span = time_ms - oldest;
            if span > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / span).round() as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(1000.0), 1);
    }

    #[test]
    fn test_partial_ticks_accumulate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(SIM_DT * 0.5), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
        assert!(clock.pending() < SIM_DT);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new();
        // A 5 second stall only counts as 0.1 s: about six ticks
        let ticks = clock.advance(5.0);
        assert!((5..=6).contains(&ticks));
        assert!(clock.pending() < SIM_DT);

        assert_eq!(clock.advance(-1.0), 0);
    }

    #[test]
    fn test_substeps_capped() {
        let mut clock = FrameClock::new();
        clock.accumulator = SIM_DT * 20.0;
        assert_eq!(clock.advance(0.0), MAX_SUBSTEPS);
        assert!(clock.pending() > 0.0);
    }

    #[test]
    fn test_reset_skips_hidden_time() {
        let mut clock = FrameClock::new();
        clock.frame(1000.0);
        clock.advance(SIM_DT * 0.9);
        clock.reset();
        assert_eq!(clock.pending(), 0.0);

        // Ten minutes later: counts as a fresh first frame, not a stall
        assert_eq!(clock.frame(601_000.0), 1);
        assert!(clock.pending() < SIM_DT);
        assert_eq!(clock.frame(601_000.0 + 1000.0 / 60.0), 1);
    }

    #[test]
    fn test_fps_from_steady_frames() {
        let mut clock = FrameClock::new();
        let frame_ms = 1000.0 / 60.0;
        for i in 1..=120 {
            clock.frame(i as f64 * frame_ms);
        }
        assert_eq!(clock.fps(), 60);
    }
}
