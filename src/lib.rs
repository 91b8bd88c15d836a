//! Bullet Dodge - survive a growing swarm of projectiles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, difficulty, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Text overlay model (status line, game over, rankings)
//! - `platform`: Fixed-step frame clock and headless autopilot for the hosts
//! - `audio`: Sound effects picked from simulation events
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod highscores;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{GameError, TuningError};
pub use highscores::ScoreLedger;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Logical resolution
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    pub const WINDOW_TITLE: &str = "Bullet Dodge";

    /// Where the shield pickup waits while inactive
    pub const PICKUP_PARKED_POS: (f32, f32) = (-100.0, -100.0);
}

/// Point on a circle of `radius` around `center` at angle `theta`
#[inline]
pub fn point_on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Convert an 8-bit RGBA color into normalized floats
#[inline]
pub fn rgba_to_f32(color: [u8; 4]) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    ]
}
