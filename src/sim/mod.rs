//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, is_out_of_bounds, within_radius};
pub use difficulty::{update_difficulty, update_spawning};
pub use spawn::{Edge, spawn_projectile, spawn_shield_pickup};
pub use state::{
    Explosion, GameEvent, GamePhase, GameState, Player, Projectile, ScoreAnimation, ShieldPickup,
};
pub use tick::{TickInput, detonate_bomb, tick, update_projectiles};
