//! Random spawning of projectiles and the shield pickup
//!
//! All randomness comes from the caller's RNG so a seeded session replays
//! identically.

use glam::Vec2;
use rand::Rng;

use super::state::{Projectile, ShieldPickup};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// Screen edge a projectile enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Lowest value of a random color channel (keeps projectiles visible)
const COLOR_CHANNEL_MIN: u8 = 55;

/// Create a projectile just outside a random screen edge, heading inward.
///
/// The inward speed is drawn from the tuning's speed range scaled by the
/// difficulty level; the sideways drift can reach the scaled maximum in
/// either direction.
pub fn spawn_projectile<R: Rng>(rng: &mut R, tuning: &Tuning, level: u32) -> Projectile {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];

    let multiplier = tuning.speed_multiplier(level);
    let min_speed = tuning.projectile_speed_min * multiplier;
    let max_speed = tuning.projectile_speed_max * multiplier;
    let r = tuning.projectile_radius;

    // Drawn in a fixed order so the RNG stream doesn't depend on the edge
    let along = rng.random::<f32>();
    let inward = min_speed + rng.random::<f32>() * (max_speed - min_speed);
    let drift = (rng.random::<f32>() * 2.0 - 1.0) * max_speed;

    let (pos, vel) = match edge {
        Edge::Top => (
            Vec2::new(along * SCREEN_WIDTH, -r),
            Vec2::new(drift, inward),
        ),
        Edge::Right => (
            Vec2::new(SCREEN_WIDTH + r, along * SCREEN_HEIGHT),
            Vec2::new(-inward, drift),
        ),
        Edge::Bottom => (
            Vec2::new(along * SCREEN_WIDTH, SCREEN_HEIGHT + r),
            Vec2::new(drift, -inward),
        ),
        Edge::Left => (
            Vec2::new(-r, along * SCREEN_HEIGHT),
            Vec2::new(inward, drift),
        ),
    };

    let mut channel = || rng.random_range(COLOR_CHANNEL_MIN..u8::MAX);
    let color = [channel(), channel(), channel(), u8::MAX];

    Projectile {
        pos,
        vel,
        radius: r,
        color,
    }
}

/// Place the pickup somewhere fully on screen and activate it
pub fn spawn_shield_pickup<R: Rng>(rng: &mut R, pickup: &mut ShieldPickup) {
    let r = pickup.radius;
    pickup.pos = Vec2::new(
        r + rng.random::<f32>() * (SCREEN_WIDTH - 2.0 * r),
        r + rng.random::<f32>() * (SCREEN_HEIGHT - 2.0 * r),
    );
    pickup.active = true;
}
