//! Scripted player for headless runs
//!
//! Produces `TickInput`s from the current state: drift away from nearby
//! projectiles, head for an active shield pickup, and fire the bomb when
//! crowded. Good enough to exercise a full session without a window.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GameState, TickInput};

/// Projectiles farther than this are ignored
const AWARENESS_RADIUS: f32 = 150.0;
/// Maximum pointer travel per tick
const MAX_STEP: f32 = 6.0;
/// Distance kept from the screen edges
const EDGE_MARGIN: f32 = 40.0;
/// Bomb when at least this many projectiles are inside the danger radius
const CROWD_THRESHOLD: usize = 4;
const DANGER_RADIUS: f32 = 60.0;
/// Pull of the shield pickup relative to projectile repulsion
const PICKUP_PULL: f32 = 0.02;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Restart automatically after a game over
    pub auto_restart: bool,
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self { auto_restart }
    }

    /// Decide the input for the next tick
    pub fn input(&self, state: &GameState) -> TickInput {
        if state.is_game_over() {
            return TickInput {
                restart: self.auto_restart,
                ..Default::default()
            };
        }

        let pos = state.player.pos;
        let mut push = Vec2::ZERO;
        let mut crowd = 0;

        for projectile in &state.projectiles {
            // Look one tick ahead
            let ahead = projectile.pos + projectile.vel;
            let away = pos - ahead;
            let dist = away.length();
            if dist >= AWARENESS_RADIUS {
                continue;
            }
            if dist < DANGER_RADIUS {
                crowd += 1;
            }
            push += away.normalize_or_zero() / dist.max(1.0);
        }

        if state.shield_pickup.active && !state.player.has_shield() {
            push += (state.shield_pickup.pos - pos).normalize_or_zero() * PICKUP_PULL;
        }

        // Steer back toward the middle when hugging an edge
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        push += (center - pos) * 1e-5;

        let step = push.normalize_or_zero() * MAX_STEP;
        let target = (pos + step).clamp(
            Vec2::splat(EDGE_MARGIN),
            Vec2::new(SCREEN_WIDTH - EDGE_MARGIN, SCREEN_HEIGHT - EDGE_MARGIN),
        );

        TickInput {
            pointer: Some(target),
            restart: false,
            bomb: crowd >= CROWD_THRESHOLD && state.player.bomb_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Projectile};
    use crate::tuning::Tuning;

    fn quiet_state() -> GameState {
        let tuning = Tuning {
            initial_projectiles: 0,
            ..Tuning::default()
        };
        GameState::with_tuning(tuning, 11)
    }

    fn projectile_at(pos: Vec2) -> Projectile {
        Projectile {
            pos,
            vel: Vec2::ZERO,
            radius: 8.0,
            color: [255; 4],
        }
    }

    #[test]
    fn test_moves_away_from_threat() {
        let mut state = quiet_state();
        state.projectiles.push(projectile_at(Vec2::new(430.0, 300.0)));

        let input = Autopilot::default().input(&state);
        let target = input.pointer.unwrap();
        assert!(target.x < 400.0);
        assert!(!input.bomb);
    }

    #[test]
    fn test_bombs_when_crowded() {
        let mut state = quiet_state();
        for offset in [
            Vec2::new(30.0, 0.0),
            Vec2::new(-30.0, 0.0),
            Vec2::new(0.0, 30.0),
            Vec2::new(0.0, -30.0),
        ] {
            state.projectiles.push(projectile_at(state.player.pos + offset));
        }
        assert!(Autopilot::default().input(&state).bomb);

        state.player.use_bomb();
        assert!(!Autopilot::default().input(&state).bomb);
    }

    #[test]
    fn test_stays_on_screen() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(5.0, 5.0);
        state.projectiles.push(projectile_at(Vec2::new(40.0, 40.0)));

        let target = Autopilot::default().input(&state).pointer.unwrap();
        assert!(target.x >= EDGE_MARGIN && target.y >= EDGE_MARGIN);
    }

    #[test]
    fn test_restart_only_when_enabled() {
        let mut state = quiet_state();
        state.phase = GamePhase::GameOver;
        assert!(!Autopilot::new(false).input(&state).restart);
        assert!(Autopilot::new(true).input(&state).restart);
    }
}
