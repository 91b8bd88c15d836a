//! Fixed timestep simulation tick
//!
//! Core game loop that advances one session deterministically.

use glam::Vec2;
use rand::Rng;

use super::collision::{circles_overlap, is_out_of_bounds, within_radius};
use super::difficulty::{update_difficulty, update_spawning};
use super::spawn::spawn_shield_pickup;
use super::state::{
    Explosion, GAME_OVER_SCALE_MAX, GAME_OVER_SCALE_STEP, GameEvent, GamePhase, GameState,
    OVERLAY_ALPHA_MAX, OVERLAY_ALPHA_STEP, RANKING_REVEAL_STEP, ScoreAnimation,
};
use crate::consts::*;
use crate::tuning::MAX_SHIELD_CHARGE;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in screen space (None keeps the player where it is)
    pub pointer: Option<Vec2>,
    /// Restart edge (Space)
    pub restart: bool,
    /// Bomb trigger edge (X)
    pub bomb: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        update_game_over(state);
        if input.restart {
            log::info!("Restarting (best {:?})", state.ledger.best());
            state.restart();
        }
        return;
    }

    if let Some(pointer) = input.pointer {
        state.player.pos = pointer;
    }

    state.time_ticks += 1;
    state.play_time += f64::from(dt);
    state.elapsed = state.play_time as f32;

    state.player.update_bomb_cooldown(dt);
    if input.bomb {
        detonate_bomb(state);
    }
    update_explosion(state, dt);

    update_difficulty(state);
    update_spawning(state);

    update_shield_pickup(state);
    update_score_animations(state, dt);

    update_projectiles(state);
}

/// Ease the game-over overlay in; nothing else moves
fn update_game_over(state: &mut GameState) {
    state.game_over_alpha = (state.game_over_alpha + OVERLAY_ALPHA_STEP).min(OVERLAY_ALPHA_MAX);
    state.game_over_scale = (state.game_over_scale + GAME_OVER_SCALE_STEP).min(GAME_OVER_SCALE_MAX);
    state.ranking_reveal = (state.ranking_reveal + RANKING_REVEAL_STEP).min(1.0);
}

/// Fire the bomb if it is ready, clearing every projectile strictly inside
/// its radius. Returns the number of projectiles cleared, or None if the
/// bomb was still cooling down.
pub fn detonate_bomb(state: &mut GameState) -> Option<usize> {
    if !state.player.use_bomb() {
        return None;
    }

    let center = state.player.pos;
    let radius = state.player.bomb_radius;
    state.explosion = Some(Explosion::new(center, radius, state.tuning.explosion_duration));

    let before = state.projectiles.len();
    state.projectiles.retain(|p| !within_radius(center, p.pos, radius));
    let cleared = before - state.projectiles.len();

    state.events.push(GameEvent::BombDetonated { cleared });
    log::info!("Bomb cleared {} projectiles", cleared);
    Some(cleared)
}

fn update_explosion(state: &mut GameState, dt: f32) {
    state.explosion = state.explosion.take().and_then(|mut explosion| {
        explosion.update(dt);
        explosion.is_active().then_some(explosion)
    });
}

/// Random spawn, animation and pickup of the shield item
fn update_shield_pickup(state: &mut GameState) {
    if !state.shield_pickup.active && state.rng.random::<f32>() < state.tuning.shield_spawn_chance {
        spawn_shield_pickup(&mut state.rng, &mut state.shield_pickup);
    }

    state.shield_pickup.animate();

    let pickup = &state.shield_pickup;
    let player = &state.player;
    if pickup.active && circles_overlap(player.pos, player.radius, pickup.pos, pickup.radius) {
        state.player.shield = state.tuning.shield_durability.min(MAX_SHIELD_CHARGE);
        state.shield_pickup.deactivate();
        state.events.push(GameEvent::ShieldCollected {
            charge: state.player.shield,
        });
        log::info!("Shield collected: {} charges", state.player.shield);
    }
}

fn update_score_animations(state: &mut GameState, dt: f32) {
    for anim in &mut state.score_animations {
        anim.update(dt);
    }
    state.score_animations.retain(|a| a.is_active());
}

/// Move every projectile, cull the ones far off screen and resolve hits on
/// the player.
///
/// A hit with shield charge left consumes one charge and the projectile. An
/// unshielded hit ends the run on the spot: the projectile list is left as
/// it was before this tick, so the last frame shows the moment of death.
/// Returns true if the player died.
pub fn update_projectiles(state: &mut GameState) -> bool {
    let margin = state.tuning.cull_margin;
    let player = &mut state.player;
    let mut survivors = Vec::with_capacity(state.projectiles.len());
    let mut died = false;

    for &projectile in &state.projectiles {
        let mut p = projectile;
        p.advance();

        if is_out_of_bounds(p.pos, SCREEN_WIDTH, SCREEN_HEIGHT, margin) {
            continue;
        }

        if circles_overlap(player.pos, player.radius, p.pos, p.radius) {
            if player.has_shield() {
                player.reduce_shield();
                state.events.push(GameEvent::ShieldAbsorbed {
                    remaining: player.shield,
                });
                log::debug!("Shield absorbed a hit, {} left", player.shield);
                continue;
            }
            died = true;
            break;
        }

        survivors.push(p);
    }

    if died {
        end_run(state);
    } else {
        state.projectiles = survivors;
    }
    died
}

/// Switch to game over and bank the survival time
fn end_run(state: &mut GameState) {
    let survival = state.elapsed;
    state.phase = GamePhase::GameOver;

    let rank = state.ledger.record(survival);
    state.score_animations.push(ScoreAnimation::new(
        survival,
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 3.0),
    ));

    state.events.push(GameEvent::GameOver { survival, rank });
    log::info!("Game over after {:.2}s (rank {:?})", survival, rank);
}
