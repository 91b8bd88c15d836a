//! Scene assembly
//!
//! Builds the full triangle list for one frame from the game state, in
//! screen space (800x600, y down). Draw order is back to front.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes::{circle, line, rect, ring};
use super::vertex::{Vertex, colors};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Explosion, GameState, Player, ShieldPickup};
use crate::{point_on_circle, rgba_to_f32};

/// Segments for small circles (projectiles, particles)
const SMALL_SEGMENTS: u32 = 12;
/// Segments for large circles (player, pickup, explosion)
const LARGE_SEGMENTS: u32 = 32;
/// Corners of the rotating shield polygon
const SHIELD_PARTICLES: u32 = 16;
const SHIELD_PARTICLE_RADIUS: f32 = 2.5;
/// Shield polygon rotation speed (radians per second of play)
const SHIELD_SPIN: f32 = 1.5;
const LINE_THICKNESS: f32 = 1.0;
/// Bomb cooldown bar placement
const COOLDOWN_BAR_POS: Vec2 = Vec2::new(20.0, 40.0);
const COOLDOWN_BAR_SIZE: Vec2 = Vec2::new(100.0, 10.0);

/// Build every vertex for the current frame
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(
        state.projectiles.len() * SMALL_SEGMENTS as usize * 3 + 4096,
    );

    if state.shield_pickup.active {
        draw_pickup(&mut out, &state.shield_pickup);
    }

    for projectile in &state.projectiles {
        out.extend(circle(
            projectile.pos,
            projectile.radius,
            rgba_to_f32(projectile.color),
            SMALL_SEGMENTS,
        ));
    }

    if let Some(explosion) = state.explosion.as_ref().filter(|e| e.is_active()) {
        draw_explosion(&mut out, explosion);
    }

    if !state.is_game_over() {
        draw_player(&mut out, &state.player, state.elapsed);
    }

    draw_cooldown_bar(&mut out, &state.player);

    if state.is_game_over() {
        let alpha = (state.game_over_alpha * 200.0).clamp(0.0, 255.0) as u8;
        out.extend(rect(
            Vec2::ZERO,
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            rgba_to_f32([0, 0, 0, alpha]),
        ));
    }

    out
}

fn draw_pickup(out: &mut Vec<Vertex>, pickup: &ShieldPickup) {
    out.extend(circle(
        pickup.pos,
        pickup.radius + pickup.glow_size,
        rgba_to_f32(colors::PICKUP_GLOW),
        LARGE_SEGMENTS,
    ));
    out.extend(circle(
        pickup.pos,
        pickup.radius,
        rgba_to_f32(colors::PICKUP_BODY),
        LARGE_SEGMENTS,
    ));
    out.extend(circle(
        pickup.pos,
        pickup.radius * 0.6,
        rgba_to_f32(colors::PICKUP_CORE),
        LARGE_SEGMENTS,
    ));

    // Five-pointed spinning star
    let outer = pickup.radius * 0.8;
    let star = rgba_to_f32(colors::PICKUP_STAR);
    for i in 0..5 {
        let a = pickup.angle + i as f32 * PI * 0.4;
        out.extend(line(
            point_on_circle(pickup.pos, outer, a),
            point_on_circle(pickup.pos, outer * 0.5, a + 0.2),
            LINE_THICKNESS,
            star,
        ));
    }
}

fn draw_explosion(out: &mut Vec<Vertex>, explosion: &Explosion) {
    let color = explosion.color();
    out.extend(circle(
        explosion.center,
        explosion.radius,
        rgba_to_f32(color),
        LARGE_SEGMENTS,
    ));

    let wave = [color[0], color[1], color[2], color[3] / 2];
    out.extend(circle(
        explosion.center,
        explosion.radius * 0.8,
        rgba_to_f32(wave),
        LARGE_SEGMENTS,
    ));

    let core_alpha = (explosion.alpha.clamp(0.0, 1.0) * 255.0) as u8;
    out.extend(circle(
        explosion.center,
        explosion.radius * 0.3,
        rgba_to_f32([255, 255, 200, core_alpha]),
        LARGE_SEGMENTS,
    ));
}

/// Ring tint for the current shield charge
pub fn shield_color(charge: u8) -> Option<[u8; 4]> {
    match charge {
        0 => None,
        1 => Some(colors::SHIELD_LOW),
        2 => Some(colors::SHIELD_HALF),
        _ => Some(colors::SHIELD_FULL),
    }
}

fn draw_player(out: &mut Vec<Vertex>, player: &Player, elapsed: f32) {
    out.extend(circle(
        player.pos,
        player.radius,
        rgba_to_f32(colors::PLAYER),
        LARGE_SEGMENTS,
    ));

    let Some(tint) = shield_color(player.shield) else {
        return;
    };
    out.extend(ring(
        player.pos,
        player.radius - 2.0,
        player.radius,
        rgba_to_f32(tint),
        LARGE_SEGMENTS,
    ));

    let base = elapsed * SHIELD_SPIN;
    let distance = player.radius * 2.0;
    let step = 2.0 * PI / SHIELD_PARTICLES as f32;
    let corners: Vec<Vec2> = (0..SHIELD_PARTICLES)
        .map(|i| point_on_circle(player.pos, distance, base + i as f32 * step))
        .collect();

    let particle = rgba_to_f32(colors::SHIELD_PARTICLE);
    for &corner in &corners {
        out.extend(circle(corner, SHIELD_PARTICLE_RADIUS, particle, SMALL_SEGMENTS));
    }

    let edge = rgba_to_f32([tint[0], tint[1], tint[2], colors::SHIELD_EDGE_ALPHA]);
    for (i, &from) in corners.iter().enumerate() {
        let to = corners[(i + 1) % corners.len()];
        out.extend(line(from, to, LINE_THICKNESS, edge));
    }
}

fn draw_cooldown_bar(out: &mut Vec<Vertex>, player: &Player) {
    out.extend(rect(
        COOLDOWN_BAR_POS,
        COOLDOWN_BAR_SIZE,
        rgba_to_f32(colors::COOLDOWN_TRACK),
    ));

    let (fill, color) = if player.bomb_available {
        (1.0, colors::COOLDOWN_READY)
    } else {
        (player.bomb_charge(), colors::COOLDOWN_FILL)
    };
    out.extend(rect(
        COOLDOWN_BAR_POS,
        Vec2::new(COOLDOWN_BAR_SIZE.x * fill, COOLDOWN_BAR_SIZE.y),
        rgba_to_f32(color),
    ));
}
