//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::point_on_circle;

/// Push one quad as two triangles (corners in winding order)
fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, c, b, d] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let p1 = point_on_circle(center, radius, theta1);
        let p2 = point_on_circle(center, radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = point_on_circle(center, inner_radius, theta1);
        let outer1 = point_on_circle(center, outer_radius, theta1);
        let inner2 = point_on_circle(center, inner_radius, theta2);
        let outer2 = point_on_circle(center, outer_radius, theta2);

        quad(&mut vertices, [inner1, outer1, inner2, outer2], color);
    }

    vertices
}

/// Generate vertices for a line segment of the given thickness
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let half = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        [from + half, from - half, to + half, to - half],
        color,
    );
    vertices
}

/// Generate vertices for an axis-aligned rectangle from its top-left corner
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let bottom_right = top_left + size;

    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        [
            top_left,
            Vec2::new(top_left.x, bottom_right.y),
            Vec2::new(bottom_right.x, top_left.y),
            bottom_right,
        ],
        color,
    );
    vertices
}
