//! Circle geometry for hit-testing
//!
//! Everything in the game is a circle, so collisions reduce to comparing
//! squared distances against squared radii.

use glam::Vec2;

/// Whether two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

/// Whether `point` lies strictly inside `radius` of `center`
#[inline]
pub fn within_radius(center: Vec2, point: Vec2, radius: f32) -> bool {
    center.distance_squared(point) < radius * radius
}

/// Whether `pos` has left the `width` x `height` screen by more than `margin`
#[inline]
pub fn is_out_of_bounds(pos: Vec2, width: f32, height: f32, margin: f32) -> bool {
    pos.x < -margin || pos.x > width + margin || pos.y < -margin || pos.y > height + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_overlap() {
        let player = Vec2::new(400.0, 300.0);
        assert!(circles_overlap(player, 10.0, Vec2::new(405.0, 300.0), 8.0));
        assert!(circles_overlap(player, 10.0, Vec2::new(417.9, 300.0), 8.0));
        // Exactly touching is a miss
        assert!(!circles_overlap(player, 10.0, Vec2::new(418.0, 300.0), 8.0));
        assert!(!circles_overlap(player, 10.0, Vec2::new(430.0, 330.0), 8.0));
    }

    #[test]
    fn test_within_radius_is_strict() {
        let center = Vec2::new(400.0, 300.0);
        assert!(!within_radius(center, Vec2::new(550.0, 300.0), 150.0));
        assert!(within_radius(center, Vec2::new(549.999, 300.0), 150.0));
        assert!(!within_radius(center, Vec2::new(400.0, 450.0), 150.0));
        assert!(within_radius(center, center, 150.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let (w, h, m) = (800.0, 600.0, 100.0);
        assert!(!is_out_of_bounds(Vec2::new(-8.0, 300.0), w, h, m));
        assert!(!is_out_of_bounds(Vec2::new(-100.0, -100.0), w, h, m));
        assert!(!is_out_of_bounds(Vec2::new(900.0, 700.0), w, h, m));
        assert!(is_out_of_bounds(Vec2::new(-100.5, 300.0), w, h, m));
        assert!(is_out_of_bounds(Vec2::new(400.0, 700.5), w, h, m));
        assert!(is_out_of_bounds(Vec2::new(900.5, 0.0), w, h, m));
        assert!(is_out_of_bounds(Vec2::new(0.0, -101.0), w, h, m));
    }
}
