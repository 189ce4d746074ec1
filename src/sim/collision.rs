//! AABB overlap tests and obstacle resolution
//!
//! The two box conventions matter: moving actors (player, orca) carry a box
//! centered on their position, while level geometry (obstacles, items) anchors
//! its box at the top-left corner. `overlap` takes the center-anchored box
//! first and the corner-anchored box second; resolution direction depends on
//! this pairing, so callers must not swap the sides.

use glam::Vec2;

/// Rectangle intersection between a center-anchored box `a` and a
/// corner-anchored box `b`. Exclusive on one side of each axis: boxes that
/// merely touch do not overlap.
#[inline]
pub fn overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let a_min = a_pos - a_size / 2.0;
    let a_max = a_pos + a_size / 2.0;
    let b_min = b_pos;
    let b_max = b_pos + b_size;
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Horizontal push-out for an actor overlapping an obstacle.
///
/// Returns the corrected center x. The side is chosen by comparing the actor
/// center against the obstacle's left edge, not its center.
#[inline]
pub fn push_out_x(actor_x: f32, actor_w: f32, obstacle_x: f32, obstacle_w: f32) -> f32 {
    if actor_x < obstacle_x {
        obstacle_x - actor_w / 2.0
    } else {
        obstacle_x + obstacle_w + actor_w / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Player-sized center box against hand-computed corner boxes.
    const P: Vec2 = Vec2::new(48.0, 42.0);

    #[test]
    fn test_overlap_clear_hit() {
        // Player centered at (100, 100) spans x 76..124, y 79..121
        assert!(overlap(
            Vec2::new(100.0, 100.0),
            P,
            Vec2::new(110.0, 110.0),
            Vec2::new(30.0, 30.0)
        ));
    }

    #[test]
    fn test_overlap_clear_miss() {
        assert!(!overlap(
            Vec2::new(100.0, 100.0),
            P,
            Vec2::new(200.0, 100.0),
            Vec2::new(30.0, 30.0)
        ));
    }

    #[test]
    fn test_overlap_edge_touch_is_miss() {
        // Box starts exactly at the player's right edge (x = 124)
        assert!(!overlap(
            Vec2::new(100.0, 100.0),
            P,
            Vec2::new(124.0, 90.0),
            Vec2::new(30.0, 30.0)
        ));
        // One pixel closer and it overlaps
        assert!(overlap(
            Vec2::new(100.0, 100.0),
            P,
            Vec2::new(123.0, 90.0),
            Vec2::new(30.0, 30.0)
        ));
    }

    #[test]
    fn test_overlap_vertical_miss_horizontal_hit() {
        // Horizontally aligned, but the box sits below the player's feet
        assert!(!overlap(
            Vec2::new(100.0, 100.0),
            P,
            Vec2::new(90.0, 121.0),
            Vec2::new(30.0, 30.0)
        ));
    }

    #[test]
    fn test_overlap_player_inside_large_box() {
        assert!(overlap(
            Vec2::new(100.0, 100.0),
            P,
            Vec2::new(0.0, 0.0),
            Vec2::new(500.0, 500.0)
        ));
    }

    #[test]
    fn test_push_out_left_of_edge() {
        // Actor center left of the obstacle's left edge: pushed out leftward
        let x = push_out_x(95.0, 48.0, 100.0, 60.0);
        assert_eq!(x, 100.0 - 24.0);
    }

    #[test]
    fn test_push_out_right_of_edge() {
        // Center past the left edge (even if still inside): pushed out rightward
        let x = push_out_x(105.0, 48.0, 100.0, 60.0);
        assert_eq!(x, 100.0 + 60.0 + 24.0);
    }
}
