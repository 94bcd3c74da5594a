use crate::craft::Craft;
use crate::geometry;
use crate::scene::{Obstacle, Target};
use crate::whisker::WhiskerRig;

/// One collision pass for an enabled craft: target-reached signal, body
/// overlap with the obstacle, then the three whisker probes against the
/// obstacle box. Returns the reached signal; the other results land in the
/// craft and rig flags.
///
/// Callers skip this entirely for a disabled craft, so a disabled craft's
/// flags are stale and must be ignored.
pub fn run_checks(craft: &mut Craft, whiskers: &mut WhiskerRig, target: &Target, obstacle: &Obstacle) -> bool {
    let craft_bounds = craft.aabb();
    let reached = geometry::circle_aabb_overlap(target.pos, target.radius, &craft_bounds);

    let obstacle_bounds = obstacle.aabb();
    craft.colliding = geometry::aabb_overlap(&craft_bounds, &obstacle_bounds);

    for (hit, endpoint) in whiskers.hits.iter_mut().zip(whiskers.endpoints) {
        *hit = geometry::segment_aabb_intersects(craft.pos, endpoint, &obstacle_bounds);
    }

    reached
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::*;

    fn setup() -> (Craft, WhiskerRig, Target, Obstacle) {
        let mut craft = Craft::new();
        craft.pos = vec2(100.0, 300.0);
        let whiskers = WhiskerRig::new();
        let target = Target::new(vec2(500.0, 100.0));
        let obstacle = Obstacle::new(vec2(300.0, 300.0), vec2(100.0, 100.0));
        (craft, whiskers, target, obstacle)
    }

    #[test]
    fn middle_probe_reports_an_obstacle_dead_ahead() {
        let (mut craft, mut whiskers, target, obstacle) = setup();
        // Facing +x, obstacle centered 200 units ahead, probes 300 long.
        whiskers.update(craft.pos, craft.heading());

        run_checks(&mut craft, &mut whiskers, &target, &obstacle);

        assert!(whiskers.hits[crate::whisker::PROBE_MIDDLE]);
        // Craft body is well clear of the obstacle.
        assert!(!craft.colliding);
    }

    #[test]
    fn probes_clear_when_facing_away() {
        let (mut craft, mut whiskers, target, obstacle) = setup();
        craft.set_heading(180.0);
        whiskers.update(craft.pos, craft.heading());

        run_checks(&mut craft, &mut whiskers, &target, &obstacle);

        assert_eq!(whiskers.hits, [false; 3]);
    }

    #[test]
    fn body_overlap_sets_the_colliding_flag() {
        let (mut craft, mut whiskers, target, obstacle) = setup();
        craft.pos = obstacle.pos + vec2(60.0, 0.0); // 20-unit overlap of half extents
        whiskers.update(craft.pos, craft.heading());

        run_checks(&mut craft, &mut whiskers, &target, &obstacle);
        assert!(craft.colliding);
    }

    #[test]
    fn reached_signal_fires_on_target_contact() {
        let (mut craft, mut whiskers, mut target, obstacle) = setup();
        target.pos = craft.pos + vec2(25.0, 0.0); // circle touches the 40-wide body
        whiskers.update(craft.pos, craft.heading());

        assert!(run_checks(&mut craft, &mut whiskers, &target, &obstacle));

        target.pos = craft.pos + vec2(100.0, 0.0);
        assert!(!run_checks(&mut craft, &mut whiskers, &target, &obstacle));
    }
}
