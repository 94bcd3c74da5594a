use macroquad::prelude::*;

use crate::collision;
use crate::config;
use crate::craft::Craft;
use crate::geometry::Aabb;
use crate::steering::{self, Behavior};
use crate::whisker::WhiskerRig;

/// Point-like goal the craft steers relative to. Moved only by the
/// environment or the debug panel, never by the craft.
#[derive(Clone, Copy, Debug)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
}

impl Target {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: config::TARGET_RADIUS,
        }
    }
}

/// Static axis-aligned block the whiskers probe against.
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// The whole sandbox world: one craft, one target, one obstacle.
pub struct Scene {
    pub craft: Craft,
    pub whiskers: WhiskerRig,
    pub target: Target,
    pub obstacle: Obstacle,
    pub reached: bool,
    pub tick_count: u64,
}

impl Scene {
    pub fn new() -> Self {
        let mut craft = Craft::new();
        let target = Target::new(vec2(config::TARGET_SPAWN_X, config::TARGET_SPAWN_Y));
        craft.set_desired_velocity(target.pos);
        Self {
            craft,
            whiskers: WhiskerRig::new(),
            target,
            obstacle: Obstacle::new(
                vec2(config::OBSTACLE_SPAWN_X, config::OBSTACLE_SPAWN_Y),
                vec2(config::OBSTACLE_WIDTH, config::OBSTACLE_HEIGHT),
            ),
            reached: false,
            tick_count: 0,
        }
    }

    /// One full simulation tick: sense, steer, integrate, in that strict
    /// order, synchronously. Behaviors are applied in the order requested;
    /// when several are requested in the same tick the later ones overwrite
    /// shared fields (last writer wins).
    ///
    /// A disabled craft skips the tick entirely, leaving every flag stale.
    pub fn tick(&mut self, requested: &[Behavior], dt: f32) {
        if !self.craft.enabled {
            return;
        }

        self.whiskers.update(self.craft.pos, self.craft.heading());
        self.reached =
            collision::run_checks(&mut self.craft, &mut self.whiskers, &self.target, &self.obstacle);

        self.craft.target_pos = self.target.pos;
        for behavior in requested {
            steering::apply(*behavior, &mut self.craft, &self.whiskers.hits, dt);
        }

        self.craft.integrate(dt);
        self.tick_count += 1;
    }

    /// Debug reset: fixed poses and rates, applied strictly between ticks.
    /// Velocity, acceleration, and the collision flags are deliberately not
    /// touched; the next enabled tick recomputes the flags anyway.
    pub fn reset(&mut self) {
        self.target.pos = vec2(config::TARGET_SPAWN_X, config::TARGET_SPAWN_Y);
        self.craft.reset(self.target.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn disabled_craft_does_not_tick() {
        let mut scene = Scene::new();
        let before_pos = scene.craft.pos;
        scene.tick(&[Behavior::Seek], DT);
        assert_eq!(scene.craft.pos, before_pos);
        assert_eq!(scene.tick_count, 0);
    }

    #[test]
    fn seek_tick_moves_state_by_the_stated_formulas() {
        let mut scene = Scene::new();
        scene.craft.enabled = true;
        // Keep the obstacle out of the probe fan for a clean run.
        scene.obstacle.pos = vec2(700.0, 550.0);

        scene.tick(&[Behavior::Seek], DT);

        let expected_desired = vec2(400.0, -200.0).normalize();
        assert!(scene.craft.desired_velocity.distance(expected_desired) < 1e-5);
        // After one tick the position has taken the half-term acceleration
        // step along the post-turn direction.
        assert!(scene.craft.acceleration.length() > 0.0);
        assert!(scene.craft.velocity.length() > 0.0);
        assert_eq!(scene.tick_count, 1);
    }

    #[test]
    fn multiple_behaviors_last_writer_wins_on_acceleration() {
        let mut both = Scene::new();
        both.craft.enabled = true;
        both.obstacle.pos = vec2(700.0, 550.0);
        let mut flee_only = Scene::new();
        flee_only.craft.enabled = true;
        flee_only.obstacle.pos = vec2(700.0, 550.0);

        both.tick(&[Behavior::Seek, Behavior::Flee], DT);
        flee_only.tick(&[Behavior::Flee], DT);

        // Flee ran last in the pair, so its acceleration write is the one
        // that survives — but the heading it saw had already been turned by
        // seek, so the pair is not identical to flee alone.
        let pair_acc_dir = geometry::normalize_safe(both.craft.acceleration);
        let pair_dir = both.craft.direction();
        assert!(pair_acc_dir.distance(pair_dir) < 1e-4);
        assert_ne!(both.craft.heading(), flee_only.craft.heading());
    }

    #[test]
    fn arrive_freeze_survives_reset_until_speed_is_raised() {
        let mut scene = Scene::new();
        scene.craft.enabled = true;
        scene.obstacle.pos = vec2(700.0, 550.0);
        scene.craft.pos = scene.target.pos + vec2(30.0, 0.0);
        scene.craft.velocity = vec2(5.0, 0.0);

        scene.tick(&[Behavior::Arrive], DT);
        assert_eq!(scene.craft.max_speed(), 0.0);
        assert_eq!(scene.craft.velocity, Vec2::ZERO);

        scene.reset();
        assert_eq!(scene.craft.max_speed(), 0.0);
        assert_eq!(scene.craft.turn_rate(), config::CRAFT_TURN_RATE);
    }

    #[test]
    fn reset_restores_fixed_defaults() {
        let mut scene = Scene::new();
        scene.craft.enabled = true;
        scene.target.pos = vec2(50.0, 50.0);
        scene.craft.pos = vec2(640.0, 12.0);
        scene.craft.set_heading(270.0);

        scene.reset();

        assert_eq!(scene.craft.pos, vec2(config::CRAFT_RESET_X, config::CRAFT_RESET_Y));
        assert_eq!(scene.target.pos, vec2(config::TARGET_SPAWN_X, config::TARGET_SPAWN_Y));
        assert_eq!(scene.craft.heading(), 0.0);
        assert!(scene.craft.direction().distance(vec2(1.0, 0.0)) < 1e-5);
    }

    #[test]
    fn reset_preserves_momentum() {
        let mut scene = Scene::new();
        scene.craft.enabled = true;
        scene.obstacle.pos = vec2(700.0, 550.0);
        scene.tick(&[Behavior::Seek], DT);
        let velocity = scene.craft.velocity;
        assert!(velocity.length() > 0.0);

        scene.reset();

        // The craft restarts from the reset pose but resumes at its
        // pre-reset speed.
        assert_eq!(scene.craft.pos, vec2(config::CRAFT_RESET_X, config::CRAFT_RESET_Y));
        assert_eq!(scene.craft.velocity, velocity);
    }

    #[test]
    fn holding_reset_repins_the_craft_each_frame() {
        let mut scene = Scene::new();
        scene.craft.enabled = true;
        scene.obstacle.pos = vec2(700.0, 550.0);
        scene.craft.velocity = vec2(40.0, 0.0);

        // A held reset key applies the reset before every tick, so the
        // craft never drifts more than one integration step from the pose.
        let reset_pose = vec2(config::CRAFT_RESET_X, config::CRAFT_RESET_Y);
        for _ in 0..5 {
            scene.reset();
            scene.tick(&[Behavior::Seek], DT);
            assert!(scene.craft.pos.distance(reset_pose) < 5.0);
        }
    }

    #[test]
    fn whisker_flags_are_recomputed_each_tick() {
        let mut scene = Scene::new();
        scene.craft.enabled = true;
        // Obstacle straight ahead of the spawn pose.
        scene.obstacle.pos = scene.craft.pos + vec2(150.0, 0.0);

        scene.tick(&[Behavior::Idle], DT);
        assert!(scene.whiskers.hits[crate::whisker::PROBE_MIDDLE]);

        // Move the obstacle away between ticks; the flag must clear.
        scene.obstacle.pos = vec2(700.0, 550.0);
        scene.tick(&[Behavior::Idle], DT);
        assert!(!scene.whiskers.hits[crate::whisker::PROBE_MIDDLE]);
    }
}
