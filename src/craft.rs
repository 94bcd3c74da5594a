use macroquad::prelude::*;

use crate::config;
use crate::geometry::{self, Aabb};

/// The steered agent: kinematic state plus live motion parameters.
///
/// Heading (degrees) is the single stored orientation; the facing direction
/// is always derived from it on read, so the two can never drift apart.
#[derive(Clone, Debug)]
pub struct Craft {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub extent: Vec2,
    pub colliding: bool,
    pub enabled: bool,
    pub desired_velocity: Vec2,
    pub target_pos: Vec2,
    heading: f32,
    max_speed: f32,
    turn_rate: f32,
    acceleration_rate: f32,
}

impl Craft {
    pub fn new() -> Self {
        Self {
            pos: vec2(config::CRAFT_SPAWN_X, config::CRAFT_SPAWN_Y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            extent: vec2(config::CRAFT_WIDTH, config::CRAFT_HEIGHT),
            colliding: false,
            enabled: false,
            desired_velocity: Vec2::ZERO,
            target_pos: vec2(config::TARGET_SPAWN_X, config::TARGET_SPAWN_Y),
            heading: 0.0,
            max_speed: config::CRAFT_MAX_SPEED,
            turn_rate: config::CRAFT_TURN_RATE,
            acceleration_rate: config::CRAFT_ACCELERATION_RATE,
        }
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = degrees;
    }

    /// Unit facing vector derived from the heading.
    pub fn direction(&self) -> Vec2 {
        geometry::heading_dir(self.heading)
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn set_max_speed(&mut self, speed: f32) {
        self.max_speed = speed.max(0.0);
    }

    pub fn turn_rate(&self) -> f32 {
        self.turn_rate
    }

    pub fn set_turn_rate(&mut self, degrees: f32) {
        self.turn_rate = degrees.max(0.0);
    }

    pub fn acceleration_rate(&self) -> f32 {
        self.acceleration_rate
    }

    pub fn set_acceleration_rate(&mut self, rate: f32) {
        self.acceleration_rate = rate.max(0.0);
    }

    /// Retarget and refresh the desired velocity toward the target.
    pub fn set_desired_velocity(&mut self, target_pos: Vec2) {
        self.target_pos = target_pos;
        self.desired_velocity = geometry::normalize_safe(target_pos - self.pos);
    }

    /// Axis-aligned bounds around the craft center. Collision always uses
    /// these bounds even though the craft is drawn rotated.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.extent)
    }

    /// One integration step of the simplified kinematic model: the
    /// acceleration contributes a bare half-term to position (no dt² factor)
    /// and is added to velocity unscaled by dt.
    pub fn integrate(&mut self, dt: f32) {
        let velocity_term = self.velocity * dt;
        let acceleration_term = self.acceleration * 0.5;
        self.pos += velocity_term + acceleration_term;

        self.velocity += self.acceleration;
        self.velocity = geometry::clamp_magnitude(self.velocity, self.max_speed);
    }

    /// Restore the fixed debug-reset pose and rates: position, heading,
    /// acceleration rate, turn rate, and target. Nothing else — velocity
    /// and acceleration carry over, so a moving craft keeps its momentum,
    /// and max speed is left untouched: a hard stop from arrival persists
    /// until the parameter is raised externally.
    pub fn reset(&mut self, target_pos: Vec2) {
        self.pos = vec2(config::CRAFT_RESET_X, config::CRAFT_RESET_Y);
        self.heading = 0.0;
        self.acceleration_rate = config::CRAFT_ACCELERATION_RATE;
        self.turn_rate = config::CRAFT_TURN_RATE;
        self.set_desired_velocity(target_pos);
    }
}
