use macroquad::prelude::*;

use crate::config;
use crate::craft::Craft;
use crate::geometry;
use crate::whisker::{PROBE_COUNT, PROBE_LEFT, PROBE_MIDDLE, PROBE_RIGHT};

/// Exclusive steering behaviors. At most one is applied per call; the
/// caller decides which (and in what order, when several keys are held).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Idle,
    Seek,
    Flee,
    Arrive,
    AvoidObstacle,
}

/// Apply one behavior for this tick. `hits` are the current whisker flags
/// in probe order.
pub fn apply(behavior: Behavior, craft: &mut Craft, hits: &[bool; PROBE_COUNT], dt: f32) {
    match behavior {
        Behavior::Idle => {}
        Behavior::Seek => seek(craft, hits, dt),
        Behavior::Flee => flee(craft, hits, dt),
        Behavior::Arrive => arrive(craft, hits, dt),
        Behavior::AvoidObstacle => avoid_obstacle(craft, hits, dt),
    }
}

pub fn seek(craft: &mut Craft, hits: &[bool; PROBE_COUNT], dt: f32) {
    craft.set_desired_velocity(craft.target_pos);
    let steering_direction = craft.desired_velocity - craft.direction();
    look_where_youre_going(craft, hits, steering_direction, dt);
    craft.acceleration = craft.direction() * craft.acceleration_rate();
}

pub fn flee(craft: &mut Craft, hits: &[bool; PROBE_COUNT], dt: f32) {
    craft.set_desired_velocity(craft.target_pos);
    // Additive sign convention: steer away from the target.
    let steering_direction = craft.direction() + craft.desired_velocity;
    look_where_youre_going(craft, hits, steering_direction, dt);
    craft.acceleration = craft.direction() * craft.acceleration_rate();
}

pub fn arrive(craft: &mut Craft, hits: &[bool; PROBE_COUNT], dt: f32) {
    let distance = craft.pos.distance(craft.target_pos);

    if distance > config::ARRIVE_OUTER_RADIUS {
        seek(craft, hits, dt);
    } else if distance <= config::ARRIVE_STOP_RADIUS {
        // Hard stop. Turn rate and max speed stay zero until written
        // externally; reset does not restore max speed.
        craft.acceleration = Vec2::ZERO;
        craft.velocity = Vec2::ZERO;
        craft.set_turn_rate(0.0);
        craft.set_max_speed(0.0);
    } else if distance > config::ARRIVE_DEAD_RADIUS {
        // Linear deceleration ramp toward the stop band.
        let factor = distance / config::ARRIVE_OUTER_RADIUS;
        craft.acceleration *= factor;
    }
    // Distances inside the dead radius leave the tick untouched.
}

pub fn avoid_obstacle(craft: &mut Craft, hits: &[bool; PROBE_COUNT], dt: f32) {
    craft.set_desired_velocity(craft.target_pos);
    // Subtractive convention, distinct from both seek and flee.
    let steering_direction = craft.direction() - craft.desired_velocity;
    look_where_youre_going(craft, hits, steering_direction, dt);
    craft.acceleration = craft.direction() * craft.acceleration_rate();
}

/// Turn the craft toward `target_direction` via unclamped interpolation.
///
/// The quarter-turn sprite bias is subtracted first, then the whisker flags
/// bias the turn away from whatever the probes are touching: a left or
/// middle hit steers right, a right-only hit steers left. The lerp factor
/// `turn_rate * dt` is intentionally not clamped to [0, 1]; high turn rates
/// are allowed to snap past the target rotation.
pub fn look_where_youre_going(
    craft: &mut Craft,
    hits: &[bool; PROBE_COUNT],
    target_direction: Vec2,
    dt: f32,
) {
    let mut target_rotation = geometry::signed_angle_deg(craft.direction(), target_direction)
        - config::SPRITE_FORWARD_BIAS_DEG;

    if hits[PROBE_LEFT] || hits[PROBE_MIDDLE] {
        target_rotation += craft.turn_rate() * config::WHISKER_TURN_SENSITIVITY;
    } else if hits[PROBE_RIGHT] {
        target_rotation -= craft.turn_rate() * config::WHISKER_TURN_SENSITIVITY;
    }

    let heading = craft.heading();
    craft.set_heading(geometry::lerp_unclamped(
        heading,
        heading + target_rotation,
        craft.turn_rate() * dt,
    ));
}
