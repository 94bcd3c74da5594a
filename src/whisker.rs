use macroquad::prelude::*;

use crate::config;
use crate::geometry;

pub const PROBE_LEFT: usize = 0;
pub const PROBE_MIDDLE: usize = 1;
pub const PROBE_RIGHT: usize = 2;
pub const PROBE_COUNT: usize = 3;

/// Three forward-biased probe segments fanned around the craft heading.
///
/// Endpoints are re-derived every tick from the current pose; the hit flags
/// are overwritten by the collision pass each tick and carry no history.
#[derive(Clone, Debug)]
pub struct WhiskerRig {
    half_angle: f32,
    pub length: f32,
    pub endpoints: [Vec2; PROBE_COUNT],
    pub hits: [bool; PROBE_COUNT],
}

impl WhiskerRig {
    pub fn new() -> Self {
        Self {
            half_angle: config::WHISKER_HALF_ANGLE,
            length: config::WHISKER_LENGTH,
            endpoints: [Vec2::ZERO; PROBE_COUNT],
            hits: [false; PROBE_COUNT],
        }
    }

    pub fn half_angle(&self) -> f32 {
        self.half_angle
    }

    pub fn set_half_angle(&mut self, degrees: f32) {
        self.half_angle = degrees.clamp(
            config::WHISKER_HALF_ANGLE_MIN,
            config::WHISKER_HALF_ANGLE_MAX,
        );
    }

    /// Recompute the three probe endpoints for the given pose. Probe order
    /// is left (heading + spread), middle (heading), right (heading - spread),
    /// all at full probe length.
    pub fn update(&mut self, origin: Vec2, heading_deg: f32) {
        let offsets = [self.half_angle, 0.0, -self.half_angle];
        for (endpoint, offset) in self.endpoints.iter_mut().zip(offsets) {
            *endpoint = origin + geometry::heading_dir(heading_deg + offset) * self.length;
        }
    }

    /// Display color for a probe: a pure view of its hit flag.
    pub fn probe_color(&self, probe: usize) -> Color {
        if self.hits[probe] {
            RED
        } else {
            GREEN
        }
    }
}
