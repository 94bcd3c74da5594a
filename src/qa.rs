use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config;
use crate::scene::Scene;
use crate::steering::Behavior;

/// Headless exercise scenarios, one per steering behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QaScenario {
    Seek,
    Flee,
    Arrive,
    Avoid,
}

impl QaScenario {
    pub fn parse_cli(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "seek" => Some(Self::Seek),
            "flee" => Some(Self::Flee),
            "arrive" => Some(Self::Arrive),
            "avoid" | "avoid-obstacle" | "obstacle" => Some(Self::Avoid),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Seek => "seek",
            Self::Flee => "flee",
            Self::Arrive => "arrive",
            Self::Avoid => "avoid",
        }
    }

    fn behavior(self) -> Behavior {
        match self {
            Self::Seek => Behavior::Seek,
            Self::Flee => Behavior::Flee,
            Self::Arrive => Behavior::Arrive,
            Self::Avoid => Behavior::AvoidObstacle,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QaCheck {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub last: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaReport {
    pub scenario: String,
    pub ticks: u64,
    pub dt: f32,
    pub initial_distance: f32,
    pub final_distance: f32,
    pub distance: SeriesSummary,
    pub speed: SeriesSummary,
    pub overall_status: String,
    pub checks: Vec<QaCheck>,
}

/// Per-tick sample series with a compact summary for the report.
#[derive(Debug, Clone, Default)]
pub struct TickSeries {
    samples: Vec<f32>,
}

impl TickSeries {
    pub fn push(&mut self, value: f32) {
        self.samples.push(value);
    }

    pub fn summary(&self) -> SeriesSummary {
        if self.samples.is_empty() {
            return SeriesSummary {
                count: 0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                last: 0.0,
            };
        }
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in &self.samples {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        SeriesSummary {
            count: self.samples.len(),
            min,
            max,
            mean: sum / self.samples.len() as f32,
            last: *self.samples.last().unwrap_or(&0.0),
        }
    }
}

/// Run one scenario to completion at a fixed dt and collect its checks.
/// Pure with respect to the filesystem; see [`write_report`].
pub fn run_scenario(scenario: QaScenario) -> QaReport {
    let mut scene = Scene::new();
    scene.craft.enabled = true;

    match scenario {
        QaScenario::Avoid => {
            // Obstacle squarely across the craft's initial facing.
            scene.obstacle.pos = scene.craft.pos + macroquad::prelude::vec2(180.0, 0.0);
        }
        _ => {
            // Park the obstacle in a corner so the probes stay clear.
            scene.obstacle.pos = macroquad::prelude::vec2(
                config::WINDOW_WIDTH as f32 - 60.0,
                config::WINDOW_HEIGHT as f32 - 60.0,
            );
        }
    }

    let dt = config::QA_FIXED_DT;
    let behavior = [scenario.behavior()];
    let initial_distance = scene.craft.pos.distance(scene.target.pos);

    let mut distance = TickSeries::default();
    let mut speed = TickSeries::default();
    let mut saw_probe_hit = false;

    for _ in 0..config::QA_TICKS {
        scene.tick(&behavior, dt);
        distance.push(scene.craft.pos.distance(scene.target.pos));
        speed.push(scene.craft.velocity.length());
        saw_probe_hit |= scene.whiskers.hits.iter().any(|h| *h);
    }

    let final_distance = scene.craft.pos.distance(scene.target.pos);
    let mut checks = Vec::new();

    let finite = scene.craft.pos.is_finite()
        && scene.craft.velocity.is_finite()
        && scene.craft.heading().is_finite();
    checks.push(QaCheck {
        name: "state_is_finite".into(),
        passed: finite,
        details: format!(
            "pos ({:.1}, {:.1}), heading {:.1}",
            scene.craft.pos.x,
            scene.craft.pos.y,
            scene.craft.heading()
        ),
    });

    match scenario {
        QaScenario::Seek => checks.push(QaCheck {
            name: "distance_closes".into(),
            passed: final_distance < initial_distance,
            details: format!("{initial_distance:.1} -> {final_distance:.1}"),
        }),
        QaScenario::Flee => checks.push(QaCheck {
            name: "distance_opens".into(),
            passed: final_distance > initial_distance,
            details: format!("{initial_distance:.1} -> {final_distance:.1}"),
        }),
        QaScenario::Arrive => {
            let frozen = scene.craft.max_speed() == 0.0
                && scene.craft.velocity == macroquad::prelude::Vec2::ZERO;
            checks.push(QaCheck {
                name: "craft_freezes_in_stop_band".into(),
                passed: frozen && final_distance <= config::ARRIVE_STOP_RADIUS + 5.0,
                details: format!(
                    "final distance {final_distance:.1}, max speed {:.1}",
                    scene.craft.max_speed()
                ),
            });
        }
        QaScenario::Avoid => {
            checks.push(QaCheck {
                name: "probes_saw_the_obstacle".into(),
                passed: saw_probe_hit,
                details: "at least one whisker contact during the run".into(),
            });
            checks.push(QaCheck {
                name: "distance_closes_past_the_obstacle".into(),
                passed: final_distance < initial_distance,
                details: format!("{initial_distance:.1} -> {final_distance:.1}"),
            });
        }
    }

    let overall_status = if checks.iter().all(|c| c.passed) {
        "pass".to_string()
    } else {
        "fail".to_string()
    };

    QaReport {
        scenario: scenario.label().to_string(),
        ticks: config::QA_TICKS,
        dt,
        initial_distance,
        final_distance,
        distance: distance.summary(),
        speed: speed.summary(),
        overall_status,
        checks,
    }
}

/// Serialize the report to `<dir>/report_<scenario>.json`.
pub fn write_report(report: &QaReport, dir: &Path) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("create QA output dir {} failed: {e}", dir.display()))?;
    let path = dir.join(format!("report_{}.json", report.scenario));
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("serialize QA report failed: {e}"))?;
    std::fs::write(&path, json)
        .map_err(|e| format!("write QA report {} failed: {e}", path.display()))?;
    Ok(path)
}
