use macroquad::prelude::*;

use crate::scene::Scene;
use crate::whisker::PROBE_COUNT;

const BG_COLOR: Color = Color::new(0.04, 0.05, 0.10, 1.0);
const CRAFT_COLOR: Color = Color::new(0.55, 0.78, 1.0, 1.0);
const CRAFT_HIT_COLOR: Color = Color::new(1.0, 0.45, 0.35, 1.0);
const OBSTACLE_COLOR: Color = Color::new(0.45, 0.40, 0.32, 1.0);
const TARGET_COLOR: Color = Color::new(1.0, 0.85, 0.25, 1.0);
const BOUNDS_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.4);

/// Draw the sandbox. Pure view over exposed scene state.
pub fn draw(scene: &Scene, show_debug: bool) {
    clear_background(BG_COLOR);

    let obstacle_bounds = scene.obstacle.aabb();
    draw_rectangle(
        obstacle_bounds.min.x,
        obstacle_bounds.min.y,
        obstacle_bounds.extent.x,
        obstacle_bounds.extent.y,
        OBSTACLE_COLOR,
    );

    draw_circle(scene.target.pos.x, scene.target.pos.y, scene.target.radius, TARGET_COLOR);

    if scene.craft.enabled {
        draw_craft(scene);
        for probe in 0..PROBE_COUNT {
            let end = scene.whiskers.endpoints[probe];
            draw_line(
                scene.craft.pos.x,
                scene.craft.pos.y,
                end.x,
                end.y,
                1.0,
                scene.whiskers.probe_color(probe),
            );
        }
    }

    if show_debug {
        draw_debug_bounds(scene);
    }

    draw_help(scene);
}

fn draw_craft(scene: &Scene) {
    let craft = &scene.craft;
    let dir = craft.direction();
    let side = vec2(-dir.y, dir.x);
    let half = craft.extent * 0.5;

    // Triangle nose points along the facing direction.
    let nose = craft.pos + dir * half.x;
    let tail_a = craft.pos - dir * half.x + side * half.y * 0.8;
    let tail_b = craft.pos - dir * half.x - side * half.y * 0.8;

    let color = if craft.colliding { CRAFT_HIT_COLOR } else { CRAFT_COLOR };
    draw_triangle(nose, tail_a, tail_b, color);
}

fn draw_debug_bounds(scene: &Scene) {
    draw_circle_lines(
        scene.target.pos.x,
        scene.target.pos.y,
        scene.target.radius,
        1.0,
        BOUNDS_COLOR,
    );

    let obstacle = scene.obstacle.aabb();
    draw_rectangle_lines(
        obstacle.min.x,
        obstacle.min.y,
        obstacle.extent.x,
        obstacle.extent.y,
        1.0,
        BOUNDS_COLOR,
    );

    if scene.craft.enabled {
        let craft = scene.craft.aabb();
        draw_rectangle_lines(
            craft.min.x,
            craft.min.y,
            craft.extent.x,
            craft.extent.y,
            1.0,
            BOUNDS_COLOR,
        );
    }
}

fn draw_help(scene: &Scene) {
    let lines = [
        "Hold 1: Seek   2: Flee   3: Arrive   4: Avoid obstacle",
        "Hold 5: Reset",
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 12.0, 22.0 + i as f32 * 20.0, 18.0, WHITE);
    }
    if scene.reached {
        draw_text("Target reached", 12.0, 70.0, 18.0, TARGET_COLOR);
    }
}
