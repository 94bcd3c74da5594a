use macroquad::prelude::*;

mod collision;
mod config;
mod craft;
mod geometry;
mod input;
mod qa;
mod renderer;
mod scene;
mod steering;
mod ui;
mod whisker;

use input::InputFrame;
use scene::Scene;
use ui::UiState;

fn window_conf() -> Conf {
    Conf {
        window_title: "HELMSMAN — Steering Sandbox".to_string(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Some(code) = run_qa_if_requested() {
        std::process::exit(code);
    }

    let mut scene = Scene::new();
    let mut ui_state = UiState::default();

    loop {
        let dt = get_frame_time();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Sample the keyboard once, then run exactly one tick. Panel writes
        // from the previous frame have already landed by now.
        let frame = InputFrame::poll();
        if frame.reset {
            scene.reset();
        }
        scene.tick(&frame.behaviors, dt);

        renderer::draw(&scene, ui_state.show_debug);
        ui::draw_ui(&mut scene, &mut ui_state);

        next_frame().await;
    }
}

/// `--qa <scenario>` runs one headless scenario and writes its report.
/// Returns the process exit code when QA mode was requested.
fn run_qa_if_requested() -> Option<i32> {
    let args: Vec<String> = std::env::args().collect();
    let pos = args.iter().position(|a| a == "--qa")?;

    let Some(raw) = args.get(pos + 1) else {
        eprintln!("[HELMSMAN] --qa requires a scenario: seek | flee | arrive | avoid");
        return Some(2);
    };
    let Some(scenario) = qa::QaScenario::parse_cli(raw) else {
        eprintln!("[HELMSMAN] unknown QA scenario '{raw}'");
        return Some(2);
    };

    eprintln!("[HELMSMAN] running QA scenario '{}'", scenario.label());
    let report = qa::run_scenario(scenario);
    eprintln!(
        "[HELMSMAN] scenario '{}' finished: {} ({} ticks, final distance {:.1})",
        report.scenario, report.overall_status, report.ticks, report.final_distance
    );

    match qa::write_report(&report, std::path::Path::new("qa_out")) {
        Ok(path) => eprintln!("[HELMSMAN] report written to {}", path.display()),
        Err(e) => {
            eprintln!("[HELMSMAN] {e}");
            return Some(1);
        }
    }

    Some(if report.overall_status == "pass" { 0 } else { 1 })
}
