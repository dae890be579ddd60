//! Hitscan demo application
//!
//! Loads an optional TOML or RON config, builds the scene, and replays a
//! short scripted session: pick the emitter, drag it, turn it, and release.
//! Every release fires the bullet and prints the display fields.

mod app;

use std::time::Duration;

use app::{AppError, HitscanApp};
use hitscan_engine::core::{Config, HitscanConfig};
use hitscan_engine::foundation::logging;
use hitscan_engine::input::{InputEvent, KeyCode, MouseButton};

/// Wall-clock time between two scripted events
const EVENT_SPACING: Duration = Duration::from_millis(100);

fn demo_script() -> Vec<InputEvent> {
    let press = |x, y| InputEvent::PointerDown {
        button: MouseButton::Left,
        x,
        y,
    };
    let release = InputEvent::PointerUp {
        button: MouseButton::Left,
    };

    vec![
        InputEvent::Resize {
            width: 800,
            height: 600,
        },
        // Raise the emitter
        press(400.0, 423.0),
        InputEvent::PointerMove { x: 400.0, y: 400.0 },
        InputEvent::PointerMove { x: 400.0, y: 373.0 },
        release,
        // Swing it to the right
        InputEvent::KeyDown(KeyCode::Z),
        press(400.0, 373.0),
        InputEvent::PointerMove { x: 370.0, y: 373.0 },
        release,
        InputEvent::KeyDown(KeyCode::Escape),
    ]
}

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => HitscanConfig::load_from_file(path)?,
        None => HitscanConfig::default(),
    };

    // Initialize logging
    logging::init_with_level(&config.engine.log_level);

    log::info!("Starting hitscan demo");

    let mut app = HitscanApp::new(config)?;
    app.start()?;
    println!("bullet {}  hits {}", app.vector_text(), app.count_text());

    for event in demo_script() {
        let is_release = matches!(event, InputEvent::PointerUp { .. });
        app.handle_event(event)?;
        app.tick(EVENT_SPACING);

        if is_release {
            println!("bullet {}  hits {}", app.vector_text(), app.count_text());
        }
    }

    log::info!(
        "Demo finished: {} scene nodes, {} debug shapes, {} triangles in the last pass, gizmo in {:?} mode, attached: {}",
        app.registry().len(),
        app.debug().pass_shapes().len(),
        app.last_report().triangles_tested,
        app.gizmo().mode(),
        app.gizmo().attached().is_some()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("hitscan demo failed: {e}");
        std::process::exit(1);
    }
}
