//! Headless driver for the Fractalscope core.
//!
//! Replays a scripted session of drags, wheel steps, resizes, and slider changes
//! through the viewport, rendering through a logging sink only on dirty ticks, and
//! tumbles a 4-D hypercube alongside it.
//!
//! Usage: `fractalscope-demo [settings.json]`

mod logging;
mod render_loop;
mod scene;

use std::path::Path;

use anyhow::{Context, Result};
use fractalscope_renderer::{ViewerSettings, ViewportMapper};

use crate::logging::{init_logging, LoggingConfig};
use crate::render_loop::{handle_input, tick, InputEvent, LogSink, SliderChange};
use crate::scene::HypercubeScene;

fn load_settings(path: Option<&Path>) -> Result<ViewerSettings> {
    let Some(path) = path else {
        return Ok(ViewerSettings::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = ViewerSettings::from_json(&json)
        .with_context(|| format!("loading settings from {}", path.display()))?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// One scripted tick's worth of input.
fn session() -> Vec<Vec<InputEvent>> {
    vec![
        vec![],
        vec![],
        vec![InputEvent::Drag {
            dx: 40.0,
            dy: -15.0,
        }],
        vec![
            InputEvent::Scroll {
                x: 900.0,
                y: 420.0,
                scroll_y: 1.0,
            },
            InputEvent::Scroll {
                x: 900.0,
                y: 420.0,
                scroll_y: 1.0,
            },
        ],
        vec![],
        vec![InputEvent::Resize {
            width: 1600,
            height: 900,
        }],
        vec![InputEvent::Slider(SliderChange::Iterations(1200))],
        vec![InputEvent::Slider(SliderChange::ColorFrequency(0.04))],
        vec![InputEvent::Scroll {
            x: 200.0,
            y: 100.0,
            scroll_y: -1.0,
        }],
        vec![
            InputEvent::Slider(SliderChange::Zoom(0.5)),
            InputEvent::Slider(SliderChange::PanX(-1.25)),
        ],
    ]
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let settings_path = std::env::args().nth(1);
    let settings = load_settings(settings_path.as_deref().map(Path::new))?;

    let mut viewport = ViewportMapper::from_settings(&settings, 1280, 720);
    let mut sink = LogSink::default();
    let mut scene = HypercubeScene::new(4, &[(0, 3), (1, 2)], 0.05)?;

    for (index, events) in session().into_iter().enumerate() {
        for event in events {
            log::debug!("tick {index}: {event:?}");
            let event = match event {
                InputEvent::Slider(SliderChange::Zoom(z)) => {
                    InputEvent::Slider(SliderChange::Zoom(settings.ranges.clamp_zoom(z)))
                }
                other => other,
            };
            handle_input(&mut viewport, event);
        }

        if !tick(&mut viewport, &mut sink) {
            log::debug!("tick {index}: clean, reusing last frame");
        }

        scene.advance()?;
    }

    let (min_x, min_y, max_x, max_y) = viewport.visible_bounds();
    log::info!(
        "Rendered {} frames; visible plane [{min_x:.4}, {max_x:.4}] x [{min_y:.4}, {max_y:.4}]",
        sink.frames
    );

    let first = scene.project()?[0];
    log::info!(
        "{} after {} ticks; first vertex projects to ({:.4}, {:.4})",
        scene.frame(),
        session().len(),
        first.0,
        first.1
    );

    Ok(())
}
