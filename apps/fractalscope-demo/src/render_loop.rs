use fractalscope_renderer::{ScrollDirection, UniformSnapshot, ViewportMapper};

/// Input events as delivered by a windowing layer, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse drag with the left button held.
    Drag { dx: f64, dy: f64 },
    /// Mouse wheel at a cursor position; `scroll_y > 0` zooms in.
    Scroll { x: f64, y: f64, scroll_y: f64 },
    Resize { width: u32, height: u32 },
    /// A control-panel slider moved.
    Slider(SliderChange),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderChange {
    Zoom(f64),
    PanX(f64),
    PanY(f64),
    Iterations(u32),
    ColorFrequency(f64),
}

/// Whatever consumes uniform snapshots and does the expensive draw.
pub trait FrameSink {
    fn render(&mut self, uniforms: &UniformSnapshot);
}

/// A sink that only logs what it would have drawn.
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames: usize,
}

impl FrameSink for LogSink {
    fn render(&mut self, uniforms: &UniformSnapshot) {
        self.frames += 1;
        log::info!(
            "frame {}: {}x{} zoom={:.6} pan=({:.6}, {:.6}) iterations={} color_freq={}",
            self.frames,
            uniforms.width,
            uniforms.height,
            uniforms.zoom,
            uniforms.pan_x,
            uniforms.pan_y,
            uniforms.iteration_limit,
            uniforms.color_frequency
        );
        log::trace!("uniform block: {:02x?}", uniforms.to_bytes());
    }
}

/// Routes one input event into the viewport.
pub fn handle_input(viewport: &mut ViewportMapper, event: InputEvent) {
    match event {
        InputEvent::Drag { dx, dy } => viewport.pan_by(dx, dy),
        InputEvent::Scroll { x, y, scroll_y } => {
            if let Some(direction) = ScrollDirection::from_delta(scroll_y) {
                viewport.zoom_at(x, y, direction);
            }
        }
        InputEvent::Resize { width, height } => viewport.resize(width, height),
        InputEvent::Slider(change) => match change {
            SliderChange::Zoom(zoom) => viewport.set_zoom(zoom),
            SliderChange::PanX(x) => {
                let (_, y) = viewport.pan();
                viewport.set_pan(x, y);
            }
            SliderChange::PanY(y) => {
                let (x, _) = viewport.pan();
                viewport.set_pan(x, y);
            }
            SliderChange::Iterations(n) => viewport.set_iteration_limit(n),
            SliderChange::ColorFrequency(f) => viewport.set_color_frequency(f),
        },
    }
}

/// One render tick: redraw only when the viewport is dirty. Returns whether a frame
/// was rendered.
pub fn tick(viewport: &mut ViewportMapper, sink: &mut dyn FrameSink) -> bool {
    if !viewport.is_dirty() {
        return false;
    }
    let uniforms = viewport.snapshot_uniforms();
    sink.render(&uniforms);
    viewport.mark_clean();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<UniformSnapshot>,
    }

    impl FrameSink for RecordingSink {
        fn render(&mut self, uniforms: &UniformSnapshot) {
            self.frames.push(*uniforms);
        }
    }

    #[test]
    fn test_renders_only_when_dirty() {
        let mut vp = ViewportMapper::new(640, 480);
        let mut sink = RecordingSink::default();

        assert!(tick(&mut vp, &mut sink));
        assert!(!tick(&mut vp, &mut sink));
        assert!(!tick(&mut vp, &mut sink));

        handle_input(&mut vp, InputEvent::Drag { dx: 4.0, dy: 0.0 });
        assert!(tick(&mut vp, &mut sink));
        assert!(!tick(&mut vp, &mut sink));

        assert_eq!(sink.frames.len(), 2);
        assert!(sink.frames[1].pan_x < sink.frames[0].pan_x);
    }

    #[test]
    fn test_zero_scroll_does_nothing() {
        let mut vp = ViewportMapper::new(640, 480);
        vp.mark_clean();
        handle_input(
            &mut vp,
            InputEvent::Scroll {
                x: 10.0,
                y: 10.0,
                scroll_y: 0.0,
            },
        );
        assert!(!vp.is_dirty());
    }

    #[test]
    fn test_slider_changes_mark_dirty() {
        let mut vp = ViewportMapper::new(640, 480);
        vp.mark_clean();
        handle_input(&mut vp, InputEvent::Slider(SliderChange::PanY(0.5)));
        assert!(vp.is_dirty());
        assert_eq!(vp.pan(), (-0.75, 0.5));
    }

    #[test]
    fn test_several_events_collapse_into_one_frame() {
        let mut vp = ViewportMapper::new(640, 480);
        let mut sink = RecordingSink::default();
        tick(&mut vp, &mut sink);

        for event in [
            InputEvent::Scroll {
                x: 320.0,
                y: 240.0,
                scroll_y: 1.0,
            },
            InputEvent::Slider(SliderChange::Iterations(800)),
            InputEvent::Resize {
                width: 800,
                height: 600,
            },
        ] {
            handle_input(&mut vp, event);
        }
        assert!(tick(&mut vp, &mut sink));
        assert_eq!(sink.frames.len(), 2);
        let last = sink.frames[1];
        assert_eq!((last.width, last.height, last.iteration_limit), (800, 600, 800));
    }
}
