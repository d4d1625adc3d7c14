use serde::{Deserialize, Serialize};

use crate::settings::ViewerSettings;
use crate::uniforms::UniformSnapshot;

/// Direction of a mouse-wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    /// Zoom in: fewer plane units per screen.
    Up,
    /// Zoom out.
    Down,
}

impl ScrollDirection {
    /// Classify a raw vertical wheel delta. A zero delta is not a scroll.
    pub fn from_delta(scroll_y: f64) -> Option<Self> {
        if scroll_y > 0.0 {
            Some(ScrollDirection::Up)
        } else if scroll_y < 0.0 {
            Some(ScrollDirection::Down)
        } else {
            None
        }
    }
}

/// Maps between viewport pixels and the fractal's parameter plane, and tracks whether
/// the last rendered image is still current.
///
/// Pixel coordinates have their origin at the bottom-left corner with y growing upward.
/// The plane point `(pan_x, pan_y)` sits at the center of the viewport, and `zoom` is
/// the plane height covered by the viewport.
///
/// Every mutation that changes the view marks the mapper dirty. Only the render loop
/// clears it, via [`mark_clean`](Self::mark_clean), after consuming a snapshot.
#[derive(Debug, Clone)]
pub struct ViewportMapper {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    width: u32,
    height: u32,
    iteration_limit: u32,
    color_frequency: f64,
    zoom_factor: f64,
    dirty: bool,
}

impl ViewportMapper {
    /// A mapper with the default viewer settings. Zero dimensions are raised to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_settings(&ViewerSettings::default(), width, height)
    }

    /// A mapper seeded from `settings`, which must already pass
    /// [`ViewerSettings::validate`]; a `zoom_factor` of zero, for instance, makes
    /// [`zoom_at`](Self::zoom_at) divide by zero. Debug builds assert this.
    pub fn from_settings(settings: &ViewerSettings, width: u32, height: u32) -> Self {
        debug_assert!(
            settings.validate().is_ok(),
            "viewport built from invalid settings: {settings:?}"
        );
        Self {
            zoom: settings.initial_zoom,
            pan_x: settings.initial_pan.0,
            pan_y: settings.initial_pan.1,
            width: width.max(1),
            height: height.max(1),
            iteration_limit: settings.iteration_limit,
            color_frequency: settings.color_frequency,
            zoom_factor: settings.zoom_factor,
            // The first frame always renders.
            dirty: true,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    pub fn color_frequency(&self) -> f64 {
        self.color_frequency
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Mapping ──────────────────────────────────────────────────────

    /// Convert a pixel position to parameter-plane coordinates.
    pub fn screen_to_plane(&self, px: f64, py: f64) -> (f64, f64) {
        let uv_x = px / self.width as f64;
        let uv_y = py / self.height as f64;
        let corrected_x = (uv_x - 0.5) * self.aspect_ratio();
        let corrected_y = uv_y - 0.5;
        (
            corrected_x * self.zoom + self.pan_x,
            corrected_y * self.zoom + self.pan_y,
        )
    }

    /// Convert a parameter-plane point to pixel coordinates.
    pub fn plane_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let corrected_x = (x - self.pan_x) / self.zoom;
        let corrected_y = (y - self.pan_y) / self.zoom;
        (
            (corrected_x / self.aspect_ratio() + 0.5) * self.width as f64,
            (corrected_y + 0.5) * self.height as f64,
        )
    }

    /// The visible region of the plane as `(min_x, min_y, max_x, max_y)`.
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let half_w = 0.5 * self.zoom * self.aspect_ratio();
        let half_h = 0.5 * self.zoom;
        (
            self.pan_x - half_w,
            self.pan_y - half_h,
            self.pan_x + half_w,
            self.pan_y + half_h,
        )
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// Pan by a drag delta in pixels. The plane follows the cursor, so dragging right
    /// moves the center to the left.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x -= dx * (self.zoom * self.aspect_ratio() / self.width as f64);
        self.pan_y -= dy * (self.zoom / self.height as f64);
        self.dirty = true;
    }

    /// Zoom one wheel step, keeping the plane point under `(px, py)` fixed on screen.
    pub fn zoom_at(&mut self, px: f64, py: f64, direction: ScrollDirection) {
        let (before_x, before_y) = self.screen_to_plane(px, py);

        match direction {
            ScrollDirection::Up => self.zoom /= self.zoom_factor,
            ScrollDirection::Down => self.zoom *= self.zoom_factor,
        }

        let (after_x, after_y) = self.screen_to_plane(px, py);
        self.pan_x += before_x - after_x;
        self.pan_y += before_y - after_y;
        self.dirty = true;

        log::trace!(
            "zoom {:?} at ({px}, {py}): zoom={}, pan=({}, {})",
            direction,
            self.zoom,
            self.pan_x,
            self.pan_y
        );
    }

    /// Track a window resize. A zero dimension (e.g. a minimized window) is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring degenerate viewport size {width}x{height}");
            return;
        }
        log::debug!(
            "Viewport resized {}x{} -> {width}x{height}",
            self.width,
            self.height
        );
        self.width = width;
        self.height = height;
        self.dirty = true;
    }

    // ── Parameters ───────────────────────────────────────────────────

    /// Set the zoom directly. Callers must keep it positive; nothing here clamps it.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !(zoom > 0.0) {
            log::warn!("Non-positive zoom {zoom} set on viewport; plane mapping is undefined");
        }
        if zoom != self.zoom {
            self.zoom = zoom;
            self.dirty = true;
        }
    }

    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        if pan_x != self.pan_x || pan_y != self.pan_y {
            self.pan_x = pan_x;
            self.pan_y = pan_y;
            self.dirty = true;
        }
    }

    pub fn set_iteration_limit(&mut self, iteration_limit: u32) {
        if iteration_limit != self.iteration_limit {
            self.iteration_limit = iteration_limit;
            self.dirty = true;
        }
    }

    pub fn set_color_frequency(&mut self, color_frequency: f64) {
        if color_frequency != self.color_frequency {
            self.color_frequency = color_frequency;
            self.dirty = true;
        }
    }

    // ── Render handshake ─────────────────────────────────────────────

    /// Capture the current state for the renderer. Does not clear the dirty flag.
    pub fn snapshot_uniforms(&self) -> UniformSnapshot {
        UniformSnapshot {
            width: self.width,
            height: self.height,
            zoom: self.zoom,
            pan_x: self.pan_x,
            pan_y: self.pan_y,
            iteration_limit: self.iteration_limit,
            color_frequency: self.color_frequency,
        }
    }

    /// Called by the render loop once it has consumed a snapshot.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
