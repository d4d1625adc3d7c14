use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Startup parameters for the fractal viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub initial_zoom: f64,
    /// Plane coordinate centered in the viewport at startup.
    pub initial_pan: (f64, f64),
    pub iteration_limit: u32,
    pub color_frequency: f64,
    /// Zoom multiplier applied per scroll step.
    pub zoom_factor: f64,
    pub ranges: ParameterRanges,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            initial_zoom: 3.0,
            initial_pan: (-0.75, 0.0), // frames the whole Mandelbrot set
            iteration_limit: 200,
            color_frequency: 0.04,
            zoom_factor: 1.15,
            ranges: ParameterRanges::default(),
        }
    }
}

impl ViewerSettings {
    /// Parse settings from JSON, filling missing fields with defaults, then validate.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.initial_zoom > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "initial_zoom must be positive, got {}",
                self.initial_zoom
            )));
        }
        if !(self.zoom_factor > 1.0) {
            return Err(SettingsError::Invalid(format!(
                "zoom_factor must be greater than 1, got {}",
                self.zoom_factor
            )));
        }
        if self.iteration_limit == 0 {
            return Err(SettingsError::Invalid("iteration_limit must be non-zero".into()));
        }
        if !(self.color_frequency > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "color_frequency must be positive, got {}",
                self.color_frequency
            )));
        }
        self.ranges.validate()
    }
}

/// Slider bounds for the interactive controls.
///
/// The viewport mapper never clamps on its own; callers that drive it from bounded
/// controls use these helpers before handing values over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterRanges {
    pub zoom: (f64, f64),
    pub pan_x: (f64, f64),
    pub pan_y: (f64, f64),
    pub iterations: (u32, u32),
    pub color_frequency: (f64, f64),
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            zoom: (0.001, 10.0),
            pan_x: (-2.0, 1.0),
            pan_y: (-1.5, 1.5),
            iterations: (50, 10_000),
            color_frequency: (0.01, 0.2),
        }
    }
}

impl ParameterRanges {
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.zoom.0, self.zoom.1)
    }

    pub fn clamp_pan(&self, pan_x: f64, pan_y: f64) -> (f64, f64) {
        (
            pan_x.clamp(self.pan_x.0, self.pan_x.1),
            pan_y.clamp(self.pan_y.0, self.pan_y.1),
        )
    }

    pub fn clamp_iterations(&self, iterations: u32) -> u32 {
        iterations.clamp(self.iterations.0, self.iterations.1)
    }

    pub fn clamp_color_frequency(&self, frequency: f64) -> f64 {
        frequency.clamp(self.color_frequency.0, self.color_frequency.1)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let float_ranges = [
            ("zoom", self.zoom),
            ("pan_x", self.pan_x),
            ("pan_y", self.pan_y),
            ("color_frequency", self.color_frequency),
        ];
        for (name, (lo, hi)) in float_ranges {
            // Also rejects NaN bounds, which would make `clamp` panic.
            if !(lo <= hi) {
                return Err(SettingsError::Invalid(format!(
                    "range {name} is inverted: [{lo}, {hi}]"
                )));
            }
        }
        if self.zoom.0 <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "zoom range must stay positive, got lower bound {}",
                self.zoom.0
            )));
        }
        if self.iterations.0 > self.iterations.1 {
            return Err(SettingsError::Invalid(format!(
                "range iterations is inverted: [{}, {}]",
                self.iterations.0, self.iterations.1
            )));
        }
        Ok(())
    }
}
