use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emblem::{CookieEmblem, PerforationStyle};
use crate::geometry::{GeometryError, Point};
use crate::patterns::{PatternMode, ScatterRequest, SizeRange};
use crate::render::{Color, StrokeStyle};
use crate::shapes::{DashPattern, OuterBorder, ShapeDescriptor, ShapeKind, HOLE_SPACING};

/// Errors that can occur while loading, saving or applying settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid emblem settings: {0}")]
    Invalid(#[from] GeometryError),
}

/// Returns the path to the settings file: `~/.config/cookie-emblem/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cookie-emblem");
    path.push("settings.json");
    path
}

/// Persisted emblem settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmblemSettings {
    // Shape
    pub shape: ShapeKind,
    pub size: f64,
    pub corner_radius: f64,

    // Stroke
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub stroke_alpha: f64,

    // Dashes
    pub dashed: bool,
    pub dash_length: f64,
    pub dash_gap: f64,

    // Outer border
    pub outer_border: bool,
    pub border_offset: f64,
    pub border_color: Color,
    pub border_width: f64,
    pub border_alpha: f64,

    // Perforation
    pub perforation: bool,
    pub hole_spacing: f64,
    pub hole_radius: f64,
    pub hole_color: Color,

    // Surface patterns
    pub pattern_count: usize,
    pub pattern_min_radius: f64,
    pub pattern_max_radius: f64,
    pub pattern_min_size: f64,
    pub pattern_max_size: f64,
    pub pattern_mode: PatternMode,
    pub pattern_colors: Vec<Color>,
    /// Fixed seed for reproducible patterns; random when unset
    pub seed: Option<u64>,

    // Canvas
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Fill color of the cookie surface under the emblem, if any
    pub surface_color: Option<Color>,
}

impl Default for EmblemSettings {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            size: 240.0,
            corner_radius: 12.0,

            stroke_color: Color(0x6B3E1F),
            stroke_width: 3.0,
            stroke_alpha: 1.0,

            dashed: false,
            dash_length: 2.0,
            dash_gap: 8.0,

            outer_border: true,
            border_offset: 6.0,
            border_color: Color(0xF5DEB3),
            border_width: 2.0,
            border_alpha: 0.8,

            perforation: true,
            hole_spacing: HOLE_SPACING,
            hole_radius: 2.5,
            hole_color: Color(0x5C3A1E),

            pattern_count: 36,
            pattern_min_radius: 150.0,
            pattern_max_radius: 190.0,
            pattern_min_size: 2.0,
            pattern_max_size: 5.0,
            pattern_mode: PatternMode::Mixed,
            pattern_colors: vec![Color(0x8B5A2B), Color(0xA0522D), Color(0xFFF8DC)],
            seed: None,

            canvas_width: 480.0,
            canvas_height: 480.0,
            surface_color: Some(Color(0xD9A066)),
        }
    }
}

impl EmblemSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific JSON file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to a specific file as pretty JSON.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Build the emblem these settings describe.
    pub fn to_emblem(&self) -> Result<CookieEmblem, GeometryError> {
        let stroke = StrokeStyle::new(self.stroke_color, self.stroke_width, self.stroke_alpha);
        let mut shape = ShapeDescriptor::new(self.shape, self.size)
            .with_corner_radius(self.corner_radius)
            .with_stroke(stroke);
        if self.dashed {
            shape = shape.with_dash(DashPattern::new(self.dash_length, self.dash_gap));
        }

        let mut emblem = CookieEmblem::new(shape.validated()?);

        if self.outer_border {
            let border = OuterBorder::new(
                self.border_offset,
                StrokeStyle::new(self.border_color, self.border_width, self.border_alpha),
            );
            emblem = emblem.with_outer_border(border.validated()?);
        }

        if self.perforation {
            emblem = emblem.with_perforation(PerforationStyle {
                spacing: self.hole_spacing,
                radius: self.hole_radius,
                color: self.hole_color,
            });
        }

        if self.pattern_count > 0 {
            let request = ScatterRequest {
                center: Point::ORIGIN,
                count: self.pattern_count,
                min_radius: self.pattern_min_radius,
                max_radius: self.pattern_max_radius,
                size_range: SizeRange::new(self.pattern_min_size, self.pattern_max_size),
                mode: self.pattern_mode,
                palette: self.pattern_colors.clone(),
            };
            request.validate()?;
            emblem = emblem.with_surface(request);
        }

        Ok(emblem)
    }
}
