//! Editor tunables.

use crate::curve::DEFAULT_PRECISION;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Configuration for the curve editor.
///
/// All distances are in window pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum distance between cursor and control point for a pick.
    pub capture_radius: f32,
    /// Two presses closer than this (milliseconds) form an insert gesture.
    pub double_click_ms: u64,
    /// Two presses further apart than this are never an insert gesture.
    pub double_click_distance: f64,
    /// Precision multiplier per wheel step: `precision *= 1 + k * delta`.
    pub precision_sensitivity: f32,
    /// Parametric step used at startup.
    pub default_precision: f32,
    /// Control points present at startup.
    pub initial_points: Vec<Vec2>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            capture_radius: 10.0,
            double_click_ms: 300,
            double_click_distance: 5.0,
            precision_sensitivity: 0.1,
            default_precision: DEFAULT_PRECISION,
            initial_points: vec![
                Vec2::new(100.0, 450.0),
                Vec2::new(150.0, 480.0),
                Vec2::new(210.0, 450.0),
                Vec2::new(40.0, 200.0),
                Vec2::new(340.0, 490.0),
            ],
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
