use anyhow::Context;
use bevy::{
    input::mouse::MouseButton,
    prelude::{ReflectResource, Resource},
    reflect::Reflect,
};

use crate::error::SelectorError;

pub const PROJECTION_DEPTH_VAR: &str = "MARBLE_PROJECTION_DEPTH";
pub const GROUND_HEIGHT_VAR: &str = "MARBLE_GROUND_HEIGHT";
pub const SHOW_CURSOR_VAR: &str = "MARBLE_SHOW_CURSOR";

/// Tuning for the crosshair projection and the markers' initial state.
///
/// `projection_depth` is the distance in front of the camera, along its view
/// axis, at which the pointer ray is sampled. The sampled point is then
/// dropped onto the plane `y = ground_height`.
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct SelectorConfig {
    pub projection_depth: f32,
    pub ground_height: f32,
    pub target_visible_on_start: bool,
    pub hide_cursor: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            projection_depth: 10.0,
            ground_height: 0.0,
            target_visible_on_start: false,
            hide_cursor: true,
        }
    }
}

impl SelectorConfig {
    /// Defaults overridden by `MARBLE_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(depth) = lookup(PROJECTION_DEPTH_VAR) {
            config.projection_depth = depth
                .trim()
                .parse()
                .with_context(|| format!("{PROJECTION_DEPTH_VAR}={depth:?} is not a number"))?;
        }

        if let Some(height) = lookup(GROUND_HEIGHT_VAR) {
            config.ground_height = height
                .trim()
                .parse()
                .with_context(|| format!("{GROUND_HEIGHT_VAR}={height:?} is not a number"))?;
        }

        if let Some(show) = lookup(SHOW_CURSOR_VAR) {
            config.hide_cursor = !matches!(show.trim(), "1" | "true" | "yes");
        }

        config
            .validate()
            .context("rejected selector config from environment")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SelectorError> {
        if !self.projection_depth.is_finite() || self.projection_depth <= 0. {
            return Err(SelectorError::InvalidConfig(format!(
                "projection depth must be a positive distance, got {}",
                self.projection_depth
            )));
        }

        if !self.ground_height.is_finite() {
            return Err(SelectorError::InvalidConfig(format!(
                "ground height must be finite, got {}",
                self.ground_height
            )));
        }

        Ok(())
    }
}

/// Which mouse button acts as "select".
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerBindings {
    pub select: MouseButton,
}

impl Default for PointerBindings {
    fn default() -> Self {
        Self {
            select: MouseButton::Left,
        }
    }
}
