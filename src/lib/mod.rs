//! Pointer-driven crosshair and click-to-target selection for the marble game.
//!
//! [`selector::PointerTargetSelector`] is the engine-agnostic core;
//! [`plugin::PointerTargetPlugin`] wires it into a Bevy app.

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod marker;
pub mod observers;
pub mod plugin;
pub mod selector;

pub use config::{PointerBindings, SelectorConfig};
pub use error::SelectorError;
pub use plugin::{PointerSet, PointerTargetPlugin, Selector, TargetSelected};
