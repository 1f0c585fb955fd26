use std::time::Duration;

use bevy::{log, prelude::Vec3};

use crate::{
    camera::ScreenToWorld,
    config::SelectorConfig,
    error::SelectorError,
    input::PointerInput,
    marker::MarkerHandle,
    observers::{SubscriptionId, TargetObservers},
};

/// Drop a projected point onto the ground plane, discarding its height.
pub fn flatten_to_ground(world: Vec3, ground_height: f32) -> Vec3 {
    Vec3::new(world.x, ground_height, world.z)
}

/// Drives a crosshair from the pointer and snapshots it into a target marker
/// when the select action fires.
///
/// The selector holds no thread or timer; the host calls [`tick`] once per
/// frame after sampling input and before anything that reacts to a selection.
/// Input is enabled on construction and released again when the selector is
/// dropped.
///
/// [`tick`]: PointerTargetSelector::tick
pub struct PointerTargetSelector<I: PointerInput, M: MarkerHandle> {
    config: SelectorConfig,
    input: I,
    crosshair: M,
    target: M,
    observers: TargetObservers,
    camera_missing: bool,
    elapsed: Duration,
}

impl<I: PointerInput, M: MarkerHandle> PointerTargetSelector<I, M> {
    pub fn new(config: SelectorConfig, input: I, crosshair: M, mut target: M) -> Self {
        target.set_visible(config.target_visible_on_start);

        let mut selector = Self {
            config,
            input,
            crosshair,
            target,
            observers: TargetObservers::default(),
            camera_missing: false,
            elapsed: Duration::ZERO,
        };
        selector.activate();
        selector
    }

    pub fn activate(&mut self) {
        self.input.set_enabled(true);
    }

    pub fn deactivate(&mut self) {
        self.input.set_enabled(false);
    }

    pub fn is_active(&self) -> bool {
        self.input.is_enabled()
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn crosshair(&self) -> &M {
        &self.crosshair
    }

    pub fn target(&self) -> &M {
        &self.target
    }

    /// `true` while the last tick ran without a camera.
    pub fn camera_missing(&self) -> bool {
        self.camera_missing
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(Vec3) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Advance one frame. Returns the selected position if select fired.
    pub fn tick(&mut self, delta: Duration, camera: Option<&dyn ScreenToWorld>) -> Option<Vec3> {
        self.elapsed += delta;
        self.move_crosshair(camera);
        self.select_target()
    }

    fn move_crosshair(&mut self, camera: Option<&dyn ScreenToWorld>) {
        let Some(camera) = camera else {
            if !self.camera_missing {
                log::warn!("{}", SelectorError::NoActiveCamera);
                self.camera_missing = true;
            }
            return;
        };

        if self.camera_missing {
            log::info!("world camera available again");
            self.camera_missing = false;
        }

        let Some(screen) = self.input.pointer_position() else {
            return;
        };

        let Some(world) = camera.screen_to_world(screen, self.config.projection_depth) else {
            log::debug!("pointer {screen} did not project into the world");
            return;
        };

        let position = flatten_to_ground(world, self.config.ground_height);
        if position != self.crosshair.position() {
            self.crosshair.set_position(position);
            log::debug!("crosshair moved to {position}");
        }
    }

    fn select_target(&mut self) -> Option<Vec3> {
        if !self.input.select_triggered() {
            return None;
        }

        self.target.set_visible(true);
        self.target.set_position(self.crosshair.position());

        let position = self.target.position();
        log::info!(
            "target selected at {position} ({:.1}s in)",
            self.elapsed.as_secs_f32()
        );

        self.observers.notify(position);
        Some(position)
    }
}

impl<I: PointerInput, M: MarkerHandle> Drop for PointerTargetSelector<I, M> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl<I: PointerInput, M: MarkerHandle> std::fmt::Debug for PointerTargetSelector<I, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerTargetSelector")
            .field("config", &self.config)
            .field("crosshair", &self.crosshair.position())
            .field("target", &self.target.position())
            .field("target_visible", &self.target.is_visible())
            .field("observers", &self.observers)
            .finish()
    }
}
