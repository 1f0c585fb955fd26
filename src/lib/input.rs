use bevy::prelude::Vec2;

/// A pointer device as the selector sees it.
pub trait PointerInput {
    /// Latest pointer position in screen space, if one was ever sampled.
    fn pointer_position(&self) -> Option<Vec2>;

    /// Pointer movement accumulated during the current frame.
    fn pointer_delta(&self) -> Vec2;

    /// `true` only on the frame the select action went from released to pressed.
    fn select_triggered(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;
}

/// Turns a level signal into rising edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeTrigger {
    level: bool,
}

impl EdgeTrigger {
    /// Feed this frame's level; returns `true` on a rising edge only.
    pub fn update(&mut self, level: bool) -> bool {
        let rising = level && !self.level;
        self.level = level;
        rising
    }

    pub fn reset(&mut self) {
        self.level = false;
    }
}

/// Pointer state sampled once per frame from the host input backend.
#[derive(Debug, Default, Clone)]
pub struct PointerActions {
    enabled: bool,
    position: Option<Vec2>,
    delta: Vec2,
    select: EdgeTrigger,
    triggered: bool,
}

impl PointerActions {
    /// Record one frame of input.
    ///
    /// A `None` cursor (pointer outside the window) keeps the last known
    /// position. Nothing is recorded while the source is disabled.
    pub fn sample(&mut self, cursor: Option<Vec2>, delta: Vec2, select_level: bool) {
        self.delta = Vec2::ZERO;
        self.triggered = false;

        if !self.enabled {
            return;
        }

        if cursor.is_some() {
            self.position = cursor;
        }
        self.delta = delta;
        self.triggered = self.select.update(select_level);
    }
}

impl PointerInput for PointerActions {
    fn pointer_position(&self) -> Option<Vec2> {
        self.position
    }

    fn pointer_delta(&self) -> Vec2 {
        self.delta
    }

    fn select_triggered(&self) -> bool {
        self.enabled && self.triggered
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }

        self.enabled = enabled;
        self.delta = Vec2::ZERO;
        self.triggered = false;
        self.select.reset();
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> PointerActions {
        let mut actions = PointerActions::default();
        actions.set_enabled(true);
        actions
    }

    #[test]
    fn held_select_fires_once() {
        let mut actions = enabled();
        let mut fired = Vec::new();

        for _frame in 1..=5 {
            actions.sample(Some(Vec2::new(10., 10.)), Vec2::ZERO, true);
            fired.push(actions.select_triggered());
        }

        assert_eq!(fired, vec![true, false, false, false, false]);
    }

    #[test]
    fn release_and_press_again_fires_again() {
        let mut actions = enabled();
        let levels = [true, true, false, true, false];

        let fired: Vec<bool> = levels
            .iter()
            .map(|level| {
                actions.sample(None, Vec2::ZERO, *level);
                actions.select_triggered()
            })
            .collect();

        assert_eq!(fired, vec![true, false, false, true, false]);
    }

    #[test]
    fn keeps_last_position_when_cursor_leaves() {
        let mut actions = enabled();
        assert_eq!(actions.pointer_position(), None);

        actions.sample(Some(Vec2::new(4., 2.)), Vec2::new(1., 0.), false);
        actions.sample(None, Vec2::ZERO, false);

        assert_eq!(actions.pointer_position(), Some(Vec2::new(4., 2.)));
        assert_eq!(actions.pointer_delta(), Vec2::ZERO);
    }

    #[test]
    fn disabled_source_ignores_input() {
        let mut actions = PointerActions::default();
        actions.sample(Some(Vec2::ONE), Vec2::ONE, true);

        assert!(!actions.is_enabled());
        assert_eq!(actions.pointer_position(), None);
        assert!(!actions.select_triggered());
    }

    #[test]
    fn reenabling_rearms_select() {
        let mut actions = enabled();
        actions.sample(None, Vec2::ZERO, true);
        assert!(actions.select_triggered());

        actions.set_enabled(false);
        assert!(!actions.select_triggered());

        actions.set_enabled(true);
        actions.sample(None, Vec2::ZERO, true);
        assert!(actions.select_triggered());
    }
}
