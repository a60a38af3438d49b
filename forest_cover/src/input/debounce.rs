//! Per-frame sampling helpers that turn held controls into discrete triggers.

use std::time::Duration;

/// Fixed window after a trigger during which the same control stays quiet.
#[derive(Debug, Clone)]
pub struct Cooldown {
    window: f32,
    last_fired: Option<f32>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.as_secs_f32(),
            last_fired: None,
        }
    }

    /// Fires if the window since the last firing has passed. `now` is in seconds.
    pub fn try_fire(&mut self, now: f32) -> bool {
        let ready = self.last_fired.map_or(true, |last| now - last >= self.window);
        if ready {
            self.last_fired = Some(now);
        }
        ready
    }
}

/// Button that fires on the press edge, at most once per cooldown window.
#[derive(Debug, Clone)]
pub struct ButtonTrigger {
    cooldown: Cooldown,
    was_pressed: bool,
}

impl ButtonTrigger {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown: Cooldown::new(cooldown),
            was_pressed: false,
        }
    }

    pub fn sample(&mut self, pressed: bool, now: f32) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge && self.cooldown.try_fire(now)
    }
}

/// Stick axis that fires in the deflection direction while held past the
/// threshold, once per cooldown window.
#[derive(Debug, Clone)]
pub struct AxisTrigger {
    threshold: f32,
    cooldown: Cooldown,
}

impl AxisTrigger {
    pub fn new(threshold: f32, cooldown: Duration) -> Self {
        Self {
            threshold,
            cooldown: Cooldown::new(cooldown),
        }
    }

    /// `Some(1)` or `Some(-1)` when the sample triggers.
    pub fn sample(&mut self, value: f32, now: f32) -> Option<i32> {
        if value.abs() <= self.threshold || !self.cooldown.try_fire(now) {
            return None;
        }
        Some(if value > 0.0 { 1 } else { -1 })
    }
}
