//! Input sources that drive the forest: keyboard and controller polling. The
//! control panel in `ui` writes the same commands.

mod debounce;
mod gamepad;
mod keyboard;

use bevy::prelude::*;

pub use debounce::{AxisTrigger, ButtonTrigger, Cooldown};
pub use gamepad::{gamepad_plugin, ControllerTriggers, InputSettings};
pub use keyboard::keyboard_plugin;

/// A requested change to the visualization state.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum ForestCommand {
    /// Country at this dataset index; out-of-range indices wrap.
    SelectCountry(usize),
    SelectIso(String),
    NextCountry,
    /// Move the year by this many years (clamped to the range).
    StepYear(i32),
    SetYear(u16),
    /// One step forward, wrapping to the first year.
    CycleYear,
    ToggleImmersive,
}
