//! Controller polling: sampled once per frame, debounced per control.
//!
//! Button index 1 (`East` in the standard layout) moves to the next country, the
//! dominant-hand trigger cycles the year, and the dominant-hand stick steps the
//! year in the deflection direction.

use bevy::prelude::*;

use crate::config::{Handedness, InputTuning};
use crate::input::debounce::{AxisTrigger, ButtonTrigger};
use crate::input::ForestCommand;
use crate::scene::{ForestSet, ForestSettings};

const COUNTRY_BUTTON: GamepadButton = GamepadButton::East;

#[derive(Resource, Clone, Debug, Default)]
pub struct InputSettings(pub InputTuning);

/// Debounce state for every polled control.
#[derive(Resource, Debug)]
pub struct ControllerTriggers {
    pub country: ButtonTrigger,
    pub cycle_year: ButtonTrigger,
    pub year_axis: AxisTrigger,
}

impl ControllerTriggers {
    pub fn new(tuning: &InputTuning) -> Self {
        Self {
            country: ButtonTrigger::new(tuning.cooldown),
            cycle_year: ButtonTrigger::new(tuning.cooldown),
            year_axis: AxisTrigger::new(tuning.axis_threshold, tuning.cooldown),
        }
    }
}

impl FromWorld for ControllerTriggers {
    fn from_world(world: &mut World) -> Self {
        let tuning = world
            .get_resource::<InputSettings>()
            .map(|s| s.0)
            .unwrap_or_default();
        Self::new(&tuning)
    }
}

pub fn gamepad_plugin(app: &mut App) {
    app.init_resource::<InputSettings>()
        .init_resource::<ControllerTriggers>()
        .add_systems(Update, poll_gamepads.in_set(ForestSet::Input));
}

fn dominant_controls(handedness: Handedness) -> (GamepadButton, GamepadAxis) {
    match handedness {
        Handedness::Right => (GamepadButton::RightTrigger, GamepadAxis::RightStickX),
        Handedness::Left => (GamepadButton::LeftTrigger, GamepadAxis::LeftStickX),
    }
}

fn poll_gamepads(
    time: Res<Time>,
    gamepads: Query<&Gamepad>,
    input: Res<InputSettings>,
    settings: Res<ForestSettings>,
    mut triggers: ResMut<ControllerTriggers>,
    mut out: EventWriter<ForestCommand>,
) {
    let now = time.elapsed_secs();
    let (trigger_button, stick_axis) = dominant_controls(input.0.handedness);

    let country_pressed = gamepads.iter().any(|g| g.pressed(COUNTRY_BUTTON));
    let cycle_pressed = gamepads.iter().any(|g| g.pressed(trigger_button));
    let deflection = gamepads
        .iter()
        .filter_map(|g| g.get(stick_axis))
        .max_by(|a, b| a.abs().total_cmp(&b.abs()))
        .unwrap_or(0.0);

    if triggers.country.sample(country_pressed, now) {
        out.send(ForestCommand::NextCountry);
    }
    if triggers.cycle_year.sample(cycle_pressed, now) {
        out.send(ForestCommand::CycleYear);
    }
    if let Some(direction) = triggers.year_axis.sample(deflection, now) {
        out.send(ForestCommand::StepYear(direction * settings.years.step as i32));
    }
}
