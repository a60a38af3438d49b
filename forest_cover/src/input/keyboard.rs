use bevy::prelude::*;

use crate::input::ForestCommand;
use crate::scene::{ForestSet, ForestSettings};

pub fn keyboard_plugin(app: &mut App) {
    app.add_systems(Update, keyboard_commands.in_set(ForestSet::Input));
}

/// `N` next country, `Y` cycle year, arrows step the year, `I` toggles immersive.
fn keyboard_commands(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<ForestSettings>,
    mut out: EventWriter<ForestCommand>,
) {
    let step = settings.years.step as i32;

    if keys.just_pressed(KeyCode::KeyN) {
        out.send(ForestCommand::NextCountry);
    }
    if keys.just_pressed(KeyCode::KeyY) {
        out.send(ForestCommand::CycleYear);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        out.send(ForestCommand::StepYear(step));
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        out.send(ForestCommand::StepYear(-step));
    }
    if keys.just_pressed(KeyCode::KeyI) {
        out.send(ForestCommand::ToggleImmersive);
    }
}
