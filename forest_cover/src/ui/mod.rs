mod hud;
mod panel;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub use hud::hud_plugin;
pub use panel::panel_plugin;

fn ensure_egui(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
}

/// Logged at startup when the viewer runs without the control panel, e.g. inside
/// a headset where only controller input is available.
pub fn warn_panel_missing() {
    warn!("control panel disabled; country and year changes come from controller input only");
}
