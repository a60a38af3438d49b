//! HUD overlay: country, period, tree count, last transition, FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::data::HECTARES_PER_TREE;
use crate::forest::{ForestController, ViewMode};
use crate::scene::DatasetStatus;
use crate::ui::ensure_egui;

pub fn hud_plugin(app: &mut App) {
    ensure_egui(app);
    if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
        app.add_plugins(FrameTimeDiagnosticsPlugin);
    }
    app.add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    controller: Option<Res<ForestController>>,
    status: Res<DatasetStatus>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Forest Cover")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(12, 22, 14, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(210, 230, 200));

            let Some(controller) = controller else {
                match &*status {
                    DatasetStatus::Failed(reason) => {
                        ui.colored_label(egui::Color32::from_rgb(230, 120, 100), reason);
                    }
                    _ => {
                        ui.label("Loading dataset…");
                    }
                }
                return;
            };

            let record = controller.selected();
            ui.label(
                egui::RichText::new(format!("{} ({})", record.country, record.iso))
                    .size(16.0)
                    .color(egui::Color32::from_rgb(120, 220, 120)),
            );
            ui.add_space(4.0);

            ui.label(format!("Period  {}", controller.current_period()));
            ui.label(format!(
                "Trees   {}  (1 = {} ha)",
                controller.tree_count(),
                HECTARES_PER_TREE
            ));
            ui.label(format!("Base    {}", format_hectares(record.basic_ha)));

            if let Some(report) = controller.last_report() {
                ui.label(format!("Last    +{} / -{}", report.planted, report.felled));
            }
            ui.add_space(4.0);

            ui.separator();
            let mode = match controller.mode() {
                ViewMode::Desktop => "desktop",
                ViewMode::Immersive => "immersive",
            };
            ui.label(format!("Mode  {mode}"));
            ui.label(format!("FPS   {fps:.0}"));
        });
}

fn format_hectares(ha: f64) -> String {
    if ha >= 1_000_000.0 {
        format!("{:.1}M ha", ha / 1_000_000.0)
    } else if ha >= 1_000.0 {
        format!("{:.1}K ha", ha / 1_000.0)
    } else {
        format!("{ha:.0} ha")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hectares_are_abbreviated() {
        assert_eq!(format_hectares(950.0), "950 ha");
        assert_eq!(format_hectares(5_000.0), "5.0K ha");
        assert_eq!(format_hectares(2_450_000.0), "2.5M ha");
    }
}
