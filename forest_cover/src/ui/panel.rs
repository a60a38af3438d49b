//! Control panel: country picker and year slider.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::forest::{ForestController, ViewMode};
use crate::input::ForestCommand;
use crate::ui::ensure_egui;

pub fn panel_plugin(app: &mut App) {
    ensure_egui(app);
    app.add_systems(Update, control_panel_system);
}

fn control_panel_system(
    mut contexts: EguiContexts,
    controller: Option<Res<ForestController>>,
    mut out: EventWriter<ForestCommand>,
) {
    let Some(controller) = controller else {
        return;
    };

    egui::TopBottomPanel::bottom("controls")
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(12, 22, 14, 210))
                .inner_margin(egui::Margin::same(8))
                .corner_radius(egui::CornerRadius::same(0)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(210, 230, 200));

            ui.horizontal(|ui| {
                let selected = controller.selected_index();
                egui::ComboBox::from_id_salt("country")
                    .selected_text(controller.selected().country.as_str())
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for (i, record) in controller.dataset().records.iter().enumerate() {
                            if ui
                                .selectable_label(i == selected, record.country.as_str())
                                .clicked()
                                && i != selected
                            {
                                out.send(ForestCommand::SelectCountry(i));
                            }
                        }
                    });

                ui.separator();

                let years = controller.years();
                let mut year = controller.current_year();
                let slider = egui::Slider::new(&mut year, years.min..=years.max)
                    .step_by(years.step as f64)
                    .text("year");
                if ui.add(slider).changed() && year != controller.current_year() {
                    out.send(ForestCommand::SetYear(year));
                }
                ui.label(controller.current_period().to_string());

                ui.separator();

                let immersive = controller.mode() == ViewMode::Immersive;
                if ui.selectable_label(immersive, "Immersive").clicked() {
                    out.send(ForestCommand::ToggleImmersive);
                }
            });
        });
}
