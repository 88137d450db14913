use crate::application::app::DashboardApp;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Collapsible bottom panel showing tracing output routed through the
/// log channel.
pub fn render_logs_panel(app: &mut DashboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("logs_panel")
        .resizable(true)
        .default_height(180.0)
        .min_height(30.0)
        .show_animated(ctx, !app.logs_collapsed, |ui| {
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .id_salt("logs_scroll")
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &app.log_lines {
                        let color = if line.contains("ERROR") {
                            DesignSystem::DANGER
                        } else if line.contains("WARN") {
                            DesignSystem::WARNING
                        } else {
                            egui::Color32::from_gray(200)
                        };
                        ui.label(egui::RichText::new(line).size(10.0).color(color));
                    }
                });
        });

    egui::TopBottomPanel::bottom("logs_toggle")
        .exact_height(25.0)
        .frame(
            egui::Frame::NONE
                .fill(DesignSystem::BG_CARD)
                .inner_margin(egui::Margin::symmetric(8, 4)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if app.logs_collapsed {
                    "Show Logs"
                } else {
                    "Hide Logs"
                };
                if ui
                    .button(
                        egui::RichText::new(button_text)
                            .size(11.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    )
                    .clicked()
                {
                    app.logs_collapsed = !app.logs_collapsed;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} lines", app.log_lines.len()))
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
            });
        });
}
