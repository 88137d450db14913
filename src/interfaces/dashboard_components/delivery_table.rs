use crate::domain::dispatch::DeliveryRecord;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// The session table, sorted descending by order count
pub fn render_delivery_table(ui: &mut egui::Ui, rows: &[&DeliveryRecord]) {
    egui::ScrollArea::vertical()
        .id_salt("delivery_table_scroll")
        .max_height(240.0)
        .show(ui, |ui| {
            egui::Grid::new("delivery_table_grid")
                .striped(true)
                .min_col_width(90.0)
                .spacing([18.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("PARTNER").strong().size(11.0));
                    ui.label(egui::RichText::new("ORDERS").strong().size(11.0));
                    ui.label(egui::RichText::new("LOCATION").strong().size(11.0));
                    ui.label(egui::RichText::new("TIME").strong().size(11.0));
                    ui.end_row();

                    for record in rows {
                        ui.label(
                            egui::RichText::new(record.partner.as_str())
                                .strong()
                                .color(DesignSystem::ACCENT_SECONDARY),
                        );
                        ui.label(record.orders.to_string());
                        ui.label(record.location.as_str());
                        ui.label(
                            egui::RichText::new(
                                record.timestamp.format("%b %d %H:%M").to_string(),
                            )
                            .color(DesignSystem::TEXT_MUTED),
                        );
                        ui.end_row();
                    }

                    if rows.is_empty() {
                        ui.label(
                            egui::RichText::new("No deliveries yet.")
                                .color(DesignSystem::TEXT_MUTED)
                                .italics(),
                        );
                        ui.end_row();
                    }
                });
        });
}
