use crate::application::app::DashboardApp;
use crate::domain::dispatch::{Location, Partner, MAX_ORDERS_PER_ENTRY};
use crate::interfaces::components::metrics::{render_metric_card, render_status_pill};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::DashboardViewModel;
use eframe::egui;

/// Renders the "Real-time Delivery Input" form at the top of the sidebar
pub fn render_input_form(ui: &mut egui::Ui, app: &mut DashboardApp) {
    ui.label(
        egui::RichText::new("REAL-TIME DELIVERY INPUT")
            .size(12.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    egui::Grid::new("delivery_input_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Partner");
            egui::ComboBox::from_id_salt("partner_select")
                .selected_text(app.input_partner.to_string())
                .show_ui(ui, |ui| {
                    for partner in Partner::ALL {
                        ui.selectable_value(
                            &mut app.input_partner,
                            partner,
                            partner.to_string(),
                        );
                    }
                });
            ui.end_row();

            ui.label("New Orders");
            ui.add(
                egui::DragValue::new(&mut app.input_orders)
                    .range(1..=MAX_ORDERS_PER_ENTRY)
                    .speed(1),
            );
            ui.end_row();

            ui.label("Location");
            egui::ComboBox::from_id_salt("location_select")
                .selected_text(app.input_location.to_string())
                .show_ui(ui, |ui| {
                    for location in Location::ALL {
                        ui.selectable_value(
                            &mut app.input_location,
                            location,
                            location.to_string(),
                        );
                    }
                });
            ui.end_row();
        });

    ui.add_space(DesignSystem::SPACING_SMALL);

    let button = egui::Button::new(
        egui::RichText::new("➕ Add Delivery")
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(DesignSystem::ACCENT_PRIMARY)
    .min_size(egui::vec2(ui.available_width(), 30.0));

    if ui.add(button).clicked() {
        app.submit_delivery();
    }

    if let Some(status) = &app.last_status {
        ui.add_space(DesignSystem::SPACING_SMALL);
        let color = if status.is_error {
            DesignSystem::DANGER
        } else {
            DesignSystem::SUCCESS
        };
        render_status_pill(ui, &status.message, color);
    }
}

/// Renders the "Order Processing Metrics" card stack
pub fn render_order_metrics(ui: &mut egui::Ui, vm: &DashboardViewModel) {
    ui.label(
        egui::RichText::new("ORDER PROCESSING METRICS")
            .size(12.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    render_metric_card(
        ui,
        "Currently Active Drivers",
        &vm.active_drivers.to_string(),
        DesignSystem::TEXT_PRIMARY,
        None,
        Some("🚚"),
        false,
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    render_metric_card(
        ui,
        "Orders Processed Today",
        &vm.grand_total.to_string(),
        DesignSystem::ACCENT_PRIMARY,
        None,
        Some("📦"),
        false,
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    render_metric_card(
        ui,
        "Orders This Week",
        &vm.orders_week.to_string(),
        DesignSystem::TEXT_PRIMARY,
        Some("at today's volume"),
        Some("📦"),
        false,
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    render_metric_card(
        ui,
        "Orders This Month",
        &vm.orders_month.to_string(),
        DesignSystem::TEXT_PRIMARY,
        Some("at today's volume"),
        Some("📦"),
        false,
    );
}

/// Renders the "Optimization Savings" card stack
pub fn render_savings_metrics(ui: &mut egui::Ui, vm: &DashboardViewModel) {
    ui.label(
        egui::RichText::new("OPTIMIZATION SAVINGS")
            .size(12.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    render_metric_card(
        ui,
        "Fuel Saved",
        &vm.fuel_saved,
        DesignSystem::SUCCESS,
        None,
        Some("⛽"),
        false,
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    render_metric_card(
        ui,
        "Manpower Saved",
        &vm.manpower_saved,
        DesignSystem::SUCCESS,
        None,
        Some("🧑‍🔧"),
        false,
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    render_metric_card(
        ui,
        "Total Cost Saved",
        &vm.cost_saved,
        DesignSystem::SUCCESS,
        None,
        Some("💰"),
        true,
    );
}
