use crate::application::app::DashboardApp;
use crate::interfaces::components::card::Card;
use crate::interfaces::dashboard_components::{
    delivery_table, earnings_panel, logs_panel, partner_charts, savings_panel, sidebar,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::DashboardViewModel;
use chrono::Utc;
use eframe::egui;

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // Pull pending tracing output into the logs panel buffer
        self.drain_logs();

        // One snapshot per frame; every panel renders from it
        let snapshot = self.session.snapshot();
        let vm = DashboardViewModel::from_snapshot(&snapshot, self.session.rates());

        // --- Top status bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📦 Fleetboard");
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "Time (UTC): {}",
                        Utc::now().format("%H:%M:%S")
                    ))
                    .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("● LIVE")
                            .color(DesignSystem::SUCCESS)
                            .small(),
                    );
                });
            });
        });

        // --- Bottom: system logs ---
        logs_panel::render_logs_panel(self, ctx);

        // --- Left sidebar: input form + metric cards ---
        egui::SidePanel::left("sidebar")
            .default_width(300.0)
            .min_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_scroll")
                    .show(ui, |ui| {
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        sidebar::render_input_form(ui, self);
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        ui.separator();
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        sidebar::render_order_metrics(ui, &vm);
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        ui.separator();
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        sidebar::render_savings_metrics(ui, &vm);
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                    });
            });

        // --- Central panel: charts and the delivery table ---
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    ui.heading("Delivery Optimization Dashboard");
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    ui.columns(2, |columns| {
                        Card::new()
                            .title("BEFORE OPTIMIZATION: DELIVERIES PER PARTNER")
                            .show(&mut columns[0], |ui| {
                                partner_charts::render_before_chart(ui, &vm);
                            });
                        Card::new()
                            .title("AFTER OPTIMIZATION: MERGED DELIVERIES")
                            .show(&mut columns[1], |ui| {
                                partner_charts::render_after_chart(ui, &vm);
                            });
                    });

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    Card::new()
                        .title("📊 ORDERS BEFORE VS AFTER OPTIMIZATION")
                        .show(ui, |ui| {
                            partner_charts::render_comparison_chart(ui, &vm);
                        });

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    ui.columns(2, |columns| {
                        Card::new().title("📍 RECENT DELIVERIES").show(
                            &mut columns[0],
                            |ui| {
                                let rows = self.session.log().sorted_by_orders_desc();
                                delivery_table::render_delivery_table(ui, &rows);
                            },
                        );
                        Card::new()
                            .title("💰 AGGREGATOR EARNINGS (INR)")
                            .show(&mut columns[1], |ui| {
                                earnings_panel::render_earnings_chart(ui, &vm);
                            });
                    });

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    Card::new()
                        .title("💸 COST SAVINGS PER PARTNER")
                        .show(ui, |ui| {
                            savings_panel::render_savings_chart(ui, &vm);
                        });
                    ui.add_space(DesignSystem::SPACING_LARGE);
                });
        });

        // Keep the clock and logs fresh without user input
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
