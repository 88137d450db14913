use crate::interfaces::dashboard_components::partner_charts::partner_axis_formatter;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::DashboardViewModel;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

/// Aggregator revenue projected over today / this week / this month
pub fn render_earnings_chart(ui: &mut egui::Ui, vm: &DashboardViewModel) {
    let labels: Vec<String> = vm.earnings.iter().map(|p| p.label.to_string()).collect();
    let bars: Vec<Bar> = vm
        .earnings
        .iter()
        .enumerate()
        .map(|(i, period)| {
            Bar::new(i as f64, period.amount)
                .width(0.5)
                .fill(DesignSystem::PERIOD_SERIES[i % DesignSystem::PERIOD_SERIES.len()])
                .name(period.label)
        })
        .collect();

    Plot::new("aggregator_earnings")
        .height(240.0)
        .show_grid([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_formatter(partner_axis_formatter(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Earnings (INR)", bars));
        });
}
