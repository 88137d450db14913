use crate::interfaces::dashboard_components::partner_charts::partner_axis_formatter;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{DashboardViewModel, PartnerRow};
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

/// Per-partner cost savings, grouped by projection period
pub fn render_savings_chart(ui: &mut egui::Ui, vm: &DashboardViewModel) {
    let periods: [(&str, fn(&PartnerRow) -> f64, f64); 3] = [
        ("Per Day", |row| row.savings_day, -0.25),
        ("Per Week", |row| row.savings_week, 0.0),
        ("Per Month", |row| row.savings_month, 0.25),
    ];

    Plot::new("partner_savings")
        .height(260.0)
        .show_grid([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_formatter(partner_axis_formatter(vm.partner_labels()))
        .show(ui, |plot_ui| {
            for (series, (label, value_of, offset)) in periods.into_iter().enumerate() {
                let bars: Vec<Bar> = vm
                    .partner_rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        Bar::new(i as f64 + offset, value_of(row))
                            .width(0.22)
                            .fill(DesignSystem::PERIOD_SERIES[series])
                            .name(row.partner.as_str())
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(label, bars).color(DesignSystem::PERIOD_SERIES[series]),
                );
            }
        });
}
