use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::DashboardViewModel;
use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};
use std::ops::RangeInclusive;

const CHART_HEIGHT: f32 = 240.0;

/// Axis formatter that shows partner names at integer positions
pub fn partner_axis_formatter(
    labels: Vec<String>,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 0.05 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

fn base_plot(id: &str, labels: Vec<String>) -> Plot<'static> {
    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .show_grid([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_formatter(partner_axis_formatter(labels))
}

/// Per-partner order totals as delivered (one colored bar per partner)
pub fn render_before_chart(ui: &mut egui::Ui, vm: &DashboardViewModel) {
    let bars: Vec<Bar> = vm
        .partner_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64, row.orders as f64)
                .width(0.6)
                .fill(DesignSystem::partner_color(i))
                .name(row.partner.as_str())
        })
        .collect();

    base_plot("orders_before", vm.partner_labels()).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new("Before Optimization", bars));
    });
}

/// Per-partner order totals after the merge discount
pub fn render_after_chart(ui: &mut egui::Ui, vm: &DashboardViewModel) {
    let bars: Vec<Bar> = vm
        .partner_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64, row.optimized)
                .width(0.6)
                .fill(DesignSystem::partner_color(i))
                .name(row.partner.as_str())
        })
        .collect();

    base_plot("orders_after", vm.partner_labels()).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new("After Optimization", bars));
    });
}

/// Grouped before-vs-after comparison across partners
pub fn render_comparison_chart(ui: &mut egui::Ui, vm: &DashboardViewModel) {
    let before: Vec<Bar> = vm
        .partner_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64 - 0.18, row.orders as f64)
                .width(0.32)
                .fill(DesignSystem::STAGE_BEFORE)
                .name(row.partner.as_str())
        })
        .collect();
    let after: Vec<Bar> = vm
        .partner_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64 + 0.18, row.optimized)
                .width(0.32)
                .fill(DesignSystem::STAGE_AFTER)
                .name(row.partner.as_str())
        })
        .collect();

    base_plot("orders_comparison", vm.partner_labels())
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new("Before Optimization", before).color(DesignSystem::STAGE_BEFORE),
            );
            plot_ui.bar_chart(
                BarChart::new("After Optimization", after).color(DesignSystem::STAGE_AFTER),
            );
        });
}
