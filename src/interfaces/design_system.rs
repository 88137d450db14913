use eframe::egui;

/// Dark dashboard design system
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(11, 13, 18);
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(11, 13, 18);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(23, 27, 35);
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(30, 35, 44);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(15, 18, 24);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 138, 34); // Dispatch orange
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(255, 171, 94);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 214, 110);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 61, 81);
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 196, 0);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(100);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    // Chart series
    pub const STAGE_BEFORE: egui::Color32 = egui::Color32::from_rgb(94, 129, 244);
    pub const STAGE_AFTER: egui::Color32 = egui::Color32::from_rgb(0, 214, 110);
    pub const PERIOD_SERIES: [egui::Color32; 3] = [
        egui::Color32::from_rgb(255, 138, 34),
        egui::Color32::from_rgb(94, 129, 244),
        egui::Color32::from_rgb(171, 71, 188),
    ];
    const PARTNER_SERIES: [egui::Color32; 5] = [
        egui::Color32::from_rgb(255, 138, 34),
        egui::Color32::from_rgb(94, 129, 244),
        egui::Color32::from_rgb(0, 214, 110),
        egui::Color32::from_rgb(171, 71, 188),
        egui::Color32::from_rgb(38, 198, 218),
    ];

    // --- Metrics ---

    pub const ROUNDING_SMALL: u8 = 4;
    pub const ROUNDING_MEDIUM: u8 = 8;
    pub const ROUNDING_LARGE: u8 = 12;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    /// Stable per-partner series color, keyed by position in the sorted
    /// partner axis.
    pub fn partner_color(index: usize) -> egui::Color32 {
        Self::PARTNER_SERIES[index % Self::PARTNER_SERIES.len()]
    }

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard card styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }
}
