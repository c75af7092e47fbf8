//! Centralized theme and styling for the GUI.

use eframe::egui;

#[derive(Clone, Copy)]
pub struct AppTheme {
    // Base colors
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub surface_hover: egui::Color32,
    pub surface_active: egui::Color32,
    pub panel_fill: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,

    // Semantic colors
    pub primary: egui::Color32,
    pub secondary: egui::Color32,
    pub success: egui::Color32,
    pub error: egui::Color32,
    pub accent: egui::Color32,

    // Spacing constants
    pub spacing_xs: f32,
    pub spacing_sm: f32,
    pub spacing_md: f32,
    pub spacing_lg: f32,

    // Button sizes
    pub button_small: egui::Vec2,
    pub button_medium: egui::Vec2,
    pub button_large: egui::Vec2,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            // Deep indigo background with violet/blue gradient accents
            background: egui::Color32::from_rgb(14, 12, 32),
            surface: egui::Color32::from_rgb(28, 24, 58),
            surface_hover: egui::Color32::from_rgb(40, 34, 80),
            surface_active: egui::Color32::from_rgb(52, 44, 100),
            panel_fill: egui::Color32::from_rgb(20, 17, 44),
            text_primary: egui::Color32::from_rgb(240, 238, 255),
            text_secondary: egui::Color32::from_rgb(160, 155, 195),

            primary: egui::Color32::from_rgb(118, 87, 255), // #7657ff
            secondary: egui::Color32::from_rgb(70, 64, 110),
            success: egui::Color32::from_rgb(52, 211, 153),
            error: egui::Color32::from_rgb(248, 113, 113),
            accent: egui::Color32::from_rgb(56, 189, 248),

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 28.0,

            button_small: egui::vec2(64.0, 26.0),
            button_medium: egui::vec2(140.0, 36.0),
            button_large: egui::vec2(220.0, 44.0),
        }
    }
}

impl AppTheme {
    /// Filled call-to-action button
    pub fn button_primary(&self, text: &str) -> egui::Button<'static> {
        egui::Button::new(
            egui::RichText::new(text)
                .color(egui::Color32::WHITE)
                .strong(),
        )
        .fill(self.primary)
        .rounding(8.0)
        .min_size(self.button_medium)
    }

    /// Wide variant of the primary button for the main action of a card
    pub fn button_large(&self, text: &str) -> egui::Button<'static> {
        self.button_primary(text).min_size(self.button_large)
    }

    /// Outlined button
    pub fn button_secondary(&self, text: &str) -> egui::Button<'static> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary))
            .fill(self.surface)
            .stroke(egui::Stroke::new(1.5, self.secondary))
            .rounding(8.0)
            .min_size(self.button_medium)
    }

    pub fn button_small(&self, text: &str) -> egui::Button<'static> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary))
            .fill(self.secondary)
            .rounding(6.0)
            .min_size(self.button_small)
    }

    /// Card frame used for every panel on the pages
    pub fn frame_card(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.surface)
            .rounding(12.0)
            .inner_margin(self.spacing_md)
            .stroke(egui::Stroke::new(1.0, self.secondary))
    }

    /// Status line frame, tinted by outcome
    pub fn frame_message(&self, color: egui::Color32) -> egui::Frame {
        egui::Frame::none()
            .fill(self.panel_fill)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(self.spacing_md, self.spacing_sm))
            .stroke(egui::Stroke::new(1.5, color))
    }
}

/// Configure the egui context style with the given theme
pub fn configure_style(ctx: &egui::Context, theme: &AppTheme) {
    let mut visuals = egui::Visuals::dark();
    visuals.window_fill = theme.background;
    visuals.panel_fill = theme.background;
    visuals.override_text_color = Some(theme.text_primary);
    visuals.extreme_bg_color = theme.panel_fill;

    visuals.widgets.noninteractive.bg_fill = theme.surface;
    visuals.widgets.inactive.bg_fill = theme.surface;
    visuals.widgets.hovered.bg_fill = theme.surface_hover;
    visuals.widgets.active.bg_fill = theme.surface_active;
    visuals.widgets.open.bg_fill = theme.surface_active;

    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.secondary);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.primary);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, theme.primary);
    visuals.selection.bg_fill = theme.primary;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(26.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(15.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::new(13.0, egui::FontFamily::Monospace),
    );
    ctx.set_style(style);
}
