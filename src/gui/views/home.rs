//! Home view implementation
//!
//! Landing page: tagline, feature list, the network panel and recent activity.

use crate::gui::app::{GuiApp, GuiSection};
use eframe::egui::{self, RichText};

const FEATURES: &[(&str, &str, &str)] = &[
    ("🔐", "Connect", "Use the accounts your wallet endpoint already manages."),
    ("💰", "Balance", "See the native balance of the connected account."),
    ("📤", "Send", "Transfer native tokens; your wallet signs every transaction."),
];

impl GuiApp {
    pub(crate) fn view_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.spacing_lg);
            ui.label(
                RichText::new("Your keys stay with your wallet.")
                    .size(32.0)
                    .strong()
                    .color(self.theme.text_primary),
            );
            ui.add_space(self.theme.spacing_sm);
            ui.label(
                RichText::new("A minimal client for checking balances and sending native tokens.")
                    .size(16.0)
                    .color(self.theme.text_secondary),
            );
            ui.add_space(self.theme.spacing_md);
            if ui.add(self.theme.button_large("Open Wallet →")).clicked() {
                self.navigate(GuiSection::Wallet);
            }
            ui.add_space(self.theme.spacing_lg);
        });

        ui.columns(FEATURES.len(), |columns| {
            for (col, (icon, title, text)) in columns.iter_mut().zip(FEATURES) {
                self.theme.frame_card().show(col, |ui| {
                    ui.set_min_height(90.0);
                    ui.label(RichText::new(*icon).size(24.0));
                    ui.label(RichText::new(*title).size(16.0).strong());
                    ui.label(RichText::new(*text).color(self.theme.text_secondary));
                });
            }
        });

        ui.add_space(self.theme.spacing_lg);
        self.render_network_panel(ui);
        ui.add_space(self.theme.spacing_lg);
        self.render_activity_panel(ui);
    }

    fn render_network_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        theme.frame_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Network").size(16.0).strong());
            ui.add_space(theme.spacing_sm);

            egui::Grid::new("home_network_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label(RichText::new("Network:").color(theme.text_secondary));
                    ui.label(
                        RichText::new(format!(
                            "{} ({})",
                            self.config.network_label(),
                            self.config.native_token()
                        ))
                        .strong(),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Chain ID:").color(theme.text_secondary));
                    ui.label(self.config.chain_id.to_string());
                    ui.end_row();

                    ui.label(RichText::new("Account:").color(theme.text_secondary));
                    if self.page.is_connected() {
                        ui.label(RichText::new(self.short_account()).monospace().color(theme.success));
                    } else {
                        ui.label(RichText::new("Not connected").color(theme.text_secondary));
                    }
                    ui.end_row();
                });

            ui.add_space(theme.spacing_sm);
            ui.label(RichText::new("RPC endpoint").color(theme.text_secondary));
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.rpc_input)
                        .hint_text("http://127.0.0.1:8545")
                        .desired_width(380.0),
                );
                let changed = self.rpc_input.trim() != self.config.rpc_url;
                if ui
                    .add_enabled(changed, theme.button_secondary("Save"))
                    .on_hover_text("Saving reconnects on the new endpoint")
                    .clicked()
                {
                    self.save_rpc_override();
                }
            });
            ui.label(
                RichText::new("The endpoint must expose unlocked accounts and sign eth_sendTransaction.")
                    .small()
                    .color(theme.text_secondary),
            );
        });
    }

    fn render_activity_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        theme.frame_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Recent Activity").size(16.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme.button_small("↻")).on_hover_text("Reload").clicked() {
                        self.refresh_activity();
                    }
                });
            });
            ui.add_space(theme.spacing_sm);

            if self.activity.is_empty() {
                ui.label(
                    RichText::new("No activity yet. Connect a wallet to get started.")
                        .color(theme.text_secondary),
                );
            } else {
                egui::ScrollArea::vertical()
                    .id_source("activity_scroll")
                    .max_height(220.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&self.activity).monospace());
                    });
            }

            ui.add_space(theme.spacing_sm);
            ui.label(
                RichText::new(format!("Log file: {}", crate::operation_log::log_file_path()))
                    .small()
                    .color(theme.text_secondary),
            );
            ui.label(
                RichText::new(format!(
                    "Settings file: {}",
                    crate::user_settings::UserSettings::settings_path_display()
                ))
                .small()
                .color(theme.text_secondary),
            );
        });
    }
}
