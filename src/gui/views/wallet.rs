//! Wallet view implementation
//!
//! Connect prompt, account card, send form and receive card, plus the
//! transient status line. All state lives in `WalletPage`; this file only
//! draws it and forwards clicks.

use crate::config::{get_address_explorer_url, get_tx_explorer_url};
use crate::gui::app::{GuiApp, GuiSection};
use crate::utils;
use crate::wallet_page::{SendPhase, UiStatus};
use eframe::egui::{self, RichText};

impl GuiApp {
    pub(crate) fn view_wallet(&mut self, ui: &mut egui::Ui) {
        if ui.add(self.theme.button_small("← Back")).clicked() {
            self.navigate(GuiSection::Home);
            return;
        }
        ui.add_space(self.theme.spacing_sm);

        let token = self.config.native_token().to_string();
        ui.vertical_centered(|ui| {
            ui.heading(format!("{} Wallet", token));
            ui.label(
                RichText::new(format!("Manage your {} transactions", self.config.network_label()))
                    .color(self.theme.text_secondary),
            );
        });
        ui.add_space(self.theme.spacing_md);

        let panels = self.page.visible_panels();
        if panels.connect_prompt {
            self.render_connect_card(ui);
        }
        if panels.account {
            self.render_account_card(ui, &token);
            ui.add_space(self.theme.spacing_md);
        }
        if panels.send {
            self.render_send_card(ui, &token);
            ui.add_space(self.theme.spacing_md);
        }
        if panels.receive {
            self.render_receive_card(ui, &token);
        }

        ui.add_space(self.theme.spacing_md);
        self.render_status(ui);
    }

    fn render_connect_card(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let connecting = self.connect_job.is_some();
        theme.frame_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🔐").size(40.0));
                ui.label(RichText::new("Connect Your Wallet").size(20.0).strong());
                ui.label(
                    RichText::new("Connect your wallet endpoint to get started")
                        .color(theme.text_secondary),
                );
                ui.label(
                    RichText::new(&self.config.rpc_url)
                        .monospace()
                        .small()
                        .color(theme.text_secondary),
                );
                ui.add_space(theme.spacing_md);
                let label = if connecting { "Connecting..." } else { "Connect Wallet" };
                if ui.add_enabled(!connecting, theme.button_large(label)).clicked() {
                    self.start_connect();
                }
            });
        });
    }

    fn render_account_card(&mut self, ui: &mut egui::Ui, token: &str) {
        let theme = self.theme;
        theme.frame_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Your Account").size(16.0).strong());
            ui.add_space(theme.spacing_sm);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(self.short_account())
                        .monospace()
                        .size(16.0)
                        .color(theme.accent),
                );
                if ui
                    .add(theme.button_small("📋"))
                    .on_hover_text("Copy address")
                    .clicked()
                {
                    self.copy_address(ui);
                }
            });

            ui.add_space(theme.spacing_sm);
            ui.label(RichText::new("Balance").color(theme.text_secondary));
            let balance = match self.page.balance() {
                Some(balance) => format!("{} {}", balance, token),
                None => "…".to_string(),
            };
            ui.label(RichText::new(balance).size(26.0).strong());
        });
    }

    fn render_send_card(&mut self, ui: &mut egui::Ui, token: &str) {
        let theme = self.theme;
        theme.frame_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("Send {}", token)).size(16.0).strong());
            ui.add_space(theme.spacing_sm);

            let busy = self.page.is_busy();
            ui.label(RichText::new("Recipient Address").color(theme.text_secondary));
            ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(&mut self.page.recipient_input)
                    .hint_text("0x...")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
            ui.label(RichText::new(format!("Amount ({})", token)).color(theme.text_secondary));
            ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(&mut self.page.amount_input)
                    .hint_text("0.0")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(theme.spacing_sm);

            let label = if self.page.send_phase() == SendPhase::Submitting {
                "Processing...".to_string()
            } else {
                format!("Send {}", token)
            };
            if ui
                .add_enabled(self.page.can_submit(), theme.button_large(&label))
                .clicked()
            {
                self.start_send();
            }

            if let Some(tx_hash) = self.page.last_tx() {
                let hash = format!("{:?}", tx_hash);
                ui.add_space(theme.spacing_sm);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Last transaction:").color(theme.text_secondary));
                    ui.label(RichText::new(utils::format_address(&hash)).monospace());
                    if let Some(url) = get_tx_explorer_url(self.config.chain_id, &hash) {
                        if ui.link("View on explorer").clicked() {
                            self.open_url(&url);
                        }
                    }
                });
            }
        });
    }

    fn render_receive_card(&mut self, ui: &mut egui::Ui, token: &str) {
        let Some(account) = self.page.account() else {
            return;
        };
        let address = utils::address_hex(&account);
        let theme = self.theme;
        theme.frame_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("Receive {}", token)).size(16.0).strong());
            ui.add_space(theme.spacing_sm);
            ui.label(RichText::new("Your Address").color(theme.text_secondary));
            ui.label(RichText::new(&address).monospace());
            ui.add_space(theme.spacing_sm);
            ui.horizontal(|ui| {
                if ui.add(theme.button_secondary("Copy")).clicked() {
                    self.copy_address(ui);
                }
                if let Some(url) = get_address_explorer_url(self.config.chain_id, &address) {
                    if ui.link("View on explorer").clicked() {
                        self.open_url(&url);
                    }
                }
            });
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let theme = self.theme;
        match self.page.status() {
            UiStatus::Idle => {}
            UiStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Waiting for wallet...").color(theme.text_secondary));
                });
            }
            UiStatus::Error(message) => {
                theme.frame_message(theme.error).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(format!("⚠ {}", message)).color(theme.error));
                });
            }
            UiStatus::Success(message) => {
                theme.frame_message(theme.success).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(format!("✅ {}", message)).color(theme.success));
                });
            }
        }
    }
}
