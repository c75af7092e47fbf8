//! Main GUI application module
//!
//! Holds the GuiApp struct, job polling, navigation and the top bar. Page
//! bodies live in `views`.

use crate::{
    balance,
    config::{Config, NetworkCategory, NETWORKS},
    connector::{self, WalletSession},
    operation_log,
    provider::RpcWalletProvider,
    transfer,
    types::SendReceipt,
    user_settings::UserSettings,
    utils,
    wallet_page::{BalanceTicket, WalletPage},
};
use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use ethers::types::U256;
use std::time::{Duration, Instant};

use super::async_job::AsyncJob;
use super::theme::{configure_style, AppTheme};

/// Lines of the operation log shown on the home page
const ACTIVITY_LINES: usize = 40;

/// GUI section enum for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuiSection {
    Home,
    Wallet,
}

/// Represents either a built-in network or a custom network selection
#[derive(Clone, Debug, PartialEq)]
pub enum NetworkSelection {
    /// Index into the static NETWORKS array
    Builtin(usize),
    /// Chain ID of a custom network
    Custom(u64),
}

impl NetworkSelection {
    fn from_chain_id(chain_id: u64, settings: &UserSettings) -> Self {
        if settings.get_custom_network(chain_id).is_some() {
            NetworkSelection::Custom(chain_id)
        } else if let Some(idx) = crate::config::find_network_index(chain_id) {
            NetworkSelection::Builtin(idx)
        } else {
            NetworkSelection::Builtin(0)
        }
    }

    fn chain_id(&self) -> u64 {
        match self {
            NetworkSelection::Builtin(idx) => NETWORKS[*idx].chain_id,
            NetworkSelection::Custom(chain_id) => *chain_id,
        }
    }
}

type RpcSession = WalletSession<RpcWalletProvider>;

pub struct GuiApp {
    pub(crate) config: Config,
    pub(crate) user_settings: UserSettings,
    pub(crate) theme: AppTheme,
    pub(crate) section: GuiSection,
    pub(crate) page: WalletPage,
    pub(crate) session: Option<RpcSession>,
    pub(crate) connect_job: Option<AsyncJob<RpcSession>>,
    /// Balance read in flight, tagged with the page state it was issued for
    pub(crate) balance_job: Option<(BalanceTicket, AsyncJob<U256>)>,
    pub(crate) send_job: Option<AsyncJob<SendReceipt>>,
    pub(crate) network_selection: NetworkSelection,
    /// RPC endpoint being edited on the home page
    pub(crate) rpc_input: String,
    pub(crate) activity: String,
}

impl GuiApp {
    fn new(config: Config, ctx: &egui::Context) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        let user_settings = UserSettings::load();
        let network_selection = NetworkSelection::from_chain_id(config.chain_id, &user_settings);
        let rpc_input = config.rpc_url.clone();

        let mut app = Self {
            config,
            user_settings,
            theme,
            section: GuiSection::Home,
            page: WalletPage::default(),
            session: None,
            connect_job: None,
            balance_job: None,
            send_job: None,
            network_selection,
            rpc_input,
            activity: String::new(),
        };
        app.refresh_activity();
        app
    }

    pub(crate) fn navigate(&mut self, section: GuiSection) {
        if section == GuiSection::Home && self.section != GuiSection::Home {
            self.refresh_activity();
        }
        self.section = section;
    }

    pub(crate) fn refresh_activity(&mut self) {
        self.activity = match operation_log::read_log_tail(ACTIVITY_LINES) {
            Ok(tail) => tail,
            Err(e) => {
                tracing::warn!("Failed to read operation log: {}", e);
                String::new()
            }
        };
    }

    fn log_operation(&self, operation: &str, details: String) {
        if let Err(e) = operation_log::append_log(operation, self.config.chain_id, details) {
            tracing::warn!("Failed to write operation log: {}", e);
        }
    }

    // ==================== network ====================

    /// Label, native token and chain ID for a selection
    pub(crate) fn network_info(&self, selection: &NetworkSelection) -> (String, String, u64) {
        match selection {
            NetworkSelection::Builtin(idx) => {
                let net = &NETWORKS[*idx];
                (net.label.to_string(), net.native_token.to_string(), net.chain_id)
            }
            NetworkSelection::Custom(chain_id) => match self.user_settings.get_custom_network(*chain_id) {
                Some(net) => (net.label.clone(), net.native_token.clone(), net.chain_id),
                None => ("Unknown".to_string(), "ETH".to_string(), *chain_id),
            },
        }
    }

    /// Rebuild the config from the current selection and drop the session:
    /// a different endpoint means a different provider.
    pub(crate) fn apply_network_selection(&mut self) {
        self.user_settings.selected_chain_id = self.network_selection.chain_id();
        if let Err(e) = self.user_settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
        self.config = self.user_settings.selected_config();
        self.rpc_input = self.config.rpc_url.clone();

        self.session = None;
        self.connect_job = None;
        self.balance_job = None;
        self.send_job = None;
        self.page.reset();
        tracing::info!(
            "Switched to {} (chain {}) via {}",
            self.config.network_label(),
            self.config.chain_id,
            self.config.rpc_url
        );
    }

    /// Persist the RPC endpoint typed on the home page for the current chain.
    pub(crate) fn save_rpc_override(&mut self) {
        let chain_id = self.config.chain_id;
        let input = self.rpc_input.trim().to_string();
        let default_rpc = crate::config::find_network_by_chain_id(chain_id).map(|n| n.default_rpc);
        if default_rpc == Some(input.as_str()) {
            self.user_settings.set_custom_rpc(chain_id, String::new());
        } else {
            self.user_settings.set_custom_rpc(chain_id, input);
        }
        self.network_selection = NetworkSelection::from_chain_id(chain_id, &self.user_settings);
        self.apply_network_selection();
    }

    // ==================== wallet actions ====================

    pub(crate) fn start_connect(&mut self) {
        if self.connect_job.is_some() {
            return;
        }
        let now = Instant::now();
        self.page.begin_connect(now);
        match self.config.wallet_provider() {
            Ok(provider) => {
                tracing::info!("Connecting to {}", provider.endpoint());
                self.connect_job = Some(AsyncJob::spawn(move || connector::connect(provider)));
            }
            Err(e) => {
                tracing::warn!("No provider: {}", e);
                self.page.finish_connect(Err(e), now);
            }
        }
    }

    fn start_balance_refresh(&mut self) {
        let (Some(session), Some(ticket)) = (self.session.clone(), self.page.balance_ticket()) else {
            return;
        };
        let job = AsyncJob::spawn(move || async move {
            balance::read_balance(session.provider(), session.address()).await
        });
        self.balance_job = Some((ticket, job));
    }

    pub(crate) fn start_send(&mut self) {
        if self.send_job.is_some() {
            return;
        }
        let Ok(request) = self.page.prepare_send(Instant::now()) else {
            return;
        };
        let Some(session) = self.session.clone() else {
            self.page.finish_send(
                Err(crate::WalletError::NotConnected),
                self.config.native_token(),
                Instant::now(),
            );
            return;
        };
        self.send_job = Some(AsyncJob::spawn(move || transfer::submit(session, request)));
    }

    pub(crate) fn copy_address(&mut self, ui: &egui::Ui) {
        if let Some(text) = self.page.copy_address(Instant::now()) {
            ui.output_mut(|o| o.copied_text = text);
        }
    }

    fn poll_jobs(&mut self) {
        let now = Instant::now();

        if let Some(job) = &mut self.connect_job {
            if let Some(res) = job.poll() {
                self.connect_job = None;
                match res {
                    Ok(session) => {
                        let address = session.address();
                        self.log_operation("Connect", format!("account {}", session.address_hex()));
                        self.session = Some(session);
                        self.page.finish_connect(Ok(address), now);
                        self.start_balance_refresh();
                    }
                    Err(e) => {
                        self.log_operation("Connect", format!("FAILED: {}", e));
                        self.page.finish_connect(Err(e), now);
                    }
                }
                self.refresh_activity();
            }
        }

        if let Some((ticket, job)) = &mut self.balance_job {
            if let Some(res) = job.poll() {
                let ticket = *ticket;
                self.balance_job = None;
                self.page.apply_balance(ticket, res);
            }
        }

        if let Some(job) = &mut self.send_job {
            if let Some(res) = job.poll() {
                self.send_job = None;
                // The receipt carries a fresher balance than any read in flight.
                self.balance_job = None;
                match &res {
                    Ok(receipt) => self.log_operation(
                        "Send",
                        format!(
                            "{} {} sent\ntx {:?}",
                            receipt.amount_native,
                            self.config.native_token(),
                            receipt.tx_hash
                        ),
                    ),
                    Err(e) => self.log_operation("Send", format!("FAILED: {}", e)),
                }
                self.page.finish_send(res, self.config.native_token(), now);
                self.refresh_activity();
            }
        }

        self.page.tick(now);
    }

    // ==================== top bar ====================

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.panel_fill)
                    .inner_margin(egui::Margin::symmetric(self.theme.spacing_md, self.theme.spacing_sm)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("◆ EthWallet")
                            .size(22.0)
                            .strong()
                            .color(self.theme.primary),
                    );
                    ui.label(
                        RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(11.0)
                            .color(self.theme.text_secondary),
                    );
                    ui.add_space(self.theme.spacing_lg);

                    for (section, label) in [(GuiSection::Home, "Home"), (GuiSection::Wallet, "Wallet")] {
                        let selected = self.section == section;
                        let color = if selected {
                            self.theme.text_primary
                        } else {
                            self.theme.text_secondary
                        };
                        if ui
                            .add(
                                egui::Button::new(RichText::new(label).size(15.0).color(color))
                                    .fill(egui::Color32::TRANSPARENT)
                                    .stroke(egui::Stroke::NONE),
                            )
                            .clicked()
                        {
                            self.navigate(section);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.render_network_selector(ui);
                    });
                });
            });
    }

    fn render_network_selector(&mut self, ui: &mut egui::Ui) {
        let (current_label, current_token, _) = self.network_info(&self.network_selection);
        let mut new_selection: Option<NetworkSelection> = None;

        egui::ComboBox::from_id_source("network_selector")
            .selected_text(format!("{} ({})", current_label, current_token))
            .width(200.0)
            .show_ui(ui, |ui| {
                ui.set_min_width(240.0);
                let mut last_category: Option<NetworkCategory> = None;

                for (idx, network) in NETWORKS.iter().enumerate() {
                    if last_category != Some(network.category) {
                        if last_category.is_some() {
                            ui.separator();
                        }
                        ui.label(
                            RichText::new(network.category.heading())
                                .color(self.theme.text_secondary)
                                .small(),
                        );
                        last_category = Some(network.category);
                    }
                    let label = format!(
                        "{} · {} · #{}",
                        network.label, network.native_token, network.chain_id
                    );
                    let is_selected = self.network_selection == NetworkSelection::Builtin(idx);
                    if ui.selectable_label(is_selected, label).clicked() {
                        new_selection = Some(NetworkSelection::Builtin(idx));
                    }
                }

                if !self.user_settings.custom_networks.is_empty() {
                    ui.separator();
                    ui.label(
                        RichText::new("── Custom Networks ──")
                            .color(self.theme.text_secondary)
                            .small(),
                    );
                    for net in &self.user_settings.custom_networks {
                        let label = format!("{} · {} · #{}", net.label, net.native_token, net.chain_id);
                        let is_selected = self.network_selection == NetworkSelection::Custom(net.chain_id);
                        if ui.selectable_label(is_selected, label).clicked() {
                            new_selection = Some(NetworkSelection::Custom(net.chain_id));
                        }
                    }
                }
            });

        if let Some(selection) = new_selection {
            if selection != self.network_selection {
                self.network_selection = selection;
                self.apply_network_selection();
            }
        }
    }

    /// Open `url` in the system browser, surfacing failures in the log.
    pub(crate) fn open_url(&self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!("Failed to open {}: {}", url, e);
        }
    }

    pub(crate) fn short_account(&self) -> String {
        self.page
            .account()
            .map(|a| utils::format_address(&utils::address_hex(&a)))
            .unwrap_or_default()
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs();
        self.render_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(self.theme.spacing_md);
                    match self.section {
                        GuiSection::Home => self.view_home(ui),
                        GuiSection::Wallet => self.view_wallet(ui),
                    }
                });
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub fn launch(config: Config) -> Result<()> {
    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(config.clone(), &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 760.0])
        .with_min_inner_size([640.0, 520.0]);

    let native_options = NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native("EthWallet", native_options, Box::new(app_creator))
        .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
