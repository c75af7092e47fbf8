//! GUI module for the EthWallet application
//!
//! This module provides the graphical user interface built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main GuiApp struct, navigation, job polling and the top bar
//! - `async_job` - One-shot background jobs polled every frame
//! - `theme` - Centralized theme and styling system (AppTheme)
//! - `views` - Page bodies (home, wallet)
//!
//! ## Usage
//!
//! ```no_run
//! use ethwallet::config::Config;
//! use ethwallet::gui;
//!
//! let config = Config::default();
//! gui::launch(config).expect("Failed to launch GUI");
//! ```

mod app;
pub mod async_job;
pub mod theme;
pub mod views;

pub use app::{launch, GuiApp, GuiSection};

pub use async_job::AsyncJob;
pub use theme::{configure_style, AppTheme};
