//! View modules for the GUI
//!
//! Each submodule adds a `view_*` method to `GuiApp` that draws one page
//! into the central panel. They are called from `App::update` in `app.rs`.
//!
//! - `home` - Landing page with network settings and recent activity
//! - `wallet` - Connect, balance, send and receive

pub mod home;
pub mod wallet;
