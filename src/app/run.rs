//! Top-level entry point for running the dashboard as a native window.

use eframe::egui;

use crate::app::MsgScopeApp;
use crate::config::MsgScopeConfig;
use crate::transport::MessengerConnection;

/// Launch the dashboard in a native window.
///
/// Constructs a [`MsgScopeApp`] from the connection and configuration,
/// installs the Phosphor icon font, opens a native window, and enters the
/// eframe event loop. The call blocks until the window is closed.
pub fn run_msgscope(
    connection: MessengerConnection,
    mut cfg: MsgScopeConfig,
) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a reasonable default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1100.0, 750.0));
    }

    let app = MsgScopeApp::new(connection, &cfg);

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
