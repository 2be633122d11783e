//! Status strip for the selected source: health badge plus live counters.

use eframe::egui;
use egui_phosphor::regular::{CHECK_CIRCLE, PROHIBIT, WARNING};

use crate::data::dataset::SourceData;

/// Pick the status icon and its hover text for a source.
///
/// Inactive wins over a missing diagnostic API, matching the order in which
/// an operator would have to fix the two conditions.
pub(crate) fn status_badge(source: Option<&SourceData>) -> (&'static str, &'static str) {
    match source {
        Some(s) if !s.active => (WARNING, "Source is not active"),
        Some(s) if !s.exports_diagnostic_api => (PROHIBIT, "Source doesn't export diagnostic API"),
        Some(_) => (CHECK_CIRCLE, "Source is active and exports diagnostic API."),
        None => (WARNING, "No source selected"),
    }
}

fn count_badge(ui: &mut egui::Ui, label: &str, value: u64, hover: &str) {
    ui.label(label);
    ui.label(egui::RichText::new(value.to_string()).strong())
        .on_hover_text(hover.to_string());
    ui.add_space(8.0);
}

pub(crate) fn info_strip_contents(ui: &mut egui::Ui, source: Option<&SourceData>) {
    ui.horizontal(|ui| {
        ui.label("Status:");
        let (icon, hover) = status_badge(source);
        ui.label(icon).on_hover_text(hover);
        ui.add_space(8.0);

        let info = source.and_then(|s| s.info);
        count_badge(
            ui,
            "Views:",
            info.map_or(0, |i| u64::from(i.views)),
            "Number of attached views.",
        );
        count_badge(
            ui,
            "Listeners:",
            info.map_or(0, |i| u64::from(i.listeners)),
            "Number of registered diagnostic listeners.",
        );
        count_badge(
            ui,
            "Pend. Requests:",
            info.map_or(0, |i| u64::from(i.pending_requests)),
            "Number of pending requests.",
        );
        count_badge(
            ui,
            "Events:",
            source.map_or(0, |s| s.events.len() as u64),
            "Number of recorded events for this source.",
        );
    });
}
