//! Header: source selector dropdown, refresh button, CSV export button.

use eframe::egui;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, DOWNLOAD_SIMPLE};

use crate::data::dataset::EventDataset;
use crate::transport::SourceId;

/// Operator action triggered from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    /// A different source was picked in the dropdown.
    Select(SourceId),
    /// The refresh button was pressed.
    Refresh,
    /// The CSV export button was pressed.
    ExportCsv,
}

/// Label shown in the selector: display name, falling back to the id for
/// placeholder sources that have not been named by a fetch yet.
fn selector_label(name: &str, id: &str) -> String {
    if name.is_empty() {
        id.to_string()
    } else {
        name.to_string()
    }
}

pub(crate) fn header_contents(
    ui: &mut egui::Ui,
    dataset: &EventDataset,
    selected: Option<&SourceId>,
    show_export: bool,
) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let selected_text = selected
            .and_then(|id| dataset.get(id).map(|s| selector_label(&s.name, &s.id)))
            .unwrap_or_default();
        egui::ComboBox::from_id_salt("msgscope_source_select")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for source in dataset.iter_in_order() {
                    let is_selected = selected.map(|s| s.as_str()) == Some(source.id.as_str());
                    if ui
                        .selectable_label(is_selected, selector_label(&source.name, &source.id))
                        .clicked()
                        && !is_selected
                    {
                        action = Some(HeaderAction::Select(source.id.clone()));
                    }
                }
            });

        if ui
            .button(format!("{ARROWS_CLOCKWISE}"))
            .on_hover_text("Refresh source list")
            .clicked()
        {
            action = Some(HeaderAction::Refresh);
        }

        if show_export
            && ui
                .button(format!("{DOWNLOAD_SIMPLE} CSV"))
                .on_hover_text("Export the selected source's events to CSV")
                .clicked()
        {
            action = Some(HeaderAction::ExportCsv);
        }
    });

    action
}
