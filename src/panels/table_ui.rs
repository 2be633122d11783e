//! Event grid for the selected source, newest first.

use std::collections::VecDeque;

use eframe::egui;
use egui_phosphor::regular::PROHIBIT;
use egui_table::{HeaderRow as EgHeaderRow, Table, TableDelegate};

use crate::transport::MessengerEvent;

const COLUMN_TITLES: [&str; 7] = [
    "Type",
    "Sender",
    "Receiver",
    "Method",
    "Id",
    "Size (chars)",
    "Error",
];

// Delegate for rendering with egui_table
struct EventsDelegate<'a> {
    events: &'a VecDeque<MessengerEvent>,
}

impl<'a> TableDelegate for EventsDelegate<'a> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let col = cell.col_range.start;
        ui.add_space(4.0);
        ui.strong(*COLUMN_TITLES.get(col).unwrap_or(&""));
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        let row = cell.row_nr as usize;
        let col = cell.col_nr;
        let Some(e) = self.events.get(row) else {
            return;
        };
        ui.add_space(4.0);
        match col {
            0 => {
                ui.label(e.kind.label());
                // Failed exchanges get a marker next to the type, with the
                // error text as tooltip.
                if e.is_error() {
                    ui.label(egui::RichText::new(PROHIBIT).color(egui::Color32::LIGHT_RED))
                        .on_hover_text(e.error.clone().unwrap_or_default());
                }
            }
            1 => {
                truncated_label(ui, &e.sender);
            }
            2 => {
                truncated_label(ui, &e.receiver);
            }
            3 => {
                truncated_label(ui, &e.method);
            }
            4 => {
                ui.label(e.correlation_id.as_deref().unwrap_or(""));
            }
            5 => {
                ui.label(e.size.to_string());
            }
            6 => {
                truncated_label(ui, e.error.as_deref().unwrap_or(""));
            }
            _ => {}
        }
    }
}

fn truncated_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(text)
            .truncate()
            .show_tooltip_when_elided(true),
    );
}

pub(crate) fn event_table_contents(ui: &mut egui::Ui, events: &VecDeque<MessengerEvent>) {
    let cols = vec![
        egui_table::Column::new(110.0),
        egui_table::Column::new(180.0),
        egui_table::Column::new(180.0),
        egui_table::Column::new(135.0),
        egui_table::Column::new(90.0),
        egui_table::Column::new(100.0),
        egui_table::Column::new(200.0),
    ];
    let mut delegate = EventsDelegate { events };

    let avail_w = ui.available_width();
    let remaining_h = ui.available_height();
    let (rect, _resp) =
        ui.allocate_exact_size(egui::vec2(avail_w, remaining_h), egui::Sense::hover());
    let ui_builder = egui::UiBuilder::new()
        .max_rect(rect)
        .layout(egui::Layout::left_to_right(egui::Align::Min));
    let mut table_ui = ui.new_child(ui_builder);
    Table::new()
        .id_salt("msgscope_event_table")
        .num_rows(events.len() as u64)
        .columns(cols)
        .headers(vec![EgHeaderRow::new(24.0)])
        .show(&mut table_ui, &mut delegate);
}
