//! Per-sender bar charts: event count and summed payload size.
//!
//! Both charts are fed from one [`SenderAggregate`] so their category axes
//! cannot diverge.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::data::charts::SenderAggregate;

fn sender_axis_formatter(senders: Vec<String>) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        senders
            .get(idx as usize)
            .cloned()
            .unwrap_or_default()
    }
}

fn bar_chart(ui: &mut egui::Ui, id: &str, title: &str, senders: &[String], values: &[u64]) {
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Bar::new(i as f64, v as f64).width(0.6))
        .collect();
    let chart = BarChart::new(title, bars);

    Plot::new(id)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .x_axis_formatter(sender_axis_formatter(senders.to_vec()))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

pub(crate) fn charts_contents(ui: &mut egui::Ui, agg: &SenderAggregate) {
    let half_w = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
    let h = ui.available_height();
    ui.horizontal(|ui| {
        ui.allocate_ui(egui::vec2(half_w, h), |ui| {
            ui.vertical(|ui| {
                ui.strong("Events per sender");
                bar_chart(ui, "msgscope_count_chart", "events", &agg.senders, &agg.counts);
            });
        });
        ui.allocate_ui(egui::vec2(half_w, h), |ui| {
            ui.vertical(|ui| {
                ui.strong("Total size per sender (chars)");
                bar_chart(ui, "msgscope_size_chart", "chars", &agg.senders, &agg.sizes);
            });
        });
    });
}
