// src/ui/dashboard.rs
use eframe::egui;

use crate::report::{
    build_chart, daily_profit_trend, profit_per_product, trend_chart_data, ChartKind,
    ReportSummary, TREND_DAYS,
};
use crate::state::AppState;
use crate::ui::charts::draw_chart;
use crate::utils::format_currency;

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Dashboard");
    ui.add_space(8.0);

    if state.products.is_empty() {
        ui.label("No inventory yet. Load sample data from the File menu to explore.");
        return;
    }

    let per_product = profit_per_product(&state.products, &state.sales);
    let trend = daily_profit_trend(&state.sales, TREND_DAYS);
    let summary = ReportSummary::compute(&per_product, &trend);

    ui.horizontal(|ui| {
        stat_tile(ui, "Total Revenue", &format_currency(summary.total_revenue));
        stat_tile(ui, "Total Profit", &format_currency(summary.total_profit));
        stat_tile(ui, "Profit Margin", &format!("{:.1}%", summary.profit_margin));
        stat_tile(ui, "Items Sold", &summary.total_items.to_string());
    });

    ui.add_space(16.0);
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Daily Profit Trend (Last 30 Days)");
            let spec = build_chart(ChartKind::Line, trend_chart_data(&trend));
            draw_chart(ui, &spec);
        });
    });
}

fn stat_tile(ui: &mut egui::Ui, title: &str, value: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(title);
            ui.strong(value);
        });
    });
}
