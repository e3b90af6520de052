// src/ui/reports.rs
use eframe::egui;

use crate::report::{
    build_chart, daily_profit_trend, distribution_chart_data, profit_chart_data,
    profit_per_product, trend_chart_data, ChartKind, ReportSummary, TREND_DAYS,
};
use crate::state::AppState;
use crate::ui::charts::draw_chart;
use crate::utils::{default_date_range, format_currency};

pub struct ReportActions {
    pub export_csv: bool,
    pub print: bool,
}

/// The reports screen. Returns which of the export/print buttons were
/// clicked so the app can run the file dialog and spooler outside the
/// layout pass.
pub fn show_reports_view(ui: &mut egui::Ui, state: &mut AppState) -> ReportActions {
    let mut actions = ReportActions {
        export_csv: false,
        print: false,
    };

    ui.heading("Reports");
    ui.add_space(8.0);

    if state.date_range.is_empty() {
        state.date_range = default_date_range();
    }

    ui.horizontal(|ui| {
        ui.label("Date range:");
        ui.text_edit_singleline(&mut state.date_range);
        ui.separator();
        if ui.button("💾 Export CSV…").clicked() {
            actions.export_csv = true;
        }
        if ui.button("🖨 Print Report").clicked() {
            actions.print = true;
        }
    });

    if state.sales.is_empty() {
        ui.add_space(8.0);
        ui.label("No sales recorded yet.");
        return actions;
    }

    let per_product = profit_per_product(&state.products, &state.sales);
    let trend = daily_profit_trend(&state.sales, TREND_DAYS);
    let summary = ReportSummary::compute(&per_product, &trend);

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(format!(
            "Daily averages: {} revenue, {} profit",
            format_currency(summary.daily_avg_revenue),
            format_currency(summary.daily_avg_profit)
        ));
        ui.separator();
        match summary.best_day_date {
            Some(date) => ui.label(format!(
                "Best day: {} ({})",
                date,
                format_currency(summary.best_day_revenue)
            )),
            None => ui.label("Best day: N/A"),
        };
        ui.separator();
        ui.label(format!("Growth: {:.1}%", summary.growth_rate));
    });

    ui.add_space(8.0);
    egui::ScrollArea::vertical()
        .id_source("reports_scroll")
        .show(ui, |ui| {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Profit per Product");
                    let spec = build_chart(ChartKind::Bar, profit_chart_data(&per_product));
                    draw_chart(ui, &spec);
                });
            });
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Daily Profit Trend (Last 30 Days)");
                    let spec = build_chart(ChartKind::Line, trend_chart_data(&trend));
                    draw_chart(ui, &spec);
                });
            });
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Products Sold Distribution");
                    let spec =
                        build_chart(ChartKind::Pie, distribution_chart_data(&per_product));
                    draw_chart(ui, &spec);
                });
            });
        });

    actions
}
