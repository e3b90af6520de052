// src/report/mod.rs
pub mod chart;
pub mod summary;

pub use chart::{build_chart, ChartData, ChartKind, ChartSpec, ValueFormat};
pub use summary::{
    daily_profit_trend, distribution_chart_data, profit_chart_data, profit_per_product,
    render_report_text, trend_chart_data, DailyProfit, ProductProfit, ReportSummary, TREND_DAYS,
};
