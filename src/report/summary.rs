// src/report/summary.rs
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;

use crate::config::{Product, SaleRecord};
use crate::report::chart::ChartData;
use crate::utils::format_currency;

pub const TREND_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct ProductProfit {
    pub product_name: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
    pub total_profit: f64,
}

#[derive(Debug, Clone)]
pub struct DailyProfit {
    pub date: NaiveDate,
    pub daily_profit: f64,
    pub daily_revenue: f64,
}

/// Revenue, profit and quantity per product, highest profit first.
/// Products without sales still get a row.
pub fn profit_per_product(products: &[Product], sales: &[SaleRecord]) -> Vec<ProductProfit> {
    let mut rows: Vec<ProductProfit> = products
        .iter()
        .map(|p| ProductProfit {
            product_name: p.name.clone(),
            total_quantity: 0,
            total_revenue: 0.0,
            total_profit: 0.0,
        })
        .collect();

    for sale in sales {
        if let Some(row) = rows.iter_mut().find(|r| r.product_name == sale.product_name) {
            row.total_quantity += sale.quantity;
            row.total_revenue += sale.total_price;
            row.total_profit += sale.profit;
        }
    }

    rows.sort_by(|a, b| {
        b.total_profit
            .partial_cmp(&a.total_profit)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

/// Profit and revenue per calendar day over the last `days` days,
/// oldest day first. Days without sales are absent, not zero-filled.
pub fn daily_profit_trend(sales: &[SaleRecord], days: i64) -> Vec<DailyProfit> {
    let cutoff = Local::now().date_naive() - Duration::days(days);
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    for sale in sales {
        let date = sale.date.date();
        if date >= cutoff {
            let entry = by_day.entry(date).or_insert((0.0, 0.0));
            entry.0 += sale.profit;
            entry.1 += sale.total_price;
        }
    }

    by_day
        .into_iter()
        .map(|(date, (daily_profit, daily_revenue))| DailyProfit {
            date,
            daily_profit,
            daily_revenue,
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ReportSummary {
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_items: i64,
    pub daily_avg_revenue: f64,
    pub daily_avg_profit: f64,
    pub daily_avg_items: f64,
    pub profit_margin: f64,
    pub best_day_revenue: f64,
    pub best_day_date: Option<NaiveDate>,
    pub growth_rate: f64,
}

impl ReportSummary {
    pub fn compute(per_product: &[ProductProfit], trend: &[DailyProfit]) -> Self {
        let total_revenue: f64 = per_product.iter().map(|p| p.total_revenue).sum();
        let total_profit: f64 = per_product.iter().map(|p| p.total_profit).sum();
        let total_items: i64 = per_product.iter().map(|p| p.total_quantity).sum();

        let days_count = if trend.is_empty() { TREND_DAYS } else { trend.len() as i64 };
        let daily_avg_revenue = total_revenue / days_count as f64;
        let daily_avg_profit = total_profit / days_count as f64;
        let daily_avg_items = total_items as f64 / days_count as f64;

        let profit_margin = if total_revenue > 0.0 {
            total_profit / total_revenue * 100.0
        } else {
            0.0
        };

        let best_day = trend.iter().max_by(|a, b| {
            a.daily_revenue
                .partial_cmp(&b.daily_revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let (best_day_revenue, best_day_date) = match best_day {
            Some(day) => (day.daily_revenue, Some(day.date)),
            None => (0.0, None),
        };

        let growth_rate = match (trend.first(), trend.last()) {
            (Some(first), Some(last)) if trend.len() >= 2 && first.daily_revenue > 0.0 => {
                (last.daily_revenue - first.daily_revenue) / first.daily_revenue * 100.0
            }
            _ => 0.0,
        };

        Self {
            total_revenue,
            total_profit,
            total_items,
            daily_avg_revenue,
            daily_avg_profit,
            daily_avg_items,
            profit_margin,
            best_day_revenue,
            best_day_date,
            growth_rate,
        }
    }
}

/// Bar chart input: top eight products by profit, names clipped to 15
/// characters the way the report page lists them.
pub fn profit_chart_data(per_product: &[ProductProfit]) -> ChartData {
    let top = &per_product[..per_product.len().min(8)];
    ChartData {
        labels: top
            .iter()
            .map(|p| p.product_name.chars().take(15).collect())
            .collect(),
        values: top.iter().map(|p| p.total_profit).collect(),
    }
}

/// Line chart input: one point per day with sales, oldest first.
pub fn trend_chart_data(trend: &[DailyProfit]) -> ChartData {
    ChartData {
        labels: trend.iter().map(|d| d.date.format("%Y-%m-%d").to_string()).collect(),
        values: trend.iter().map(|d| d.daily_profit).collect(),
    }
}

/// Pie chart input: units sold for the top five products, skipping
/// products that never sold.
pub fn distribution_chart_data(per_product: &[ProductProfit]) -> ChartData {
    let top: Vec<&ProductProfit> = per_product
        .iter()
        .take(5)
        .filter(|p| p.total_quantity > 0)
        .collect();
    ChartData {
        labels: top.iter().map(|p| p.product_name.clone()).collect(),
        values: top.iter().map(|p| p.total_quantity as f64).collect(),
    }
}

/// Plain-text report for the print spooler.
pub fn render_report_text(
    summary: &ReportSummary,
    per_product: &[ProductProfit],
    date_range: &str,
) -> String {
    let mut out = String::new();
    out.push_str("DUKA PROFIT REPORT\n");
    out.push_str(&format!("Period: {}\n", date_range));
    out.push_str(&format!(
        "Generated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    out.push_str(&format!("Total Revenue:  {}\n", format_currency(summary.total_revenue)));
    out.push_str(&format!("Total Profit:   {}\n", format_currency(summary.total_profit)));
    out.push_str(&format!("Items Sold:     {}\n", summary.total_items));
    out.push_str(&format!("Profit Margin:  {:.1}%\n", summary.profit_margin));
    out.push_str(&format!(
        "Daily Averages: {} revenue, {} profit\n",
        format_currency(summary.daily_avg_revenue),
        format_currency(summary.daily_avg_profit)
    ));
    match summary.best_day_date {
        Some(date) => out.push_str(&format!(
            "Best Day:       {} ({})\n",
            date,
            format_currency(summary.best_day_revenue)
        )),
        None => out.push_str("Best Day:       N/A\n"),
    }
    out.push_str(&format!("Growth Rate:    {:.1}%\n\n", summary.growth_rate));

    out.push_str("PER PRODUCT\n");
    for row in per_product {
        out.push_str(&format!(
            "{:<24} {:>4} units  {:>16}  {:>16}\n",
            row.product_name,
            row.total_quantity,
            format_currency(row.total_revenue),
            format_currency(row.total_profit)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sale(product: &Product, quantity: i64, days_ago: i64) -> SaleRecord {
        let date = Local::now().date_naive() - Duration::days(days_ago);
        SaleRecord {
            id: format!("test-{}-{}", product.name, days_ago),
            product_name: product.name.clone(),
            quantity,
            unit_price: product.selling_price,
            total_price: product.selling_price * quantity as f64,
            profit: (product.selling_price - product.buying_price) * quantity as f64,
            date: date.and_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }

    fn fixture() -> (Vec<Product>, Vec<SaleRecord>) {
        let sugar = Product::new("Sugar 1kg", 100.0, 120.0, 50);
        let rice = Product::new("Rice 2kg", 200.0, 250.0, 30);
        let salt = Product::new("Salt 500g", 50.0, 70.0, 60);
        let sales = vec![
            sale(&sugar, 2, 2),  // revenue 240, profit 40
            sale(&rice, 1, 1),   // revenue 250, profit 50
            sale(&sugar, 3, 0),  // revenue 360, profit 60
        ];
        (vec![sugar, rice, salt], sales)
    }

    #[test]
    fn test_profit_per_product_orders_by_profit() {
        let (products, sales) = fixture();
        let rows = profit_per_product(&products, &sales);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].product_name, "Sugar 1kg");
        assert_eq!(rows[0].total_quantity, 5);
        assert_eq!(rows[0].total_revenue, 600.0);
        assert_eq!(rows[0].total_profit, 100.0);
        // Unsold product keeps a zero row at the bottom.
        assert_eq!(rows[2].product_name, "Salt 500g");
        assert_eq!(rows[2].total_quantity, 0);
    }

    #[test]
    fn test_daily_profit_trend_groups_by_day() {
        let (_, sales) = fixture();
        let trend = daily_profit_trend(&sales, TREND_DAYS);
        assert_eq!(trend.len(), 3);
        // Oldest first.
        assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(trend[0].daily_profit, 40.0);
        assert_eq!(trend[2].daily_revenue, 360.0);
    }

    #[test]
    fn test_daily_profit_trend_cutoff() {
        let sugar = Product::new("Sugar 1kg", 100.0, 120.0, 50);
        let sales = vec![sale(&sugar, 1, 45)];
        assert!(daily_profit_trend(&sales, TREND_DAYS).is_empty());
    }

    #[test]
    fn test_report_summary_metrics() {
        let (products, sales) = fixture();
        let per_product = profit_per_product(&products, &sales);
        let trend = daily_profit_trend(&sales, TREND_DAYS);
        let summary = ReportSummary::compute(&per_product, &trend);

        assert_eq!(summary.total_revenue, 850.0);
        assert_eq!(summary.total_profit, 150.0);
        assert_eq!(summary.total_items, 6);
        // 150 / 850
        assert!((summary.profit_margin - 17.647).abs() < 0.01);
        assert_eq!(summary.best_day_revenue, 360.0);
        // First day 240, last day 360: +50%.
        assert!((summary.growth_rate - 50.0).abs() < 1e-9);
        assert!((summary.daily_avg_revenue - 850.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_summary_empty() {
        let summary = ReportSummary::compute(&[], &[]);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.profit_margin, 0.0);
        assert_eq!(summary.best_day_date, None);
        assert_eq!(summary.growth_rate, 0.0);
    }

    #[test]
    fn test_profit_chart_data_clips_names() {
        let rows = vec![ProductProfit {
            product_name: "A very long product name".to_string(),
            total_quantity: 1,
            total_revenue: 10.0,
            total_profit: 5.0,
        }];
        let data = profit_chart_data(&rows);
        assert_eq!(data.labels[0], "A very long pro");
        assert_eq!(data.values, vec![5.0]);
    }

    #[test]
    fn test_distribution_chart_data_skips_unsold() {
        let (products, sales) = fixture();
        let per_product = profit_per_product(&products, &sales);
        let data = distribution_chart_data(&per_product);
        assert_eq!(data.labels, vec!["Sugar 1kg", "Rice 2kg"]);
        assert_eq!(data.values, vec![5.0, 1.0]);
    }

    #[test]
    fn test_render_report_text_contains_totals() {
        let (products, sales) = fixture();
        let per_product = profit_per_product(&products, &sales);
        let trend = daily_profit_trend(&sales, TREND_DAYS);
        let summary = ReportSummary::compute(&per_product, &trend);
        let text = render_report_text(&summary, &per_product, "2026-07-06 to 2026-08-06");

        assert!(text.contains("KES 850.00"));
        assert!(text.contains("Sugar 1kg"));
        assert!(text.contains("2026-07-06 to 2026-08-06"));
    }

    #[test]
    fn test_best_day_date_is_set() {
        let (products, sales) = fixture();
        let per_product = profit_per_product(&products, &sales);
        let trend = daily_profit_trend(&sales, TREND_DAYS);
        let summary = ReportSummary::compute(&per_product, &trend);
        let expected: NaiveDate = Local::now().date_naive();
        assert_eq!(summary.best_day_date, Some(expected));
    }
}
