// src/config/sale.rs
use chrono::{Duration, Local, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Product;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub profit: f64,
    pub date: NaiveDateTime,
}

impl SaleRecord {
    /// Records a sale of `quantity` units at `unit_price`, timestamped now.
    /// Profit is measured against the product's buying price.
    pub fn new(product: &Product, quantity: i64, unit_price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_name: product.name.clone(),
            quantity,
            unit_price,
            total_price: unit_price * quantity as f64,
            profit: (unit_price - product.buying_price) * quantity as f64,
            date: Local::now().naive_local(),
        }
    }
}

/// Randomized demo sales spread over the last 30 days, newest first.
pub fn sample_sales(products: &[Product]) -> Vec<SaleRecord> {
    let mut rng = rand::thread_rng();
    let today = Local::now().date_naive();
    let mut sales = Vec::new();

    if products.is_empty() {
        return sales;
    }

    for day_offset in 0..30 {
        let date = today - Duration::days(day_offset);
        for _ in 0..rng.gen_range(1..=4) {
            let product = &products[rng.gen_range(0..products.len())];
            let quantity = rng.gen_range(1..=5) as i64;
            let timestamp = date
                .and_hms_opt(rng.gen_range(8..20), rng.gen_range(0..60), 0)
                .unwrap_or_default();

            sales.push(SaleRecord {
                id: Uuid::new_v4().to_string(),
                product_name: product.name.clone(),
                quantity,
                unit_price: product.selling_price,
                total_price: product.selling_price * quantity as f64,
                profit: product.unit_margin() * quantity as f64,
                date: timestamp,
            });
        }
    }

    sales.sort_by(|a, b| b.date.cmp(&a.date));
    sales
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::product::sample_products;

    #[test]
    fn test_new_sale_totals() {
        let product = Product::new("Rice 2kg", 200.0, 250.0, 30);
        let sale = SaleRecord::new(&product, 3, 250.0);
        assert_eq!(sale.total_price, 750.0);
        assert_eq!(sale.profit, 150.0);
        assert_eq!(sale.product_name, "Rice 2kg");
    }

    #[test]
    fn test_sale_profit_follows_unit_price() {
        // Selling below the listed price still books against buying price.
        let product = Product::new("Salt 500g", 50.0, 70.0, 60);
        let sale = SaleRecord::new(&product, 2, 60.0);
        assert_eq!(sale.total_price, 120.0);
        assert_eq!(sale.profit, 20.0);
    }

    #[test]
    fn test_sample_sales_cover_window() {
        let sales = sample_sales(&sample_products());
        assert!(!sales.is_empty());
        // Newest first, and every record carries a positive total.
        assert!(sales.windows(2).all(|w| w[0].date >= w[1].date));
        assert!(sales.iter().all(|s| s.total_price > 0.0));
    }

    #[test]
    fn test_sample_sales_empty_inventory() {
        assert!(sample_sales(&[]).is_empty());
    }
}
