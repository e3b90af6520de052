// src/state/sale_form.rs
use crate::utils::{calculate_total_price, format_currency};

/// Edit buffers for the sale entry form. Fields hold the raw text the
/// user typed; `recalculate` is the projection step that keeps the
/// displayed total in sync on every edit.
#[derive(Debug)]
pub struct SaleForm {
    pub product_index: usize,
    pub price: String,
    pub quantity: String,
    pub total_display: String,
}

impl SaleForm {
    pub fn new() -> Self {
        let mut form = Self {
            product_index: 0,
            price: String::new(),
            quantity: "1".to_string(),
            total_display: String::new(),
        };
        form.recalculate();
        form
    }

    /// Recomputes the line total and writes the formatted currency string
    /// into the display buffer. Returns the numeric total.
    pub fn recalculate(&mut self) -> f64 {
        let total = calculate_total_price(&self.price, &self.quantity);
        self.total_display = format_currency(total);
        total
    }

    /// Quantity as recorded on a sale: integer parse, one unit on failure.
    pub fn quantity_units(&self) -> i64 {
        self.quantity.trim().parse::<i64>().unwrap_or(1)
    }

    pub fn reset(&mut self, price: String) {
        self.price = price;
        self.quantity = "1".to_string();
        self.recalculate();
    }
}

impl Default for SaleForm {
    fn default() -> Self {
        Self::new()
    }
}
