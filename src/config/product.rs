// src/config/product.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub buying_price: f64,
    pub selling_price: f64,
    pub stock: u32,
}

impl Product {
    pub fn new(name: &str, buying_price: f64, selling_price: f64, stock: u32) -> Self {
        Self {
            name: name.to_string(),
            buying_price,
            selling_price,
            stock,
        }
    }

    pub fn unit_margin(&self) -> f64 {
        self.selling_price - self.buying_price
    }
}

/// Starter inventory for demoing the dashboard without a real stock list.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Sugar 1kg", 100.0, 120.0, 50),
        Product::new("Rice 2kg", 200.0, 250.0, 30),
        Product::new("Cooking Oil 1L", 300.0, 350.0, 20),
        Product::new("Tea Leaves 250g", 150.0, 180.0, 40),
        Product::new("Wheat Flour 2kg", 180.0, 220.0, 25),
        Product::new("Salt 500g", 50.0, 70.0, 60),
    ]
}
