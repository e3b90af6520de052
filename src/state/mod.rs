// src/state/mod.rs
use crate::config::{sample_products, sample_sales, Product, SaleRecord};
use crate::file::PrefStore;
use crate::state::sale_form::SaleForm;
use crate::state::sidebar::SidebarState;
use crate::utils::{default_date_range, format_currency};

pub mod sale_form;
pub mod sidebar;

// Core dialog tracking
#[derive(Debug, Clone)]
pub enum DialogState {
    None,
    ConfirmDeleteSale { index: usize, item_name: String },
}

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Dashboard,
    Sales,
    Reports,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Shop data
    pub products: Vec<Product>,
    pub sales: Vec<SaleRecord>,

    // Minimal UI state
    pub current_screen: Screen,
    pub current_dialog: DialogState,
    pub sidebar: SidebarState,
    pub sale_form: SaleForm,
    pub date_range: String,
    pub error_message: Option<String>,
    pub status_message: Option<String>,

    // Preference storage
    pub prefs: Box<dyn PrefStore>,
}

impl AppState {
    pub fn new(prefs: Box<dyn PrefStore>) -> Self {
        Self {
            products: Vec::new(),
            sales: Vec::new(),
            current_screen: Screen::Dashboard,
            current_dialog: DialogState::None,
            sidebar: SidebarState::new(),
            sale_form: SaleForm::new(),
            date_range: default_date_range(),
            error_message: None,
            status_message: None,
            prefs,
        }
    }

    pub fn load_sample_data(&mut self) {
        self.products = sample_products();
        self.sales = sample_sales(&self.products);
        if let Some(product) = self.products.first() {
            self.sale_form.reset(product.selling_price.to_string());
        }
        self.status_message = Some(format!(
            "Loaded {} products and {} sales",
            self.products.len(),
            self.sales.len()
        ));
    }

    /// Books a sale from the current form contents against the selected
    /// product and prepends it to the sales list.
    pub fn record_sale(&mut self) {
        let Some(product) = self.products.get(self.sale_form.product_index).cloned() else {
            self.error_message = Some("Select a product first".to_string());
            return;
        };

        let quantity = self.sale_form.quantity_units();
        let unit_price = self.sale_form.price.trim().parse::<f64>().unwrap_or(0.0);
        let sale = SaleRecord::new(&product, quantity, unit_price);
        let total = sale.total_price;

        if let Some(stored) = self.products.get_mut(self.sale_form.product_index) {
            stored.stock = stored.stock.saturating_sub(quantity.max(0) as u32);
        }

        self.sales.insert(0, sale);
        self.status_message = Some(format!("Sale recorded! Total: {}", format_currency(total)));
        self.sale_form.reset(product.selling_price.to_string());
    }

    pub fn delete_sale(&mut self, index: usize) {
        if index < self.sales.len() {
            let removed = self.sales.remove(index);
            self.status_message = Some(format!("Deleted sale of {}", removed.product_name));
        }
    }

    /// Sales as ordered key/value rows for the CSV exporter, newest first,
    /// matching the table on the sales screen.
    pub fn sales_export_records(&self) -> Vec<Vec<(String, String)>> {
        self.sales
            .iter()
            .map(|sale| {
                vec![
                    ("date".to_string(), sale.date.format("%Y-%m-%d %H:%M").to_string()),
                    ("product".to_string(), sale.product_name.clone()),
                    ("quantity".to_string(), sale.quantity.to_string()),
                    ("unit_price".to_string(), format!("{:.2}", sale.unit_price)),
                    ("total_price".to_string(), format!("{:.2}", sale.total_price)),
                    ("profit".to_string(), format!("{:.2}", sale.profit)),
                ]
            })
            .collect()
    }
}
