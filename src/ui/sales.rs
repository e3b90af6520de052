// src/ui/sales.rs
use eframe::egui;

use crate::state::{AppState, DialogState};
use crate::utils::format_currency;

pub fn show_sales_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Sales");
    ui.add_space(8.0);

    if state.products.is_empty() {
        ui.label("No inventory yet. Load sample data from the File menu to explore.");
        return;
    }

    show_sale_form(ui, state);

    if let Some(status) = &state.status_message {
        ui.add_space(4.0);
        ui.colored_label(egui::Color32::from_rgb(28, 200, 138), status);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    show_sales_table(ui, state);
}

fn show_sale_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.heading("Record Sale");
        ui.add_space(4.0);

        egui::Grid::new("sale_form_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Product:");
                let selected_name = state
                    .products
                    .get(state.sale_form.product_index)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                let mut picked: Option<usize> = None;
                egui::ComboBox::from_id_source("sale_product")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for (index, product) in state.products.iter().enumerate() {
                            if ui
                                .selectable_label(
                                    state.sale_form.product_index == index,
                                    &product.name,
                                )
                                .clicked()
                            {
                                picked = Some(index);
                            }
                        }
                    });
                if let Some(index) = picked {
                    state.sale_form.product_index = index;
                    let price = state.products[index].selling_price.to_string();
                    state.sale_form.reset(price);
                }
                ui.end_row();

                ui.label("Unit price (KES):");
                if ui.text_edit_singleline(&mut state.sale_form.price).changed() {
                    state.sale_form.recalculate();
                }
                ui.end_row();

                ui.label("Quantity:");
                if ui
                    .text_edit_singleline(&mut state.sale_form.quantity)
                    .changed()
                {
                    state.sale_form.recalculate();
                }
                ui.end_row();

                ui.label("Total:");
                ui.strong(&state.sale_form.total_display);
                ui.end_row();
            });

        ui.add_space(4.0);
        if ui.button("➕ Record Sale").clicked() {
            state.record_sale();
        }
    });
}

fn show_sales_table(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Recent Sales");
        ui.label(format!("({})", state.sales.len()));
    });
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_source("sales_table_scroll")
        .show(ui, |ui| {
            egui::Grid::new("sales_table")
                .num_columns(6)
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Date");
                    ui.strong("Product");
                    ui.strong("Qty");
                    ui.strong("Total");
                    ui.strong("Profit");
                    ui.strong("");
                    ui.end_row();

                    let mut delete_request: Option<(usize, String)> = None;
                    for (index, sale) in state.sales.iter().enumerate() {
                        ui.label(sale.date.format("%Y-%m-%d %H:%M").to_string());
                        ui.label(&sale.product_name);
                        ui.label(sale.quantity.to_string());
                        ui.label(format_currency(sale.total_price));
                        ui.label(format_currency(sale.profit));
                        if ui
                            .button(egui::RichText::new("🗑").color(egui::Color32::RED))
                            .clicked()
                        {
                            delete_request = Some((index, sale.product_name.clone()));
                        }
                        ui.end_row();
                    }

                    if let Some((index, item_name)) = delete_request {
                        state.current_dialog = DialogState::ConfirmDeleteSale { index, item_name };
                    }
                });
        });
}
