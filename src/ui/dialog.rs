// src/ui/dialog.rs
use eframe::egui;

use crate::state::{AppState, DialogState};
use crate::utils::confirm_message;

pub struct DialogManager;

impl DialogManager {
    pub fn new() -> Self {
        Self
    }

    /// Shows whatever dialog the state asks for. The confirm dialog
    /// blocks the deletion on the user's explicit choice; nothing is
    /// removed until "Delete" is clicked.
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState) {
        match state.current_dialog.clone() {
            DialogState::None => {}

            DialogState::ConfirmDeleteSale { index, item_name } => {
                egui::Window::new("Confirm Delete")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(confirm_message("delete", &item_name));
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            if ui
                                .button(egui::RichText::new("🗑 Delete").color(egui::Color32::RED))
                                .clicked()
                            {
                                state.delete_sale(index);
                                state.current_dialog = DialogState::None;
                            }
                            if ui.button("Cancel").clicked() {
                                state.current_dialog = DialogState::None;
                            }
                        });
                    });
            }
        }
    }
}
