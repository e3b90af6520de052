// src/ui/sidebar.rs
use eframe::egui;

use crate::state::{AppState, Screen};

/// Renders the navigation sidebar from the sidebar state projection.
/// The toggle button is the only thing that mutates the state, and it
/// writes the preference through the store.
pub fn show_sidebar(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(state.sidebar.panel_width())
        .show(ctx, |ui| {
            ui.add_space(8.0);

            let collapsed = state.sidebar.collapsed;
            let toggle_label = if collapsed { "▶" } else { "◀ Collapse" };
            if ui.button(toggle_label).clicked() {
                state.sidebar.toggle(state.prefs.as_mut());
            }

            ui.separator();

            let items = [
                (Screen::Dashboard, "🏠", "Dashboard"),
                (Screen::Sales, "💰", "Sales"),
                (Screen::Reports, "📊", "Reports"),
            ];

            for (screen, icon, label) in items {
                let text = if collapsed {
                    icon.to_string()
                } else {
                    format!("{} {}", icon, label)
                };
                if ui
                    .selectable_label(state.current_screen == screen, text)
                    .clicked()
                {
                    state.current_screen = screen;
                }
            }

            if !collapsed {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(8.0);
                    ui.small("Duka profit tracker");
                });
            }
        });
}
