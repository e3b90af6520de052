// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::file::{export_to_csv, FilePrefs, Printer, SystemPrinter};
use crate::report::{
    daily_profit_trend, profit_per_product, render_report_text, ReportSummary, TREND_DAYS,
};
use crate::state::{AppState, Screen};
use crate::ui::{dashboard, reports, sales, sidebar, DialogManager};

pub struct DukaApp {
    state: AppState,
    dialog_manager: DialogManager,
    printer: Box<dyn Printer>,
}

impl DukaApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(Box::new(FilePrefs::load_default())),
            dialog_manager: DialogManager::new(),
            printer: Box::new(SystemPrinter::new()),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            // The sidebar toggle; the collapsed flag round-trips through
            // the preference store.
            if ui.button("☰").clicked() {
                self.state.sidebar.toggle(self.state.prefs.as_mut());
            }

            ui.menu_button("File", |ui| {
                if ui.button("Load Sample Data").clicked() {
                    self.state.load_sample_data();
                    ui.close_menu();
                }
                if ui.button("Export Sales CSV…").clicked() {
                    self.export_sales_csv();
                    ui.close_menu();
                }
                if ui.button("Print Report").clicked() {
                    self.print_report();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::Dashboard, "Dashboard"),
                (Screen::Sales, "Sales"),
                (Screen::Reports, "Reports"),
            ];

            for (mode, label) in tabs {
                if ui
                    .selectable_label(self.state.current_screen == mode, label)
                    .clicked()
                {
                    self.state.current_screen = mode;
                }
            }
        });
    }

    fn export_sales_csv(&mut self) {
        if self.state.sales.is_empty() {
            self.state.status_message = Some("Nothing to export yet".to_string());
            return;
        }

        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name("sales.csv")
            .set_title("Export Sales");

        if let Some(path) = file_dialog.save_file() {
            let records = self.state.sales_export_records();
            match export_to_csv(&records, &path) {
                Ok(()) => {
                    self.state.status_message =
                        Some(format!("Exported {} sales to {}", records.len(), path.display()));
                }
                Err(e) => {
                    self.state.error_message = Some(format!("Error exporting sales: {}", e));
                }
            }
        }
    }

    fn print_report(&mut self) {
        let per_product = profit_per_product(&self.state.products, &self.state.sales);
        let trend = daily_profit_trend(&self.state.sales, TREND_DAYS);
        let summary = ReportSummary::compute(&per_product, &trend);
        let document = render_report_text(&summary, &per_product, &self.state.date_range);

        match self.printer.print(&document) {
            Ok(()) => {
                self.state.status_message = Some("Report sent to printer".to_string());
            }
            Err(e) => {
                self.state.error_message = Some(format!("Error printing report: {}", e));
            }
        }
    }
}

impl eframe::App for DukaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Restore the sidebar preference once the viewport size is known.
        if !self.state.sidebar.is_initialized() {
            let width = ctx.screen_rect().width();
            let AppState { sidebar, prefs, .. } = &mut self.state;
            sidebar.initialize(prefs.as_ref(), width);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui, ctx);
        });

        sidebar::show_sidebar(ctx, &mut self.state);

        let mut report_actions = None;
        egui::CentralPanel::default().show(ctx, |ui| match self.state.current_screen {
            Screen::Dashboard => dashboard::show_dashboard_view(ui, &mut self.state),
            Screen::Sales => sales::show_sales_view(ui, &mut self.state),
            Screen::Reports => {
                report_actions = Some(reports::show_reports_view(ui, &mut self.state));
            }
        });

        // Dialogs and spooling run after the layout pass.
        if let Some(actions) = report_actions {
            if actions.export_csv {
                self.export_sales_csv();
            }
            if actions.print {
                self.print_report();
            }
        }

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }

        // Handle dialogs using dialog manager
        self.dialog_manager.show(ctx, &mut self.state);
    }
}
