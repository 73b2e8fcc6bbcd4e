use eframe::egui::{Response, TextEdit, Ui, Widget};

use templog_client::{
    DataPlotForm, DataTablesForm, DegreeDaysForm, FormSubmit, LoggingWindowForm, PageConfig,
};

/// Side panel with one submit form per page feature.
///
/// Field contents are forwarded verbatim on submit; the panel does no
/// validation and keeps no pending state, so a click with empty fields goes
/// out like any other. Submissions are collected here and drained by the
/// app so every send passes through the router.
pub struct FormsPanel {
    page: PageConfig,
    data_tables: DataTablesForm,
    data_plot: DataPlotForm,
    degree_days: DegreeDaysForm,
    logging_window: LoggingWindowForm,
    submissions: Vec<FormSubmit>,
}

impl FormsPanel {
    pub fn new(page: PageConfig) -> Self {
        Self {
            page,
            data_tables: DataTablesForm::default(),
            data_plot: DataPlotForm::default(),
            degree_days: DegreeDaysForm::default(),
            logging_window: LoggingWindowForm::default(),
            submissions: Vec::new(),
        }
    }

    /// Forms submitted since the last call, in click order.
    pub fn take_submissions(&mut self) -> Vec<FormSubmit> {
        std::mem::take(&mut self.submissions)
    }

    fn text_field(ui: &mut Ui, label: &str, value: &mut String, hint: &str) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(TextEdit::singleline(value).hint_text(hint));
        });
    }
}

impl Widget for &mut FormsPanel {
    fn ui(self, ui: &mut Ui) -> Response {
        if self.page.tables {
            ui.heading("Data files");
            FormsPanel::text_field(ui, "Start:", &mut self.data_tables.start, "2014_06_18");
            FormsPanel::text_field(ui, "End:", &mut self.data_tables.end, "2014_06_19");
            if ui.button("List files").clicked() {
                self.submissions
                    .push(FormSubmit::DataTables(self.data_tables.clone()));
            }
            ui.add_space(10.0);
            ui.separator();
        }

        if self.page.plot {
            ui.heading("Plot");
            FormsPanel::text_field(ui, "Date:", &mut self.data_plot.date, "2014_06_18");
            if ui.button("Draw plot").clicked() {
                self.submissions
                    .push(FormSubmit::DataPlot(self.data_plot.clone()));
            }
            ui.add_space(10.0);
            ui.separator();
        }

        if self.page.degree_days {
            ui.heading("Degree days");
            FormsPanel::text_field(ui, "Base temp:", &mut self.degree_days.base_temp, "10.0");
            ui.checkbox(&mut self.degree_days.probe, "Probe sensor");
            FormsPanel::text_field(ui, "Start:", &mut self.degree_days.start, "2014_06_18_09_55");
            FormsPanel::text_field(ui, "End:", &mut self.degree_days.end, "2014_06_19_09_55");
            if ui.button("Calculate").clicked() {
                self.submissions
                    .push(FormSubmit::DegreeDays(self.degree_days.clone()));
            }
            ui.add_space(10.0);
            ui.separator();
        }

        // The logging window is a control of the logger itself, present on
        // every page variant
        ui.heading("Logging window");
        FormsPanel::text_field(ui, "Start:", &mut self.logging_window.start, "2014_06_18_00_00");
        FormsPanel::text_field(ui, "End:", &mut self.logging_window.end, "2014_06_19_00_00");
        if ui.button("Set window").clicked() {
            self.submissions
                .push(FormSubmit::LoggingWindow(self.logging_window.clone()));
        }

        ui.response()
    }
}
