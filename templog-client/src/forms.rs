use templog_messages::{Mode, Request};

/// Field values of the data-tables form, verbatim from its text inputs.
#[derive(Debug, Clone, Default)]
pub struct DataTablesForm {
    pub start: String,
    pub end: String,
}

/// Field values of the plot form.
#[derive(Debug, Clone, Default)]
pub struct DataPlotForm {
    pub date: String,
}

/// Field values of the degree-day calculator form. `probe` is the
/// sensor-selection checkbox; everything else is free text.
#[derive(Debug, Clone, Default)]
pub struct DegreeDaysForm {
    pub base_temp: String,
    pub probe: bool,
    pub start: String,
    pub end: String,
}

/// Field values of the logging-window form.
#[derive(Debug, Clone, Default)]
pub struct LoggingWindowForm {
    pub start: String,
    pub end: String,
}

/// A submitted form, fields untouched.
///
/// No validation happens on the page: whatever the user typed goes to the
/// server as-is, and the server reports any problem back as an event.
#[derive(Debug, Clone)]
pub enum FormSubmit {
    DataTables(DataTablesForm),
    DataPlot(DataPlotForm),
    DegreeDays(DegreeDaysForm),
    LoggingWindow(LoggingWindowForm),
}

impl FormSubmit {
    /// Builds the request for this form, with each request's fixed
    /// argument order.
    pub fn into_request(self) -> Request {
        match self {
            FormSubmit::DataTables(form) => Request::DataTables {
                start: form.start,
                end: form.end,
            },
            FormSubmit::DataPlot(form) => Request::DataPlot { date: form.date },
            FormSubmit::DegreeDays(form) => Request::GetDegreeDays {
                base_temp: form.base_temp,
                mode: Mode::from_probe_checkbox(form.probe),
                start: form.start,
                end: form.end,
            },
            FormSubmit::LoggingWindow(form) => Request::StartEndDatetime {
                start: form.start,
                end: form.end,
            },
        }
    }
}
