/// Which temperature column a degree-day computation reads.
///
/// The logger records two temperatures per sample: the probe sensor (T1)
/// and the ambient sensor (T2). The server picks the column from this token
/// alone; nothing else on the page influences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Probe,
    Ambient,
}

impl Mode {
    /// Wire token for this mode. Exactly these two values exist.
    pub fn token(self) -> &'static str {
        match self {
            Self::Probe => "probe",
            Self::Ambient => "ambient",
        }
    }

    /// Maps the "use probe sensor" checkbox state to a mode.
    pub fn from_probe_checkbox(checked: bool) -> Self {
        if checked { Self::Probe } else { Self::Ambient }
    }
}

/// Requests sent from the page to the logger server.
///
/// All fields are verbatim form input. The page never validates or coerces
/// them; a request with empty or garbage fields goes out like any other and
/// the server decides what to make of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// List the data files recorded between two days.
    DataTables { start: String, end: String },
    /// Render a plot of one day's samples.
    DataPlot { date: String },
    /// Compute degree-days above a base temperature over a range.
    GetDegreeDays {
        base_temp: String,
        mode: Mode,
        start: String,
        end: String,
    },
    /// Set the logging window start and end datetimes.
    StartEndDatetime { start: String, end: String },
}
