/// One downloadable data file: where it lives and what to call it.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub url: String,
    pub label: String,
}

impl Link {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// Events pushed from the logger server to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// File listing for the requested range, in server order.
    DataTables(Vec<Link>),
    /// Url of a freshly rendered plot image.
    DataPlot(String),
    /// Degree-day result, already formatted for display.
    DegreeDays(String),
    /// Human-readable degree-day failure, shown as a notification.
    DegreeDaysError(String),
    /// Channel came up. Reserved hook; nothing reacts to it yet.
    Connected,
    /// Channel-level error. Reserved hook; nothing reacts to it yet.
    ChannelError,
    /// A named event this client has no binding for.
    Ignored(String),
}
