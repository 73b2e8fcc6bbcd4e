use log::warn;

use crate::{Link, Request, ServerEvent};

/// A named event as it crosses the duplex channel: a string tag plus a
/// payload whose shape depends on the tag.
#[derive(Debug, Clone, PartialEq)]
pub struct WireEvent {
    pub name: String,
    pub payload: Payload,
}

impl WireEvent {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// Payload shapes carried by named events.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No payload (lifecycle events).
    None,
    /// Positional string arguments; the order is fixed per request name.
    Args(Vec<String>),
    Text(String),
    Number(f64),
    /// (url, label) pairs.
    Links(Vec<Link>),
}

impl Request {
    /// Wire name for this request.
    pub fn name(&self) -> &'static str {
        match self {
            Request::DataTables { .. } => "data_tables",
            Request::DataPlot { .. } => "data_plot",
            Request::GetDegreeDays { .. } => "get_degree_days",
            Request::StartEndDatetime { .. } => "start_end_datetime",
        }
    }

    /// Encodes the request as a named event with positional arguments.
    /// Field values pass through verbatim; the only derived value is the
    /// mode token.
    pub fn to_wire(&self) -> WireEvent {
        let args = match self {
            Request::DataTables { start, end } => vec![start.clone(), end.clone()],
            Request::DataPlot { date } => vec![date.clone()],
            Request::GetDegreeDays {
                base_temp,
                mode,
                start,
                end,
            } => vec![
                base_temp.clone(),
                mode.token().to_string(),
                start.clone(),
                end.clone(),
            ],
            Request::StartEndDatetime { start, end } => vec![start.clone(), end.clone()],
        };
        WireEvent::new(self.name(), Payload::Args(args))
    }
}

impl ServerEvent {
    /// Decodes a named event from the server.
    ///
    /// Unknown names decode to `Ignored`. A known name carrying the wrong
    /// payload shape does too, with a warning, so a misbehaving server can
    /// never take the page down.
    pub fn from_wire(wire: WireEvent) -> ServerEvent {
        let WireEvent { name, payload } = wire;
        match (name.as_str(), payload) {
            ("data_tables", Payload::Links(links)) => ServerEvent::DataTables(links),
            ("data_plot", Payload::Text(url)) => ServerEvent::DataPlot(url),
            ("degree_days", Payload::Text(value)) => ServerEvent::DegreeDays(value),
            // The server may send the degree-day result as a bare number;
            // it is displayed in its default form, never reformatted here
            ("degree_days", Payload::Number(value)) => ServerEvent::DegreeDays(value.to_string()),
            ("degree_days_error", Payload::Text(message)) => ServerEvent::DegreeDaysError(message),
            ("connect", Payload::None) => ServerEvent::Connected,
            ("error", Payload::None) => ServerEvent::ChannelError,
            (
                "data_tables" | "data_plot" | "degree_days" | "degree_days_error" | "connect"
                | "error",
                payload,
            ) => {
                warn!("event {name:?} arrived with unexpected payload {payload:?}");
                ServerEvent::Ignored(name.clone())
            }
            _ => ServerEvent::Ignored(name.clone()),
        }
    }
}
