use flume::{Receiver, Sender};
use log::{debug, info};

use templog_messages::{Link, Payload, WireEvent};

/// In-process stand-in for the logger server so the app runs without one.
///
/// Answers every request with fixture data shaped like the real server's:
/// day files named `Data/YYYY_MM_DD.csv` and plot images under `plots/`.
/// Purely canned - it computes nothing and stores nothing.
pub struct DemoPeer {
    request_rx: Receiver<WireEvent>,
    event_tx: Sender<WireEvent>,
}

impl DemoPeer {
    pub fn new(request_rx: Receiver<WireEvent>, event_tx: Sender<WireEvent>) -> Self {
        Self {
            request_rx,
            event_tx,
        }
    }

    /// Blocks answering requests until the page hangs up.
    pub fn run(self) {
        info!("demo peer up");
        let _ = self.event_tx.send(WireEvent::new("connect", Payload::None));

        while let Ok(request) = self.request_rx.recv() {
            debug!("demo peer got {} request", request.name);
            if let Some(reply) = answer(&request) {
                let _ = self.event_tx.send(reply);
            }
        }
        info!("demo peer: page hung up, exiting");
    }
}

fn answer(request: &WireEvent) -> Option<WireEvent> {
    match (request.name.as_str(), &request.payload) {
        ("data_tables", Payload::Args(args)) if args.len() == 2 => Some(WireEvent::new(
            "data_tables",
            Payload::Links(day_links(&args[0], &args[1])),
        )),
        ("data_plot", Payload::Args(args)) if args.len() == 1 => Some(WireEvent::new(
            "data_plot",
            Payload::Text(format!("plots/{}.png", args[0])),
        )),
        ("get_degree_days", Payload::Args(args)) if args.len() == 4 => {
            Some(degree_days_reply(args))
        }
        // The logging window is set silently; no response exists for it
        ("start_end_datetime", _) => None,
        _ => None,
    }
}

fn degree_days_reply(args: &[String]) -> WireEvent {
    match args[0].parse::<f64>() {
        // Canned value; the demo peer computes nothing real
        Ok(base) => WireEvent::new("degree_days", Payload::Number((25.0 - base).max(0.0) * 1.5)),
        Err(_) => WireEvent::new(
            "degree_days_error",
            Payload::Text(format!("could not parse base temperature {:?}", args[0])),
        ),
    }
}

/// One link per day from `start` to `end` inclusive, matching the server's
/// `Data/YYYY_MM_DD.csv` file naming. An unparsable range gets a single
/// echo entry so the listing still shows something.
fn day_links(start: &str, end: &str) -> Vec<Link> {
    let (Some(mut day), Some(last)) = (Day::parse(start), Day::parse(end)) else {
        return vec![Link::new(format!("Data/{start}.csv"), format!("{start}.csv"))];
    };

    let mut links = Vec::new();
    while day <= last && links.len() < 60 {
        let name = day.to_string();
        links.push(Link::new(format!("Data/{name}.csv"), format!("{name}.csv")));
        day = day.next();
    }
    links
}

/// A calendar day in the underscore form the log files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Day {
    year: u16,
    month: u8,
    day: u8,
}

impl Day {
    /// Parses e.g. `2014_06_18`. Extra fields (hours, minutes) are
    /// ignored, so datetime strings parse to their day.
    fn parse(s: &str) -> Option<Self> {
        let mut fields = s.split('_');
        let year = fields.next()?.parse().ok()?;
        let month: u8 = fields.next()?.parse().ok()?;
        let day: u8 = fields.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self { year, month, day })
    }

    fn next(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                month: self.month + 1,
                day: 1,
                ..self
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}_{:02}_{:02}", self.year, self.month, self.day)
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
    }
}
