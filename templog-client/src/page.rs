/// Which inbound events a page variant binds.
///
/// The client ships several near-identical pages with different feature
/// subsets, so the event set a page reacts to is explicit configuration
/// rather than a guessed superset. An event whose flag is off is ignored
/// exactly like an unknown event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub tables: bool,
    pub plot: bool,
    /// Covers both the degree-day readout and its error notifications.
    pub degree_days: bool,
}

impl PageConfig {
    /// The main dashboard page: every region present.
    pub fn dashboard() -> Self {
        Self {
            tables: true,
            plot: true,
            degree_days: true,
        }
    }

    /// The archive page: file listing only.
    pub fn archive() -> Self {
        Self {
            tables: true,
            plot: false,
            degree_days: false,
        }
    }

    /// The plots page: plot display only.
    pub fn plots() -> Self {
        Self {
            tables: false,
            plot: true,
            degree_days: false,
        }
    }
}
