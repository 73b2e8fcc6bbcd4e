mod connection;
mod forms;
mod page;
mod viewport;

pub use connection::Connection;
pub use forms::{DataPlotForm, DataTablesForm, DegreeDaysForm, FormSubmit, LoggingWindowForm};
pub use page::PageConfig;
pub use viewport::ViewPort;

use log::debug;
use templog_messages::ServerEvent;

/// Routes form submissions out over the connection and server events into
/// the page's render regions.
///
/// Carries no business logic of its own. Requests are fire-and-forget with
/// no correlation to the responses that eventually arrive; responses are
/// applied in arrival order, so two in-flight requests of the same name can
/// resolve out of order and leave a region showing the older answer. The
/// page accepts that.
pub struct ViewRouter<V: ViewPort> {
    conn: Connection,
    page: PageConfig,
    view: V,
}

impl<V: ViewPort> ViewRouter<V> {
    pub fn new(conn: Connection, page: PageConfig, view: V) -> Self {
        Self { conn, page, view }
    }

    /// The rendering surface, for the frame code that draws it.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_open()
    }

    /// Opens the underlying connection. Requests submitted before this
    /// call were dropped, not deferred.
    pub fn connect(&mut self) {
        self.conn.open();
    }

    /// Closes the connection. Called once, when the page goes away.
    pub fn teardown(&mut self) {
        self.conn.close();
    }

    /// Sends the request for a submitted form. Fire and forget: nothing is
    /// queued, acknowledged, or retried.
    pub fn submit(&self, form: FormSubmit) {
        let request = form.into_request();
        debug!("submitting {} request", request.name());
        self.conn.send(&request);
    }

    /// Applies one server event to the page.
    pub fn apply(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::DataTables(links) => {
                if self.page.tables {
                    self.view.render_list(&links);
                } else {
                    debug!("page has no file listing, ignoring data_tables");
                }
            }
            ServerEvent::DataPlot(url) => {
                if self.page.plot {
                    self.view.render_image(&url);
                } else {
                    debug!("page has no plot region, ignoring data_plot");
                }
            }
            ServerEvent::DegreeDays(value) => {
                if self.page.degree_days {
                    self.view.set_text(&value);
                } else {
                    debug!("page has no degree-day readout, ignoring degree_days");
                }
            }
            ServerEvent::DegreeDaysError(message) => {
                if self.page.degree_days {
                    self.view.append_notification(&message);
                } else {
                    debug!("page has no degree-day readout, ignoring degree_days_error");
                }
            }
            // Reserved lifecycle hooks; nothing reacts to them yet
            ServerEvent::Connected => {}
            ServerEvent::ChannelError => {}
            ServerEvent::Ignored(name) => {
                debug!("no binding for event {name:?}");
            }
        }
    }

    /// Drains every event currently queued on the connection and applies
    /// each one, in arrival order.
    pub fn pump(&mut self) {
        while let Some(event) = self.conn.poll() {
            self.apply(event);
        }
    }
}
