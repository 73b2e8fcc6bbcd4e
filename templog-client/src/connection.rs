use flume::{Receiver, Sender};
use log::debug;

use templog_messages::{Request, ServerEvent, WireEvent};

/// The page's single duplex channel to the logger server.
///
/// Owns both endpoint halves for the lifetime of the page and is the only
/// thing that touches them. Requests sent while the connection is not open
/// are dropped, not queued: the page has no buffering, so a request issued
/// too early is indistinguishable from one the server never answered.
pub struct Connection {
    tx: Sender<WireEvent>,
    rx: Receiver<WireEvent>,
    open: bool,
}

impl Connection {
    /// Wraps a pair of channel endpoints. The connection starts closed;
    /// nothing is sent or received until `open` is called.
    pub fn new(tx: Sender<WireEvent>, rx: Receiver<WireEvent>) -> Self {
        Self {
            tx,
            rx,
            open: false,
        }
    }

    pub fn open(&mut self) {
        debug!("connection open");
        self.open = true;
    }

    /// Closes the connection. Requests sent afterwards are dropped.
    pub fn close(&mut self) {
        debug!("connection closed");
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Fire-and-forget send. The request is dropped silently when the
    /// connection is not open or the peer has hung up.
    pub fn send(&self, request: &Request) {
        if !self.open {
            debug!("dropping {} request: connection not open", request.name());
            return;
        }
        if self.tx.send(request.to_wire()).is_err() {
            debug!("dropping {} request: peer hung up", request.name());
        }
    }

    /// Pulls at most one queued inbound event without blocking.
    pub fn poll(&self) -> Option<ServerEvent> {
        if !self.open {
            return None;
        }
        self.rx.try_recv().ok().map(ServerEvent::from_wire)
    }
}
