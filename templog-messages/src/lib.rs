mod event;
mod request;
mod wire;

pub use event::{Link, ServerEvent};
pub use request::{Mode, Request};
pub use wire::{Payload, WireEvent};
