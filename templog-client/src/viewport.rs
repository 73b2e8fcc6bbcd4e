use templog_messages::Link;

/// The rendering surface a router mutates, one method per render region.
///
/// Keeping the surface behind a trait keeps the routing logic testable
/// without a real window; the running app plugs in its eframe dashboard.
pub trait ViewPort {
    /// Replace the file listing: clear it, then append one link per entry
    /// in payload order. Rendering the same payload twice must yield the
    /// same listing, not a doubled one.
    fn render_list(&mut self, links: &[Link]);

    /// Replace the plot region with a single image for `url`.
    fn render_image(&mut self, url: &str);

    /// Replace the degree-day readout with `value`, exactly as received.
    fn set_text(&mut self, value: &str);

    /// Add a dismissible notification. Never clears earlier ones; they
    /// accumulate until each is dismissed on its own.
    fn append_notification(&mut self, message: &str);
}
