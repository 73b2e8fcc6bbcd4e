use eframe::egui::{Response, RichText, Ui, Widget};

use templog_client::{PageConfig, ViewPort};
use templog_messages::Link;

/// One dismissible banner under the degree-day readout.
struct Notification {
    id: u64,
    message: String,
}

/// Central panel state: one field per render region.
///
/// Regions are mutated only through the `ViewPort` impl and read by the
/// frame code that draws them. Which sections are drawn at all follows the
/// page configuration; the router never feeds the others anyway.
pub struct Dashboard {
    page: PageConfig,
    tables: Vec<Link>,
    plot_url: Option<String>,
    degree_days: String,
    notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl Dashboard {
    pub fn new(page: PageConfig) -> Self {
        Self {
            page,
            tables: Vec::new(),
            plot_url: None,
            degree_days: String::new(),
            notifications: Vec::new(),
            next_notification_id: 0,
        }
    }

    /// Removes exactly one notification; the rest stay until their own
    /// dismissal.
    fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }
}

impl ViewPort for Dashboard {
    fn render_list(&mut self, links: &[Link]) {
        self.tables.clear();
        self.tables.extend_from_slice(links);
    }

    fn render_image(&mut self, url: &str) {
        self.plot_url = Some(url.to_string());
    }

    fn set_text(&mut self, value: &str) {
        self.degree_days = value.to_string();
    }

    fn append_notification(&mut self, message: &str) {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id,
            message: message.to_string(),
        });
    }
}

impl Widget for &mut Dashboard {
    fn ui(self, ui: &mut Ui) -> Response {
        if self.page.tables {
            ui.heading("Data files");
            if self.tables.is_empty() {
                ui.label("No files listed yet.");
            } else {
                for link in &self.tables {
                    ui.hyperlink_to(&link.label, &link.url);
                }
            }
            ui.separator();
        }

        if self.page.plot {
            ui.heading("Plot");
            match &self.plot_url {
                Some(url) => {
                    ui.hyperlink_to("data plot", url);
                }
                None => {
                    ui.label("No plot requested yet.");
                }
            }
            ui.separator();
        }

        if self.page.degree_days {
            ui.heading("Degree days");
            if self.degree_days.is_empty() {
                ui.label("-");
            } else {
                // Shown exactly as the server sent it
                ui.label(RichText::new(&self.degree_days).strong());
            }

            let mut dismissed = None;
            for notification in &self.notifications {
                ui.horizontal(|ui| {
                    ui.label(&notification.message);
                    if ui.small_button("x").clicked() {
                        dismissed = Some(notification.id);
                    }
                });
            }
            if let Some(id) = dismissed {
                self.dismiss(id);
            }
        }

        ui.response()
    }
}
