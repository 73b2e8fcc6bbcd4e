mod dashboard;
mod forms_panel;

pub use dashboard::Dashboard;

use log::debug;

use forms_panel::FormsPanel;
use templog_client::{Connection, PageConfig, ViewRouter};

/// Main application struct implementing the egui App trait.
pub struct TemplogApp {
    router: ViewRouter<Dashboard>,
    forms: FormsPanel,
}

impl TemplogApp {
    fn new(conn: Connection, page: PageConfig) -> Self {
        let mut router = ViewRouter::new(conn, page, Dashboard::new(page));
        router.connect();
        Self {
            router,
            forms: FormsPanel::new(page),
        }
    }
}

impl eframe::App for TemplogApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        // Apply whatever the server pushed since the last frame
        self.router.pump();

        ctx.request_repaint();

        // Right side panel for the submit forms
        eframe::egui::SidePanel::right("forms")
            .default_width(250.0)
            .show(ctx, |ui| {
                ui.add(&mut self.forms);
            });

        // Central panel for the render regions
        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(self.router.view_mut());
        });

        for submitted in self.forms.take_submissions() {
            self.router.submit(submitted);
        }
    }
}

impl Drop for TemplogApp {
    // The one teardown point: the window closing is this page unloading
    fn drop(&mut self) {
        debug!("page closing, tearing down connection");
        self.router.teardown();
    }
}

/// Entry point for the UI.
///
/// Runs the eframe application on the main thread (blocking). The
/// connection is closed when the window closes and the app is dropped.
pub fn run(conn: Connection, page: PageConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("templog"),
        ..Default::default()
    };

    eframe::run_native(
        "templog",
        options,
        Box::new(move |_cc| Ok(Box::new(TemplogApp::new(conn, page)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
