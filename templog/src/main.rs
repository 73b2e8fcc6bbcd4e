mod demo;

use log::LevelFilter;
use std::io::Write;

use templog_client::{Connection, PageConfig};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{:<5} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Debug)
        .filter_module("eframe", LevelFilter::Warn)
        .filter_module("egui_glow", LevelFilter::Warn)
        .init();

    // Page variant from the CLI - the client ships several pages with
    // different feature subsets
    let page = match std::env::args().nth(1).as_deref() {
        None | Some("dashboard") => PageConfig::dashboard(),
        Some("archive") => PageConfig::archive(),
        Some("plots") => PageConfig::plots(),
        Some(other) => anyhow::bail!("unknown page variant: {other}"),
    };

    // One duplex channel pair between the page and the demo peer
    let (request_tx, request_rx) = flume::unbounded();
    let (event_tx, event_rx) = flume::unbounded();

    let peer_handle = std::thread::spawn(move || {
        demo::DemoPeer::new(request_rx, event_tx).run();
    });

    // Run UI on main thread (blocking)
    let conn = Connection::new(request_tx, event_rx);
    templog_ui::run(conn, page)?;

    // UI has exited and dropped its endpoints - the peer sees the
    // disconnect and winds down
    peer_handle
        .join()
        .map_err(|_| anyhow::anyhow!("demo peer thread panicked"))?;

    Ok(())
}
