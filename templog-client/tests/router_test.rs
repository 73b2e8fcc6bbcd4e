use flume::{Receiver, Sender};

use templog_client::{
    Connection, DataPlotForm, DataTablesForm, DegreeDaysForm, FormSubmit, PageConfig, ViewPort,
    ViewRouter,
};
use templog_messages::{Link, Payload, ServerEvent, WireEvent};

// Test helpers to reduce boilerplate

/// Records every region mutation so tests can assert on the final state.
#[derive(Default)]
struct RecordingViewPort {
    list: Vec<Link>,
    image: Option<String>,
    text: String,
    notifications: Vec<String>,
}

impl ViewPort for RecordingViewPort {
    fn render_list(&mut self, links: &[Link]) {
        self.list.clear();
        self.list.extend_from_slice(links);
    }

    fn render_image(&mut self, url: &str) {
        self.image = Some(url.to_string());
    }

    fn set_text(&mut self, value: &str) {
        self.text = value.to_string();
    }

    fn append_notification(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// The server's side of the duplex channel.
struct Peer {
    to_client: Sender<WireEvent>,
    from_client: Receiver<WireEvent>,
}

fn setup_page(page: PageConfig) -> (ViewRouter<RecordingViewPort>, Peer) {
    let (client_tx, from_client) = flume::unbounded();
    let (to_client, client_rx) = flume::unbounded();

    let conn = Connection::new(client_tx, client_rx);
    let router = ViewRouter::new(conn, page, RecordingViewPort::default());

    (router, Peer {
        to_client,
        from_client,
    })
}

fn setup_dashboard() -> (ViewRouter<RecordingViewPort>, Peer) {
    let (mut router, peer) = setup_page(PageConfig::dashboard());
    router.connect();
    (router, peer)
}

fn push(peer: &Peer, wire: WireEvent) {
    peer.to_client.send(wire).unwrap();
}

fn links(entries: &[(&str, &str)]) -> Vec<Link> {
    entries
        .iter()
        .map(|(url, label)| Link::new(*url, *label))
        .collect()
}

#[test]
fn submit_sends_the_form_as_a_named_request() {
    let (router, peer) = setup_dashboard();

    router.submit(FormSubmit::DataTables(DataTablesForm {
        start: "2014_06_18".into(),
        end: "2014_06_19".into(),
    }));

    let wire = peer.from_client.recv().unwrap();
    assert_eq!(wire.name, "data_tables");
    assert_eq!(
        wire.payload,
        Payload::Args(vec!["2014_06_18".into(), "2014_06_19".into()])
    );
}

#[test]
fn checkbox_alone_picks_the_mode_argument() {
    let (router, peer) = setup_dashboard();

    // Garbage in every other field must not influence the mode token
    router.submit(FormSubmit::DegreeDays(DegreeDaysForm {
        base_temp: "not a number".into(),
        probe: true,
        start: "".into(),
        end: "???".into(),
    }));
    router.submit(FormSubmit::DegreeDays(DegreeDaysForm {
        base_temp: "10.0".into(),
        probe: false,
        start: "2014_06_18".into(),
        end: "2014_06_19".into(),
    }));

    for expected_mode in ["probe", "ambient"] {
        let wire = peer.from_client.recv().unwrap();
        assert_eq!(wire.name, "get_degree_days");
        match wire.payload {
            Payload::Args(args) => assert_eq!(args[1], expected_mode),
            other => panic!("expected positional args, got {other:?}"),
        }
    }
}

#[test]
fn requests_before_open_are_dropped_not_queued() {
    let (mut router, peer) = setup_page(PageConfig::dashboard());

    router.submit(FormSubmit::DataPlot(DataPlotForm {
        date: "2014_06_18".into(),
    }));
    assert!(
        peer.from_client.is_empty(),
        "request before open must not be delivered"
    );

    // Opening later must not flush it either
    router.connect();
    assert!(peer.from_client.is_empty(), "request must not be queued");

    router.submit(FormSubmit::DataPlot(DataPlotForm {
        date: "2014_06_19".into(),
    }));
    let wire = peer.from_client.recv().unwrap();
    assert_eq!(wire.payload, Payload::Args(vec!["2014_06_19".into()]));
    assert_eq!(peer.from_client.len(), 0);
}

#[test]
fn requests_after_teardown_are_dropped() {
    let (mut router, peer) = setup_dashboard();

    router.teardown();
    router.submit(FormSubmit::DataPlot(DataPlotForm {
        date: "2014_06_18".into(),
    }));

    assert!(peer.from_client.is_empty());
    assert!(!router.is_connected());
}

#[test]
fn data_tables_clears_before_rendering() {
    let (mut router, _peer) = setup_dashboard();
    let payload = links(&[("Data/a.csv", "A"), ("Data/b.csv", "B")]);

    router.apply(ServerEvent::DataTables(payload.clone()));
    router.apply(ServerEvent::DataTables(payload.clone()));

    // Same payload twice yields the same listing, not a doubled one
    assert_eq!(router.view_mut().list, payload);
}

#[test]
fn data_tables_preserves_payload_order() {
    let (mut router, _peer) = setup_dashboard();

    router.apply(ServerEvent::DataTables(links(&[
        ("a.csv", "A"),
        ("b.csv", "B"),
    ])));

    let labels: Vec<&str> = router
        .view_mut()
        .list
        .iter()
        .map(|link| link.label.as_str())
        .collect();
    assert_eq!(labels, ["A", "B"]);
}

#[test]
fn degree_day_errors_accumulate() {
    let (mut router, _peer) = setup_dashboard();

    router.apply(ServerEvent::DegreeDaysError("X".into()));
    router.apply(ServerEvent::DegreeDaysError("Y".into()));

    assert_eq!(router.view_mut().notifications, ["X", "Y"]);
}

#[test]
fn degree_days_replaces_the_readout_verbatim() {
    let (mut router, _peer) = setup_dashboard();

    router.apply(ServerEvent::DegreeDays("37.25".into()));
    router.apply(ServerEvent::DegreeDays("0".into()));

    assert_eq!(router.view_mut().text, "0");
}

#[test]
fn unbound_events_leave_the_page_untouched() {
    let (mut router, _peer) = setup_page(PageConfig::archive());
    router.connect();

    router.apply(ServerEvent::DataPlot("plots/x.png".into()));
    router.apply(ServerEvent::DegreeDays("12".into()));
    router.apply(ServerEvent::DegreeDaysError("nope".into()));

    let view = router.view_mut();
    assert_eq!(view.image, None);
    assert_eq!(view.text, "");
    assert!(view.notifications.is_empty());
}

#[test]
fn hooks_and_unknown_events_leave_the_page_untouched() {
    let (mut router, _peer) = setup_dashboard();

    router.apply(ServerEvent::Connected);
    router.apply(ServerEvent::ChannelError);
    router.apply(ServerEvent::Ignored("nicknames".into()));

    let view = router.view_mut();
    assert!(view.list.is_empty());
    assert_eq!(view.image, None);
    assert_eq!(view.text, "");
    assert!(view.notifications.is_empty());
}

#[test]
fn pump_applies_queued_events_in_arrival_order() {
    let (mut router, peer) = setup_dashboard();

    push(&peer, WireEvent::new(
        "data_tables",
        Payload::Links(links(&[("a.csv", "A")])),
    ));
    // A later listing for the same region: arrival order wins, so the
    // second one is what ends up on screen
    push(&peer, WireEvent::new(
        "data_tables",
        Payload::Links(links(&[("b.csv", "B")])),
    ));
    push(&peer, WireEvent::new("degree_days", Payload::Number(4.5)));
    push(&peer, WireEvent::new("nicknames", Payload::Text("bob".into())));

    router.pump();

    let view = router.view_mut();
    assert_eq!(view.list, links(&[("b.csv", "B")]));
    assert_eq!(view.text, "4.5");
}

#[test]
fn pump_on_a_closed_connection_delivers_nothing() {
    let (mut router, peer) = setup_page(PageConfig::dashboard());

    push(&peer, WireEvent::new("degree_days", Payload::Number(4.5)));
    router.pump();

    assert_eq!(router.view_mut().text, "");
}

#[test]
fn end_to_end_request_and_response_over_the_channel() {
    let (mut router, peer) = setup_dashboard();

    router.submit(FormSubmit::DataTables(DataTablesForm {
        start: "2014_06_18".into(),
        end: "2014_06_18".into(),
    }));

    // Stand in for the server: answer the request we just received
    let request = peer.from_client.recv().unwrap();
    assert_eq!(request.name, "data_tables");
    push(&peer, WireEvent::new(
        "data_tables",
        Payload::Links(links(&[("Data/2014_06_18.csv", "2014_06_18.csv")])),
    ));

    router.pump();
    assert_eq!(
        router.view_mut().list,
        links(&[("Data/2014_06_18.csv", "2014_06_18.csv")])
    );
}
