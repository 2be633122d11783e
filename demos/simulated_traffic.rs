//! Demo: Simulated messenger traffic
//!
//! What it demonstrates
//! - Wiring a host thread to the dashboard with `channel_messenger()`.
//! - Answering source-list requests and pushing intercepted events.
//!
//! How to run
//! ```bash
//! cargo run --example simulated_traffic
//! ```
//! You should see two sources in the dropdown, a growing event table, and
//! the per-sender charts updating as events stream in.

use std::time::Duration;

use msgscope::{
    channel_messenger, run_msgscope, EventKind, MessengerEvent, MsgScopeConfig, SourceInfo,
    SourceRecord,
};

fn source_list() -> Vec<SourceRecord> {
    vec![
        SourceRecord {
            id: "demo.alpha".into(),
            name: "Alpha".into(),
            active: true,
            exports_diagnostic_api: true,
            info: Some(SourceInfo {
                views: 2,
                listeners: 1,
                pending_requests: 0,
            }),
        },
        SourceRecord {
            id: "demo.beta".into(),
            name: "Beta".into(),
            active: false,
            exports_diagnostic_api: true,
            info: None,
        },
    ]
}

fn main() -> eframe::Result<()> {
    let (sink, connection) = channel_messenger();

    // Host side: answer list requests, push a synthetic event twice a second.
    std::thread::spawn(move || {
        let senders = ["host", "webview", "worker"];
        let methods = ["update", "resolve", "notifyChange", "fetchState"];
        let mut n: u64 = 0;
        loop {
            while let Some(_req) = sink.try_recv_request() {
                if sink.send_source_list(source_list()).is_err() {
                    return; // UI closed
                }
            }

            let source = if n % 3 == 0 { "demo.beta" } else { "demo.alpha" };
            let event = MessengerEvent {
                kind: match n % 3 {
                    0 => EventKind::Request,
                    1 => EventKind::Response,
                    _ => EventKind::Notification,
                },
                sender: senders[(n % 3) as usize].into(),
                receiver: senders[((n + 1) % 3) as usize].into(),
                method: methods[(n % 4) as usize].into(),
                correlation_id: Some(format!("req-{}", n / 2)),
                size: 40 + (n % 7) * 13,
                error: if n % 11 == 0 {
                    Some("handler threw: timeout".into())
                } else {
                    None
                },
            };
            if sink.push_event(source, event).is_err() {
                return;
            }
            n = n.wrapping_add(1);
            std::thread::sleep(Duration::from_millis(500));
        }
    });

    run_msgscope(connection, MsgScopeConfig::default())
}
