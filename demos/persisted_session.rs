//! Demo: Persistent dashboard state
//!
//! What it demonstrates
//! - Restoring the selection and accumulated event logs across runs via
//!   `persist_path`.
//! - Driving the selection from host code with a `SelectionController`.
//!
//! How to run
//! ```bash
//! cargo run --example persisted_session
//! ```
//! Close and restart: the previously selected source and its event log come
//! back. Every five seconds the host flips the selection programmatically.

use std::time::Duration;

use msgscope::{
    channel_messenger, run_msgscope, EventKind, MessengerEvent, MsgScopeConfig,
    SelectionController, SourceRecord,
};

fn main() -> eframe::Result<()> {
    let (sink, connection) = channel_messenger();

    let selection = SelectionController::new();
    let mut cfg = MsgScopeConfig::default();
    cfg.title = "Messenger Devtools (persisted)".into();
    cfg.persist_path = Some(std::env::temp_dir().join("msgscope_demo_state.json"));
    cfg.controllers.selection = Some(selection.clone());

    std::thread::spawn(move || {
        let ids = ["demo.left", "demo.right"];
        let mut n: u64 = 0;
        loop {
            while let Some(_req) = sink.try_recv_request() {
                let sources = ids
                    .iter()
                    .map(|id| SourceRecord {
                        id: (*id).into(),
                        name: id.rsplit('.').next().unwrap_or(id).to_uppercase(),
                        active: true,
                        exports_diagnostic_api: true,
                        info: None,
                    })
                    .collect();
                if sink.send_source_list(sources).is_err() {
                    return;
                }
            }

            let event = MessengerEvent {
                kind: EventKind::Notification,
                sender: "host".into(),
                receiver: "webview".into(),
                method: "tick".into(),
                correlation_id: None,
                size: 16,
                error: None,
            };
            if sink.push_event(ids[(n % 2) as usize], event).is_err() {
                return;
            }

            // Flip the selection every 5 seconds to show external control.
            if n > 0 && n % 5 == 0 {
                selection.request_select(ids[((n / 5) % 2) as usize]);
            }
            n = n.wrapping_add(1);
            std::thread::sleep(Duration::from_secs(1));
        }
    });

    run_msgscope(connection, cfg)
}
