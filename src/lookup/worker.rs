//! Lookup worker thread
//!
//! Runs suggestion lookups in a background thread so the UI keeps responding.
//! Requests are processed one at a time in arrival order; nothing is cancelled once sent.
//! A lookup that hangs holds back every request queued behind it, so with the service down
//! each queued keystroke waits out the previous one's `lookup.timeout_ms`.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::{LookupRequest, LookupResponse, SuggestionLookup};

/// Spawn the lookup worker thread
///
/// The worker exits when the request channel is closed. A panic inside a lookup is
/// caught and logged so it cannot corrupt the terminal.
pub fn spawn_worker<L>(
    lookup: L,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> std::thread::JoinHandle<()>
where
    L: SuggestionLookup + Send + 'static,
{
    std::thread::spawn(move || {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            worker_loop(&lookup, request_rx, response_tx);
        }));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Lookup worker thread panicked: {}", panic_msg);
        }
    })
}

fn worker_loop<L: SuggestionLookup + ?Sized>(
    lookup: &L,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        #[cfg(debug_assertions)]
        log::debug!("Lookup #{} for {:?}", request.token, request.keyword);

        let result = lookup.lookup(&request.keyword);

        if let Err(e) = &result {
            log::warn!("Lookup #{} failed: {}", request.token, e);
        }

        let response = LookupResponse {
            token: request.token,
            keyword: request.keyword,
            result,
        };

        // Receiver gone means the UI has shut down.
        if response_tx.send(response).is_err() {
            break;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
