use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::Debouncer;
use crate::cache::KeywordCache;
use crate::config::SearchConfig;
use crate::lookup::{LookupError, LookupRequest, LookupResponse};
use crate::suggestion::Suggestion;

/// What the suggestion panel should say about the last search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Debounced, cache-aware search controller
///
/// Every change of keyword or auto-search flag restarts the debounce timer. When the timer
/// fires the cache is consulted first; a miss on a non-empty keyword is sent to the lookup
/// worker. Remote results are displayed but never written into the cache.
pub struct SearchState {
    debouncer: Debouncer,
    keyword: String,
    auto_search: bool,
    suggestions: Vec<Suggestion>,
    status: SearchStatus,
    next_token: u64,
    latest_token: Option<u64>,
    latest_request_wins: bool,
    request_tx: Option<Sender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
}

impl SearchState {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            debouncer: Debouncer::new(config.debounce_ms),
            keyword: String::new(),
            auto_search: false,
            suggestions: Vec::new(),
            status: SearchStatus::Idle,
            next_token: 1,
            latest_token: None,
            latest_request_wins: config.latest_request_wins,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Connect to the lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.has_pending()
    }

    pub fn latest_token(&self) -> Option<u64> {
        self.latest_token
    }

    /// Report the current keyword and auto-search flag. Restarts the debounce on change.
    pub fn observe(&mut self, keyword: &str, auto_search: bool) {
        let now = self.debouncer.now_ms();
        self.observe_at(keyword, auto_search, now);
    }

    pub fn observe_at(&mut self, keyword: &str, auto_search: bool, now_ms: u64) {
        if keyword == self.keyword && auto_search == self.auto_search {
            return;
        }

        self.keyword = keyword.to_string();
        self.auto_search = auto_search;
        self.debouncer.schedule_execution_at(now_ms);
    }

    /// Drop the pending search, if any. Called when the prompt is torn down.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    /// Run the search if the debounce period has elapsed. Returns true if state changed.
    pub fn tick(&mut self, cache: &mut KeywordCache) -> bool {
        let now = self.debouncer.now_ms();
        self.tick_at(cache, now)
    }

    pub fn tick_at(&mut self, cache: &mut KeywordCache, now_ms: u64) -> bool {
        if !self.debouncer.should_execute_at(now_ms) {
            return false;
        }
        self.debouncer.mark_executed();
        self.run_search(cache)
    }

    fn run_search(&mut self, cache: &mut KeywordCache) -> bool {
        if self.auto_search {
            #[cfg(debug_assertions)]
            log::debug!("Search suppressed while browsing suggestions");
            return false;
        }

        if let Some(cached) = cache.get(&self.keyword) {
            self.publish(cached);
            return true;
        }

        if self.keyword.is_empty() {
            self.publish(Vec::new());
            return true;
        }

        self.dispatch();
        true
    }

    /// Show suggestions resolved without a lookup. Lookups still in flight are now older
    /// than what is on screen.
    fn publish(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.status = SearchStatus::Idle;
        self.latest_token = None;
    }

    fn dispatch(&mut self) {
        let token = self.next_token;
        self.next_token += 1;
        self.latest_token = Some(token);

        let request = LookupRequest {
            token,
            keyword: self.keyword.clone(),
        };

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };

        if sent {
            #[cfg(debug_assertions)]
            log::debug!("Dispatched lookup #{} for {:?}", token, self.keyword);
            self.status = SearchStatus::Loading;
        } else {
            log::warn!("Lookup worker unavailable, dropping search for {:?}", self.keyword);
            self.status = SearchStatus::Failed(LookupError::Unavailable.to_string());
        }
    }

    /// Drain finished lookups from the worker. Returns true if state changed.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;

        loop {
            let received = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => return changed,
            };

            match received {
                Ok(response) => changed |= self.apply_response(response),
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Lookup worker disconnected");
                    self.response_rx = None;
                    self.request_tx = None;
                    return changed;
                }
            }
        }
    }

    /// Apply one lookup result. Failures keep the last suggestions on screen.
    ///
    /// Responses are applied in arrival order, so an older lookup can overwrite a newer one
    /// unless `latest_request_wins` is set.
    pub fn apply_response(&mut self, response: LookupResponse) -> bool {
        let is_latest = self.latest_token == Some(response.token);

        if self.latest_request_wins && !is_latest {
            #[cfg(debug_assertions)]
            log::debug!(
                "Discarding stale lookup #{} for {:?}",
                response.token,
                response.keyword
            );
            return false;
        }

        match response.result {
            Ok(suggestions) => {
                self.suggestions = suggestions;
                if is_latest {
                    self.status = SearchStatus::Idle;
                }
            }
            Err(e) => {
                self.status = SearchStatus::Failed(e.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
