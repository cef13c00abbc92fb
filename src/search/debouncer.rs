use std::time::Instant;

/// Trailing-edge debounce timer.
///
/// Times are milliseconds since the debouncer was created; the `_at` variants take them
/// explicitly so callers can drive the timer deterministically.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u64,
    origin: Instant,
    /// Time of the last input that triggered a debounce
    last_input_ms: Option<u64>,
    /// Whether there's a pending execution waiting for debounce to expire
    pending_execution: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            origin: Instant::now(),
            last_input_ms: None,
            pending_execution: false,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Milliseconds elapsed since creation
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Replaces any pending execution with one due `delay_ms` after `now_ms`.
    pub fn schedule_execution_at(&mut self, now_ms: u64) {
        self.last_input_ms = Some(now_ms);
        self.pending_execution = true;
    }

    pub fn should_execute_at(&self, now_ms: u64) -> bool {
        if !self.pending_execution {
            return false;
        }

        match self.last_input_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.delay_ms,
            None => false,
        }
    }

    pub fn mark_executed(&mut self) {
        self.pending_execution = false;
        self.last_input_ms = None;
    }

    pub fn cancel(&mut self) {
        self.mark_executed();
    }

    pub fn has_pending(&self) -> bool {
        self.pending_execution
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
