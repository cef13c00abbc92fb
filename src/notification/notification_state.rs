use std::time::{Duration, Instant};

const WARNING_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn warning(message: &str) -> Self {
        Self {
            message: message.to_string(),
            created_at: Instant::now(),
            duration: WARNING_DURATION,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// At most one warning is shown; a new one replaces the old.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::warning(message));
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(notif) = &self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
