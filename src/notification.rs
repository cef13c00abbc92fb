//! Transient warnings drawn over the prompt (bad config, lookup worker not running).

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState};
