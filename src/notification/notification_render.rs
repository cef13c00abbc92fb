use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

/// Render the current warning in the top-right corner, on top of everything else
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let frame_area = frame.area();
    let margin = 1;
    let width = (notif.message.chars().count() as u16 + 4)
        .min(frame_area.width.saturating_sub(margin * 2));
    let area = Rect {
        x: frame_area.width.saturating_sub(width + margin),
        y: margin,
        width,
        height: 3u16.min(frame_area.height.saturating_sub(margin)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow).bg(Color::Yellow))
        .style(Style::default().bg(Color::Yellow));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
