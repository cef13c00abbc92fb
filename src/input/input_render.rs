use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::app::App;
use crate::navigation::Focus;
use crate::theme;

/// Render the search field. Returns the area it occupies.
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let (border_color, hint) = match app.nav.focus {
        Focus::Input => (theme::input::BORDER_FOCUSED, None),
        Focus::Item(_) => (
            theme::input::BORDER_BROWSING,
            Some(" Enter to search · type to edit "),
        ),
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    if let Some(hint) = hint {
        block = block.title_bottom(Span::styled(hint, Style::default().fg(border_color)));
    }

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);

    area
}
