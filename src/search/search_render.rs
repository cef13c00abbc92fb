use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, HighlightSpacing, List, ListItem, Paragraph},
};

use super::SearchStatus;
use crate::app::App;
use crate::theme;

const SELECTED_SYMBOL: &str = " ► ";

/// Render the area below the search field
///
/// Shows suggestions when there are any, otherwise the recent keywords read at startup.
/// Returns the inner rect of the recent keyword list when one is drawn, for click handling.
pub fn render_panel(app: &mut App, frame: &mut Frame, area: Rect) -> Option<Rect> {
    if app.search.suggestions().is_empty() {
        render_recent(app, frame, area)
    } else {
        render_suggestions(app, frame, area);
        None
    }
}

fn render_suggestions(app: &mut App, frame: &mut Frame, area: Rect) {
    let suggestions = app.search.suggestions();
    let max_text_len = (area.width as usize).saturating_sub(8);

    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|suggestion| {
            ListItem::new(Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(theme::panel::ITEM_ICON)),
                Span::styled(
                    truncate(&suggestion.label, max_text_len),
                    Style::default().fg(theme::panel::ITEM),
                ),
            ]))
        })
        .collect();

    // The list can shrink under a highlighted row when a slower response lands
    if let Some(selected) = app.list_state.selected()
        && selected >= items.len()
    {
        app.list_state.select(None);
    }

    let title = format!(" Suggestions ({}) ", items.len());
    let list = List::new(items)
        .block(panel_block(title, app.search.status()))
        .highlight_symbol(SELECTED_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(
            Style::default()
                .fg(theme::panel::ITEM_SELECTED_FG)
                .bg(theme::panel::ITEM_SELECTED_BG)
                .add_modifier(theme::panel::ITEM_SELECTED_MODIFIER),
        );

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_recent(app: &App, frame: &mut Frame, area: Rect) -> Option<Rect> {
    let block = panel_block(" Recent searches ".to_string(), app.search.status());
    let inner = block.inner(area);

    let Some(keywords) = &app.recent_keywords else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "   No recent searches",
            Style::default().fg(theme::panel::EMPTY),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return None;
    };

    let max_text_len = (area.width as usize).saturating_sub(8);
    let items: Vec<ListItem> = keywords
        .iter()
        .map(|keyword| {
            ListItem::new(Line::from(vec![
                Span::styled("   ↺ ", Style::default().fg(theme::panel::ITEM_ICON)),
                Span::styled(
                    truncate(keyword, max_text_len),
                    Style::default().fg(theme::panel::ITEM),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
    Some(inner)
}

fn panel_block(title: String, status: &SearchStatus) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(title, Style::default().fg(theme::panel::TITLE)))
        .border_style(Style::default().fg(theme::panel::BORDER));

    match status {
        SearchStatus::Idle => block,
        SearchStatus::Loading => block.title_bottom(Span::styled(
            " Searching… ",
            Style::default().fg(theme::panel::LOADING),
        )),
        SearchStatus::Failed(message) => block.title_bottom(Span::styled(
            format!(" Search failed: {} ", message),
            Style::default().fg(theme::panel::FAILED),
        )),
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let truncated: String = text.chars().take(max_len).collect();
        format!("{}…", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("flu", 10), "flu");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate("influenza", 3), "inf…");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("감기몸살", 4), "감기몸살");
        assert_eq!(truncate("감기몸살", 2), "감기…");
    }
}
