use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::navigation::Focus;
use crate::notification::render_notification;
use crate::theme;

const INPUT_HEIGHT: u16 = 3;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions = Default::default();

        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let input_rect = crate::input::input_render::render_field(self, frame, layout[0]);
        self.layout_regions.input_field = Some(input_rect);

        self.layout_regions.panel = Some(layout[1]);
        self.layout_regions.recent_list =
            crate::search::search_render::render_panel(self, frame, layout[1]);

        render_help_line(self, frame, layout[2]);

        render_notification(frame, &mut self.notification);
    }
}

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.nav.focus {
        Focus::Item(_) => {
            hints!["↑/↓" => "Browse", "Enter" => "Search", "Esc" => "Clear", "Ctrl+C" => "Quit"]
        }
        Focus::Input if app.suggestions().is_empty() => {
            hints!["Enter" => "Search", "Esc" => "Clear", "Click" => "Open Recent", "Ctrl+C" => "Quit"]
        }
        Focus::Input => {
            hints!["↓" => "Suggestions", "Enter" => "Search", "Esc" => "Clear", "Ctrl+C" => "Quit"]
        }
    }
}

fn render_help_line(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::TEXT);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in context_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", desc_style));
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
