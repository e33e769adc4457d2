use crate::ui::dashboard::DashboardState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &DashboardState, base_url: &str, busy: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let count = if state.loaded {
            format!("{} foods", state.foods.len())
        } else {
            "loading...".to_string()
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Food Dashboard",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(count, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(base_url.to_string(), Style::default().fg(MUTED_TEXT)),
        ];
        if busy {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("saving...", Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
