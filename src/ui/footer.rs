use crate::ui::dashboard::{StatusKind, StatusLine};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str =
    " a: Add │ e: Edit │ Space: Availability │ d: Delete │ r: Reload │ q: Quit";
const DIALOG_HINTS: &str = " Tab: Next field │ Enter: Save │ Esc: Close";

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        area: Rect,
        status: Option<&StatusLine>,
        dialog_open: bool,
    ) -> Paragraph<'static> {
        let hints = if dialog_open { DIALOG_HINTS } else { LIST_HINTS };
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        // Status replaces the version on the right when present.
        let (right, right_style) = match status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => STATUS_OK,
                    StatusKind::Error => STATUS_ERROR,
                };
                (format!("{} ", status.message), Style::default().fg(color))
            }
            None => (format!("v{} ", VERSION), text_style),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(right.chars().count());

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding.max(1)), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
