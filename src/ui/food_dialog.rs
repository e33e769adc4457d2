//! Add/edit dialog rendering.

use crate::food::FormField;
use crate::ui::dashboard::ModalState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 12;

pub fn render_food_dialog(frame: &mut Frame, area: Rect, modal: &ModalState, submitting: bool) {
    let (title, form) = match modal {
        ModalState::Closed => return,
        ModalState::Adding { form, .. } => (" New food ".to_string(), form),
        ModalState::Editing { food, form, .. } => (format!(" Edit food #{} ", food.id), form),
    };

    let inner_width = DIALOG_WIDTH.saturating_sub(2) as usize;
    let value_width = inner_width.saturating_sub(LABEL_WIDTH + 3);
    let focused = form.focused_field();

    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        let value = form.value(field);
        // Keep the tail visible while typing long values.
        let shown: String = {
            let count = value.chars().count();
            value.chars().skip(count.saturating_sub(value_width)).collect()
        };
        let is_focused = field == focused;
        let cursor = if is_focused { "▏" } else { "" };
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {:<width$} ", field.label(), width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(format!("{}{}", shown, cursor), Style::default().fg(HEADER_TEXT)),
        ]);
        if is_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    if let Some(error) = modal.error() {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    let hint = if submitting {
        " Saving..."
    } else {
        " Enter: Save  Esc: Cancel"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));

    let height = lines.len().saturating_add(2) as u16;
    let rect = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
