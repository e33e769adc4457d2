//! One row per food, keyed by id.

use crate::food::Food;
use crate::ui::dashboard::DashboardState;
use crate::ui::layout::scroll_offset;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Lines each row occupies (name line + description line).
const ROW_HEIGHT: usize = 2;

pub fn render_food_list(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default().borders(Borders::NONE);
    let inner = block.inner(area);

    if state.foods.is_empty() {
        let message = if state.loaded {
            "No foods yet. Press 'a' to add one."
        } else {
            "Loading foods..."
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let visible_rows = (inner.height as usize / ROW_HEIGHT).max(1);
    let offset = scroll_offset(state.selected, state.foods.len(), visible_rows);
    let name_width = state
        .foods
        .iter()
        .map(|food| food.name.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = state
        .foods
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .flat_map(|(idx, food)| food_row(food, idx, idx == state.selected, name_width))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn food_row(food: &Food, index: usize, selected: bool, name_width: usize) -> [Line<'static>; 2] {
    let (badge, badge_color) = if food.available {
        ("● Available", STATUS_OK)
    } else {
        ("○ Unavailable", STATUS_ERROR)
    };
    let mut name_style = Style::default().fg(HEADER_TEXT);
    if !food.available {
        name_style = name_style.add_modifier(Modifier::DIM);
    }

    let mut title = Line::from(vec![
        Span::styled(format!(" {:>3}. ", index + 1), Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!("{:<width$}", food.name, width = name_width),
            name_style.add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("R$ {}", food.price), Style::default().fg(PRICE_TEXT)),
        Span::raw("  "),
        Span::styled(badge, Style::default().fg(badge_color)),
    ]);
    let mut detail = Line::from(Span::styled(
        format!(
            "      {}",
            food.description.as_deref().unwrap_or(food.image.as_str())
        ),
        Style::default().fg(MUTED_TEXT),
    ));

    if selected {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        title = title.style(highlight);
        detail = detail.style(highlight);
    }

    [title, detail]
}
