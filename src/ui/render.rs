use crate::ui::app::App;
use crate::ui::food_dialog::render_food_dialog;
use crate::ui::food_list::render_food_list;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.dashboard();
    let base_url = app.config().get().api.base_url;

    frame.render_widget(Header::new().widget(state, &base_url, app.is_busy()), header);
    frame.render_widget(Clear, body);
    render_food_list(frame, body, state);
    frame.render_widget(
        Footer::new().widget(footer, state.status.as_ref(), state.modal.is_open()),
        footer,
    );

    render_food_dialog(frame, body, &state.modal, state.submitting);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiOutcome;
    use crate::config::{Config, ConfigStore};
    use crate::food::Food;
    use crate::ui::dashboard::DashboardIntent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with_cake() -> App {
        let config = ConfigStore::new(Config::default());
        let mut app = App::new(config);
        app.on_api_outcome(ApiOutcome::Loaded(vec![Food {
            id: 1,
            name: "Cake".to_string(),
            price: "10.00".to_string(),
            image: "https://img/cake.png".to_string(),
            description: Some("Chocolate".to_string()),
            available: true,
        }]));
        app
    }

    #[test]
    fn list_shows_rows() {
        let app = app_with_cake();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Food Dashboard"));
        assert!(text.contains("http://localhost:3333"));
        assert!(text.contains("Cake"));
        assert!(text.contains("R$ 10.00"));
        assert!(text.contains("Chocolate"));
    }

    #[test]
    fn edit_dialog_is_prefilled() {
        let mut app = app_with_cake();
        app.begin_edit_selected();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Edit food #1"));
        assert!(text.contains("https://img/cake.png"));
    }

    #[test]
    fn empty_list_hint_after_load() {
        let config = ConfigStore::new(Config::default());
        let mut app = App::new(config);
        app.dispatch(DashboardIntent::Loaded { foods: vec![] });
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("No foods yet"));
    }
}
