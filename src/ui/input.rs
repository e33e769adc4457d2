use crate::ui::app::App;
use crate::ui::dashboard::DashboardIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.dashboard().modal.is_open() {
        handle_dialog_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'e') {
        app.dispatch(DashboardIntent::ToggleEdit);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('a') => app.dispatch(DashboardIntent::ToggleAdd),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('E') => app.dispatch(DashboardIntent::ToggleEdit),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char(' ') => {
            app.toggle_selected_availability();
        }
        KeyCode::Char('r') => {
            if app.load() {
                app.dispatch(DashboardIntent::Notify {
                    message: "Reloading...".to_string(),
                });
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(DashboardIntent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(DashboardIntent::SelectNext),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'e') && app.dashboard().modal.is_editing() {
        app.dispatch(DashboardIntent::ToggleEdit);
        return;
    }

    match key.code {
        KeyCode::Esc => app.dispatch(DashboardIntent::CloseModal),
        KeyCode::Enter => {
            app.submit_dialog();
        }
        KeyCode::Tab | KeyCode::Down => app.dispatch(DashboardIntent::FormNextField),
        KeyCode::BackTab | KeyCode::Up => app.dispatch(DashboardIntent::FormPrevField),
        KeyCode::Backspace => app.dispatch(DashboardIntent::FormBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(DashboardIntent::FormInput { ch });
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
