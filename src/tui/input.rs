use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::Mode;

use super::app::App;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Any keypress dismisses the previous action's status message
    app.store.clear_status();

    match app.store.mode() {
        Mode::List => handle_list(app, key),
        Mode::Add | Mode::Edit => handle_input(app, key),
    }
}

fn handle_list(app: &mut App, key: KeyEvent) {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,

        // Reorder: shifted movement drags the whole subtree
        KeyCode::Char('J') => app.store.move_task_down(),
        KeyCode::Char('K') => app.store.move_task_up(),
        KeyCode::Down if shift => app.store.move_task_down(),
        KeyCode::Up if shift => app.store.move_task_up(),

        KeyCode::Char('j') | KeyCode::Down => app.store.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.store.select_previous(),

        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Left => app.store.promote(),
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Right => app.store.demote(),

        KeyCode::Char(' ') => app.store.toggle(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.store.delete(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.store.start_add(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.store.start_edit(),
        _ => {}
    }
}

fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.store.commit_input(),
        KeyCode::Esc => app.store.cancel_input(),
        KeyCode::Backspace => app.store.input_backspace(),
        KeyCode::Left => app.store.input_left(),
        KeyCode::Right => app.store.input_right(),
        KeyCode::Home => app.store.input_home(),
        KeyCode::End => app.store.input_end(),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.store.input_insert(&c.to_string());
            }
        }
        _ => {}
    }
}
