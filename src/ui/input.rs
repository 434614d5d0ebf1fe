use crate::table::{SortDirection, SortField, SortKey};
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Failure popup swallows the key that dismisses it.
    if app.notification().is_some() {
        app.dismiss_notification();
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => {
            app.change_page(-1);
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => {
            app.change_page(1);
        }
        KeyCode::Char('[') => app.cycle_page_size(-1),
        KeyCode::Char(']') => app.cycle_page_size(1),
        KeyCode::Char('0') => app.set_sort(None),
        KeyCode::Char(ch) => {
            if let Some(sort) = sort_for_key(ch) {
                app.set_sort(Some(sort));
            }
        }
        _ => {}
    }
}

fn sort_for_key(ch: char) -> Option<SortKey> {
    let (field, direction) = match ch {
        '1' => (SortField::Price, SortDirection::Ascending),
        '2' => (SortField::Price, SortDirection::Descending),
        '3' => (SortField::Title, SortDirection::Ascending),
        '4' => (SortField::Title, SortDirection::Descending),
        _ => return None,
    };
    Some(SortKey::new(field, direction))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
