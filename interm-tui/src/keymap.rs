use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use interm_core::action::Action;
use interm_core::state::{BrowserState, Mode};

/// Resolve a key event into an Action based on current mode
pub fn resolve_action(key: KeyEvent, state: &BrowserState) -> Option<Action> {
    // Global quit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match state.mode {
        Mode::Browsing => resolve_browsing_key(key.code),
        Mode::NamingFile(_) => resolve_naming_key(key.code),
        Mode::ConfirmDelete { .. } => Some(resolve_confirm_key(key.code)),
        // No events are read while the editor owns the terminal
        Mode::Suspended => None,
    }
}

fn resolve_browsing_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Char('w') => Some(Action::MoveSelection(-1)),
        KeyCode::Down | KeyCode::Char('s') => Some(Action::MoveSelection(1)),
        KeyCode::Home => Some(Action::MoveTop),
        KeyCode::End => Some(Action::MoveBottom),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Enter => Some(Action::Open),
        KeyCode::Char('e') => Some(Action::Edit),
        KeyCode::Char('n') => Some(Action::PromptNewFile),
        KeyCode::Char('d') => Some(Action::RequestDelete),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn resolve_naming_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::InputCancel),
        KeyCode::Enter => Some(Action::InputSubmit),
        KeyCode::Backspace => Some(Action::InputPop),
        KeyCode::Left => Some(Action::InputLeft),
        KeyCode::Right => Some(Action::InputRight),
        KeyCode::Char(c) => Some(Action::InputPush(c)),
        _ => None,
    }
}

fn resolve_confirm_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('y' | 'Y') => Action::ConfirmDelete,
        // The prompt is y/N: anything else backs out
        _ => Action::CancelDelete,
    }
}
