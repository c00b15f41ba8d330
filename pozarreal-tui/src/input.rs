use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.streets`()
    ReloadStreets,
    /// Run `service.street_info`(...) for the highlighted street
    LoadStreetInfo,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Char, Down, Enter, Esc, Left, Right, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::StreetList => match key.code {
            Up | Char('k') => {
                if app.street_list_index > 0 {
                    app.street_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.street_list_index + 1 < app.streets.len() {
                    app.street_list_index += 1;
                }
            }
            Enter | Right | Char(' ') => {
                action = Action::LoadStreetInfo;
            }
            Char('r') => {
                action = Action::ReloadStreets;
            }
            _ => {}
        },

        Screen::StreetInfo => match key.code {
            Left | Esc | Char('b') => {
                app.close_street();
            }
            Char('r') => {
                action = Action::LoadStreetInfo;
            }
            _ => {}
        },
    }
    action
}
