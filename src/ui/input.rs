//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::{Action, Command};
use super::navigation::{Tab, ViewState};
use super::state::App;

/// 根据当前视图和按键获取对应的 Action
pub fn get_action(view: &ViewState, show_help: bool, key: KeyCode) -> Option<Action> {
    if show_help {
        return match key {
            KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if let Some(action) = global_action(key) {
        return Some(action);
    }

    match view {
        ViewState::Projects | ViewState::Articles => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Enter => Some(Action::Activate),
            _ => None,
        },
        ViewState::ProjectDetail(_) => match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
            KeyCode::Char('d') => Some(Action::OpenDemo),
            KeyCode::Char('s') => Some(Action::OpenSource),
            _ => None,
        },
        ViewState::About | ViewState::Contact => None,
    }
}

fn global_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Tab | KeyCode::Right => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Left => Some(Action::PrevTab),
        KeyCode::Char(c @ '1'..='4') => {
            Tab::from_index(c as usize - '1' as usize).map(Action::GoToTab)
        }
        KeyCode::Char('e') => Some(Action::OpenEmail),
        KeyCode::Char('l') => Some(Action::OpenLinkedIn),
        KeyCode::Char('g') => Some(Action::OpenGithub),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> Option<Command> {
    get_action(&app.view, app.show_help, key).and_then(|action| app.dispatch(action))
}
