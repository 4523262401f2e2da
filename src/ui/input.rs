//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::router::ViewMode;
use super::state::{App, InputMode};

/// 根据当前模式、页面和按键获取对应的 Action
pub fn get_action(mode: &InputMode, view: ViewMode, key: KeyCode) -> Option<Action> {
    match mode {
        InputMode::Searching | InputMode::EditingField(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        InputMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                Some(Action::Navigate(ViewMode::ALL[index]))
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextTab),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevTab),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            KeyCode::Esc => Some(Action::Back),
            _ => view_action(view, key),
        },
    }
}

/// 各页面专属按键
fn view_action(view: ViewMode, key: KeyCode) -> Option<Action> {
    match (view, key) {
        (ViewMode::Home, KeyCode::Char('v')) => Some(Action::ViewAllRides),
        (ViewMode::Home, KeyCode::Char('c')) => Some(Action::StartNewChat),
        (ViewMode::Messages | ViewMode::FindRide, KeyCode::Char('/')) => Some(Action::StartSearch),
        (ViewMode::OfferRide, KeyCode::Char('+') | KeyCode::Char('=')) => Some(Action::AddSeat),
        (ViewMode::OfferRide, KeyCode::Char('-')) => Some(Action::RemoveSeat),
        (ViewMode::Profile, KeyCode::Char('r')) => Some(Action::RefreshProfiles),
        _ => None,
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(&app.mode, app.view(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CONVERSATIONS;
    use crate::offer::OfferField;

    #[test]
    fn test_number_keys_pick_tabs() {
        let mode = InputMode::Normal;
        assert_eq!(
            get_action(&mode, ViewMode::Home, KeyCode::Char('1')),
            Some(Action::Navigate(ViewMode::Home))
        );
        assert_eq!(
            get_action(&mode, ViewMode::Home, KeyCode::Char('5')),
            Some(Action::Navigate(ViewMode::Profile))
        );
        assert_eq!(get_action(&mode, ViewMode::Home, KeyCode::Char('6')), None);
    }

    #[test]
    fn test_view_specific_keys() {
        let mode = InputMode::Normal;
        assert_eq!(
            get_action(&mode, ViewMode::Home, KeyCode::Char('v')),
            Some(Action::ViewAllRides)
        );
        assert_eq!(get_action(&mode, ViewMode::Profile, KeyCode::Char('v')), None);
        assert_eq!(
            get_action(&mode, ViewMode::FindRide, KeyCode::Char('/')),
            Some(Action::StartSearch)
        );
        assert_eq!(get_action(&mode, ViewMode::Home, KeyCode::Char('/')), None);
    }

    #[test]
    fn test_text_modes_capture_characters() {
        let mode = InputMode::EditingField(OfferField::Notes);
        assert_eq!(
            get_action(&mode, ViewMode::OfferRide, KeyCode::Char('q')),
            Some(Action::Input('q'))
        );
        assert_eq!(
            get_action(&InputMode::Searching, ViewMode::Messages, KeyCode::Esc),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_key_sequence_opens_and_closes_chat() {
        let mut app = App::new(CONVERSATIONS, false);
        for key in [KeyCode::Char('2'), KeyCode::Enter] {
            assert!(!handle_key_event(&mut app, key));
        }
        assert_eq!(app.router.selected_conversation().map(|c| c.id), Some("1"));

        handle_key_event(&mut app, KeyCode::Esc);
        assert!(app.router.selected_conversation().is_none());
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));
    }
}
