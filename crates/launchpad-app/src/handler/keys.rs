//! Key event handlers for the page and the dialog

use crate::dialog::{CloseGesture, ImageDialog};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::page::PageTab;
use crate::state::AppState;

/// Convert key events to messages depending on whether a dialog is open
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.dialog.dialog() {
        Some(dialog) => handle_key_dialog(dialog, key),
        None => handle_key_page(state, key),
    }
}

/// Keys while the dialog captures input
fn handle_key_dialog(dialog: &ImageDialog, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseDialog(CloseGesture::Escape)),
        InputKey::Char('x') => Some(Message::CloseDialog(CloseGesture::CloseControl)),
        InputKey::Right | InputKey::Char('l') => Some(Message::TutorialStep { forward: true }),
        InputKey::Left | InputKey::Char('h') => Some(Message::TutorialStep { forward: false }),
        InputKey::Enter if dialog.is_finished() && dialog.close_locked => {
            Some(Message::FinishTutorial)
        }
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys on the page itself
fn handle_key_page(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('1' | 'p') => Some(Message::SelectTab(PageTab::Pool)),
        InputKey::Char('2' | 'm') => Some(Message::SelectTab(PageTab::Investments)),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextTab),

        // Project info needs a loaded project
        InputKey::Char('i') if state.page.data().project.is_some() => {
            Some(Message::OpenProjectDialog)
        }
        InputKey::Char('?') => Some(Message::OpenTutorialDialog),

        InputKey::Char('r') => Some(Message::Refresh),

        InputKey::Char('b') | InputKey::Backspace | InputKey::Esc => Some(Message::NavigateBack),

        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
