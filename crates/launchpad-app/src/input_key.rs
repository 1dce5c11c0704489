//! Keyboard input as seen by the update loop.
//!
//! The TUI converts terminal events into [`InputKey`] at its boundary so the
//! app crate never depends on crossterm.

/// A key press the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Plain character (letters, digits, symbols)
    Char(char),
    /// Character pressed together with Ctrl
    CharCtrl(char),
    Left,
    Right,
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_distinct_from_plain_char() {
        assert_eq!(InputKey::Char('q'), InputKey::Char('q'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
