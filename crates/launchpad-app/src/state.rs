//! Application state (the Model in TEA)

use launchpad_core::AccountId;

use crate::config::Settings;
use crate::dialog::{DialogLayout, ImageDialogState};
use crate::page::ProjectPage;

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// The project detail page
    pub page: ProjectPage,

    /// Dialog shown over the page, if any
    pub dialog: ImageDialogState,

    pub settings: Settings,

    /// Terminal size in columns and rows
    pub terminal_width: u16,
    pub terminal_height: u16,

    /// Spinner frame counter, advanced on every tick
    pub animation_frame: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// State for the wallet session configured in `settings`
    pub fn with_settings(settings: Settings) -> Self {
        let account: Option<AccountId> = settings.account();
        Self {
            phase: AppPhase::Running,
            page: ProjectPage::new(account),
            dialog: ImageDialogState::Closed,
            settings,
            terminal_width: 80,
            terminal_height: 24,
            animation_frame: 0,
        }
    }

    pub fn dialog_layout(&self) -> DialogLayout {
        DialogLayout::for_width(self.terminal_width, self.settings.ui.mobile_breakpoint)
    }

    /// Whether the page lays out in two columns
    pub fn is_wide(&self) -> bool {
        self.terminal_width >= self.settings.ui.wide_breakpoint
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running_and_loading() {
        let state = AppState::new();
        assert!(!state.should_quit());
        assert!(state.page.is_loading());
        assert!(!state.dialog.is_open());
    }

    #[test]
    fn test_wallet_from_settings() {
        let mut settings = Settings::default();
        settings.wallet.account_id = Some("alice.near".to_string());
        let state = AppState::with_settings(settings);
        assert_eq!(state.page.account_id().unwrap().as_str(), "alice.near");
    }

    #[test]
    fn test_layout_follows_width() {
        let mut state = AppState::new();
        state.terminal_width = 60;
        assert_eq!(state.dialog_layout(), DialogLayout::Mobile);
        assert!(!state.is_wide());

        state.terminal_width = 130;
        assert_eq!(state.dialog_layout(), DialogLayout::Desktop);
        assert!(state.is_wide());
    }

    #[test]
    fn test_tick_wraps() {
        let mut state = AppState::new();
        state.animation_frame = u64::MAX;
        state.tick();
        assert_eq!(state.animation_frame, 0);
    }
}
