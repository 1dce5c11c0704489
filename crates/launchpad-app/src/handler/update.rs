//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};

use launchpad_core::PROJECTS_ROUTE;

use crate::dialog::ImageDialog;
use crate::message::Message;
use crate::page::PageEffect;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.page.is_loading() {
                state.tick();
            }
            UpdateResult::none()
        }

        Message::Resize { width, height } => {
            state.terminal_width = width;
            state.terminal_height = height;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate { route } => {
            info!("Navigating to {}", route);
            state.dialog.close();
            UpdateResult::from_effect(state.page.navigate(&route))
        }

        Message::NavigateBack => {
            info!("Back to {}", PROJECTS_ROUTE);
            state.dialog.close();
            state.page.leave();
            // The projects overview lives outside this client
            state.request_quit();
            UpdateResult::none()
        }

        Message::Refresh => UpdateResult::from_effect(state.page.refresh()),

        Message::WalletChanged { account_id } => {
            UpdateResult::from_effect(state.page.set_account(account_id))
        }

        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            state.page.select_tab(tab);
            UpdateResult::none()
        }

        Message::NextTab => {
            state.page.next_tab();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialog
        // ─────────────────────────────────────────────────────────
        Message::OpenProjectDialog => {
            if let Some(project) = state.page.data().project.as_ref() {
                let dialog = ImageDialog::project_info(project);
                state.dialog.open(dialog);
            }
            UpdateResult::none()
        }

        Message::OpenTutorialDialog => {
            state.dialog.open(ImageDialog::page_tutorial());
            UpdateResult::none()
        }

        Message::CloseDialog(gesture) => {
            let layout = state.dialog_layout();
            state.dialog.request_close(gesture, layout);
            UpdateResult::none()
        }

        Message::TutorialStep { forward } => {
            if let Some(dialog) = state.dialog.dialog_mut() {
                dialog.step(forward);
            }
            UpdateResult::none()
        }

        Message::FinishTutorial => {
            if state.dialog.dialog().is_some_and(|d| d.is_finished()) {
                state.dialog.close();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Source responses
        // ─────────────────────────────────────────────────────────
        Message::AllowanceFetched { tag, outcome } => {
            applied(state.page.apply_allowance(&tag, outcome))
        }
        Message::ProjectFetched { tag, result } => applied(state.page.apply_project(&tag, result)),
        Message::AllocationFetched { tag, result } => {
            applied(state.page.apply_allocation(&tag, result))
        }
        Message::VestedAllocationsFetched { tag, result } => {
            applied(state.page.apply_vested(&tag, result))
        }
        Message::PriceTokenBalanceFetched { tag, result } => {
            applied(state.page.apply_balance(&tag, result))
        }
    }
}

fn applied(effect: Option<PageEffect>) -> UpdateResult {
    match effect {
        Some(effect) => UpdateResult::from_effect(effect),
        None => {
            debug!("Response discarded");
            UpdateResult::none()
        }
    }
}
