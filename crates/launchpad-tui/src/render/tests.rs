//! Full-screen render tests for the project page

use super::view;
use crate::test_utils::{
    test_app_state, TestTerminal, COMPACT_HEIGHT, COMPACT_WIDTH, WIDE_HEIGHT, WIDE_WIDTH,
};
use launchpad_app::handler::{update, UpdateAction};
use launchpad_app::page::{AllowanceOutcome, FetchRequest, PageTab};
use launchpad_app::state::AppState;
use launchpad_app::Message;
use launchpad_chain::test_utils::{test_allocation, test_project, test_vesting};
use launchpad_core::{InvestorAllowance, TokenBalance};

/// Navigate to `route` and answer every request successfully
fn loaded_state(width: u16, height: u16, account: Option<&str>, route: &str) -> AppState {
    let mut state = test_app_state(width, height, account);
    let result = update(
        &mut state,
        Message::Navigate {
            route: route.to_string(),
        },
    );

    let mut pending = match result.action {
        Some(UpdateAction::Fetch(requests)) => requests,
        None => Vec::new(),
    };
    while let Some(request) = pending.pop() {
        let tag = request.tag().clone();
        let msg = match request {
            FetchRequest::Allowance { .. } => Message::AllowanceFetched {
                tag,
                outcome: AllowanceOutcome::Resolved(InvestorAllowance::new("5")),
            },
            FetchRequest::Project { project_id, .. } => Message::ProjectFetched {
                tag,
                result: Ok(Some(test_project(project_id.as_str(), "7", Some("usdt.near")))),
            },
            FetchRequest::InvestorAllocation { .. } => Message::AllocationFetched {
                tag,
                result: Ok(Some(test_allocation(2))),
            },
            FetchRequest::VestedAllocations { .. } => Message::VestedAllocationsFetched {
                tag,
                result: Ok(test_vesting(&["1000000000000000000000", "2000000000000000000000"])),
            },
            FetchRequest::PriceTokenBalance { .. } => Message::PriceTokenBalanceFetched {
                tag,
                result: Ok(TokenBalance::new("12500000")),
            },
        };
        if let Some(UpdateAction::Fetch(more)) = update(&mut state, msg).action {
            pending.extend(more);
        }
    }
    state
}

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(state.terminal_width, state.terminal_height);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_loading_shows_only_spinner() {
    let mut state = test_app_state(80, 24, None);
    let _ = update(
        &mut state,
        Message::Navigate {
            route: "/projects/p1".into(),
        },
    );
    assert!(state.page.is_loading());

    let term = render(&state);
    assert!(term.buffer_contains("⠋"));
    assert!(!term.buffer_contains("Pool details"));
    assert!(term.buffer_contains("All Projects"));
}

#[test]
fn test_spinner_advances_with_animation_frame() {
    let mut state = test_app_state(80, 24, None);
    state.animation_frame = 3;
    let term = render(&state);
    assert!(term.buffer_contains("⠸"));
}

#[test]
fn test_no_project_selected() {
    let state = loaded_state(80, 24, None, "/projects");
    assert!(!state.page.is_loading());
    let term = render(&state);
    assert!(term.buffer_contains("No project selected"));
}

#[test]
fn test_project_not_found() {
    let mut state = test_app_state(80, 24, None);
    let result = update(
        &mut state,
        Message::Navigate {
            route: "/projects/missing".into(),
        },
    );
    if let Some(UpdateAction::Fetch(requests)) = result.action {
        for request in requests {
            let tag = request.tag().clone();
            let _ = update(&mut state, Message::ProjectFetched { tag, result: Ok(None) });
        }
    }

    let term = render(&state);
    assert!(term.buffer_contains("Project not found"));
}

#[test]
fn test_anonymous_page_shows_pool_and_connect_prompt() {
    let state = loaded_state(80, 40, None, "/projects/p1");
    let term = render(&state);

    assert!(term.buffer_contains("Project p1"));
    assert!(term.buffer_contains("Pool details"));
    assert!(term.buffer_contains("Price per allocation"));
    assert!(term.buffer_contains("250 USDT"));
    assert!(term.buffer_contains("25 / 100"));
    assert!(term.buffer_contains("2023-11-14 22:13 UTC"));
    assert!(term.buffer_contains("Connect a wallet"));
    assert!(term.buffer_contains("not connected"));
}

#[test]
fn test_public_project_has_star() {
    let state = loaded_state(80, 40, None, "/projects/p1");
    let term = render(&state);
    assert!(term.buffer_contains("★"));
    assert!(term.buffer_contains("▲ [i] more info"));
}

#[test]
fn test_connected_user_area() {
    let state = loaded_state(WIDE_WIDTH, WIDE_HEIGHT, Some("alice.near"), "/projects/p1");
    let term = render(&state);

    assert!(term.buffer_contains("alice.near"));
    assert!(term.buffer_contains("12.5 USDT"));
    // Allowance 5, two allocations bought
    let line = term.find_line("Remaining allocations").expect("remaining line");
    assert!(term.line_contains(line, "3"));
}

#[test]
fn test_investments_tab_lists_vesting() {
    let mut state = loaded_state(WIDE_WIDTH, WIDE_HEIGHT, Some("alice.near"), "/projects/p1");
    let _ = update(&mut state, Message::SelectTab(PageTab::Investments));
    assert_eq!(state.page.tab(), PageTab::Investments);

    let term = render(&state);
    assert!(term.buffer_contains("Allocations bought"));
    assert!(term.buffer_contains("Unlocks"));
    assert!(term.buffer_contains("2023-11-15"));
}

#[test]
fn test_project_dialog_overlays_page() {
    let mut state = loaded_state(WIDE_WIDTH, WIDE_HEIGHT, None, "/projects/p1");
    let _ = update(&mut state, Message::OpenProjectDialog);

    let term = render(&state);
    assert!(term.buffer_contains("Listing #7"));
    assert!(term.buffer_contains("[Esc] close"));
}

#[test]
fn test_tutorial_hints_on_mobile() {
    let mut state = loaded_state(COMPACT_WIDTH, COMPACT_HEIGHT, None, "/projects/p1");
    let _ = update(&mut state, Message::OpenTutorialDialog);

    let term = render(&state);
    assert!(term.buffer_contains("Project page"));
    assert!(term.buffer_contains("[Enter] finish"));
    // Mobile keeps its close control while locked
    assert!(term.buffer_contains("[x]"));
}
