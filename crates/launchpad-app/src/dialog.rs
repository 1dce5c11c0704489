//! Image dialog state machine
//!
//! A dialog is either closed or open with its content. It is fully
//! controlled by the caller: opening replaces the content, and closing is
//! requested with a gesture that the dialog may refuse while close-locked.

use launchpad_core::Project;

/// Viewport class the dialog is laid out for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLayout {
    /// Single column with its own close control
    Mobile,
    /// Content column plus image panel
    Desktop,
}

impl DialogLayout {
    /// `Mobile` below `breakpoint` columns, `Desktop` from it
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            DialogLayout::Mobile
        } else {
            DialogLayout::Desktop
        }
    }
}

/// Ways the user can ask to dismiss the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseGesture {
    Escape,
    Backdrop,
    CloseControl,
}

/// Content of the dialog body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    Text(String),
    /// Ordered walkthrough; steps up to and including `current` are reached
    Steps { steps: Vec<String>, current: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDialog {
    pub title: String,
    pub body: DialogBody,
    pub footer: Option<String>,
    /// Image location shown in the desktop side panel
    pub image: Option<String>,
    pub blur_backdrop: bool,
    /// Refuse escape and backdrop dismissal and hide the desktop close control
    pub close_locked: bool,
}

const PAGE_TUTORIAL_STEPS: [&str; 4] = [
    "Project info: name, description and listing of the offering.",
    "Pool details: price, supply, sold share and the sale window.",
    "My investments: your allowance, allocations and vesting. Needs a connected wallet.",
    "User area: your price token balance and what you can still invest.",
];

impl ImageDialog {
    /// Project information dialog for a loaded project
    pub fn project_info(project: &Project) -> Self {
        let description = if project.description.trim().is_empty() {
            "No description provided.".to_string()
        } else {
            project.description.clone()
        };

        Self {
            title: project.project_name.clone(),
            body: DialogBody::Text(description),
            footer: Some(format!("Listing #{}", project.listing_id)),
            image: project.image.clone(),
            blur_backdrop: true,
            close_locked: false,
        }
    }

    /// Walkthrough of the page sections. Close-locked until finished.
    pub fn page_tutorial() -> Self {
        Self {
            title: "Project page".to_string(),
            body: DialogBody::Steps {
                steps: PAGE_TUTORIAL_STEPS.iter().map(|s| s.to_string()).collect(),
                current: 0,
            },
            footer: Some("←/→ step  Enter finish".to_string()),
            image: None,
            blur_backdrop: false,
            close_locked: true,
        }
    }

    /// Move the walkthrough forward or back. Returns whether it moved.
    pub fn step(&mut self, forward: bool) -> bool {
        match &mut self.body {
            DialogBody::Steps { steps, current } => {
                let next = if forward {
                    (*current + 1).min(steps.len().saturating_sub(1))
                } else {
                    current.saturating_sub(1)
                };
                let moved = next != *current;
                *current = next;
                moved
            }
            DialogBody::Text(_) => false,
        }
    }

    /// True for text dialogs and for walkthroughs on their last step
    pub fn is_finished(&self) -> bool {
        match &self.body {
            DialogBody::Steps { steps, current } => *current + 1 >= steps.len(),
            DialogBody::Text(_) => true,
        }
    }

    pub fn close_control_visible(&self, layout: DialogLayout) -> bool {
        match layout {
            DialogLayout::Mobile => true,
            DialogLayout::Desktop => !self.close_locked,
        }
    }

    /// Whether `gesture` dismisses the dialog in `layout`
    pub fn accepts(&self, gesture: CloseGesture, layout: DialogLayout) -> bool {
        match gesture {
            CloseGesture::Escape | CloseGesture::Backdrop => !self.close_locked,
            CloseGesture::CloseControl => self.close_control_visible(layout),
        }
    }
}

/// Open/closed state of the page's dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageDialogState {
    #[default]
    Closed,
    Open(ImageDialog),
}

impl ImageDialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, ImageDialogState::Open(_))
    }

    pub fn dialog(&self) -> Option<&ImageDialog> {
        match self {
            ImageDialogState::Open(dialog) => Some(dialog),
            ImageDialogState::Closed => None,
        }
    }

    pub fn dialog_mut(&mut self) -> Option<&mut ImageDialog> {
        match self {
            ImageDialogState::Open(dialog) => Some(dialog),
            ImageDialogState::Closed => None,
        }
    }

    pub fn open(&mut self, dialog: ImageDialog) {
        *self = ImageDialogState::Open(dialog);
    }

    /// Unconditional close by the owner of the dialog
    pub fn close(&mut self) {
        *self = ImageDialogState::Closed;
    }

    /// Close in response to a user gesture. Returns whether the dialog closed.
    pub fn request_close(&mut self, gesture: CloseGesture, layout: DialogLayout) -> bool {
        let accepted = match self.dialog() {
            Some(dialog) => dialog.accepts(gesture, layout),
            None => false,
        };
        if accepted {
            self.close();
        } else if self.is_open() {
            tracing::debug!("Dialog is close-locked, ignoring {:?}", gesture);
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog(close_locked: bool) -> ImageDialog {
        ImageDialog {
            title: "Title".to_string(),
            body: DialogBody::Text("Body".to_string()),
            footer: None,
            image: None,
            blur_backdrop: false,
            close_locked,
        }
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(DialogLayout::for_width(80, 81), DialogLayout::Mobile);
        assert_eq!(DialogLayout::for_width(81, 81), DialogLayout::Desktop);
        assert_eq!(DialogLayout::for_width(200, 81), DialogLayout::Desktop);
    }

    #[test]
    fn test_close_control_visibility() {
        let unlocked = dialog(false);
        let locked = dialog(true);
        assert!(unlocked.close_control_visible(DialogLayout::Mobile));
        assert!(unlocked.close_control_visible(DialogLayout::Desktop));
        assert!(locked.close_control_visible(DialogLayout::Mobile));
        assert!(!locked.close_control_visible(DialogLayout::Desktop));
    }

    #[test]
    fn test_unlocked_closes_on_any_gesture() {
        for gesture in [
            CloseGesture::Escape,
            CloseGesture::Backdrop,
            CloseGesture::CloseControl,
        ] {
            let mut state = ImageDialogState::default();
            state.open(dialog(false));
            assert!(state.request_close(gesture, DialogLayout::Desktop));
            assert!(!state.is_open());
        }
    }

    #[test]
    fn test_locked_refuses_escape_and_backdrop() {
        let mut state = ImageDialogState::default();
        state.open(dialog(true));

        assert!(!state.request_close(CloseGesture::Escape, DialogLayout::Desktop));
        assert!(!state.request_close(CloseGesture::Backdrop, DialogLayout::Mobile));
        assert!(!state.request_close(CloseGesture::CloseControl, DialogLayout::Desktop));
        assert!(state.is_open());
    }

    #[test]
    fn test_locked_mobile_close_control_still_closes() {
        let mut state = ImageDialogState::default();
        state.open(dialog(true));
        assert!(state.request_close(CloseGesture::CloseControl, DialogLayout::Mobile));
        assert!(!state.is_open());
    }

    #[test]
    fn test_closed_state_ignores_gestures() {
        let mut state = ImageDialogState::Closed;
        assert!(!state.request_close(CloseGesture::Escape, DialogLayout::Desktop));
        assert!(state.dialog().is_none());
    }

    #[test]
    fn test_tutorial_steps() {
        let mut tutorial = ImageDialog::page_tutorial();
        assert!(tutorial.close_locked);
        assert!(!tutorial.is_finished());
        assert!(!tutorial.step(false));

        while tutorial.step(true) {}
        assert!(tutorial.is_finished());
        assert!(!tutorial.step(true));
        assert!(tutorial.step(false));
        assert!(!tutorial.is_finished());
    }

    #[test]
    fn test_project_info_dialog() {
        let project = launchpad_chain::test_utils::test_project("p1", "7", None);
        let dialog = ImageDialog::project_info(&project);
        assert_eq!(dialog.title, "Project p1");
        assert_eq!(dialog.footer.as_deref(), Some("Listing #7"));
        assert!(!dialog.close_locked);
        assert!(dialog.is_finished());
    }
}
