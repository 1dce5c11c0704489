//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the project page
pub struct PageAreas {
    /// Back link and wallet status
    pub back: Rect,
    pub body: Rect,
    /// Key hints
    pub hints: Rect,
}

/// Areas inside the page body
pub struct BodyAreas {
    pub info: Rect,
    pub details: Rect,
    pub user: Rect,
}

pub fn create(area: Rect) -> PageAreas {
    let [back, body, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    PageAreas { back, body, hints }
}

/// Split the body into project info, details card and user area.
///
/// Wide screens put info and details on the left with the user area on the
/// right. Otherwise everything stacks in one column.
pub fn body(area: Rect, wide: bool) -> BodyAreas {
    if wide {
        let [left, user] =
            Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).areas(area);
        let [info, details] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(5)]).areas(left);
        BodyAreas {
            info,
            details,
            user,
        }
    } else {
        let [info, details, user] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Min(5),
            Constraint::Length(6),
        ])
        .areas(area);
        BodyAreas {
            info,
            details,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reserves_back_and_hints() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.back.height, 1);
        assert_eq!(areas.hints.height, 1);
        assert_eq!(areas.body.height, 22);
        assert_eq!(areas.hints.y, 23);
    }

    #[test]
    fn test_wide_body_has_side_column() {
        let body = body(Rect::new(0, 1, 120, 30), true);
        assert_eq!(body.info.x, body.details.x);
        assert!(body.user.x > body.info.x);
        assert_eq!(body.user.height, 30);
    }

    #[test]
    fn test_narrow_body_stacks() {
        let body = body(Rect::new(0, 1, 80, 22), false);
        assert_eq!(body.info.x, body.user.x);
        assert!(body.details.y > body.info.y);
        assert!(body.user.y > body.details.y);
    }
}
