//! Modal overlay helpers: placement, backdrop treatment and elevation.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect in `area`, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use launchpad_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Dim the page behind a dialog, keeping its glyphs readable.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    buf.set_style(area.intersection(buf.area), dim);
}

/// Hide the page behind a dialog entirely (terminal stand-in for a blur).
pub fn mask_background(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    Clear.render(area, buf);
    buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));
}

/// One-cell drop shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = Rect::new(modal.right(), modal.y.saturating_add(1), 1, modal.height);
    let bottom = Rect::new(modal.x.saturating_add(1), modal.bottom(), modal.width, 1);

    for edge in [right, bottom] {
        for position in edge.intersection(buf.area).positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ');
                cell.set_style(shadow);
            }
        }
    }
}

/// Reset every cell of `area` before drawing dialog content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area.intersection(buf.area), buf);
}
