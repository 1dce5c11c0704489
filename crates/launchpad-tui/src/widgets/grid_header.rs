//! Responsive grid header row
//!
//! Lays out arbitrary cells on a fixed column template chosen by width.
//! Cells flow left to right and wrap to the next row once every column of
//! the template is used.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::palette;

/// Fill weights per breakpoint. 1.5fr is expressed as 3 against 2.
const WIDE_TEMPLATE: [u16; 6] = [3, 2, 2, 2, 2, 2];
const MEDIUM_TEMPLATE: [u16; 4] = [2, 1, 1, 1];
const NARROW_TEMPLATE: [u16; 2] = [3, 2];

pub const WIDE_MIN_WIDTH: u16 = 120;
pub const MEDIUM_MIN_WIDTH: u16 = 80;

/// Gap between columns
const COLUMN_GAP: u16 = 2;

/// Column weights for a viewport `width` columns wide
pub fn column_template(width: u16) -> &'static [u16] {
    if width >= WIDE_MIN_WIDTH {
        &WIDE_TEMPLATE
    } else if width >= MEDIUM_MIN_WIDTH {
        &MEDIUM_TEMPLATE
    } else {
        &NARROW_TEMPLATE
    }
}

pub struct GridHeader<'a> {
    cells: Vec<Line<'a>>,
    viewport_width: Option<u16>,
    style: Style,
}

impl<'a> GridHeader<'a> {
    pub fn new(cells: Vec<Line<'a>>) -> Self {
        Self {
            cells,
            viewport_width: None,
            style: Style::default().bg(palette::CARD_BG),
        }
    }

    /// Pick the template from the terminal width instead of the widget area
    pub fn viewport_width(mut self, width: u16) -> Self {
        self.viewport_width = Some(width);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rows needed to show every cell at `width`
    pub fn height_for(width: u16, cell_count: usize) -> u16 {
        let columns = column_template(width).len();
        cell_count.div_ceil(columns) as u16
    }
}

impl Widget for GridHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);

        // px-3 analogue
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        if inner.is_empty() {
            return;
        }

        let template = column_template(self.viewport_width.unwrap_or(area.width));
        let constraints = template.iter().map(|w| Constraint::Fill(*w));

        for (row, chunk) in self.cells.chunks(template.len()).enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            let columns = Layout::horizontal(constraints.clone())
                .spacing(COLUMN_GAP)
                .split(row_area);

            for (cell, column) in chunk.iter().zip(columns.iter()) {
                Paragraph::new(cell.clone()).render(*column, buf);
            }
        }
    }
}
