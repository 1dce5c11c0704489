//! Modal image dialog widget
//!
//! Renders an [`ImageDialog`] over the page: a single column with its own
//! close control on narrow terminals, or a content column beside an image
//! panel on wide ones. The desktop close control is hidden while the dialog
//! is close-locked.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use launchpad_app::dialog::{DialogBody, DialogLayout, ImageDialog};

use super::modal_overlay;
use crate::theme::{icons::IconSet, palette, styles};

/// Desktop dialog size, the terminal analogue of 700x400 px
const DESKTOP_MIN_WIDTH: u16 = 70;
const DESKTOP_MIN_HEIGHT: u16 = 16;

/// Text shown on the close control
const CLOSE_HINT: &str = "x";

pub struct ModalImageDialog<'a> {
    dialog: &'a ImageDialog,
    layout: DialogLayout,
    icons: IconSet,
}

impl<'a> ModalImageDialog<'a> {
    pub fn new(dialog: &'a ImageDialog, layout: DialogLayout, icons: IconSet) -> Self {
        Self {
            dialog,
            layout,
            icons,
        }
    }

    fn body_lines(&self) -> Vec<Line<'a>> {
        match &self.dialog.body {
            DialogBody::Text(text) => text
                .lines()
                .map(|l| Line::styled(l, styles::text_primary()))
                .collect(),
            DialogBody::Steps { steps, current } => steps
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    let (marker, style) = if i < *current {
                        (self.icons.check(), styles::status_green())
                    } else if i == *current {
                        ("›", styles::accent_bold())
                    } else {
                        (" ", styles::text_muted())
                    };
                    Line::from(vec![
                        Span::styled(format!("{} {}. ", marker, i + 1), style),
                        Span::styled(step.as_str(), style),
                    ])
                })
                .collect(),
        }
    }

    fn close_control(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("[{}] ", CLOSE_HINT), styles::keybinding()),
            Span::styled(self.icons.close(), styles::text_bright_bold()),
        ])
    }

    fn modal_rect(&self, area: Rect) -> Rect {
        match self.layout {
            DialogLayout::Desktop => {
                let width = DESKTOP_MIN_WIDTH.max(area.width * 3 / 5);
                let height = DESKTOP_MIN_HEIGHT.max(area.height / 2);
                modal_overlay::centered_rect(width, height, area)
            }
            DialogLayout::Mobile => {
                // Title, body, footer, borders and padding
                let body = self.body_lines().len() as u16;
                let height = body.saturating_add(8);
                modal_overlay::centered_rect(area.width, height, area)
            }
        }
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, show_close: bool) {
        let block = Block::default().style(Style::default().bg(palette::POPUP_BG));
        let inner = Rect {
            x: area.x.saturating_add(2),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let [title_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled(
            self.dialog.title.as_str(),
            styles::text_bright_bold(),
        ))
        .render(title_area, buf);

        if show_close {
            Paragraph::new(self.close_control())
                .alignment(Alignment::Right)
                .render(title_area, buf);
        }

        Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .render(body_area, buf);

        if let Some(footer) = &self.dialog.footer {
            Paragraph::new(Line::styled(footer.as_str(), styles::text_secondary()))
                .render(footer_area, buf);
        }
    }

    fn render_image_panel(&self, area: Rect, buf: &mut Buffer, show_close: bool) {
        Block::default()
            .style(Style::default().bg(palette::IMAGE_PANEL_BG))
            .render(area, buf);

        let corner = Rect::new(
            area.x,
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            1,
        );
        if show_close {
            Paragraph::new(self.close_control())
                .alignment(Alignment::Right)
                .render(corner, buf);
        } else if self.dialog.close_locked {
            Paragraph::new(Line::styled(self.icons.lock(), styles::text_muted()))
                .alignment(Alignment::Right)
                .render(corner, buf);
        }

        if let Some(image) = &self.dialog.image {
            let middle = area.y + area.height / 2;
            let max = area.width.saturating_sub(4) as usize;
            let lines = vec![
                Line::styled(self.icons.image(), styles::text_muted()),
                Line::styled(truncate_width(image, max), styles::text_muted()),
            ];
            let label = Rect::new(
                area.x + 2,
                middle.saturating_sub(1),
                area.width.saturating_sub(4),
                2,
            );
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(label.intersection(area), buf);
        }
    }
}

impl Widget for ModalImageDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.dialog.blur_backdrop {
            modal_overlay::mask_background(buf, area);
        } else {
            modal_overlay::dim_background(buf, area);
        }

        let modal = self.modal_rect(area);
        modal_overlay::clear_area(buf, modal);

        let show_close = self.dialog.close_control_visible(self.layout);
        match self.layout {
            DialogLayout::Mobile => {
                self.render_content(modal, buf, show_close);
            }
            DialogLayout::Desktop => {
                modal_overlay::render_shadow(buf, modal);
                let [content, image] =
                    Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).areas(modal);
                self.render_content(content, buf, false);
                self.render_image_panel(image, buf, show_close);
            }
        }
    }
}

/// Truncate to `max` display columns, adding an ellipsis if needed
pub(crate) fn truncate_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
