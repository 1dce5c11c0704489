//! Icon widgets
//!
//! Stateless glyph renderers. Caller styles are patched over the fixed
//! presets without validation, so any attribute the caller passes wins.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Widget;

use crate::theme::{icons::IconSet, palette};

/// Rating star with a filled and an outline preset
#[derive(Debug, Clone, Copy)]
pub struct Star {
    filled: bool,
    icons: IconSet,
    style: Style,
}

impl Star {
    pub fn new(filled: bool, icons: IconSet) -> Self {
        Self {
            filled,
            icons,
            style: Style::default(),
        }
    }

    /// Attributes applied on top of the preset
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn preset(&self) -> Style {
        if self.filled {
            Style::default().fg(palette::STAR_FILLED)
        } else {
            Style::default()
                .fg(palette::STAR_OUTLINE)
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn glyph(&self) -> &'static str {
        if self.filled {
            self.icons.star_filled()
        } else {
            self.icons.star_outline()
        }
    }

    pub fn to_span(self) -> Span<'static> {
        Span::styled(self.glyph(), self.preset().patch(self.style))
    }
}

impl Widget for Star {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let span = self.to_span();
        buf.set_span(area.x, area.y, &span, area.width);
    }
}

/// Large upward caret used as a disclosure marker
#[derive(Debug, Clone, Copy)]
pub struct BigChevron {
    icons: IconSet,
    style: Style,
}

impl BigChevron {
    pub fn new(icons: IconSet) -> Self {
        Self {
            icons,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn to_span(self) -> Span<'static> {
        Span::styled(
            self.icons.big_chevron(),
            Style::default().fg(palette::BIG_CHEVRON).patch(self.style),
        )
    }
}

impl Widget for BigChevron {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let span = self.to_span();
        buf.set_span(area.x, area.y, &span, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_app::config::IconMode;
    use ratatui::style::Color;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_star_presets() {
        let filled = Star::new(true, icons()).to_span();
        let outline = Star::new(false, icons()).to_span();

        assert_eq!(filled.content, "★");
        assert_eq!(outline.content, "☆");
        assert_eq!(filled.style.fg, Some(palette::STAR_FILLED));
        assert_eq!(outline.style.fg, Some(palette::STAR_OUTLINE));
    }

    #[test]
    fn test_star_style_passthrough_wins() {
        let span = Star::new(true, icons())
            .style(Style::default().fg(Color::Magenta).bg(Color::Blue))
            .to_span();
        assert_eq!(span.style.fg, Some(Color::Magenta));
        assert_eq!(span.style.bg, Some(Color::Blue));
    }

    #[test]
    fn test_star_renders_into_buffer() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        Star::new(false, icons()).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "☆");
    }

    #[test]
    fn test_empty_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        Star::new(true, icons()).render(Rect::new(0, 0, 0, 0), &mut buf);
        BigChevron::new(icons()).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_big_chevron() {
        let span = BigChevron::new(icons()).to_span();
        assert_eq!(span.content, "▲");
        assert_eq!(span.style.fg, Some(palette::BIG_CHEVRON));

        let styled = BigChevron::new(icons())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .to_span();
        assert!(styled.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(styled.style.fg, Some(palette::BIG_CHEVRON));
    }
}
