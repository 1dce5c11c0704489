//! Tab switcher for the details card
//!
//! Renders "Pool details" and "My investments" with their key hints. The
//! investments tab is drawn disabled when no wallet is connected.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use launchpad_app::PageTab;

use crate::theme::styles;

pub struct PageTabs {
    selected: PageTab,
    has_account: bool,
}

impl PageTabs {
    pub fn new(selected: PageTab, has_account: bool) -> Self {
        Self {
            selected,
            has_account,
        }
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        PageTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let enabled = tab.is_enabled(self.has_account);
                let label_style = if enabled {
                    Style::default()
                } else {
                    styles::disabled()
                };
                let hint_style = if enabled {
                    styles::keybinding()
                } else {
                    styles::text_muted()
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), hint_style),
                    Span::styled(format!("{} ", tab.label()), label_style),
                ])
            })
            .collect()
    }

    fn selected_index(&self) -> usize {
        PageTab::ALL
            .iter()
            .position(|t| *t == self.selected)
            .unwrap_or(0)
    }
}

impl Widget for PageTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(self.tab_titles())
            .select(self.selected_index())
            .highlight_style(styles::focused_selected())
            .divider("│");
        tabs.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;
    use ratatui::{backend::TestBackend, Terminal};

    fn title_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_titles_and_hints() {
        let titles = PageTabs::new(PageTab::Pool, true).tab_titles();
        assert_eq!(titles.len(), 2);
        assert!(title_text(&titles[0]).contains("1 Pool details"));
        assert!(title_text(&titles[1]).contains("2 My investments"));
    }

    #[test]
    fn test_investments_disabled_without_account() {
        let titles = PageTabs::new(PageTab::Pool, false).tab_titles();
        let label = &titles[1].spans[1];
        assert!(label.style.add_modifier.contains(Modifier::CROSSED_OUT));

        let pool_label = &titles[0].spans[1];
        assert!(!pool_label.style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_selected_index() {
        assert_eq!(PageTabs::new(PageTab::Pool, true).selected_index(), 0);
        assert_eq!(PageTabs::new(PageTab::Investments, true).selected_index(), 1);
    }

    #[test]
    fn test_renders_both_labels() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|f| f.render_widget(PageTabs::new(PageTab::Pool, false), f.area()))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Pool details"));
        assert!(content.contains("My investments"));
    }
}
