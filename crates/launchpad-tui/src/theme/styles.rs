//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Key hints in footers and the back line
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" for the selected tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Disabled, non-interactive controls
pub fn disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Style for a sale status label from the indexer
pub fn sale_status(status: &str) -> Style {
    match status {
        "sale" | "open" | "live" => status_green(),
        "ended" | "closed" | "cancelled" => status_red(),
        "unknown" => text_muted(),
        _ => status_yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_block_focus_changes_border() {
        assert_ne!(border_active(), border_inactive());
        let _ = glass_block(true);
        let _ = glass_block(false);
    }

    #[test]
    fn test_disabled_is_muted() {
        assert_eq!(disabled().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_sale_status_styles() {
        assert_eq!(sale_status("sale"), status_green());
        assert_eq!(sale_status("ended"), status_red());
        assert_eq!(sale_status("unknown"), text_muted());
        assert_eq!(sale_status("whitelist"), status_yellow());
    }
}
