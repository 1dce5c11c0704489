//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use launchpad_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn star_filled(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f005}", // nf-fa-star
            IconMode::Unicode => "\u{2605}",   // ★
        }
    }

    pub fn star_outline(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f006}", // nf-fa-star_o
            IconMode::Unicode => "\u{2606}",   // ☆
        }
    }

    pub fn chevron_left(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f053}", // nf-fa-chevron_left
            IconMode::Unicode => "\u{2039}",   // ‹
        }
    }

    pub fn big_chevron(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0d8}", // nf-fa-caret_up
            IconMode::Unicode => "\u{25b2}",   // ▲
        }
    }

    pub fn wallet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f555}", // nf-mdi-wallet
            IconMode::Unicode => "[W]",
        }
    }

    pub fn lock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f023}", // nf-fa-lock
            IconMode::Unicode => "\u{1f512}",  // 🔒
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "[img]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.star_filled(), "★");
        assert_eq!(icons.star_outline(), "☆");
        assert_eq!(icons.close(), "✗");
        assert!(!icons.wallet().is_empty());
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.star_filled(), nerd.star_filled());
        assert_ne!(unicode.big_chevron(), nerd.big_chevron());
        assert_ne!(unicode.lock(), nerd.lock());
    }

    #[test]
    fn test_icon_set_is_copy() {
        let icons = IconSet::new(IconMode::Unicode);
        let copy = icons;
        assert_eq!(icons.star_filled(), copy.star_filled());
    }
}
