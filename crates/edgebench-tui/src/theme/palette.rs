//! Color palettes, one per editor color scheme.

use edgebench_core::Theme;
use ratatui::style::Color;

/// Colors used by every widget. Widgets never hard-code colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
    pub status_blue: Color,

    // --- Syntax ---
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
    pub line_number: Color,
}

/// `github`: dark text on a light background
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(255, 255, 255),
    card_bg: Color::Rgb(246, 248, 250),
    popup_bg: Color::Rgb(234, 238, 242),
    border_dim: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),
    accent: Color::Rgb(9, 105, 218),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(87, 96, 106),
    text_muted: Color::Rgb(140, 149, 159),
    status_green: Color::Rgb(26, 127, 55),
    status_red: Color::Rgb(207, 34, 46),
    status_yellow: Color::Rgb(154, 103, 0),
    status_blue: Color::Rgb(9, 105, 218),
    keyword: Color::Rgb(207, 34, 46),
    string: Color::Rgb(10, 48, 105),
    comment: Color::Rgb(110, 119, 129),
    number: Color::Rgb(5, 80, 174),
    line_number: Color::Rgb(140, 149, 159),
};

/// `monokai`: light text on a dark background
pub const DARK: Palette = Palette {
    bg: Color::Rgb(39, 40, 34),
    card_bg: Color::Rgb(49, 50, 44),
    popup_bg: Color::Rgb(62, 61, 50),
    border_dim: Color::Rgb(117, 113, 94),
    border_active: Color::Rgb(102, 217, 239),
    accent: Color::Rgb(102, 217, 239),
    contrast_fg: Color::Rgb(39, 40, 34),
    text_primary: Color::Rgb(248, 248, 242),
    text_secondary: Color::Rgb(207, 207, 194),
    text_muted: Color::Rgb(117, 113, 94),
    status_green: Color::Rgb(166, 226, 46),
    status_red: Color::Rgb(249, 38, 114),
    status_yellow: Color::Rgb(230, 219, 116),
    status_blue: Color::Rgb(102, 217, 239),
    keyword: Color::Rgb(249, 38, 114),
    string: Color::Rgb(230, 219, 116),
    comment: Color::Rgb(117, 113, 94),
    number: Color::Rgb(174, 129, 255),
    line_number: Color::Rgb(144, 144, 138),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Palette for an editor scheme name; unknown names fall back to light
    pub fn for_scheme(scheme: &str) -> &'static Palette {
        match scheme {
            "monokai" => &DARK,
            _ => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_and_scheme_lookup_agree() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(
                Palette::for_theme(theme),
                Palette::for_scheme(theme.editor_scheme())
            );
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(LIGHT.bg, DARK.bg);
        assert_ne!(LIGHT.text_primary, DARK.text_primary);
    }
}
