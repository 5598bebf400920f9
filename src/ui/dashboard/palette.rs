//! Category colors and the pure style functions built on them.

use crate::numerology::StrengthCategory;
use ratatui::prelude::{Color, Modifier, Style};

pub const CRIMSON: Color = Color::Rgb(0xDC, 0x14, 0x3C);
pub const BLUE: Color = Color::Rgb(0x00, 0x00, 0xFF);
pub const DARK_GRAY: Color = Color::Rgb(0xA9, 0xA9, 0xA9);
pub const YELLOW: Color = Color::Rgb(0xFF, 0xFF, 0x00);
pub const LIGHT_GRAY: Color = Color::Rgb(0xF0, 0xF2, 0xF6);
pub const METALLIC_GRAY: Color = Color::Rgb(0xC0, 0xC0, 0xC0);

/// Background and text color of a category. `text` is `None` for the
/// terminal's default foreground.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CategoryColors {
    pub background: Color,
    pub text: Option<Color>,
}

pub fn category_colors(category: StrengthCategory) -> CategoryColors {
    let (background, text) = match category {
        StrengthCategory::Master => (CRIMSON, Some(Color::White)),
        StrengthCategory::Weak => (BLUE, Some(Color::White)),
        StrengthCategory::Karmic => (DARK_GRAY, Some(Color::White)),
        StrengthCategory::Strong => (YELLOW, Some(Color::Black)),
        StrengthCategory::Neutral => (LIGHT_GRAY, None),
        StrengthCategory::ExtremeChallenge => (METALLIC_GRAY, None),
    };
    CategoryColors { background, text }
}

fn colors_to_style(colors: CategoryColors) -> Style {
    let style = Style::default().bg(colors.background);
    match colors.text {
        Some(fg) => style.fg(fg),
        None => style,
    }
}

/// Style of a wish/peak or challenge cell in the life cycle table.
///
/// Neutral cells stay unstyled; the especially strong challenge is drawn
/// exactly like a master number; master cells are bold.
pub fn cycle_cell_style(category: StrengthCategory) -> Style {
    match category {
        StrengthCategory::Neutral => Style::default(),
        StrengthCategory::Master | StrengthCategory::ExtremeChallenge => {
            colors_to_style(category_colors(StrengthCategory::Master))
                .add_modifier(Modifier::BOLD)
        }
        other => colors_to_style(category_colors(other)),
    }
}

/// Style of a whole chakra row: category background, bold, white text on
/// dark backgrounds and black otherwise.
pub fn chakra_row_style(strength: StrengthCategory) -> Style {
    let row_category = match strength {
        StrengthCategory::Master
        | StrengthCategory::Karmic
        | StrengthCategory::Weak
        | StrengthCategory::Strong => strength,
        StrengthCategory::Neutral | StrengthCategory::ExtremeChallenge => {
            StrengthCategory::Neutral
        }
    };
    let text = match row_category {
        StrengthCategory::Master | StrengthCategory::Karmic | StrengthCategory::Weak => {
            Color::White
        }
        _ => Color::Black,
    };
    Style::default()
        .bg(category_colors(row_category).background)
        .fg(text)
        .add_modifier(Modifier::BOLD)
}
