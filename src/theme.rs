//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use `theme::module::CONSTANT`
//! rather than hardcoding `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_HIGHLIGHT: Color = Color::Rgb(1, 123, 233);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_BROWSING: Color = palette::PURPLE;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Suggestion and recent keyword panel styles
pub mod panel {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::TEXT;
    pub const ITEM: Color = palette::TEXT;
    pub const ITEM_ICON: Color = palette::TEXT_MUTED;
    pub const ITEM_SELECTED_FG: Color = Color::White;
    pub const ITEM_SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const EMPTY: Color = palette::TEXT_MUTED;
    pub const LOADING: Color = palette::YELLOW;
    pub const FAILED: Color = palette::RED;
}

/// Bottom help line
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const TEXT: Color = palette::TEXT_MUTED;
}
