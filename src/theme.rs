//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Semantic colors - vibrant Galaxy palette
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const INFO: Color = Color::Rgb(0, 217, 255);

    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Notification styles, one entry per message type
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const DANGER: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::SUCCESS,
        border: Color::Rgb(150, 230, 160),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::INFO,
        border: Color::Rgb(120, 235, 255),
    };

    // Close hint shown inside the notification
    pub const CLOSE_HINT: Modifier = Modifier::BOLD;
}

/// Story gallery styles
pub mod gallery {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);

    // Story list
    pub const STORY: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const STORY_SELECTED: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    // Status panel
    pub const LABEL: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const VALUE: Style = Style::new().fg(palette::TEXT);
    pub const PANEL_BACKGROUND: Color = palette::BG_SURFACE;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
