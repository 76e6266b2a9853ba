//! Theme catalog and per-element styling
//!
//! Every themed element is listed in [`Themable`] and styled directly from
//! the active [`ThemeColors`].

use std::fmt;

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

/// Names of the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    Light,
    #[default]
    Dark,
    Dracula,
    Solarized,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Light,
        ThemeName::Dark,
        ThemeName::Dracula,
        ThemeName::Solarized,
    ];

    pub fn colors(self) -> ThemeColors {
        match self {
            ThemeName::Light => ThemeColors {
                background: Color::from_rgb8(0xf0, 0xf0, 0xf0),
                foreground: Color::from_rgb8(0x00, 0x00, 0x00),
                input: Color::from_rgb8(0xff, 0xff, 0xff),
            },
            ThemeName::Dark => ThemeColors {
                background: Color::from_rgb8(0x1e, 0x1e, 0x1e),
                foreground: Color::from_rgb8(0xff, 0xff, 0xff),
                input: Color::from_rgb8(0x2e, 0x2e, 0x2e),
            },
            ThemeName::Dracula => ThemeColors {
                background: Color::from_rgb8(0x28, 0x2a, 0x36),
                foreground: Color::from_rgb8(0xf8, 0xf8, 0xf2),
                input: Color::from_rgb8(0x44, 0x47, 0x5a),
            },
            ThemeName::Solarized => ThemeColors {
                background: Color::from_rgb8(0xfd, 0xf6, 0xe3),
                foreground: Color::from_rgb8(0x65, 0x7b, 0x83),
                input: Color::from_rgb8(0xee, 0xe8, 0xd5),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::Dark => "Dark",
            ThemeName::Dracula => "Dracula",
            ThemeName::Solarized => "Solarized",
        }
    }

    /// Base iced theme, so widgets we don't style by hand still match.
    pub fn iced_theme(self) -> Theme {
        let colors = self.colors();
        Theme::custom(
            self.name().to_string(),
            iced::theme::Palette {
                background: colors.background,
                text: colors.foreground,
                primary: ACCENT,
                success: Color::from_rgb(0.3, 0.7, 0.4),
                danger: Color::from_rgb(0.85, 0.3, 0.3),
            },
        )
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background, foreground and input-field background of one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub input: Color,
}

const ACCENT: Color = Color::from_rgb(0.27, 0.6, 1.0);
const STATUS_TEXT: Color = Color::from_rgb(0.67, 0.67, 0.67);
const BUTTON_ACTIVE: Color = Color::from_rgb(0.35, 0.35, 0.35);

/// UI elements that take theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Themable {
    Window,
    ControlBar,
    ResultList,
    Preview,
    ArticleBody,
    StatusLine,
}

impl Themable {
    pub fn style(self, colors: ThemeColors) -> container::Style {
        let (background, text_color) = match self {
            Themable::Window | Themable::ControlBar => (colors.background, colors.foreground),
            Themable::ResultList | Themable::ArticleBody => (colors.input, colors.foreground),
            Themable::Preview => (colors.input, colors.foreground),
            Themable::StatusLine => (colors.background, STATUS_TEXT),
        };

        let border = match self {
            Themable::ResultList | Themable::ArticleBody | Themable::Preview => Border {
                color: colors.foreground.scale_alpha(0.2),
                width: 1.0,
                radius: 6.0.into(),
            },
            _ => Border::default(),
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border,
            ..Default::default()
        }
    }
}

/// Keyword field style.
pub fn input_style(colors: ThemeColors, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => ACCENT,
        _ => colors.foreground.scale_alpha(0.3),
    };

    text_input::Style {
        background: Background::Color(colors.input),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: colors.foreground,
        placeholder: colors.foreground.scale_alpha(0.5),
        value: colors.foreground,
        selection: ACCENT.scale_alpha(0.5),
    }
}

/// Flat rounded push button.
pub fn button_style(colors: ThemeColors, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => BUTTON_ACTIVE,
        button::Status::Disabled => colors.input.scale_alpha(0.5),
        button::Status::Active => colors.input,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.foreground,
        border: Border {
            color: colors.foreground.scale_alpha(0.25),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Entry in the result list; `selected` gets the accent tint.
pub fn result_row_style(colors: ThemeColors, selected: bool, status: button::Status) -> button::Style {
    let background = if selected {
        ACCENT.scale_alpha(0.35)
    } else if matches!(status, button::Status::Hovered) {
        colors.foreground.scale_alpha(0.08)
    } else {
        Color::TRANSPARENT
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.foreground,
        border: Border::default().rounded(4),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_reference_colors() {
        let dark = ThemeName::Dark.colors();
        assert_eq!(dark.background, Color::from_rgb8(0x1e, 0x1e, 0x1e));
        assert_eq!(dark.input, Color::from_rgb8(0x2e, 0x2e, 0x2e));

        let solarized = ThemeName::Solarized.colors();
        assert_eq!(solarized.foreground, Color::from_rgb8(0x65, 0x7b, 0x83));
    }

    #[test]
    fn test_every_element_gets_theme_background() {
        for theme in ThemeName::ALL {
            let colors = theme.colors();
            for element in [
                Themable::Window,
                Themable::ControlBar,
                Themable::ResultList,
                Themable::Preview,
                Themable::ArticleBody,
                Themable::StatusLine,
            ] {
                let style = element.style(colors);
                let Some(Background::Color(bg)) = style.background else {
                    panic!("{element:?} has no background under {theme}");
                };
                assert!(bg == colors.background || bg == colors.input);
            }
        }
    }

    #[test]
    fn test_article_body_uses_input_background() {
        let colors = ThemeName::Dracula.colors();
        let style = Themable::ArticleBody.style(colors);
        assert_eq!(style.background, Some(Background::Color(colors.input)));
        assert_eq!(style.text_color, Some(colors.foreground));
    }

    #[test]
    fn test_input_style_follows_theme() {
        let colors = ThemeName::Light.colors();
        let style = input_style(colors, text_input::Status::Active);
        assert_eq!(style.background, Background::Color(colors.input));
        assert_eq!(style.value, colors.foreground);
    }
}
