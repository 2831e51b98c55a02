//! Widget styles for the main window

use iced::widget::{button, container, progress_bar, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Palette ---

pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988); // Window background
pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);
pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941); // Borders
pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // Placeholder
pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165); // Primary text

pub const TEAL_600: Color = Color::from_rgb(0.051, 0.580, 0.533); // Primary actions
pub const TEAL_500: Color = Color::from_rgb(0.078, 0.722, 0.651); // Hover
pub const TEAL_100: Color = Color::from_rgb(0.800, 0.984, 0.945);

pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043);

pub const WHITE: Color = Color::WHITE;

pub const TEXT_PRIMARY: Color = SLATE_900;
pub const TEXT_SECONDARY: Color = SLATE_500;

// --- Containers ---

pub struct WindowBackground;

impl container::StyleSheet for WindowBackground {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(SLATE_50)),
            ..Default::default()
        }
    }
}

/// White panel used for the input section and each download row.
pub struct Card;

impl container::StyleSheet for Card {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(WHITE)),
            border: Border {
                color: SLATE_200,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
        }
    }
}

// --- Buttons ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(TEAL_600)),
            text_color: WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(TEAL_500)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_200)),
            text_color: SLATE_400,
            ..self.active(style)
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(WHITE)),
            text_color: SLATE_700,
            border: Border {
                radius: 8.0.into(),
                color: SLATE_200,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_100)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: SLATE_400,
            ..self.active(style)
        }
    }
}

pub struct DestructiveButton;

impl button::StyleSheet for DestructiveButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: RED_500,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_50)),
            ..self.active(style)
        }
    }
}

// --- Inputs ---

pub struct UrlInputStyle;

impl text_input::StyleSheet for UrlInputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: SLATE_200,
            },
            icon_color: SLATE_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: TEAL_500,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        SLATE_900
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        TEAL_100
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SLATE_100),
            ..self.active(style)
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }
}

// --- Download list ---

pub struct RowsScrollable;

impl scrollable::StyleSheet for RowsScrollable {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: None,
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: SLATE_200,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if !is_mouse_over_scrollbar {
            return active;
        }
        scrollable::Appearance {
            scrollbar: scrollable::Scrollbar {
                scroller: scrollable::Scroller {
                    color: SLATE_400,
                    ..active.scrollbar.scroller
                },
                ..active.scrollbar
            },
            ..active
        }
    }
}

/// Bar colour follows the session outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBarStyle {
    Running,
    Complete,
    Failed,
    Cancelled,
}

impl progress_bar::StyleSheet for ProgressBarStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> progress_bar::Appearance {
        let bar = match self {
            Self::Running => TEAL_600,
            Self::Complete => GREEN_500,
            Self::Failed => RED_500,
            Self::Cancelled => AMBER_500,
        };
        progress_bar::Appearance {
            background: Background::Color(SLATE_100),
            bar: Background::Color(bar),
            border_radius: 4.0.into(),
        }
    }
}
