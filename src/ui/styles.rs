// SPDX-License-Identifier: MPL-2.0
//! Centralized styling helpers shared across UI modules.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Semi-transparent backdrop behind the capture overlay and open drawer.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Panel floated above the backdrop (capture dialog).
pub fn overlay_panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();
    container::Style {
        background: Some(base.background.base.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: base.background.strong.color,
        },
        ..Default::default()
    }
}

/// Side panel holding the drawer content.
pub fn drawer_panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();
    container::Style {
        background: Some(base.background.base.color.into()),
        ..Default::default()
    }
}

/// Brand-colored strip at the top of the drawer.
pub fn drawer_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Brand-colored strip hosting the navbar.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Bar hosting the bottom tabs.
pub fn tab_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_SOFT)),
        ..Default::default()
    }
}

/// Tab buttons fill with the brand color when their tab is active.
pub fn tab_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if active {
            (palette::PRIMARY, palette::WHITE)
        } else {
            (palette::PRIMARY_SOFT, palette::GRAY_500)
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed if !active => Color {
                a: 0.6,
                ..palette::PRIMARY
            },
            _ => background,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Borderless button used for drawer navigation items.
pub fn drawer_item(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette();
    match status {
        button::Status::Hovered => button::Style {
            background: Some(base.background.strong.color.into()),
            text_color: base.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(base.primary.strong.color.into()),
            text_color: base.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: base.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Highlighted variant for the drawer item of the active screen.
pub fn drawer_item_active(theme: &Theme, _status: button::Status) -> button::Style {
    let base = theme.extended_palette();
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_SOFT)),
        text_color: base.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
