// SPDX-License-Identifier: MPL-2.0
//! Design system constants shared across UI modules.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);

    /// Brand blue used for active chrome.
    pub const PRIMARY: Color = Color::from_rgb(0.129, 0.608, 0.851);
    /// Washed-out brand blue used for inactive chrome.
    pub const PRIMARY_SOFT: Color = Color::from_rgb(0.839, 0.976, 1.0);
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const AVATAR_SM: f32 = 96.0;
    pub const AVATAR_LG: f32 = 160.0;
    pub const DRAWER_WIDTH: f32 = 280.0;
    pub const TAB_BAR_HEIGHT: f32 = 70.0;
    pub const CAMERA_PANEL_WIDTH: f32 = 360.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}
