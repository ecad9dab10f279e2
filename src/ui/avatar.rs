// SPDX-License-Identifier: MPL-2.0
//! Profile photo rendering shared by the drawer header and profile screen.

use iced::widget::image::{Handle, Image};
use iced::widget::svg;
use iced::Element;

// Embedded so packaging does not need to locate assets on disk.
const PLACEHOLDER_SVG: &[u8] = include_bytes!("../../assets/branding/profile_placeholder.svg");

/// Renders the captured photo, or the built-in placeholder when none is set.
pub fn view<'a, Message: 'a>(photo: Option<&Handle>, size: f32) -> Element<'a, Message> {
    match photo {
        Some(handle) => Image::new(handle.clone())
            .width(size)
            .height(size)
            .into(),
        None => svg::Svg::new(svg::Handle::from_memory(PLACEHOLDER_SVG))
            .width(size)
            .height(size)
            .into(),
    }
}
