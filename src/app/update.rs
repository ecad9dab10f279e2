// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler receives an [`UpdateContext`] borrowing the mutable pieces
//! of application state, routes component events, and dispatches store
//! actions. Side effects (dialog, file writes) run as tasks so the update
//! loop itself stays synchronous.

use super::{paths, persistence, Message, Screen};
use crate::capture;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::photo::{self, DataUri};
use crate::store::{Action, ProfilePhoto, Store};
use crate::ui::camera;
use crate::ui::drawer;
use crate::ui::navbar;
use crate::ui::screens::about;
use crate::ui::screens::profile;
use crate::ui::screens::search;
use crate::ui::screens::setting;
use crate::ui::tab_bar::{self, Tab};
use iced::widget::image;
use iced::Task;

/// Mutable slices of application state shared across handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub store: &'a mut Store,
    pub screen: &'a mut Screen,
    pub active_tab: &'a mut Tab,
    pub drawer_open: &'a mut bool,
    pub search: &'a mut search::State,
    pub photo_handle: &'a mut Option<image::Handle>,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::ToggleDrawer => *ctx.drawer_open = !*ctx.drawer_open,
    }
    Task::none()
}

pub fn handle_drawer_message(ctx: &mut UpdateContext, message: drawer::Message) -> Task<Message> {
    match drawer::update(message) {
        drawer::Event::Navigate(screen) => {
            *ctx.screen = screen;
            *ctx.drawer_open = false;
        }
        // The drawer stays open behind the overlay so it is still there
        // when the overlay closes.
        drawer::Event::ToggleCamera => toggle_camera(ctx),
        drawer::Event::Close => *ctx.drawer_open = false,
    }
    Task::none()
}

pub fn handle_tab_bar_message(ctx: &mut UpdateContext, message: tab_bar::Message) -> Task<Message> {
    match tab_bar::update(message) {
        tab_bar::Event::Selected(tab) => *ctx.active_tab = tab,
    }
    Task::none()
}

pub fn handle_search_message(ctx: &mut UpdateContext, message: search::Message) -> Task<Message> {
    search::update(ctx.search, message);
    Task::none()
}

pub fn handle_setting_message(ctx: &mut UpdateContext, message: setting::Message) -> Task<Message> {
    match setting::update(message) {
        setting::Event::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.store, locale)
        }
    }
}

pub fn handle_profile_message(ctx: &mut UpdateContext, message: profile::Message) -> Task<Message> {
    match profile::update(message) {
        profile::Event::ChangePhoto => toggle_camera(ctx),
    }
    Task::none()
}

pub fn handle_about_message(ctx: &mut UpdateContext, message: about::Message) -> Task<Message> {
    match about::update(&message) {
        about::Event::Back => *ctx.screen = Screen::Home,
    }
    Task::none()
}

pub fn handle_camera_message(ctx: &mut UpdateContext, message: camera::Message) -> Task<Message> {
    match camera::update(&message) {
        camera::Event::PickRequested => Task::perform(capture::pick_image(), Message::CaptureReady),
        camera::Event::Close => {
            ctx.store.dispatch(Action::ShowCamera(false));
            Task::none()
        }
    }
}

/// Starts the capture flow once the capture source has produced an image.
///
/// The overlay closes before the write starts; a failed save must not
/// reopen it.
pub fn handle_capture_ready(
    ctx: &mut UpdateContext,
    captured: Option<DataUri>,
) -> Task<Message> {
    let Some(captured) = captured else {
        // Dialog cancelled; the overlay stays up for another attempt.
        return Task::none();
    };

    ctx.store.dispatch(Action::ShowCamera(false));

    let Some(data_dir) = paths::get_app_data_dir() else {
        eprintln!("No data directory available; profile photo not saved");
        return Task::none();
    };
    let path = photo::photo_path(&data_dir);
    Task::perform(photo::save(path, captured), Message::ProfilePhotoSaved)
}

pub fn handle_photo_saved(
    ctx: &mut UpdateContext,
    result: Result<DataUri, Error>,
) -> Task<Message> {
    match result {
        Ok(uri) => apply_profile_photo(ctx, uri),
        Err(error) => eprintln!("Failed to save profile photo: {:?}", error),
    }
    Task::none()
}

pub fn handle_language_loaded(ctx: &mut UpdateContext, code: String) -> Task<Message> {
    ctx.i18n.set_locale_str(&code);
    ctx.store.dispatch(Action::SetLanguage(code));
    Task::none()
}

pub fn handle_photo_loaded(
    ctx: &mut UpdateContext,
    result: Result<Option<DataUri>, Error>,
) -> Task<Message> {
    match result {
        Ok(Some(uri)) => apply_profile_photo(ctx, uri),
        // First run: no photo on disk, the placeholder stays.
        Ok(None) => {}
        Err(error) => eprintln!("Failed to read profile photo: {:?}", error),
    }
    Task::none()
}

pub fn handle_escape_pressed(ctx: &mut UpdateContext) -> Task<Message> {
    if ctx.store.state().show_camera {
        ctx.store.dispatch(Action::ShowCamera(false));
    } else {
        *ctx.drawer_open = false;
    }
    Task::none()
}

fn toggle_camera(ctx: &mut UpdateContext) {
    let visible = ctx.store.state().show_camera;
    ctx.store.dispatch(Action::ShowCamera(!visible));
}

fn apply_profile_photo(ctx: &mut UpdateContext, uri: DataUri) {
    *ctx.photo_handle = decode_handle(&uri);
    ctx.store.dispatch(Action::SetProfilePhoto(ProfilePhoto::Uri(uri)));
}

fn decode_handle(uri: &DataUri) -> Option<image::Handle> {
    match uri.decode() {
        Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
        Err(error) => {
            eprintln!("Failed to decode profile photo: {:?}", error);
            None
        }
    }
}
