// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the UI state store, the localization layer, and the
//! navigation state, and translates messages into store dispatches or side
//! effects like photo persistence. Startup hydration runs as two independent
//! tasks so the first render never waits on the file system.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::photo;
use crate::store::Store;
use crate::ui::screens::search;
use crate::ui::tab_bar::Tab;
use iced::widget::image;
use iced::{window, Element, Subscription, Task};
use std::fmt;

/// Root Iced application state bridging UI components, localization, and
/// the shared state store.
pub struct App {
    pub i18n: I18n,
    store: Store,
    screen: Screen,
    active_tab: Tab,
    drawer_open: bool,
    search: search::State,
    /// Decoded render handle for the captured photo; `None` renders the
    /// placeholder avatar.
    photo_handle: Option<image::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("language", &self.store.state().language)
            .field("show_camera", &self.store.state().show_camera)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            store: Store::new(),
            screen: Screen::Home,
            active_tab: Tab::Search,
            drawer_open: false,
            search: search::State::default(),
            photo_handle: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the two hydration flows.
    ///
    /// The flows touch disjoint store fields and carry no ordering
    /// dependency; either may resolve first.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = App::default();

        let language_task =
            Task::perform(config::load_language(flags.lang), Message::LanguageLoaded);

        let photo_task = match paths::get_app_data_dir() {
            Some(data_dir) => Task::perform(
                photo::load(photo::photo_path(&data_dir)),
                Message::ProfilePhotoLoaded,
            ),
            None => Task::none(),
        };

        (app, Task::batch([language_task, photo_task]))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            store: &mut self.store,
            screen: &mut self.screen,
            active_tab: &mut self.active_tab,
            drawer_open: &mut self.drawer_open,
            search: &mut self.search,
            photo_handle: &mut self.photo_handle,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Drawer(drawer_message) => {
                update::handle_drawer_message(&mut ctx, drawer_message)
            }
            Message::TabBar(tab_bar_message) => {
                update::handle_tab_bar_message(&mut ctx, tab_bar_message)
            }
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::Setting(setting_message) => {
                update::handle_setting_message(&mut ctx, setting_message)
            }
            Message::Profile(profile_message) => {
                update::handle_profile_message(&mut ctx, profile_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, about_message),
            Message::Camera(camera_message) => {
                update::handle_camera_message(&mut ctx, camera_message)
            }
            Message::LanguageLoaded(code) => update::handle_language_loaded(&mut ctx, code),
            Message::ProfilePhotoLoaded(result) => update::handle_photo_loaded(&mut ctx, result),
            Message::CaptureReady(captured) => update::handle_capture_ready(&mut ctx, captured),
            Message::ProfilePhotoSaved(result) => update::handle_photo_saved(&mut ctx, result),
            Message::EscapePressed => update::handle_escape_pressed(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            state: self.store.state(),
            screen: self.screen,
            active_tab: self.active_tab,
            drawer_open: self.drawer_open,
            search: &self.search,
            photo_handle: self.photo_handle.as_ref(),
        })
    }
}
