// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for drawer navigation.

/// Top-level screens reachable from the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Tab navigator hosting the Search, Fav, and Setting tabs.
    #[default]
    Home,
    Profile,
    About,
}
