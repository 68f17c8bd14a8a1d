//! What the header shows, derived from page, session and view state.

use crate::header::page::{PageContext, PageKey};
use crate::session::SessionUser;
use crate::view::{ThemePreference, ViewState};

/// Header width in non-compact layouts, in viewport pixels.
pub const FIXED_WIDTH_PX: u32 = 360;

pub const NOTIFICATIONS_ROUTE: &str = "/notifications";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderWidth {
    Full,
    /// Width in viewport pixels.
    Fixed(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeftSide {
    /// Home page: the user's name.
    Greeting { name: String },
    /// Any other page: back button plus page title.
    Back {
        target: String,
        title: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileButton {
    /// Shown on the profile page itself.
    Settings,
    Profile { route: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub width: HeaderWidth,
    pub left: LeftSide,
    pub notifications_route: &'static str,
    pub profile_button: ProfileButton,
    pub theme: ThemePreference,
}

impl HeaderModel {
    pub fn derive(page: &PageContext, user: Option<&SessionUser>, view: ViewState) -> Self {
        let width = if view.is_compact {
            HeaderWidth::Full
        } else {
            HeaderWidth::Fixed(FIXED_WIDTH_PX)
        };

        let left = match page.current {
            PageKey::Home => LeftSide::Greeting {
                name: display_name(user, view.is_compact),
            },
            PageKey::Profile => LeftSide::Back {
                target: page.back_route(),
                title: None,
            },
            ref current => LeftSide::Back {
                target: page.back_route(),
                title: current.label(view.is_compact),
            },
        };

        let profile_button = match page.current {
            PageKey::Profile => ProfileButton::Settings,
            _ => ProfileButton::Profile {
                route: format!("/users/{}", user.map(|u| u.id.as_str()).unwrap_or_default()),
            },
        };

        Self {
            width,
            left,
            notifications_route: NOTIFICATIONS_ROUTE,
            profile_button,
            theme: view.theme,
        }
    }
}

/// First name when compact, "first last" otherwise. Missing parts are empty.
pub fn display_name(user: Option<&SessionUser>, compact: bool) -> String {
    let first = user.map(|u| u.first_name.as_str()).unwrap_or_default();
    if compact {
        return first.to_string();
    }
    let last = user.map(|u| u.last_name.as_str()).unwrap_or_default();
    format!("{} {}", first, last)
}
