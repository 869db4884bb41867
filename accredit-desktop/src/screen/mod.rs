// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod accredit;
pub mod app_list;
pub mod base64;
pub mod create_key;
pub mod layout;
pub mod selector;
pub mod sign;
pub mod verify;

use crate::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Accredit,
    AppList,
    Base64,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Accredit, Route::AppList, Route::Base64];

    pub fn path(self) -> &'static str {
        match self {
            Route::Accredit => "/",
            Route::AppList => "/applint",
            Route::Base64 => "/base64",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Accredit => "RSA Signing",
            Route::AppList => "Applications",
            Route::Base64 => "Base64",
        }
    }
}

pub enum Screen {
    Accredit(Box<accredit::State>),
    AppList(app_list::State),
    Base64(base64::State),
}

impl Screen {
    /// Fresh state for `route`; nothing carries over between visits.
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Accredit => Screen::Accredit(Box::new(accredit::State::new())),
            Route::AppList => Screen::AppList(app_list::State::new()),
            Route::Base64 => Screen::Base64(base64::State::new()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Accredit(_) => Route::Accredit,
            Screen::AppList(_) => Route::AppList,
            Screen::Base64(_) => Route::Base64,
        }
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        let content = match self {
            Screen::Accredit(s) => s.view_content().map(Message::Accredit),
            Screen::AppList(s) => s.view_content().map(Message::AppList),
            Screen::Base64(s) => s.view_content().map(Message::Base64),
        };
        layout::with_sidebar(self.route(), content)
    }
}
