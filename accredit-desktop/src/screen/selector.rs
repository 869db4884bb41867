// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use iced::widget::{button, pick_list, row, text};
use iced::{Alignment, Element};

use crate::theme;

#[derive(Debug, Clone)]
pub enum Message {
    Opened,
    Selected(String),
    Cleared,
}

pub enum Event {
    /// The owner should fetch `get_app_names` and hand the answer back
    /// through [`IdentitySelector::names_loaded`].
    Refresh,
}

/// Drop-down of application names. The owning form reads [`selected`] to
/// decide whether it is enabled.
///
/// [`selected`]: IdentitySelector::selected
#[derive(Default)]
pub struct IdentitySelector {
    options: Vec<String>,
    selected: Option<String>,
}

impl IdentitySelector {
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Opened => Some(Event::Refresh),
            Message::Selected(name) => {
                self.selected = Some(name);
                None
            }
            Message::Cleared => {
                self.selected = None;
                None
            }
        }
    }

    /// Replaces the option list. The current selection is kept even if the
    /// backend no longer lists it.
    pub fn names_loaded(&mut self, names: Vec<String>) {
        self.options = names;
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let picker = pick_list(
            self.options(),
            self.selected.as_ref(),
            Message::Selected,
        )
        .placeholder("Select an application")
        .on_open(Message::Opened)
        .padding(theme::space::SM)
        .width(theme::size::INPUT_WIDTH);

        let clear = button(text("Clear").size(theme::size::SMALL))
            .on_press_maybe(self.selected.as_ref().map(|_| Message::Cleared))
            .style(theme::text_button)
            .padding([theme::space::XS, theme::space::SM]);

        row![picker, clear]
            .spacing(theme::space::SM)
            .align_y(Alignment::Center)
            .into()
    }
}
