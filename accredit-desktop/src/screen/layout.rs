// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

use super::Route;
use crate::message::Message;
use crate::theme;

pub fn with_sidebar<'a>(active: Route, content: Element<'a, Message>) -> Element<'a, Message> {
    let mut nav = column![].spacing(theme::space::XS);
    for route in Route::ALL {
        let is_active = route == active;
        let style: fn(&iced::Theme, button::Status) -> button::Style = if is_active {
            theme::nav_button_active
        } else {
            theme::nav_button
        };
        let press = if is_active {
            None
        } else {
            Some(Message::Navigate(route))
        };
        nav = nav.push(
            button(
                text(route.label())
                    .size(theme::size::BODY)
                    .width(Length::Fill),
            )
            .on_press_maybe(press)
            .style(style)
            .padding([theme::space::SM, theme::space::MD])
            .width(Length::Fill),
        );
    }

    let sidebar = container(
        column![
            text("Accredit")
                .size(theme::size::TITLE)
                .color(iced::Color::WHITE),
            Space::new().height(theme::space::LG),
            nav,
        ]
        .padding(theme::space::LG)
        .height(Length::Fill),
    )
    .style(theme::sidebar_style)
    .width(theme::size::SIDEBAR_WIDTH)
    .height(Length::Fill);

    let main = container(content)
        .style(theme::page_bg)
        .width(Length::Fill)
        .height(Length::Fill);

    row![sidebar, main].into()
}
