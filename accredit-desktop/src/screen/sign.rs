// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use super::selector::{self, IdentitySelector};
use crate::theme;

#[derive(Debug, Clone)]
pub enum Message {
    Selector(selector::Message),
    InputChanged(String),
    Submit,
    Copy,
}

pub enum Event {
    RefreshNames,
    Sign { app_name: String, data: Vec<u8> },
    Copy(String),
}

#[derive(Default)]
pub struct State {
    pub selector: IdentitySelector,
    input: String,
    output: Option<String>,
    loading: bool,
    show_required: bool,
}

impl State {
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Selector(m) => self.selector.update(m).map(|e| match e {
                selector::Event::Refresh => Event::RefreshNames,
            }),
            Message::InputChanged(input) => {
                if !input.is_empty() {
                    self.show_required = false;
                }
                self.input = input;
                None
            }
            Message::Submit => {
                if self.loading {
                    return None;
                }
                let app_name = self.selector.selected()?.to_string();
                if self.input.is_empty() {
                    self.show_required = true;
                    return None;
                }
                self.loading = true;
                self.output = None;
                Some(Event::Sign {
                    app_name,
                    data: self.input.as_bytes().to_vec(),
                })
            }
            Message::Copy => self.output.clone().map(Event::Copy),
        }
    }

    pub fn signed(&mut self, signature: String) {
        self.loading = false;
        self.output = Some(signature);
    }

    pub fn sign_failed(&mut self) {
        self.loading = false;
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.selector.selected().is_some()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let enabled = self.is_enabled();

        let mut input = text_input("User identifier", &self.input)
            .padding(theme::space::SM)
            .width(theme::size::INPUT_WIDTH);
        if enabled {
            input = input
                .on_input(Message::InputChanged)
                .on_submit(Message::Submit);
        }

        let mut content = column![self.selector.view().map(Message::Selector), input]
            .spacing(theme::space::SM);
        if self.show_required {
            content = content.push(theme::error_text("Enter the text to sign"));
        }

        let submit: Element<'_, Message> = if self.loading {
            theme::label("Signing...").into()
        } else {
            button(text("Sign").size(theme::size::BODY))
                .on_press_maybe(enabled.then_some(Message::Submit))
                .style(theme::primary_button)
                .padding([theme::space::SM, theme::space::LG])
                .into()
        };
        content = content.push(submit);

        if let Some(signature) = self.output() {
            let output = container(text(signature).size(theme::size::SMALL))
                .style(theme::output_style)
                .padding(theme::space::SM)
                .width(theme::size::INPUT_WIDTH);
            let copy = button(text("Copy").size(theme::size::SMALL))
                .on_press(Message::Copy)
                .style(theme::text_button);
            content = content.push(
                row![output, copy, Space::new().width(Length::Fill)]
                    .spacing(theme::space::SM)
                    .align_y(Alignment::Start),
            );
        }

        content.into()
    }
}
