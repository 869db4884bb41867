// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use iced::widget::{button, column, container, text, text_editor, text_input};
use iced::Element;

use super::selector::{self, IdentitySelector};
use crate::theme;

#[derive(Debug, Clone)]
pub enum Message {
    Selector(selector::Message),
    DataChanged(String),
    SignatureEdited(text_editor::Action),
    Submit,
}

pub enum Event {
    RefreshNames,
    Verify {
        app_name: String,
        data: Vec<u8>,
        signature: Vec<u8>,
    },
}

#[derive(Default)]
pub struct State {
    pub selector: IdentitySelector,
    data: String,
    signature: text_editor::Content,
    loading: bool,
    missing_data: bool,
    missing_signature: bool,
}

impl State {
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Selector(m) => self.selector.update(m).map(|e| match e {
                selector::Event::Refresh => Event::RefreshNames,
            }),
            Message::DataChanged(data) => {
                self.missing_data &= data.is_empty();
                self.data = data;
                None
            }
            Message::SignatureEdited(action) => {
                self.signature.perform(action);
                self.missing_signature &= self.signature.text().is_empty();
                None
            }
            Message::Submit => {
                if self.loading {
                    return None;
                }
                let app_name = self.selector.selected()?.to_string();
                let signature = self.signature.text();
                self.missing_data = self.data.is_empty();
                self.missing_signature = signature.is_empty();
                if self.missing_data || self.missing_signature {
                    return None;
                }
                self.loading = true;
                Some(Event::Verify {
                    app_name,
                    data: self.data.as_bytes().to_vec(),
                    signature: signature.into_bytes(),
                })
            }
        }
    }

    pub fn finished(&mut self) {
        self.loading = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.selector.selected().is_some()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let enabled = self.is_enabled();

        let mut data_input = text_input("User identifier", &self.data)
            .padding(theme::space::SM)
            .width(theme::size::INPUT_WIDTH);
        let mut signature_input = text_editor(&self.signature)
            .placeholder("Signature")
            .padding(theme::space::SM)
            .height(theme::size::EDITOR_HEIGHT);
        if enabled {
            data_input = data_input.on_input(Message::DataChanged);
            signature_input = signature_input.on_action(Message::SignatureEdited);
        }

        let mut content = column![self.selector.view().map(Message::Selector), data_input]
            .spacing(theme::space::SM);
        if self.missing_data {
            content = content.push(theme::error_text("Enter the signed text"));
        }
        content = content.push(container(signature_input).width(theme::size::INPUT_WIDTH));
        if self.missing_signature {
            content = content.push(theme::error_text("Enter the signature"));
        }

        let submit: Element<'_, Message> = if self.loading {
            theme::label("Verifying...").into()
        } else {
            button(text("Verify").size(theme::size::BODY))
                .on_press_maybe(enabled.then_some(Message::Submit))
                .style(theme::primary_button)
                .padding([theme::space::SM, theme::space::LG])
                .into()
        };

        content.push(submit).into()
    }
}
