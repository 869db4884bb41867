// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The `/` route: key creation, signing and verification stacked on one page.

use accredit_core::KeyKind;
use iced::widget::{column, container, scrollable, Space};
use iced::{Element, Length};

use super::{create_key, sign, verify};
use crate::theme;

/// Which selector a `get_app_names` answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Sign,
    Verify,
}

impl Form {
    pub const ALL: [Form; 2] = [Form::Sign, Form::Verify];
}

#[derive(Debug, Clone)]
pub enum Message {
    CreateKey(create_key::Message),
    Sign(sign::Message),
    Verify(verify::Message),
}

pub enum Event {
    RefreshNames(Form),
    CreateKeys(String),
    Download {
        app_name: String,
        key: KeyKind,
    },
    Sign {
        app_name: String,
        data: Vec<u8>,
    },
    Verify {
        app_name: String,
        data: Vec<u8>,
        signature: Vec<u8>,
    },
    Copy(String),
}

#[derive(Default)]
pub struct State {
    pub create_key: create_key::State,
    pub sign: sign::State,
    pub verify: verify::State,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::CreateKey(m) => self.create_key.update(m).map(|e| match e {
                create_key::Event::Create(name) => Event::CreateKeys(name),
                create_key::Event::Download { app_name, key } => {
                    Event::Download { app_name, key }
                }
            }),
            Message::Sign(m) => self.sign.update(m).map(|e| match e {
                sign::Event::RefreshNames => Event::RefreshNames(Form::Sign),
                sign::Event::Sign { app_name, data } => Event::Sign { app_name, data },
                sign::Event::Copy(text) => Event::Copy(text),
            }),
            Message::Verify(m) => self.verify.update(m).map(|e| match e {
                verify::Event::RefreshNames => Event::RefreshNames(Form::Verify),
                verify::Event::Verify {
                    app_name,
                    data,
                    signature,
                } => Event::Verify {
                    app_name,
                    data,
                    signature,
                },
            }),
        }
    }

    pub fn names_loaded(&mut self, form: Form, names: Vec<String>) {
        match form {
            Form::Sign => self.sign.selector.names_loaded(names),
            Form::Verify => self.verify.selector.names_loaded(names),
        }
    }

    pub fn view_content(&self) -> Element<'_, Message> {
        let content = column![
            theme::heading("Create application keys"),
            self.create_key.view().map(Message::CreateKey),
            Space::new().height(theme::space::XL),
            theme::heading("Create signature"),
            self.sign.view().map(Message::Sign),
            Space::new().height(theme::space::XL),
            theme::heading("Verify signature"),
            self.verify.view().map(Message::Verify),
        ]
        .spacing(theme::space::MD);

        container(scrollable(content).height(Length::Fill))
            .padding(theme::space::XL)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
