// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use accredit_core::{AppInfo, KeyKind, SignatureRecord};
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

use crate::theme;

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
    Download { app_name: String, key: KeyKind },
    Copy(String),
}

pub enum Event {
    Reload,
    Download { app_name: String, key: KeyKind },
    Copy(String),
}

pub struct State {
    apps: Vec<AppInfo>,
    loading: bool,
    downloading: bool,
}

impl State {
    /// Starts in the loading state; the listing is requested on mount.
    pub fn new() -> Self {
        Self {
            apps: Vec::new(),
            loading: true,
            downloading: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Reload => {
                if self.loading {
                    return None;
                }
                self.loading = true;
                Some(Event::Reload)
            }
            Message::Download { app_name, key } => {
                if self.downloading {
                    return None;
                }
                self.downloading = true;
                Some(Event::Download { app_name, key })
            }
            Message::Copy(text) => Some(Event::Copy(text)),
        }
    }

    pub fn loaded(&mut self, apps: Vec<AppInfo>) {
        self.loading = false;
        self.apps = apps;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn download_finished(&mut self) {
        self.downloading = false;
    }

    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    pub fn shows_empty_state(&self) -> bool {
        !self.loading && self.apps.is_empty()
    }

    pub fn view_content(&self) -> Element<'_, Message> {
        let reload = button(text("Reload").size(theme::size::BODY))
            .on_press_maybe((!self.loading).then_some(Message::Reload))
            .style(theme::secondary_button)
            .padding([theme::space::XS, theme::space::MD]);
        let header = row![
            theme::heading("Applications"),
            Space::new().width(Length::Fill),
            reload
        ]
        .align_y(Alignment::Center);

        let mut content = column![header].spacing(theme::space::MD);

        if self.loading && self.apps.is_empty() {
            content = content.push(theme::muted("Loading applications..."));
        } else if self.shows_empty_state() {
            content = content.push(
                container(theme::muted("No applications"))
                    .center_x(Length::Fill)
                    .padding(theme::space::XL),
            );
        } else {
            let mut list = column![].spacing(theme::space::MD);
            for app in self.apps() {
                list = list.push(self.app_card(app));
            }
            content = content.push(scrollable(list).height(Length::Fill));
        }

        container(content)
            .padding(theme::space::XL)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn app_card<'a>(&self, app: &'a AppInfo) -> Element<'a, Message> {
        let mut downloads = row![].spacing(theme::space::SM);
        for key in KeyKind::ALL {
            let press = (!self.downloading).then(|| Message::Download {
                app_name: app.app_name.clone(),
                key,
            });
            let style: fn(&iced::Theme, button::Status) -> button::Style = match key {
                KeyKind::Private => theme::secondary_button,
                KeyKind::Public => theme::primary_button,
            };
            downloads = downloads.push(
                button(text(key.label()).size(theme::size::SMALL))
                    .on_press_maybe(press)
                    .style(style)
                    .padding([theme::space::XS, theme::space::MD]),
            );
        }

        let title = row![
            text(app.app_name.as_str())
                .size(theme::size::BODY)
                .color(theme::color::TEXT),
            Space::new().width(Length::Fill),
            downloads,
        ]
        .align_y(Alignment::Center);

        let mut body = column![title].spacing(theme::space::SM);
        if !app.app_name_path.is_empty() {
            body = body.push(theme::muted(&app.app_name_path));
        }

        match card_body(app) {
            CardBody::Signatures(records) => {
                for record in records {
                    body = body.push(signature_row(record));
                }
            }
            CardBody::Empty => body = body.push(theme::muted("No signatures")),
        }

        container(body)
            .style(theme::card_style)
            .padding(theme::space::LG)
            .width(Length::Fill)
            .into()
    }
}

/// What a card lists under its title.
enum CardBody<'a> {
    Signatures(&'a [SignatureRecord]),
    Empty,
}

fn card_body(app: &AppInfo) -> CardBody<'_> {
    if app.has_signatures() {
        CardBody::Signatures(&app.signatures)
    } else {
        CardBody::Empty
    }
}

fn signature_row(record: &SignatureRecord) -> Element<'_, Message> {
    let copy_label = button(text("Copy label").size(theme::size::SMALL))
        .on_press(Message::Copy(record.use_info.clone()))
        .style(theme::text_button);
    let copy_code = button(text("Copy code").size(theme::size::SMALL))
        .on_press(Message::Copy(record.base_code.clone()))
        .style(theme::text_button);

    row![
        theme::label(&record.use_info),
        Space::new().width(Length::Fill),
        copy_label,
        copy_code,
    ]
    .spacing(theme::space::SM)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str, signatures: Vec<SignatureRecord>) -> AppInfo {
        AppInfo {
            app_name: name.into(),
            app_name_path: format!("/data/{name}"),
            pri_key_path: String::new(),
            pub_key_path: String::new(),
            signatures,
        }
    }

    #[test]
    fn test_loading_until_first_answer() {
        let mut state = State::new();
        assert!(!state.shows_empty_state());
        state.loaded(Vec::new());
        assert!(state.shows_empty_state());
    }

    #[test]
    fn test_cards_keep_backend_order() {
        let mut state = State::new();
        state.loaded(vec![app("zeta", Vec::new()), app("alpha", Vec::new())]);
        let names: Vec<&str> = state.apps().iter().map(|a| a.app_name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert!(!state.shows_empty_state());
    }

    #[test]
    fn test_card_without_signatures_shows_empty_state() {
        let record = SignatureRecord {
            use_info: "device-7".into(),
            base_code: "c2ln".into(),
        };
        let mut state = State::new();
        state.loaded(vec![app("bare", Vec::new()), app("signed", vec![record])]);

        assert!(matches!(card_body(&state.apps()[0]), CardBody::Empty));
        match card_body(&state.apps()[1]) {
            CardBody::Signatures(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].use_info, "device-7");
            }
            CardBody::Empty => panic!("expected signature rows"),
        }
    }

    #[test]
    fn test_reload_not_reentrant() {
        let mut state = State::new();
        assert!(state.update(Message::Reload).is_none());
        state.loaded(Vec::new());
        assert!(matches!(state.update(Message::Reload), Some(Event::Reload)));
        assert!(state.update(Message::Reload).is_none());
        state.load_failed();
        assert!(state.update(Message::Reload).is_some());
    }

    #[test]
    fn test_one_download_at_a_time() {
        let mut state = State::new();
        let download = |key| Message::Download {
            app_name: "demo".into(),
            key,
        };
        assert!(state.update(download(KeyKind::Private)).is_some());
        assert!(state.update(download(KeyKind::Public)).is_none());
        state.download_finished();
        assert!(state.update(download(KeyKind::Public)).is_some());
    }

    #[test]
    fn test_copy_passes_literal_text() {
        let mut state = State::new();
        match state.update(Message::Copy("device-7".into())) {
            Some(Event::Copy(text)) => assert_eq!(text, "device-7"),
            _ => panic!("expected Copy"),
        }
    }
}
