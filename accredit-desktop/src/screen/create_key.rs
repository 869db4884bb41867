// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use accredit_core::KeyKind;
use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element};

use crate::theme;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    Submit,
    Download(KeyKind),
}

pub enum Event {
    Create(String),
    Download { app_name: String, key: KeyKind },
}

#[derive(Default)]
pub struct State {
    app_name: String,
    loading: bool,
    created_for: Option<String>,
    downloading: Option<KeyKind>,
    downloaded: Vec<KeyKind>,
    show_required: bool,
}

impl State {
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::NameChanged(name) => {
                if !name.trim().is_empty() {
                    self.show_required = false;
                }
                self.app_name = name;
                None
            }
            Message::Submit => {
                if self.loading {
                    return None;
                }
                let name = self.app_name.trim();
                if name.is_empty() {
                    self.show_required = true;
                    return None;
                }
                self.loading = true;
                Some(Event::Create(name.to_string()))
            }
            Message::Download(key) => {
                if !self.can_download(key) {
                    return None;
                }
                let app_name = self.created_for.clone()?;
                self.downloading = Some(key);
                Some(Event::Download { app_name, key })
            }
        }
    }

    pub fn keys_created(&mut self, app_name: String) {
        self.loading = false;
        self.created_for = Some(app_name);
        self.downloaded.clear();
    }

    pub fn create_failed(&mut self) {
        self.loading = false;
    }

    /// `completed` is false for a cancelled dialog, a failed dialog or a
    /// rejected download; those leave the action available.
    pub fn download_finished(&mut self, key: KeyKind, completed: bool) {
        self.downloading = None;
        if completed && !self.downloaded.contains(&key) {
            self.downloaded.push(key);
        }
    }

    pub fn can_download(&self, key: KeyKind) -> bool {
        self.downloading.is_none()
            && !self.downloaded.contains(&key)
            && self.created_for.as_deref() == Some(self.app_name.trim())
    }

    pub fn view(&self) -> Element<'_, Message> {
        let name_input = text_input("Application name", &self.app_name)
            .on_input(Message::NameChanged)
            .on_submit(Message::Submit)
            .padding(theme::space::SM)
            .width(theme::size::INPUT_WIDTH);

        let mut content = column![name_input].spacing(theme::space::SM);
        if self.show_required {
            content = content.push(theme::error_text("Enter an application name"));
        }

        let submit: Element<'_, Message> = if self.loading {
            theme::label("Creating keys...").into()
        } else {
            button(text("Create keys").size(theme::size::BODY))
                .on_press(Message::Submit)
                .style(theme::primary_button)
                .padding([theme::space::SM, theme::space::LG])
                .into()
        };

        let mut downloads = row![submit]
            .spacing(theme::space::SM)
            .align_y(Alignment::Center);
        for key in KeyKind::ALL {
            let label = if self.downloading == Some(key) {
                "Saving...".to_string()
            } else {
                format!("Download {}", key.label().to_lowercase())
            };
            downloads = downloads.push(
                button(text(label).size(theme::size::BODY))
                    .on_press_maybe(self.can_download(key).then_some(Message::Download(key)))
                    .style(theme::secondary_button)
                    .padding([theme::space::SM, theme::space::MD]),
            );
        }

        content.push(downloads).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(name: &str) -> State {
        let mut state = State::default();
        state.update(Message::NameChanged(name.into()));
        state.update(Message::Submit);
        state.keys_created(name.into());
        state
    }

    #[test]
    fn test_submit_trims_name() {
        let mut state = State::default();
        state.update(Message::NameChanged("  demo ".into()));
        match state.update(Message::Submit) {
            Some(Event::Create(name)) => assert_eq!(name, "demo"),
            _ => panic!("expected Create"),
        }
    }

    #[test]
    fn test_blank_name_shows_required() {
        let mut state = State::default();
        state.update(Message::NameChanged("   ".into()));
        assert!(state.update(Message::Submit).is_none());
        assert!(state.show_required);

        state.update(Message::NameChanged("x".into()));
        assert!(!state.show_required);
    }

    #[test]
    fn test_submit_not_reentrant() {
        let mut state = State::default();
        state.update(Message::NameChanged("demo".into()));
        assert!(state.update(Message::Submit).is_some());
        assert!(state.update(Message::Submit).is_none());
    }

    #[test]
    fn test_download_enabled_after_creation() {
        let mut state = State::default();
        state.update(Message::NameChanged("demo".into()));
        assert!(!state.can_download(KeyKind::Private));

        state.update(Message::Submit);
        state.keys_created("demo".into());
        assert!(state.can_download(KeyKind::Private));
        assert!(state.can_download(KeyKind::Public));
    }

    #[test]
    fn test_failed_creation_keeps_download_disabled() {
        let mut state = State::default();
        state.update(Message::NameChanged("demo".into()));
        state.update(Message::Submit);
        state.create_failed();
        assert!(!state.can_download(KeyKind::Private));
        assert!(state.update(Message::Submit).is_some());
    }

    #[test]
    fn test_editing_name_disables_download() {
        let mut state = created("demo");
        state.update(Message::NameChanged("demo2".into()));
        assert!(!state.can_download(KeyKind::Public));
        assert!(state.update(Message::Download(KeyKind::Public)).is_none());

        state.update(Message::NameChanged("demo".into()));
        assert!(state.can_download(KeyKind::Public));
    }

    #[test]
    fn test_download_lifecycle() {
        let mut state = created("demo");
        match state.update(Message::Download(KeyKind::Private)) {
            Some(Event::Download { app_name, key }) => {
                assert_eq!(app_name, "demo");
                assert_eq!(key, KeyKind::Private);
            }
            _ => panic!("expected Download"),
        }
        assert!(!state.can_download(KeyKind::Public));

        state.download_finished(KeyKind::Private, false);
        assert!(state.can_download(KeyKind::Private));

        state.update(Message::Download(KeyKind::Private));
        state.download_finished(KeyKind::Private, true);
        assert!(!state.can_download(KeyKind::Private));
        assert!(state.can_download(KeyKind::Public));
    }
}
