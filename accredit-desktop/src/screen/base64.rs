// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use accredit_core::TranscodeDirection;
use iced::widget::{button, column, container, row, text, text_editor};
use iced::{Element, Length};

use crate::theme;

#[derive(Debug, Clone)]
pub enum Message {
    Edited(TranscodeDirection, text_editor::Action),
    Submit(TranscodeDirection),
}

pub enum Event {
    Transcode {
        direction: TranscodeDirection,
        input: String,
    },
}

struct Pane {
    direction: TranscodeDirection,
    input: text_editor::Content,
    output: Option<String>,
    loading: bool,
}

impl Pane {
    fn new(direction: TranscodeDirection) -> Self {
        Self {
            direction,
            input: text_editor::Content::new(),
            output: None,
            loading: false,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let direction = self.direction;
        let input = text_editor(&self.input)
            .placeholder("Text")
            .on_action(move |action| Message::Edited(direction, action))
            .padding(theme::space::SM)
            .height(theme::size::EDITOR_HEIGHT);

        let submit: Element<'_, Message> = if self.loading {
            theme::label("Working...").into()
        } else {
            button(text(format!("{} and copy", direction.title())).size(theme::size::BODY))
                .on_press(Message::Submit(direction))
                .style(theme::primary_button)
                .padding([theme::space::SM, theme::space::LG])
                .width(Length::Fill)
                .into()
        };

        let mut pane = column![theme::heading(direction.title()), input, submit]
            .spacing(theme::space::SM);
        if let Some(output) = &self.output {
            pane = pane.push(
                container(text(output.as_str()).size(theme::size::SMALL))
                    .style(theme::output_style)
                    .padding(theme::space::SM)
                    .width(Length::Fill),
            );
        }

        container(pane)
            .style(theme::card_style)
            .padding(theme::space::LG)
            .width(Length::FillPortion(1))
            .into()
    }
}

pub struct State {
    encode: Pane,
    decode: Pane,
}

impl State {
    pub fn new() -> Self {
        Self {
            encode: Pane::new(TranscodeDirection::Encode),
            decode: Pane::new(TranscodeDirection::Decode),
        }
    }

    fn pane_mut(&mut self, direction: TranscodeDirection) -> &mut Pane {
        match direction {
            TranscodeDirection::Encode => &mut self.encode,
            TranscodeDirection::Decode => &mut self.decode,
        }
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Edited(direction, action) => {
                self.pane_mut(direction).input.perform(action);
                None
            }
            Message::Submit(direction) => {
                let pane = self.pane_mut(direction);
                let input = pane.input.text();
                if pane.loading || input.is_empty() {
                    return None;
                }
                pane.loading = true;
                Some(Event::Transcode { direction, input })
            }
        }
    }

    /// `output` is `None` when the backend rejected the input.
    pub fn finished(&mut self, direction: TranscodeDirection, output: Option<String>) {
        let pane = self.pane_mut(direction);
        pane.loading = false;
        if output.is_some() {
            pane.output = output;
        }
    }

    #[cfg(test)]
    pub fn output(&self, direction: TranscodeDirection) -> Option<&str> {
        match direction {
            TranscodeDirection::Encode => self.encode.output.as_deref(),
            TranscodeDirection::Decode => self.decode.output.as_deref(),
        }
    }

    pub fn view_content(&self) -> Element<'_, Message> {
        let panes = row![self.encode.view(), self.decode.view()].spacing(theme::space::LG);
        container(panes)
            .padding(theme::space::XL)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use iced::widget::text_editor::{Action, Edit};

    use super::*;

    fn typed(direction: TranscodeDirection, text: &str) -> Message {
        Message::Edited(direction, Action::Edit(Edit::Paste(Arc::new(text.into()))))
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut state = State::new();
        assert!(state.update(Message::Submit(TranscodeDirection::Encode)).is_none());
        assert!(!state.encode.loading);
    }

    #[test]
    fn test_submit_sends_raw_text() {
        let mut state = State::new();
        state.update(typed(TranscodeDirection::Encode, " hello "));
        match state.update(Message::Submit(TranscodeDirection::Encode)) {
            Some(Event::Transcode { direction, input }) => {
                assert_eq!(direction, TranscodeDirection::Encode);
                assert_eq!(input, " hello ");
            }
            None => panic!("expected Transcode"),
        }
    }

    #[test]
    fn test_multi_line_input_is_sent_whole() {
        let mut state = State::new();
        state.update(typed(TranscodeDirection::Decode, "aGVs\nbG8="));
        match state.update(Message::Submit(TranscodeDirection::Decode)) {
            Some(Event::Transcode { input, .. }) => assert_eq!(input, "aGVs\nbG8="),
            None => panic!("expected Transcode"),
        }
    }

    #[test]
    fn test_panes_are_independent() {
        let mut state = State::new();
        state.update(typed(TranscodeDirection::Encode, "a"));
        state.update(Message::Submit(TranscodeDirection::Encode));

        assert!(state.update(Message::Submit(TranscodeDirection::Encode)).is_none());
        assert!(state.update(Message::Submit(TranscodeDirection::Decode)).is_none());

        state.update(typed(TranscodeDirection::Decode, "YQ=="));
        assert!(state.update(Message::Submit(TranscodeDirection::Decode)).is_some());
    }

    #[test]
    fn test_finished_shows_output() {
        let mut state = State::new();
        state.update(typed(TranscodeDirection::Encode, "a"));
        state.update(Message::Submit(TranscodeDirection::Encode));
        state.finished(TranscodeDirection::Encode, Some("YQ==".into()));
        assert_eq!(state.output(TranscodeDirection::Encode), Some("YQ=="));

        state.update(Message::Submit(TranscodeDirection::Encode));
        state.finished(TranscodeDirection::Encode, None);
        assert_eq!(state.output(TranscodeDirection::Encode), Some("YQ=="));
        assert!(!state.encode.loading);
    }
}
