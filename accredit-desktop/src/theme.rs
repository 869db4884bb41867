// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub mod color {
    use iced::Color;

    pub const BG: Color = Color::from_rgb(0.96, 0.96, 0.97);
    pub const SURFACE: Color = Color::WHITE;
    pub const SURFACE_HOVER: Color = Color::from_rgb(0.94, 0.96, 1.0);
    pub const SIDEBAR: Color = Color::from_rgb(0.0, 0.08, 0.16);
    pub const SIDEBAR_HOVER: Color = Color::from_rgb(0.06, 0.15, 0.25);
    pub const PRIMARY: Color = Color::from_rgb(0.09, 0.47, 1.0);
    pub const PRIMARY_HOVER: Color = Color::from_rgb(0.25, 0.59, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const TEXT_DIM: Color = Color::from_rgb(0.65, 0.65, 0.68);
    pub const SIDEBAR_TEXT: Color = Color::from_rgb(0.75, 0.78, 0.82);
    pub const SUCCESS: Color = Color::from_rgb(0.32, 0.77, 0.10);
    pub const WARNING: Color = Color::from_rgb(0.98, 0.68, 0.08);
    pub const ERROR: Color = Color::from_rgb(1.0, 0.30, 0.31);
    pub const BORDER: Color = Color::from_rgb(0.85, 0.85, 0.87);
}

pub mod space {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
}

pub mod size {
    pub const TITLE: f32 = 20.0;
    pub const HEADING: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const SMALL: f32 = 12.0;
    pub const SIDEBAR_WIDTH: f32 = 200.0;
    pub const INPUT_WIDTH: f32 = 420.0;
    pub const EDITOR_HEIGHT: f32 = 120.0;
}

pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(color::SURFACE)),
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        text_color: Some(color::TEXT),
        snap: false,
    }
}

pub fn sidebar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(color::SIDEBAR)),
        ..Default::default()
    }
}

pub fn page_bg(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(color::BG)),
        text_color: Some(color::TEXT),
        ..Default::default()
    }
}

/// Read-only output box for signatures and transcoded text.
pub fn output_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(color::BG)),
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        text_color: Some(color::TEXT),
        ..Default::default()
    }
}

pub fn toast_style(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(color::PRIMARY)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..button::primary(theme, status)
    };
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(color::PRIMARY_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(color::BORDER)),
            text_color: color::TEXT_DIM,
            ..base
        },
        _ => base,
    }
}

pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(color::SURFACE)),
        text_color: color::TEXT,
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..button::secondary(theme, status)
    };
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(color::SURFACE_HOVER)),
            text_color: color::PRIMARY,
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: color::TEXT_DIM,
            ..base
        },
        _ => base,
    }
}

pub fn nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => Some(Background::Color(color::SIDEBAR_HOVER)),
        _ => None,
    };
    button::Style {
        background: bg,
        text_color: color::SIDEBAR_TEXT,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn nav_button_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(color::PRIMARY)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn text_button(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => color::PRIMARY_HOVER,
            button::Status::Disabled => color::TEXT_DIM,
            _ => color::PRIMARY,
        },
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn heading(s: &str) -> text::Text<'_> {
    text(s).size(size::HEADING).color(color::TEXT)
}

pub fn label(s: &str) -> text::Text<'_> {
    text(s).size(size::BODY).color(color::TEXT)
}

pub fn muted(s: &str) -> text::Text<'_> {
    text(s).size(size::SMALL).color(color::TEXT_MUTED)
}

pub fn error_text(s: &str) -> text::Text<'_> {
    text(s).size(size::SMALL).color(color::ERROR)
}
