// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod message;
mod platform;
mod screen;
mod theme;

use accredit_core::config::LogLevel;
use accredit_core::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::App;

fn init_logging(level: LogLevel) {
    let use_json = std::env::var("ACCREDIT_LOG_JSON").is_ok();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    if use_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

fn main() -> iced::Result {
    let loaded = Config::load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    init_logging(config.log_level);
    if let Err(e) = loaded {
        error!("{e}; continuing with defaults");
    }
    info!(backend = %config.backend.program.display(), "starting");

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Accredit")
        .subscription(App::subscription)
        .window_size((1000.0, 720.0))
        .run()
}
