// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use accredit_core::actions::{self, DownloadOutcome};
use accredit_core::bridge::copy_to_clipboard;
use accredit_core::{Backend, Clipboard, Config, KeyKind, ProcessBridge, SaveDialog};
use iced::widget::{column, container, text};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, warn};

use crate::message::{Message, Origin, Resolved};
use crate::platform::{NativeSaveDialog, SystemClipboard};
use crate::screen::accredit::{self, Form};
use crate::screen::{app_list, base64, Route, Screen};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// The three bridges every screen talks through.
#[derive(Clone)]
pub struct Services {
    pub backend: Backend,
    pub dialog: Arc<dyn SaveDialog>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl Services {
    pub fn native(config: &Config) -> Self {
        Self {
            backend: Backend::new(Arc::new(ProcessBridge::new(config.backend.clone()))),
            dialog: Arc::new(NativeSaveDialog),
            clipboard: Arc::new(SystemClipboard::default()),
        }
    }
}

pub struct App {
    services: Services,
    screen: Screen,
    /// Advances on every navigation; answers tagged with an older value are dropped.
    epoch: u64,
    toast: Option<Toast>,
    toast_dismiss_at: Option<Instant>,
    toast_duration: Duration,
}

/// Backend work whose answer is applied back onto the current screen.
type Job = Pin<Box<dyn Future<Output = Resolved> + Send>>;

/// A negative verification is a warning, not an error.
fn verify_notice(verified: bool) -> (&'static str, ToastKind) {
    if verified {
        ("Verification succeeded", ToastKind::Success)
    } else {
        ("Verification failed", ToastKind::Warning)
    }
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let services = Services::native(&config);
        Self::with_services(&config, services)
    }

    pub fn with_services(config: &Config, services: Services) -> (Self, Task<Message>) {
        let route = Route::from_path(&config.start_path).unwrap_or_else(|| {
            warn!(path = %config.start_path, "unknown start path, using /");
            Route::Accredit
        });
        let app = Self {
            services,
            screen: Screen::for_route(route),
            epoch: 0,
            toast: None,
            toast_dismiss_at: None,
            toast_duration: Duration::from_secs(config.toast_secs),
        };

        let backend = app.services.backend.clone();
        let ready = Task::perform(
            async move { backend.app_ready().await.map_err(|e| e.to_string()) },
            Message::AppReady,
        );
        let mount = app.mount();
        (app, Task::batch([mount, ready]))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if self.toast_dismiss_at.is_some_and(|t| Instant::now() >= t) {
                    self.toast = None;
                    self.toast_dismiss_at = None;
                }
                Task::none()
            }
            Message::Navigate(route) => self.navigate(route),
            Message::AppReady(Ok(())) => {
                debug!("backend acknowledged app_ready");
                Task::none()
            }
            Message::AppReady(Err(e)) => {
                warn!("app_ready failed: {e}");
                Task::none()
            }
            Message::Resolved { epoch, result } => {
                if epoch != self.epoch {
                    debug!(epoch, current = self.epoch, ?result, "discarding stale result");
                } else {
                    self.apply(result);
                }
                Task::none()
            }
            Message::Accredit(msg) => {
                let Screen::Accredit(state) = &mut self.screen else {
                    return Task::none();
                };
                let Some(event) = state.update(msg) else {
                    return Task::none();
                };
                self.on_accredit_event(event)
            }
            Message::AppList(msg) => {
                let Screen::AppList(state) = &mut self.screen else {
                    return Task::none();
                };
                let Some(event) = state.update(msg) else {
                    return Task::none();
                };
                match event {
                    app_list::Event::Reload => self.fetch_apps(),
                    app_list::Event::Download { app_name, key } => {
                        self.download(Origin::AppList, app_name, key)
                    }
                    app_list::Event::Copy(text) => self.copy(text),
                }
            }
            Message::Base64(msg) => {
                let Screen::Base64(state) = &mut self.screen else {
                    return Task::none();
                };
                let Some(base64::Event::Transcode { direction, input }) = state.update(msg) else {
                    return Task::none();
                };
                let backend = self.services.backend.clone();
                let clipboard = Arc::clone(&self.services.clipboard);
                self.perform(
                    async move {
                        actions::transcode_to_clipboard(
                            &backend,
                            clipboard.as_ref(),
                            direction,
                            &input,
                        )
                        .await
                        .map_err(|e| e.to_string())
                    },
                    move |result| Resolved::Transcoded { direction, result },
                )
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen = self.screen.view();
        let Some(toast) = &self.toast else {
            return screen;
        };
        let bg_color = match toast.kind {
            ToastKind::Success => theme::color::SUCCESS,
            ToastKind::Warning => theme::color::WARNING,
            ToastKind::Error => theme::color::ERROR,
        };
        let banner = container(
            text(&toast.message)
                .size(theme::size::BODY)
                .color(iced::Color::WHITE),
        )
        .padding([theme::space::SM, theme::space::LG])
        .width(Length::Fill)
        .style(theme::toast_style(bg_color));
        column![banner, screen].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.toast.is_none() {
            return Subscription::none();
        }
        iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        if route == self.screen.route() {
            return Task::none();
        }
        self.epoch += 1;
        debug!(path = route.path(), epoch = self.epoch, "navigate");
        self.screen = Screen::for_route(route);
        self.mount()
    }

    fn mount(&self) -> Task<Message> {
        match self.screen.route() {
            Route::Accredit => Task::batch(Form::ALL.map(|form| self.fetch_names(form))),
            Route::AppList => self.fetch_apps(),
            Route::Base64 => Task::none(),
        }
    }

    /// Runs `job` and tags its answer with the current epoch.
    fn run(&self, job: Job) -> Task<Message> {
        let epoch = self.epoch;
        Task::perform(job, move |result| Message::Resolved { epoch, result })
    }

    fn perform<T>(
        &self,
        future: impl Future<Output = T> + Send + 'static,
        wrap: impl FnOnce(T) -> Resolved + Send + 'static,
    ) -> Task<Message>
    where
        T: Send + 'static,
    {
        self.run(Box::pin(async move { wrap(future.await) }))
    }

    fn fetch_names(&self, form: Form) -> Task<Message> {
        let backend = self.services.backend.clone();
        self.perform(
            async move { backend.app_names().await.map_err(|e| e.to_string()) },
            move |result| Resolved::AppNames { form, result },
        )
    }

    fn fetch_apps(&self) -> Task<Message> {
        let backend = self.services.backend.clone();
        self.perform(
            async move { backend.app_infos().await.map_err(|e| e.to_string()) },
            Resolved::AppsLoaded,
        )
    }

    fn download(&self, origin: Origin, app_name: String, key: KeyKind) -> Task<Message> {
        let backend = self.services.backend.clone();
        let dialog = Arc::clone(&self.services.dialog);
        self.perform(
            async move {
                actions::download_key(&backend, dialog.as_ref(), &app_name, key)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Resolved::KeyDownloaded {
                origin,
                key,
                result,
            },
        )
    }

    fn copy(&mut self, text: String) -> Task<Message> {
        copy_to_clipboard(self.services.clipboard.as_ref(), &text);
        self.set_toast("Copied".into(), ToastKind::Success);
        Task::none()
    }

    fn on_accredit_event(&mut self, event: accredit::Event) -> Task<Message> {
        match event {
            accredit::Event::RefreshNames(form) => self.fetch_names(form),
            accredit::Event::Download { app_name, key } => {
                self.download(Origin::CreateKey, app_name, key)
            }
            accredit::Event::Copy(text) => self.copy(text),
            accredit::Event::CreateKeys(app_name) => {
                self.run(create_keys_job(self.services.backend.clone(), app_name))
            }
            accredit::Event::Sign { app_name, data } => {
                self.run(sign_job(self.services.backend.clone(), app_name, data))
            }
            accredit::Event::Verify {
                app_name,
                data,
                signature,
            } => self.run(verify_job(
                self.services.backend.clone(),
                app_name,
                data,
                signature,
            )),
        }
    }

    fn apply(&mut self, result: Resolved) {
        match result {
            Resolved::AppNames { form, result } => match result {
                Ok(names) => {
                    if let Screen::Accredit(s) = &mut self.screen {
                        s.names_loaded(form, names);
                    }
                }
                Err(e) => self.set_toast(e, ToastKind::Error),
            },
            Resolved::KeysCreated { app_name, result } => {
                if let Screen::Accredit(s) = &mut self.screen {
                    match result {
                        Ok(()) => s.create_key.keys_created(app_name.clone()),
                        Err(_) => s.create_key.create_failed(),
                    }
                }
                match result {
                    Ok(()) => self.set_toast(
                        format!("Keys created for '{app_name}'"),
                        ToastKind::Success,
                    ),
                    Err(e) => self.set_toast(e, ToastKind::Error),
                }
            }
            Resolved::KeyDownloaded {
                origin,
                key,
                result,
            } => {
                let completed = matches!(result, Ok(DownloadOutcome::Saved(_)));
                match (origin, &mut self.screen) {
                    (Origin::CreateKey, Screen::Accredit(s)) => {
                        s.create_key.download_finished(key, completed)
                    }
                    (Origin::AppList, Screen::AppList(s)) => s.download_finished(),
                    _ => {}
                }
                match result {
                    Ok(DownloadOutcome::Saved(path)) => self.set_toast(
                        format!("Saved to {}", path.display()),
                        ToastKind::Success,
                    ),
                    Ok(DownloadOutcome::Cancelled) => {}
                    Ok(DownloadOutcome::DialogFailed) => {
                        self.set_toast("Error choosing save path".into(), ToastKind::Error)
                    }
                    Err(e) => self.set_toast(e, ToastKind::Error),
                }
            }
            Resolved::SignatureCreated(result) => {
                let Screen::Accredit(s) = &mut self.screen else {
                    return;
                };
                match result {
                    Ok(signature) => s.sign.signed(signature),
                    Err(e) => {
                        s.sign.sign_failed();
                        self.set_toast(e, ToastKind::Error);
                    }
                }
            }
            Resolved::Verified(result) => {
                if let Screen::Accredit(s) = &mut self.screen {
                    s.verify.finished();
                }
                match result {
                    Ok(verified) => {
                        let (message, kind) = verify_notice(verified);
                        self.set_toast(message.into(), kind);
                    }
                    Err(e) => self.set_toast(e, ToastKind::Error),
                }
            }
            Resolved::AppsLoaded(result) => {
                let Screen::AppList(s) = &mut self.screen else {
                    return;
                };
                match result {
                    Ok(apps) => s.loaded(apps),
                    Err(e) => {
                        s.load_failed();
                        self.set_toast(e, ToastKind::Error);
                    }
                }
            }
            Resolved::Transcoded { direction, result } => {
                if let Screen::Base64(s) = &mut self.screen {
                    s.finished(direction, result.as_ref().ok().cloned());
                }
                match result {
                    Ok(_) => self.set_toast("Copied to clipboard".into(), ToastKind::Success),
                    Err(e) => self.set_toast(e, ToastKind::Error),
                }
            }
        }
    }

    fn set_toast(&mut self, message: String, kind: ToastKind) {
        self.toast = Some(Toast { message, kind });
        self.toast_dismiss_at = Some(Instant::now() + self.toast_duration);
    }
}

fn create_keys_job(backend: Backend, app_name: String) -> Job {
    Box::pin(async move {
        let result = backend
            .create_app_keys(&app_name)
            .await
            .map_err(|e| e.to_string());
        Resolved::KeysCreated { app_name, result }
    })
}

fn sign_job(backend: Backend, app_name: String, data: Vec<u8>) -> Job {
    Box::pin(async move {
        Resolved::SignatureCreated(
            backend
                .create_signature(&app_name, data)
                .await
                .map_err(|e| e.to_string()),
        )
    })
}

fn verify_job(backend: Backend, app_name: String, data: Vec<u8>, signature: Vec<u8>) -> Job {
    Box::pin(async move {
        Resolved::Verified(
            backend
                .verify_signature(&app_name, data, signature)
                .await
                .map_err(|e| e.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use accredit_core::mock::{MockBridge, MockClipboard, MockDialog};
    use accredit_core::TranscodeDirection;
    use serde_json::{json, Value};

    use super::*;
    use crate::screen::create_key;

    fn app_at(path: &str) -> (App, Arc<MockClipboard>) {
        let clipboard = Arc::new(MockClipboard::new());
        let services = Services {
            backend: Backend::new(Arc::new(MockBridge::new())),
            dialog: Arc::new(MockDialog::cancelling()),
            clipboard: clipboard.clone(),
        };
        let config = Config {
            start_path: path.into(),
            ..Config::default()
        };
        let (app, _) = App::with_services(&config, services);
        (app, clipboard)
    }

    fn accredit_state(app: &App) -> &accredit::State {
        match &app.screen {
            Screen::Accredit(s) => s,
            _ => panic!("not on the signing screen"),
        }
    }

    fn resolve(app: &mut App, result: Resolved) {
        let epoch = app.epoch;
        let _ = app.update(Message::Resolved { epoch, result });
    }

    fn toast(app: &App) -> Option<(&str, ToastKind)> {
        app.toast.as_ref().map(|t| (t.message.as_str(), t.kind))
    }

    #[test]
    fn test_start_path_selects_screen() {
        let (app, _) = app_at("/base64");
        assert_eq!(app.screen.route(), Route::Base64);

        let (app, _) = app_at("/nowhere");
        assert_eq!(app.screen.route(), Route::Accredit);
    }

    #[test]
    fn test_navigation_bumps_epoch() {
        let (mut app, _) = app_at("/");
        let _ = app.update(Message::Navigate(Route::Accredit));
        assert_eq!(app.epoch, 0);

        let _ = app.update(Message::Navigate(Route::AppList));
        assert_eq!(app.epoch, 1);
        assert_eq!(app.screen.route(), Route::AppList);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let (mut app, _) = app_at("/");
        let _ = app.update(Message::Navigate(Route::AppList));
        let _ = app.update(Message::Navigate(Route::Accredit));

        let _ = app.update(Message::Resolved {
            epoch: 0,
            result: Resolved::AppNames {
                form: Form::Sign,
                result: Ok(vec!["old".into()]),
            },
        });
        assert!(accredit_state(&app).sign.selector.options().is_empty());

        let _ = app.update(Message::Resolved {
            epoch: 1,
            result: Resolved::AppNames {
                form: Form::Sign,
                result: Err("boom".into()),
            },
        });
        assert!(app.toast.is_none());

        resolve(
            &mut app,
            Resolved::AppNames {
                form: Form::Sign,
                result: Ok(vec!["fresh".into()]),
            },
        );
        assert_eq!(
            accredit_state(&app).sign.selector.options(),
            ["fresh".to_string()]
        );
    }

    #[test]
    fn test_names_failure_keeps_options() {
        let (mut app, _) = app_at("/");
        resolve(
            &mut app,
            Resolved::AppNames {
                form: Form::Verify,
                result: Ok(vec!["demo".into()]),
            },
        );
        resolve(
            &mut app,
            Resolved::AppNames {
                form: Form::Verify,
                result: Err("backend busy".into()),
            },
        );
        assert_eq!(
            accredit_state(&app).verify.selector.options(),
            ["demo".to_string()]
        );
        assert_eq!(toast(&app), Some(("backend busy", ToastKind::Error)));
    }

    #[test]
    fn test_key_creation_outcomes() {
        let (mut app, _) = app_at("/");
        let _ = app.update(Message::Accredit(accredit::Message::CreateKey(
            create_key::Message::NameChanged("demo".into()),
        )));
        let _ = app.update(Message::Accredit(accredit::Message::CreateKey(
            create_key::Message::Submit,
        )));

        resolve(
            &mut app,
            Resolved::KeysCreated {
                app_name: "demo".into(),
                result: Err("name taken".into()),
            },
        );
        assert!(!accredit_state(&app).create_key.can_download(KeyKind::Private));
        assert_eq!(toast(&app), Some(("name taken", ToastKind::Error)));

        let _ = app.update(Message::Accredit(accredit::Message::CreateKey(
            create_key::Message::Submit,
        )));
        resolve(
            &mut app,
            Resolved::KeysCreated {
                app_name: "demo".into(),
                result: Ok(()),
            },
        );
        assert!(accredit_state(&app).create_key.can_download(KeyKind::Private));
        assert_eq!(
            toast(&app),
            Some(("Keys created for 'demo'", ToastKind::Success))
        );
    }

    #[tokio::test]
    async fn test_create_keys_submit_reaches_backend_once() {
        let bridge = Arc::new(MockBridge::new().respond("create_app_keys", Ok(Value::Null)));
        let services = Services {
            backend: Backend::new(bridge.clone()),
            dialog: Arc::new(MockDialog::cancelling()),
            clipboard: Arc::new(MockClipboard::new()),
        };
        let (mut app, _) = App::with_services(&Config::default(), services);

        let Screen::Accredit(state) = &mut app.screen else {
            panic!("not on the signing screen");
        };
        state.update(accredit::Message::CreateKey(
            create_key::Message::NameChanged("  demo ".into()),
        ));
        let event = state.update(accredit::Message::CreateKey(create_key::Message::Submit));
        assert!(state
            .update(accredit::Message::CreateKey(create_key::Message::Submit))
            .is_none());
        let Some(accredit::Event::CreateKeys(app_name)) = event else {
            panic!("expected CreateKeys");
        };

        let result = create_keys_job(app.services.backend.clone(), app_name).await;
        resolve(&mut app, result);

        let calls = bridge.calls_to("create_app_keys");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].params(), json!({ "appName": "demo" }));
        assert_eq!(bridge.calls().len(), 1);
        assert!(accredit_state(&app).create_key.can_download(KeyKind::Private));
        assert_eq!(
            toast(&app),
            Some(("Keys created for 'demo'", ToastKind::Success))
        );
    }

    #[tokio::test]
    async fn test_verify_submit_reaches_backend() {
        let bridge = Arc::new(MockBridge::new().respond("get_verify_signature", Ok(json!(false))));
        let result = verify_job(
            Backend::new(bridge.clone()),
            "demo".into(),
            b"user-1".to_vec(),
            b"c2ln".to_vec(),
        )
        .await;
        assert!(matches!(result, Resolved::Verified(Ok(false))));
        assert_eq!(bridge.calls_to("get_verify_signature").len(), 1);
    }

    #[test]
    fn test_verification_notices() {
        let (mut app, _) = app_at("/");

        resolve(&mut app, Resolved::Verified(Ok(false)));
        assert_eq!(toast(&app), Some(("Verification failed", ToastKind::Warning)));

        resolve(&mut app, Resolved::Verified(Ok(true)));
        assert_eq!(
            toast(&app),
            Some(("Verification succeeded", ToastKind::Success))
        );

        resolve(&mut app, Resolved::Verified(Err("unknown app".into())));
        assert_eq!(toast(&app), Some(("unknown app", ToastKind::Error)));
    }

    #[test]
    fn test_download_notices() {
        let (mut app, _) = app_at("/applint");
        let downloaded = |result| Resolved::KeyDownloaded {
            origin: Origin::AppList,
            key: KeyKind::Public,
            result,
        };

        resolve(&mut app, downloaded(Ok(DownloadOutcome::Cancelled)));
        assert!(app.toast.is_none());

        resolve(&mut app, downloaded(Ok(DownloadOutcome::DialogFailed)));
        assert_eq!(
            toast(&app),
            Some(("Error choosing save path", ToastKind::Error))
        );

        resolve(
            &mut app,
            downloaded(Ok(DownloadOutcome::Saved(PathBuf::from("/tmp/public_key.pem")))),
        );
        assert_eq!(
            toast(&app),
            Some(("Saved to /tmp/public_key.pem", ToastKind::Success))
        );
    }

    #[test]
    fn test_app_list_copy() {
        let (mut app, clipboard) = app_at("/applint");
        let _ = app.update(Message::AppList(app_list::Message::Copy("device-7".into())));
        assert_eq!(clipboard.written(), vec!["device-7".to_string()]);
        assert_eq!(toast(&app), Some(("Copied", ToastKind::Success)));
    }

    #[test]
    fn test_app_list_failure_toasts() {
        let (mut app, _) = app_at("/applint");
        resolve(&mut app, Resolved::AppsLoaded(Err("no database".into())));
        assert_eq!(toast(&app), Some(("no database", ToastKind::Error)));
        match &app.screen {
            Screen::AppList(s) => assert!(s.shows_empty_state()),
            _ => panic!("not on the app list"),
        }
    }

    #[test]
    fn test_transcode_results() {
        let (mut app, _) = app_at("/base64");
        resolve(
            &mut app,
            Resolved::Transcoded {
                direction: TranscodeDirection::Decode,
                result: Err("invalid base64".into()),
            },
        );
        assert_eq!(toast(&app), Some(("invalid base64", ToastKind::Error)));

        resolve(
            &mut app,
            Resolved::Transcoded {
                direction: TranscodeDirection::Encode,
                result: Ok("aGVsbG8=".into()),
            },
        );
        assert_eq!(toast(&app), Some(("Copied to clipboard", ToastKind::Success)));
        match &app.screen {
            Screen::Base64(s) => {
                assert_eq!(s.output(TranscodeDirection::Encode), Some("aGVsbG8="));
                assert_eq!(s.output(TranscodeDirection::Decode), None);
            }
            _ => panic!("not on the base64 screen"),
        }
    }

    #[test]
    fn test_tick_dismisses_expired_toast() {
        let (mut app, _) = app_at("/");
        app.set_toast("hello".into(), ToastKind::Success);
        let _ = app.update(Message::Tick);
        assert!(app.toast.is_some());

        app.toast_dismiss_at = Some(Instant::now());
        let _ = app.update(Message::Tick);
        assert!(app.toast.is_none());
    }
}
