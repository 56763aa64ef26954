// SPDX-License-Identifier: MPL-2.0
//! Demo application showing message bars in an Iced window.
//!
//! The `App` owns a [`MessageBarManager`] and acts as its host environment:
//! it turns the manager's effects into real timers (`tokio` sleeps wrapped in
//! abortable tasks) and slide animations (driven by a periodic tick), and
//! reports completions back with the token each effect carried.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::InMemoryStatusBar;
use crate::application::presentation::{Effect, Phase, Token};
use crate::config::{self, paths, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY};
use crate::diagnostics::{
    generate_default_filename, BufferCapacity, DiagnosticsCollector, ExportError, WarningEvent,
    WarningType,
};
use crate::domain::chrome::StatusBarStyle;
use crate::domain::message::{DisplayLocation, Message as BarMessage, MessageType};
use crate::ui::animation::SlideAnimation;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::message_bar::{self, BarContent};
use crate::MessageBarManager;
use iced::alignment::Vertical;
use iced::task;
use iced::widget::{button, column, container, row, text, Stack};
use iced::{window, Color, Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 560.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root Iced application state.
pub struct App {
    manager: MessageBarManager,
    /// Slide currently running, if any.
    animation: Option<SlideAnimation>,
    animation_duration: Duration,
    /// Abort handles of armed display timers.
    timers: HashMap<Token, task::Handle>,
    /// Incremented by tap callbacks.
    taps: Arc<AtomicU32>,
    /// Number of messages requested so far, for titles.
    requested: u32,
    /// Time of the last tick.
    now: Instant,
    diagnostics: Option<DiagnosticsCollector>,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.manager.phase())
            .field("queued", &self.manager.queued_count())
            .field("timers", &self.timers.len())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; the flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and builds the manager it describes.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (mut config, config_warning) = config::load_with_override(config_dir.clone());
        if let Some(location) = flags.location {
            config.presentation.display_location = Some(location);
        }

        let mut manager =
            MessageBarManager::from_config(&config, Box::new(InMemoryStatusBar::default()));

        let diagnostics = config.diagnostics.enabled.then(|| {
            DiagnosticsCollector::new(BufferCapacity::new(
                config
                    .diagnostics
                    .buffer_capacity
                    .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
            ))
        });
        if let Some(collector) = &diagnostics {
            manager.set_diagnostics(collector.handle());
        }

        if let Some(key) = config_warning {
            eprintln!("Warning: {key}; using default settings");
            if let Some(collector) = &diagnostics {
                collector
                    .handle()
                    .log_warning(WarningEvent::new(WarningType::ConfigurationIssue, key));
            }
            manager.show_message(BarMessage::error(
                "Settings not loaded",
                "The settings file is invalid; defaults are in use",
            ));
        }

        let mut app = App {
            manager,
            animation: None,
            animation_duration: config.presentation.animation_duration(),
            timers: HashMap::new(),
            taps: Arc::new(AtomicU32::new(0)),
            requested: 0,
            now: Instant::now(),
            diagnostics,
            config_dir,
        };
        let task = app.run_effects();
        (app, task)
    }

    fn title(&self) -> String {
        match self.manager.queued_count() {
            0 => "Message Bar".to_string(),
            queued => format!("Message Bar ({queued} queued)"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.animation.is_some())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => {
                let request = self.sample(kind);
                self.manager.show_message(request);
            }
            Message::ShowSticky => {
                let request = self
                    .sample(MessageType::Info)
                    .duration(0.0)
                    .status_bar_hidden(true);
                self.manager.show_message(request);
            }
            Message::Burst => {
                let error = self.sample(MessageType::Error);
                let success = self
                    .sample(MessageType::Success)
                    .display_location(DisplayLocation::Bottom);
                let info = self
                    .sample(MessageType::Info)
                    .status_bar_style(StatusBarStyle::LightContent);
                for request in [error, success, info] {
                    self.manager.show_message(request);
                }
            }
            Message::HideAll { animated } => self.manager.hide_all_animated(animated),
            Message::Bar(message_bar::Interaction::Tapped) => {
                self.manager.tap();
            }
            Message::Tick(now) => {
                self.now = now;
                if let Some(animation) = self.animation {
                    if animation.is_finished(now) {
                        self.animation = None;
                        self.manager.animation_finished(animation.token());
                    }
                }
                if let Some(collector) = &mut self.diagnostics {
                    collector.process_pending();
                }
            }
            Message::TimerFired(token) => {
                self.timers.remove(&token);
                self.manager.timer_expired(token);
            }
            Message::ExportDiagnostics => {
                let report = self.export_diagnostics();
                self.manager.show_message(report);
            }
        }
        self.run_effects()
    }

    /// Carries out the manager's pending effects.
    fn run_effects(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();

        for effect in self.manager.take_effects() {
            match effect {
                Effect::Animate {
                    token,
                    transition,
                    location,
                } => {
                    self.animation = Some(SlideAnimation::new(
                        token,
                        transition,
                        location,
                        Instant::now(),
                        self.animation_duration,
                    ));
                }
                Effect::ArmTimer { token, duration } => {
                    let (timer, handle) = Task::perform(
                        async move { tokio::time::sleep(duration).await },
                        move |()| Message::TimerFired(token),
                    )
                    .abortable();
                    self.timers.insert(token, handle);
                    tasks.push(timer);
                }
                Effect::CancelTimer { token } => {
                    if let Some(handle) = self.timers.remove(&token) {
                        handle.abort();
                    }
                }
                Effect::Discard { message } => {
                    if self
                        .animation
                        .is_some_and(|animation| animation.token().message() == message)
                    {
                        self.animation = None;
                    }
                }
            }
        }

        Task::batch(tasks)
    }

    /// Builds a demo message whose tap callback bumps the tap counter.
    fn sample(&mut self, kind: MessageType) -> BarMessage {
        self.requested += 1;
        let n = self.requested;
        let (title, description) = match kind {
            MessageType::Error => ("Connection lost", "Retrying in a few seconds"),
            MessageType::Success => ("Saved", "Your changes are stored"),
            MessageType::Info => ("Heads up", "Tap this bar to dismiss it"),
        };
        let taps = Arc::clone(&self.taps);
        BarMessage::new(format!("{title} #{n}"), description, kind).on_tap(move || {
            taps.fetch_add(1, Ordering::Relaxed);
        })
    }

    fn export_diagnostics(&mut self) -> BarMessage {
        let Some(collector) = &mut self.diagnostics else {
            return BarMessage::info("Diagnostics disabled", "Enable them in settings.toml");
        };
        collector.process_pending();

        let Some(dir) = paths::get_app_config_dir_with_override(self.config_dir.clone()) else {
            return BarMessage::error("Export failed", "No configuration directory available");
        };
        let path = dir.join(generate_default_filename());
        let result = std::fs::create_dir_all(&dir)
            .map_err(ExportError::from)
            .and_then(|()| collector.export_to_file(&path));

        match result {
            Ok(path) => BarMessage::success("Diagnostics exported", path.display().to_string()),
            Err(err) => BarMessage::error("Export failed", err.to_string()),
        }
    }

    /// Fraction of the active bar on screen.
    fn reveal(&self) -> f32 {
        match self.animation {
            Some(animation) => animation.reveal(self.now),
            None if self.manager.phase() == Phase::Visible => 1.0,
            None => 0.0,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.controls());
        let layers = match self.bar() {
            Some(bar) => layers.push(bar),
            None => layers,
        };

        column![self.status_strip(), layers].into()
    }

    fn controls(&self) -> Element<'_, Message> {
        let show_buttons = row![
            button(text("Error")).on_press(Message::Show(MessageType::Error)),
            button(text("Success")).on_press(Message::Show(MessageType::Success)),
            button(text("Info")).on_press(Message::Show(MessageType::Info)),
        ]
        .spacing(spacing::XS);

        let extra_buttons = row![
            button(text("Sticky")).on_press(Message::ShowSticky),
            button(text("Burst of three")).on_press(Message::Burst),
        ]
        .spacing(spacing::XS);

        let hide_buttons = row![
            button(text("Hide all (animated)")).on_press(Message::HideAll { animated: true }),
            button(text("Hide all")).on_press(Message::HideAll { animated: false }),
        ]
        .spacing(spacing::XS);

        let status = text(format!(
            "Phase: {:?}, queued: {}, taps: {}",
            self.manager.phase(),
            self.manager.queued_count(),
            self.taps.load(Ordering::Relaxed)
        ))
        .size(typography::CAPTION);

        container(
            column![
                show_buttons,
                extra_buttons,
                hide_buttons,
                button(text("Export diagnostics")).on_press(Message::ExportDiagnostics),
                status,
            ]
            .spacing(spacing::SM),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
    }

    /// Simulated status bar reflecting the in-memory status bar state.
    fn status_strip(&self) -> Element<'_, Message> {
        let state = self.manager.status_bar().state();
        if state.hidden {
            return column![].into();
        }

        let (background, foreground) = match state.style {
            StatusBarStyle::Default => (palette::GRAY_100, palette::GRAY_900),
            StatusBarStyle::LightContent => (palette::GRAY_900, palette::WHITE),
            StatusBarStyle::DarkContent => (palette::WHITE, palette::BLACK),
        };

        container(
            text(format!("9:41    status bar ({:?})", state.style))
                .size(typography::CAPTION)
                .color(foreground),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_STRIP_HEIGHT))
        .padding([0.0, spacing::XS])
        .align_y(Vertical::Center)
        .style(move |_theme| strip_style(background))
        .into()
    }

    fn bar(&self) -> Option<Element<'_, Message>> {
        let active = self.manager.active()?;
        let request = active.message();
        let content = BarContent {
            title: request.title(),
            description: request.description(),
            location: active.location(),
            style: self.manager.resolved_style(request.kind()),
            reveal: self.reveal(),
        };
        let anchor = match active.location() {
            DisplayLocation::Top => Vertical::Top,
            DisplayLocation::Bottom => Vertical::Bottom,
        };

        Some(
            container(message_bar::view(content).map(Message::Bar))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(anchor)
                .into(),
        )
    }
}

fn strip_style(background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::presentation::Transition;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            location: None,
        });
        (app, dir)
    }

    /// Ticks far enough ahead for any running slide to finish.
    fn finish_animation(app: &mut App) {
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
    }

    #[test]
    fn new_starts_idle() {
        let (app, _dir) = test_app();
        assert!(app.manager.is_idle());
        assert!(app.animation.is_none());
        assert_eq!(app.title(), "Message Bar");
    }

    #[test]
    fn show_starts_entry_animation() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Show(MessageType::Success));

        let animation = app.animation.expect("entry animation");
        assert_eq!(animation.transition(), Transition::Enter);
        assert_eq!(app.manager.phase(), Phase::Entering);
    }

    #[test]
    fn finished_entry_arms_timer() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Show(MessageType::Info));
        finish_animation(&mut app);

        assert_eq!(app.manager.phase(), Phase::Visible);
        assert_eq!(app.timers.len(), 1);
        assert!(app.animation.is_none());
    }

    #[test]
    fn sticky_message_arms_no_timer_and_hides_status_bar() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::ShowSticky);
        finish_animation(&mut app);

        assert!(app.timers.is_empty());
        assert!(app.manager.status_bar().state().hidden);
    }

    #[test]
    fn tap_runs_callback_and_cancels_timer() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Show(MessageType::Error));
        finish_animation(&mut app);

        let _ = app.update(Message::Bar(message_bar::Interaction::Tapped));

        assert_eq!(app.taps.load(Ordering::Relaxed), 1);
        assert!(app.timers.is_empty());
        assert_eq!(app.manager.phase(), Phase::Exiting);
    }

    #[test]
    fn timer_fired_begins_exit() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Show(MessageType::Info));
        finish_animation(&mut app);
        let token = *app.timers.keys().next().expect("armed timer");

        let _ = app.update(Message::TimerFired(token));

        assert_eq!(app.manager.phase(), Phase::Exiting);
        finish_animation(&mut app);
        assert!(app.manager.is_idle());
    }

    #[test]
    fn burst_queues_behind_first() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Burst);

        assert_eq!(app.manager.queued_count(), 2);
        assert_eq!(app.title(), "Message Bar (2 queued)");
    }

    #[test]
    fn hide_all_clears_animation_and_timers() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Burst);
        finish_animation(&mut app);

        let _ = app.update(Message::HideAll { animated: false });

        assert!(app.manager.is_idle());
        assert!(app.animation.is_none());
        assert!(app.timers.is_empty());
        assert!(!app.manager.status_bar().state().hidden);
    }

    #[test]
    fn export_diagnostics_writes_into_config_dir() {
        let (mut app, dir) = test_app();
        let _ = app.update(Message::Show(MessageType::Info));
        let _ = app.update(Message::HideAll { animated: false });

        let _ = app.update(Message::ExportDiagnostics);

        let exported = std::fs::read_dir(dir.path())
            .expect("read config dir")
            .filter_map(Result::ok)
            .any(|entry| entry.file_name().to_string_lossy().ends_with(".json"));
        assert!(exported);
        let title = app
            .manager
            .active()
            .map(|active| active.message().title().to_string());
        assert_eq!(title.as_deref(), Some("Diagnostics exported"));
    }

    #[test]
    fn invalid_config_shows_error_message() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "presentation = [").expect("write");

        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            location: Some(DisplayLocation::Bottom),
        });

        let active = app.manager.active().expect("warning message");
        assert_eq!(active.message().kind(), MessageType::Error);
        assert_eq!(active.location(), DisplayLocation::Bottom);
    }
}
