// SPDX-License-Identifier: MPL-2.0
//! End-to-end presentation scenarios driven through the public API.
//!
//! `Host` stands in for the UI environment: it records the effects the
//! manager emits and completes them on demand, the way a real event loop
//! would after an animation or timer finishes.

use message_bar::application::port::{InMemoryStatusBar, StatusBar};
use message_bar::application::presentation::{Effect, Phase, Token, Transition};
use message_bar::config::{self, Config, PresentationConfig};
use message_bar::diagnostics::{
    BufferCapacity, DiagnosticEventKind, DiagnosticsCollector, PresentationEvent, WarningType,
};
use message_bar::domain::chrome::{StatusBarState, StatusBarStyle};
use message_bar::domain::message::{DisplayLocation, Message, MessageType};
use message_bar::MessageBarManager;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

#[derive(Default)]
struct Host {
    animation: Option<(Token, Transition)>,
    timers: HashSet<Token>,
    armed: Vec<Duration>,
    /// Titles in the order their entry animation started.
    presented: Vec<String>,
}

impl Host {
    fn pump(&mut self, manager: &mut MessageBarManager) {
        for effect in manager.take_effects() {
            match effect {
                Effect::Animate {
                    token, transition, ..
                } => {
                    if transition == Transition::Enter {
                        let title = manager
                            .active()
                            .map(|active| active.message().title().to_string())
                            .unwrap_or_default();
                        self.presented.push(title);
                    }
                    self.animation = Some((token, transition));
                }
                Effect::ArmTimer { token, duration } => {
                    self.timers.insert(token);
                    self.armed.push(duration);
                }
                Effect::CancelTimer { token } => {
                    self.timers.remove(&token);
                }
                Effect::Discard { .. } => {}
            }
        }
    }

    fn finish_animation(&mut self, manager: &mut MessageBarManager) {
        let (token, _) = self.animation.take().expect("an animation should be running");
        assert!(manager.animation_finished(token));
        self.pump(manager);
    }

    fn fire_timer(&mut self, manager: &mut MessageBarManager) -> Token {
        let token = *self.timers.iter().next().expect("a timer should be armed");
        self.timers.remove(&token);
        assert!(manager.timer_expired(token));
        self.pump(manager);
        token
    }

    /// Lets every queued message run its full cycle.
    fn run_until_idle(&mut self, manager: &mut MessageBarManager) {
        let mut steps = 0;
        while !manager.is_idle() {
            steps += 1;
            assert!(steps < 1_000, "scheduler did not settle");

            match manager.phase() {
                Phase::Entering | Phase::Exiting => self.finish_animation(manager),
                Phase::Visible if !self.timers.is_empty() => {
                    self.fire_timer(manager);
                }
                Phase::Visible => {
                    assert!(manager.tap());
                    self.pump(manager);
                }
                Phase::Idle => unreachable!(),
            }
        }
    }
}

fn manager_with(state: StatusBarState) -> MessageBarManager {
    MessageBarManager::new(Box::new(InMemoryStatusBar::new(state)))
}

type SetterCalls = Arc<Mutex<Vec<&'static str>>>;

/// Status bar that records which setters were called.
struct RecordingStatusBar {
    inner: InMemoryStatusBar,
    calls: SetterCalls,
}

impl StatusBar for RecordingStatusBar {
    fn state(&self) -> StatusBarState {
        self.inner.state()
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.calls.lock().expect("lock").push("hidden");
        self.inner.set_hidden(hidden);
    }

    fn set_style(&mut self, style: StatusBarStyle) {
        self.calls.lock().expect("lock").push("style");
        self.inner.set_style(style);
    }
}

fn recording_manager(state: StatusBarState) -> (MessageBarManager, SetterCalls) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let manager = MessageBarManager::new(Box::new(RecordingStatusBar {
        inner: InMemoryStatusBar::new(state),
        calls: Arc::clone(&calls),
    }));
    (manager, calls)
}

#[test]
fn back_to_back_shows_are_presented_in_order() {
    let mut manager = MessageBarManager::default();
    let mut host = Host::default();

    for title in ["A", "B", "C"] {
        manager.show(title, "", MessageType::Info);
    }
    host.pump(&mut manager);

    assert_eq!(manager.phase(), Phase::Entering);
    assert_eq!(manager.queued_count(), 2);

    host.run_until_idle(&mut manager);
    assert_eq!(host.presented, vec!["A", "B", "C"]);
    assert!(manager.is_idle());
}

#[test]
fn every_show_is_presented_exactly_once() {
    for count in 1..=12 {
        let mut manager = MessageBarManager::default();
        let mut host = Host::default();

        for i in 0..count {
            let kind = MessageType::ALL[i % MessageType::ALL.len()];
            let mut message = Message::new(format!("m{i}"), "", kind);
            if i % 4 == 0 {
                message = message.duration(0.0);
            }
            if i % 3 == 0 {
                message = message.display_location(DisplayLocation::Bottom);
            }
            manager.show_message(message);
        }
        host.pump(&mut manager);
        host.run_until_idle(&mut manager);

        let expected: Vec<String> = (0..count).map(|i| format!("m{i}")).collect();
        assert_eq!(host.presented, expected, "with {count} messages");
    }
}

#[test]
fn omitted_duration_arms_three_second_timer() {
    let mut manager = MessageBarManager::default();
    let mut host = Host::default();

    manager.show("A", "", MessageType::Success);
    host.pump(&mut manager);
    host.finish_animation(&mut manager);

    assert_eq!(host.armed, vec![Duration::from_secs(3)]);
    assert_eq!(MessageBarManager::DEFAULT_DURATION, 3.0);
}

#[test]
fn zero_duration_never_auto_dismisses() {
    let mut manager = MessageBarManager::default();
    let mut host = Host::default();

    manager.show_message(Message::info("Sticky", "").duration(0.0));
    host.pump(&mut manager);
    host.finish_animation(&mut manager);

    assert_eq!(manager.phase(), Phase::Visible);
    assert!(host.armed.is_empty());
}

#[test]
fn tap_fires_once_and_stale_timer_is_ignored() {
    let taps = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&taps);
    let mut manager = MessageBarManager::default();
    let mut host = Host::default();

    manager.show_message(Message::error("A", "").on_tap(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    host.pump(&mut manager);
    host.finish_animation(&mut manager);
    let timer = *host.timers.iter().next().expect("armed timer");

    assert!(manager.tap());
    host.pump(&mut manager);

    assert_eq!(taps.load(Ordering::SeqCst), 1);
    assert_eq!(manager.phase(), Phase::Exiting);
    assert!(host.timers.is_empty(), "tap should cancel the timer");

    // The environment delivers the expiry anyway
    assert!(!manager.timer_expired(timer));
    assert_eq!(manager.phase(), Phase::Exiting);
    assert!(!manager.tap());
    assert_eq!(taps.load(Ordering::SeqCst), 1);
}

#[test]
fn hide_all_while_visible_restores_status_bar() {
    let original = StatusBarState::new(false, StatusBarStyle::DarkContent);
    let mut manager = manager_with(original);
    let mut host = Host::default();

    manager.show_message(
        Message::info("A", "")
            .status_bar_hidden(true)
            .status_bar_style(StatusBarStyle::LightContent),
    );
    manager.show("B", "", MessageType::Info);
    manager.show("C", "", MessageType::Info);
    host.pump(&mut manager);
    host.finish_animation(&mut manager);
    assert_eq!(manager.phase(), Phase::Visible);
    assert!(manager.status_bar().state().hidden);

    manager.hide_all();
    host.pump(&mut manager);

    assert!(manager.is_idle());
    assert_eq!(manager.queued_count(), 0);
    assert!(host.timers.is_empty());
    assert_eq!(manager.status_bar().state(), original);
    assert_eq!(host.presented, vec!["A"]);
}

#[test]
fn hide_all_is_idempotent() {
    let original = StatusBarState::new(true, StatusBarStyle::Default);
    let (mut manager, calls) = recording_manager(original);
    let mut host = Host::default();

    manager.hide_all();
    assert!(manager.take_effects().is_empty());
    assert!(calls.lock().expect("lock").is_empty());

    manager.show_message(Message::success("A", "").status_bar_hidden(false));
    host.pump(&mut manager);
    manager.hide_all();
    host.pump(&mut manager);
    let after_first = manager.status_bar().state();

    calls.lock().expect("lock").clear();
    manager.hide_all();
    assert!(manager.take_effects().is_empty());
    assert!(calls.lock().expect("lock").is_empty());
    assert_eq!(manager.status_bar().state(), after_first);
    assert_eq!(after_first, original);
}

#[test]
fn animated_hide_all_exits_then_idles() {
    let original = StatusBarState::new(false, StatusBarStyle::DarkContent);
    let mut manager = manager_with(original);
    let mut host = Host::default();

    manager.show_message(Message::info("A", "").status_bar_hidden(true));
    manager.show("B", "", MessageType::Info);
    host.pump(&mut manager);
    host.finish_animation(&mut manager);
    assert!(manager.status_bar().state().hidden);

    manager.hide_all_animated(true);
    host.pump(&mut manager);
    assert_eq!(manager.phase(), Phase::Exiting);
    assert_eq!(manager.queued_count(), 0);

    // The status bar keeps the override until the exit slide completes
    assert!(manager.status_bar().state().hidden);

    host.finish_animation(&mut manager);
    assert!(manager.is_idle());
    assert_eq!(host.presented, vec!["A"]);
    assert_eq!(manager.status_bar().state(), original);
}

#[test]
fn status_bar_is_restored_after_queue_drains() {
    let original = StatusBarState::new(false, StatusBarStyle::Default);
    let mut manager = manager_with(original);
    let mut host = Host::default();

    manager.show_message(Message::info("A", "").status_bar_hidden(true));
    manager.show_message(Message::info("B", "").status_bar_style(StatusBarStyle::DarkContent));
    manager.show_message(
        Message::info("C", "")
            .status_bar_hidden(false)
            .status_bar_style(StatusBarStyle::LightContent),
    );
    host.pump(&mut manager);
    host.run_until_idle(&mut manager);

    assert_eq!(manager.status_bar().state(), original);
}

#[test]
fn overrides_only_touch_requested_fields() {
    let (mut manager, calls) = recording_manager(StatusBarState::default());
    let mut host = Host::default();

    manager.show("Plain", "", MessageType::Info);
    host.pump(&mut manager);
    host.finish_animation(&mut manager);
    assert!(calls.lock().expect("lock").is_empty());
    host.run_until_idle(&mut manager);

    calls.lock().expect("lock").clear();
    manager.show_message(Message::info("Styled", "").status_bar_style(StatusBarStyle::DarkContent));
    host.pump(&mut manager);
    assert_eq!(*calls.lock().expect("lock"), vec!["style"]);
    host.run_until_idle(&mut manager);

    assert_eq!(manager.status_bar().state(), StatusBarState::default());
}

#[test]
fn diagnostics_record_session_and_stale_callbacks() {
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let mut manager = MessageBarManager::default();
    manager.set_diagnostics(collector.handle());
    let mut host = Host::default();

    manager.show("A", "", MessageType::Error);
    host.pump(&mut manager);
    host.finish_animation(&mut manager);
    let timer = host.fire_timer(&mut manager);
    assert!(!manager.timer_expired(timer));
    host.run_until_idle(&mut manager);

    collector.process_pending();
    let kinds: Vec<DiagnosticEventKind> = collector.iter().map(|e| e.kind.clone()).collect();

    let has = |wanted: &dyn Fn(&DiagnosticEventKind) -> bool| kinds.iter().any(wanted);
    assert!(has(&|k| matches!(
        k,
        DiagnosticEventKind::Presentation {
            event: PresentationEvent::SessionStarted
        }
    )));
    assert!(has(&|k| matches!(
        k,
        DiagnosticEventKind::Presentation {
            event: PresentationEvent::AutoDismissed { .. }
        }
    )));
    assert!(has(&|k| matches!(
        k,
        DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::StaleCallback
    )));
    assert!(matches!(
        kinds.last(),
        Some(DiagnosticEventKind::Presentation {
            event: PresentationEvent::SessionEnded
        })
    ));
}

#[test]
fn configured_defaults_survive_a_round_trip() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    let config = Config {
        presentation: PresentationConfig {
            default_duration_secs: Some(1.5),
            animation_duration_ms: Some(100),
            display_location: Some(DisplayLocation::Bottom),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    let mut manager =
        MessageBarManager::from_config(&loaded, Box::new(InMemoryStatusBar::default()));
    let mut host = Host::default();

    manager.show("A", "", MessageType::Info);
    host.pump(&mut manager);
    assert_eq!(
        manager.active().map(|active| active.location()),
        Some(DisplayLocation::Bottom)
    );
    host.finish_animation(&mut manager);
    assert_eq!(host.armed, vec![Duration::from_millis(1500)]);
}
