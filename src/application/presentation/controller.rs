// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle state machine.
//!
//! The [`PresentationController`] moves exactly one active message at a time
//! through `Entering → Visible → Exiting`, pulling the next one from the
//! [`MessageQueue`] when the previous exit completes.
//!
//! The controller never sleeps or animates. It records [`Effect`]s for the
//! host to carry out and expects to be told when they complete:
//!
//! | Effect | Host reports back with |
//! |--------|------------------------|
//! | [`Effect::Animate`] | [`PresentationController::animation_finished`] |
//! | [`Effect::ArmTimer`] | [`PresentationController::timer_expired`] |
//!
//! Every effect carries a [`Token`]. A fresh token is issued on each phase
//! change, so a completion that arrives after the controller has moved on
//! (a timer that fired after a tap, an entry animation overtaken by a
//! cancellation) no longer matches and is ignored.

use super::chrome::ChromeStateTracker;
use super::queue::MessageQueue;
use crate::application::port::StatusBar;
use crate::diagnostics::{DiagnosticsHandle, PresentationEvent, WarningEvent, WarningType};
use crate::domain::message::{DisplayDuration, DisplayLocation, Message, MessageId};
use std::time::Duration;

/// Lifecycle phase of the presentation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing on screen, queue empty.
    #[default]
    Idle,
    /// Slide-in animation running; taps are ignored.
    Entering,
    /// Fully shown; auto-dismiss timer (if any) running; taps accepted.
    Visible,
    /// Slide-out animation running; taps are ignored.
    Exiting,
}

impl Phase {
    /// Returns whether the controller may move from `self` to `next`.
    #[must_use]
    pub fn can_transition(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::Entering)
                | (Phase::Entering, Phase::Visible)
                | (Phase::Entering, Phase::Exiting)
                | (Phase::Entering, Phase::Idle)
                | (Phase::Visible, Phase::Exiting)
                | (Phase::Visible, Phase::Idle)
                | (Phase::Exiting, Phase::Entering)
                | (Phase::Exiting, Phase::Idle)
        )
    }

    /// Returns true if a message occupies the slot.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

/// Identifies one phase of one active message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    message: MessageId,
    generation: u64,
}

impl Token {
    /// The message this token belongs to.
    #[must_use]
    pub fn message(self) -> MessageId {
        self.message
    }

    /// Monotonic counter distinguishing successive phases.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Direction of a slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Enter,
    Exit,
}

/// Work the host must perform on the controller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start a slide animation from/to `location`; report completion with
    /// `animation_finished(token)`.
    Animate {
        token: Token,
        transition: Transition,
        location: DisplayLocation,
    },
    /// Schedule `timer_expired(token)` after `duration`.
    ArmTimer { token: Token, duration: Duration },
    /// The timer armed under `token` is no longer wanted.
    CancelTimer { token: Token },
    /// Stop rendering `message`; it is gone.
    Discard { message: MessageId },
}

/// Inputs the controller reacts to, for hosts that route messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    AnimationFinished(Token),
    TimerExpired(Token),
    Tapped,
    HideAll { animated: bool },
}

/// Defaults applied to messages that leave an option unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationDefaults {
    pub duration: DisplayDuration,
    pub location: DisplayLocation,
}

/// The message currently owning the presentation slot.
#[derive(Debug)]
pub struct ActiveMessage {
    message: Message,
    token: Token,
    location: DisplayLocation,
    duration: DisplayDuration,
    timer_armed: bool,
}

impl ActiveMessage {
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    #[must_use]
    pub fn token(&self) -> Token {
        self.token
    }

    /// Resolved edge (custom or default).
    #[must_use]
    pub fn location(&self) -> DisplayLocation {
        self.location
    }

    /// Resolved display duration (custom or default).
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn timer_armed(&self) -> bool {
        self.timer_armed
    }
}

/// Drives one message at a time through its presentation lifecycle.
#[derive(Debug)]
pub struct PresentationController {
    phase: Phase,
    active: Option<ActiveMessage>,
    queue: MessageQueue,
    chrome: ChromeStateTracker,
    defaults: PresentationDefaults,
    generation: u64,
    effects: Vec<Effect>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl PresentationController {
    /// Creates an idle controller over the given status bar.
    pub fn new(status_bar: Box<dyn StatusBar>, defaults: PresentationDefaults) -> Self {
        Self {
            phase: Phase::Idle,
            active: None,
            queue: MessageQueue::new(),
            chrome: ChromeStateTracker::new(status_bar),
            defaults,
            generation: 0,
            effects: Vec::new(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Replaces the defaults used for messages queued from now on.
    pub fn set_defaults(&mut self, defaults: PresentationDefaults) {
        self.defaults = defaults;
    }

    #[must_use]
    pub fn defaults(&self) -> PresentationDefaults {
        self.defaults
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Queues a message. Presents it right away when the slot is free.
    pub fn enqueue(&mut self, message: Message) {
        self.log(PresentationEvent::Queued {
            message: message.id().value(),
            message_type: message.kind(),
            pending: self.queue.len(),
        });

        self.queue.enqueue(message);
        if self.phase == Phase::Idle {
            self.present_next();
        }
    }

    /// Handles completion of the animation started under `token`.
    ///
    /// Returns `false` if the token is stale and the call was ignored.
    pub fn animation_finished(&mut self, token: Token) -> bool {
        if !self.is_current(token) {
            self.log_stale("animation", token);
            return false;
        }

        match self.phase {
            Phase::Entering => {
                self.become_visible();
                true
            }
            Phase::Exiting => {
                self.finish_exit();
                true
            }
            Phase::Idle | Phase::Visible => {
                self.log_stale("animation", token);
                false
            }
        }
    }

    /// Handles expiry of the timer armed under `token`.
    ///
    /// Returns `false` if the token is stale and the call was ignored.
    pub fn timer_expired(&mut self, token: Token) -> bool {
        let armed = self
            .active
            .as_ref()
            .is_some_and(|active| active.token == token && active.timer_armed);
        if self.phase != Phase::Visible || !armed {
            self.log_stale("timer", token);
            return false;
        }

        if let Some(active) = self.active.as_mut() {
            active.timer_armed = false;
            let message = active.message.id().value();
            self.log(PresentationEvent::AutoDismissed { message });
        }
        self.begin_exit();
        true
    }

    /// Handles a tap on the presented message.
    ///
    /// Only a `Visible` message reacts: its callback runs once, its timer is
    /// cancelled and it starts exiting. Returns whether the tap was accepted.
    pub fn tap(&mut self) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let callback = active.message.take_tap_callback();
        let message = active.message.id().value();
        self.log(PresentationEvent::Tapped {
            message,
            callback: callback.is_some(),
        });
        if let Some(callback) = callback {
            callback();
        }

        self.cancel_timer();
        self.begin_exit();
        true
    }

    /// Cancels everything: clears the queue and removes the active message.
    ///
    /// With `animated`, the active message slides out normally; otherwise it
    /// is discarded on the spot and the status bar is restored immediately.
    /// No-op while idle.
    pub fn hide_all(&mut self, animated: bool) {
        if self.phase == Phase::Idle {
            return;
        }

        self.cancel_timer();
        let discarded = self.queue.clear();
        self.log(PresentationEvent::Cancelled {
            animated,
            discarded,
        });

        if animated {
            match self.phase {
                Phase::Entering | Phase::Visible => self.begin_exit(),
                // Already on its way out; completes into an empty queue
                Phase::Exiting | Phase::Idle => {}
            }
        } else {
            if let Some(active) = self.active.take() {
                self.effects.push(Effect::Discard {
                    message: active.message.id(),
                });
            }
            self.end_session();
        }
    }

    /// Routes an [`Event`] to the matching input method.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::AnimationFinished(token) => {
                self.animation_finished(token);
            }
            Event::TimerExpired(token) => {
                self.timer_expired(token);
            }
            Event::Tapped => {
                self.tap();
            }
            Event::HideAll { animated } => self.hide_all(animated),
        }
    }

    /// Drains the effects recorded since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // =========================================================================
    // Observations
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveMessage> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn active_token(&self) -> Option<Token> {
        self.active.as_ref().map(ActiveMessage::token)
    }

    /// Number of messages waiting behind the active one.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn chrome(&self) -> &ChromeStateTracker {
        &self.chrome
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn present_next(&mut self) {
        let Some(message) = self.queue.dequeue_next() else {
            return;
        };

        if self.chrome.capture_if_absent() {
            self.log(PresentationEvent::SessionStarted);
        }
        self.chrome.apply_overrides(message.chrome_overrides());

        let location = message.location_or(self.defaults.location);
        let duration = message.duration_or(self.defaults.duration);
        let token = self.issue_token(message.id());

        self.log(PresentationEvent::Entering {
            message: message.id().value(),
            location,
        });
        self.active = Some(ActiveMessage {
            message,
            token,
            location,
            duration,
            timer_armed: false,
        });
        self.set_phase(Phase::Entering);
        self.effects.push(Effect::Animate {
            token,
            transition: Transition::Enter,
            location,
        });
    }

    fn become_visible(&mut self) {
        let Some(message_id) = self.active.as_ref().map(|a| a.message.id()) else {
            return;
        };
        let token = self.issue_token(message_id);
        self.set_phase(Phase::Visible);

        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.token = token;
        let auto_dismiss = active.duration.auto_dismiss_after();
        if let Some(duration) = auto_dismiss {
            active.timer_armed = true;
            self.effects.push(Effect::ArmTimer { token, duration });
        }
        self.log(PresentationEvent::Visible {
            message: message_id.value(),
            auto_dismiss_secs: auto_dismiss.map(|d| d.as_secs_f64()),
        });
    }

    fn begin_exit(&mut self) {
        let Some(message_id) = self.active.as_ref().map(|a| a.message.id()) else {
            return;
        };
        let token = self.issue_token(message_id);
        self.set_phase(Phase::Exiting);

        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.token = token;
        let location = active.location;
        self.effects.push(Effect::Animate {
            token,
            transition: Transition::Exit,
            location,
        });
    }

    fn finish_exit(&mut self) {
        if let Some(active) = self.active.take() {
            let message = active.message.id();
            self.log(PresentationEvent::Exited {
                message: message.value(),
            });
            self.effects.push(Effect::Discard { message });
        }

        if self.queue.is_empty() {
            self.end_session();
        } else {
            self.present_next();
        }
    }

    fn end_session(&mut self) {
        self.chrome.restore_and_clear();
        self.set_phase(Phase::Idle);
        self.log(PresentationEvent::SessionEnded);
    }

    fn cancel_timer(&mut self) {
        if let Some(active) = self.active.as_mut() {
            if active.timer_armed {
                active.timer_armed = false;
                self.effects.push(Effect::CancelTimer {
                    token: active.token,
                });
            }
        }
    }

    fn set_phase(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_transition(next),
            "invalid transition {:?} -> {:?}",
            self.phase,
            next
        );
        self.phase = next;
    }

    fn issue_token(&mut self, message: MessageId) -> Token {
        self.generation += 1;
        Token {
            message,
            generation: self.generation,
        }
    }

    fn is_current(&self, token: Token) -> bool {
        self.active_token() == Some(token)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    fn log(&self, event: PresentationEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_presentation(event);
        }
    }

    fn log_stale(&self, source: &str, token: Token) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(WarningEvent::new(
                WarningType::StaleCallback,
                format!(
                    "ignored {source} callback for message {} (generation {})",
                    token.message(),
                    token.generation()
                ),
            ));
        }
    }
}
