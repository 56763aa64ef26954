// SPDX-License-Identifier: MPL-2.0
//! Public entry point for showing message bars.
//!
//! [`MessageBarManager`] wraps the [`PresentationController`] with the
//! convenience API callers use (`show`, `hide_all`), the default-duration
//! policy, and the replaceable [`StyleProvider`].

use crate::application::port::{InMemoryStatusBar, StatusBar};
use crate::application::presentation::{
    ActiveMessage, Effect, Event, Phase, PresentationController, PresentationDefaults, Token,
};
use crate::config::Config;
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::message::{DisplayDuration, DisplayLocation, Message, MessageType};
use crate::ui::style::{DefaultStyleProvider, ResolvedStyle, StyleProvider};

/// Queues messages and presents them one at a time.
///
/// The manager never sleeps or draws. After every call, drain
/// [`take_effects`](Self::take_effects) and carry the effects out, reporting
/// back through [`animation_finished`](Self::animation_finished),
/// [`timer_expired`](Self::timer_expired) and [`tap`](Self::tap).
///
/// # Example
///
/// ```
/// use message_bar::application::presentation::{Effect, Phase};
/// use message_bar::domain::message::MessageType;
/// use message_bar::MessageBarManager;
///
/// let mut manager = MessageBarManager::default();
/// manager.show("Offline", "Retrying in 5 s", MessageType::Error);
///
/// let Some(Effect::Animate { token, .. }) = manager.take_effects().pop() else {
///     panic!("expected an entry animation");
/// };
/// manager.animation_finished(token);
/// assert_eq!(manager.phase(), Phase::Visible);
/// ```
pub struct MessageBarManager {
    controller: PresentationController,
    style_provider: Box<dyn StyleProvider>,
}

impl MessageBarManager {
    /// Duration used for messages that omit one, in seconds.
    pub const DEFAULT_DURATION: f64 = 3.0;

    /// Creates a manager over the given status bar with built-in defaults.
    pub fn new(status_bar: Box<dyn StatusBar>) -> Self {
        Self {
            controller: PresentationController::new(
                status_bar,
                PresentationDefaults {
                    duration: DisplayDuration::from_secs_f64(Self::DEFAULT_DURATION),
                    location: DisplayLocation::Top,
                },
            ),
            style_provider: Box::new(DefaultStyleProvider),
        }
    }

    /// Creates a manager using the `[presentation]` defaults from `config`.
    pub fn from_config(config: &Config, status_bar: Box<dyn StatusBar>) -> Self {
        let mut manager = Self::new(status_bar);
        manager.controller.set_defaults(PresentationDefaults {
            duration: DisplayDuration::from_secs_f64(config.presentation.default_duration()),
            location: config.presentation.display_location.unwrap_or_default(),
        });
        manager
    }

    /// Sets the diagnostics handle used for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.controller.set_diagnostics(handle);
    }

    /// Default display duration in seconds.
    #[must_use]
    pub fn default_duration(&self) -> f64 {
        self.controller.defaults().duration.as_secs_f64()
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Shows a message with default options.
    pub fn show(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: MessageType,
    ) {
        self.show_message(Message::new(title, description, kind));
    }

    /// Shows a fully configured message.
    pub fn show_message(&mut self, message: Message) {
        self.controller.enqueue(message);
    }

    /// Removes every message at once, without animation.
    pub fn hide_all(&mut self) {
        self.hide_all_animated(false);
    }

    /// Removes every message; the visible one slides out if `animated`.
    pub fn hide_all_animated(&mut self, animated: bool) {
        self.controller.hide_all(animated);
    }

    // =========================================================================
    // Host callbacks
    // =========================================================================

    /// Reports a tap on the presented bar. Returns whether it was accepted.
    pub fn tap(&mut self) -> bool {
        self.controller.tap()
    }

    /// Reports the end of an animation. Returns `false` for stale tokens.
    pub fn animation_finished(&mut self, token: Token) -> bool {
        self.controller.animation_finished(token)
    }

    /// Reports an expired timer. Returns `false` for stale tokens.
    pub fn timer_expired(&mut self, token: Token) -> bool {
        self.controller.timer_expired(token)
    }

    pub fn handle_event(&mut self, event: Event) {
        self.controller.handle_event(event);
    }

    /// Drains pending effects for the host to execute.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.controller.take_effects()
    }

    // =========================================================================
    // Styling
    // =========================================================================

    #[must_use]
    pub fn style_provider(&self) -> &dyn StyleProvider {
        self.style_provider.as_ref()
    }

    /// Replaces the style provider. Applies to the next render.
    pub fn set_style_provider(&mut self, provider: Box<dyn StyleProvider>) {
        self.style_provider = provider;
    }

    /// Resolves the style for `kind` with font fallbacks applied.
    #[must_use]
    pub fn resolved_style(&self, kind: MessageType) -> ResolvedStyle {
        ResolvedStyle::resolve(self.style_provider.as_ref(), kind)
    }

    // =========================================================================
    // Observations
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.controller.is_idle()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveMessage> {
        self.controller.active()
    }

    #[must_use]
    pub fn active_token(&self) -> Option<Token> {
        self.controller.active_token()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.controller.queued_count()
    }

    /// The ambient status bar, as currently shown.
    #[must_use]
    pub fn status_bar(&self) -> &dyn StatusBar {
        self.controller.chrome().status_bar()
    }

    #[must_use]
    pub fn controller(&self) -> &PresentationController {
        &self.controller
    }
}

impl Default for MessageBarManager {
    fn default() -> Self {
        Self::new(Box::new(InMemoryStatusBar::default()))
    }
}

impl std::fmt::Debug for MessageBarManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBarManager")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresentationConfig;
    use crate::test_utils::assert_relative_eq;
    use crate::ui::design_tokens::palette;
    use iced::widget::svg;
    use iced::Color;

    struct Monochrome;

    impl StyleProvider for Monochrome {
        fn background_color(&self, _kind: MessageType) -> Color {
            palette::BLACK
        }

        fn stroke_color(&self, _kind: MessageType) -> Color {
            palette::WHITE
        }

        fn icon(&self, kind: MessageType) -> svg::Handle {
            crate::ui::icons::for_type(kind)
        }
    }

    #[test]
    fn show_uses_default_duration() {
        let mut manager = MessageBarManager::default();
        manager.show("A", "", MessageType::Info);

        let active = manager.active().expect("active message");
        assert_eq!(active.duration(), DisplayDuration::DEFAULT);
        assert_relative_eq!(
            manager.default_duration(),
            MessageBarManager::DEFAULT_DURATION
        );
    }

    #[test]
    fn from_config_applies_presentation_defaults() {
        let config = Config {
            presentation: PresentationConfig {
                default_duration_secs: Some(6.5),
                animation_duration_ms: None,
                display_location: Some(DisplayLocation::Bottom),
            },
            ..Config::default()
        };
        let mut manager =
            MessageBarManager::from_config(&config, Box::new(InMemoryStatusBar::default()));
        manager.show("A", "", MessageType::Success);

        let active = manager.active().expect("active message");
        assert_eq!(active.location(), DisplayLocation::Bottom);
        assert_eq!(active.duration(), DisplayDuration::from_secs_f64(6.5));
    }

    #[test]
    fn hide_all_is_unanimated() {
        let mut manager = MessageBarManager::default();
        manager.show("A", "", MessageType::Info);
        manager.show("B", "", MessageType::Info);

        manager.hide_all();
        assert!(manager.is_idle());
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn style_provider_is_replaceable() {
        let mut manager = MessageBarManager::default();
        assert_ne!(
            manager.resolved_style(MessageType::Error).background,
            palette::BLACK
        );

        manager.set_style_provider(Box::new(Monochrome));
        let style = manager.resolved_style(MessageType::Error);
        assert_eq!(style.background, palette::BLACK);
        assert_eq!(style.stroke, palette::WHITE);
    }
}
