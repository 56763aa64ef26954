// SPDX-License-Identifier: MPL-2.0
//! Slide animation timing.
//!
//! A [`SlideAnimation`] turns an [`Effect::Animate`] into a time-based reveal
//! fraction. The view multiplies that fraction with the bar's full height to
//! clip it, which makes the bar appear to slide in from (or out to) its edge.
//!
//! [`Effect::Animate`]: crate::application::presentation::Effect::Animate

use crate::application::presentation::{Token, Transition};
use crate::domain::message::DisplayLocation;
use std::time::{Duration, Instant};

/// One running enter or exit slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    token: Token,
    transition: Transition,
    location: DisplayLocation,
    started_at: Instant,
    duration: Duration,
}

impl SlideAnimation {
    #[must_use]
    pub fn new(
        token: Token,
        transition: Transition,
        location: DisplayLocation,
        started_at: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            token,
            transition,
            location,
            started_at,
            duration,
        }
    }

    /// Token to report back once the animation is finished.
    #[must_use]
    pub fn token(&self) -> Token {
        self.token
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    #[must_use]
    pub fn location(&self) -> DisplayLocation {
        self.location
    }

    /// Linear progress in `0.0..=1.0`. Zero-length animations are always done.
    #[must_use]
    pub fn linear_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased (cubic ease-out) progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let t = self.linear_progress(now);
        1.0 - (1.0 - t).powi(3)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.linear_progress(now) >= 1.0
    }

    /// Fraction of the bar currently on screen.
    #[must_use]
    pub fn reveal(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        match self.transition {
            Transition::Enter => progress,
            Transition::Exit => 1.0 - progress,
        }
    }

    /// Height of the bar currently on screen, for a bar `full_height` tall.
    #[must_use]
    pub fn revealed_height(&self, full_height: f32, now: Instant) -> f32 {
        full_height * self.reveal(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::InMemoryStatusBar;
    use crate::application::presentation::{
        Effect, PresentationController, PresentationDefaults,
    };
    use crate::domain::message::Message;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn token() -> Token {
        let mut controller = PresentationController::new(
            Box::new(InMemoryStatusBar::default()),
            PresentationDefaults::default(),
        );
        controller.enqueue(Message::info("A", ""));
        match controller.take_effects().first() {
            Some(Effect::Animate { token, .. }) => *token,
            other => panic!("expected animate effect, got {other:?}"),
        }
    }

    fn slide(transition: Transition, duration: Duration) -> (SlideAnimation, Instant) {
        let start = Instant::now();
        (
            SlideAnimation::new(token(), transition, DisplayLocation::Top, start, duration),
            start,
        )
    }

    #[test]
    fn enter_reveals_from_zero_to_full() {
        let (anim, start) = slide(Transition::Enter, Duration::from_millis(200));

        assert_abs_diff_eq!(anim.reveal(start), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            anim.reveal(start + Duration::from_millis(200)),
            1.0,
            epsilon = F32_EPSILON
        );
        assert!(anim.is_finished(start + Duration::from_millis(200)));
    }

    #[test]
    fn exit_hides_from_full_to_zero() {
        let (anim, start) = slide(Transition::Exit, Duration::from_millis(200));

        assert_abs_diff_eq!(
            anim.revealed_height(80.0, start),
            80.0,
            epsilon = F32_EPSILON
        );
        assert_abs_diff_eq!(
            anim.revealed_height(80.0, start + Duration::from_secs(1)),
            0.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn easing_runs_ahead_of_linear_midway() {
        let (anim, start) = slide(Transition::Enter, Duration::from_millis(100));
        let midway = start + Duration::from_millis(50);

        assert_abs_diff_eq!(anim.linear_progress(midway), 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(anim.progress(midway), 0.875, epsilon = 1e-3);
        assert!(!anim.is_finished(midway));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let (anim, start) = slide(Transition::Enter, Duration::ZERO);

        assert!(anim.is_finished(start));
        assert_abs_diff_eq!(anim.reveal(start), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn time_before_start_clamps_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let anim = SlideAnimation::new(
            token(),
            Transition::Enter,
            DisplayLocation::Bottom,
            start,
            Duration::from_millis(100),
        );

        assert_abs_diff_eq!(anim.progress(Instant::now()), 0.0, epsilon = F32_EPSILON);
    }
}
