// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while a slide animation is running (~60 fps).
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick interval otherwise, enough to drain diagnostics.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Creates the periodic tick subscription.
///
/// Ticks fast only while something is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    let interval = if animating { ANIMATION_TICK } else { IDLE_TICK };
    time::every(interval).map(Message::Tick)
}
