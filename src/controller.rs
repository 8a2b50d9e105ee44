use alloc::string::String;

use crate::{AnimatedText, Clock, RevealOptions, SystemClock};

/// A clock-bound wrapper around [`AnimatedText`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_text` whenever the source text changes (e.g. a streamed chunk arrives)
/// - `tick()` each frame/timer tick, re-rendering when it returns `Some`
#[derive(Clone, Debug)]
pub struct Controller<C = SystemClock> {
    reveal: AnimatedText,
    clock: C,
}

impl Controller<SystemClock> {
    pub fn new(text: impl Into<String>, options: RevealOptions) -> Self {
        Self::with_clock(text, options, SystemClock::new())
    }
}

impl<C: Clock> Controller<C> {
    pub fn with_clock(text: impl Into<String>, options: RevealOptions, clock: C) -> Self {
        let now_ms = clock.now_ms();
        Self {
            reveal: AnimatedText::new(text, options, now_ms),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn reveal(&self) -> &AnimatedText {
        &self.reveal
    }

    pub fn reveal_mut(&mut self) -> &mut AnimatedText {
        &mut self.reveal
    }

    pub fn into_reveal(self) -> AnimatedText {
        self.reveal
    }

    pub fn is_animating(&self) -> bool {
        self.reveal.is_animating()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.reveal.set_disabled(disabled);
    }

    /// Feeds the latest text and returns what to draw right now.
    pub fn on_text(&mut self, text: &str) -> &str {
        let now_ms = self.clock.now_ms();
        self.reveal.render(text, now_ms)
    }

    /// Advances the reveal.
    ///
    /// Returns the new visible text when the cursor moved, `None` otherwise.
    pub fn tick(&mut self) -> Option<&str> {
        let now_ms = self.clock.now_ms();
        if self.reveal.tick(now_ms) {
            Some(self.reveal.visible())
        } else {
            None
        }
    }

    pub fn visible(&self) -> &str {
        self.reveal.visible()
    }

    /// Shows the full text immediately (e.g. the user clicked the message).
    pub fn skip(&mut self) -> &str {
        self.reveal.complete();
        self.reveal.visible()
    }
}
