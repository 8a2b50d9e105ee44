use alloc::string::String;

use crate::text::{char_len, is_continuation, prefix_chars};
use crate::{MotionValue, RevealOptions, RevealState};

/// Identity of an animation run. A new run starts exactly when this changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RunKey {
    continuation: bool,
    len: usize,
    generation: u64,
}

/// A headless typewriter reveal for one piece of text.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects and never reads the clock.
/// - Your adapter feeds it the latest text via [`AnimatedText::update`] and drives it with
///   [`AnimatedText::tick`] once per frame.
/// - Rendering reads [`AnimatedText::visible`], a prefix of the text on a char boundary.
///
/// When the text grows by appending (a streamed chat message, for example) the reveal keeps
/// going from where it is. Any other change restarts the reveal from the first char.
#[derive(Clone, Debug)]
pub struct AnimatedText {
    options: RevealOptions,
    text: String,
    len: usize,
    driver: MotionValue,
    cursor: usize,
    continuation: bool,
    generation: u64,
    run: Option<RunKey>,
}

impl AnimatedText {
    /// Creates a reveal for `text` and starts animating it from the first char at `now_ms`.
    pub fn new(text: impl Into<String>, options: RevealOptions, now_ms: u64) -> Self {
        let text = text.into();
        let len = char_len(&text);
        warn_on_zero_duration(&options);
        tdebug!(
            len,
            duration_ms = options.duration_ms,
            disabled = options.disabled,
            "AnimatedText::new"
        );
        let mut t = Self {
            options,
            text,
            len,
            driver: MotionValue::new(0.0),
            cursor: 0,
            continuation: true,
            generation: 0,
            run: None,
        };
        t.sync_run(now_ms);
        t
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Replaces the options. Duration and easing apply from the next run on.
    pub fn set_options(&mut self, options: RevealOptions) {
        warn_on_zero_duration(&options);
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RevealOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&AnimatedText, usize) + Send + Sync + 'static>,
    ) {
        self.options = self.options.clone().with_on_change(on_change);
    }

    /// Feeds the latest text.
    ///
    /// - Identical text is a no-op.
    /// - Text that starts with the previous text extends the current run: the cursor keeps
    ///   moving forward from its current position toward the new end.
    /// - Anything else freezes the driver at the current cursor, snaps it to zero and starts a
    ///   fresh run. Both happen here, before the new run begins.
    ///
    /// Returns `true` when a new run was started.
    pub fn update(&mut self, text: &str, now_ms: u64) -> bool {
        if self.text == text {
            return false;
        }

        let continuation = is_continuation(&self.text, text);
        self.text.clear();
        self.text.push_str(text);
        self.len = char_len(text);
        self.continuation = continuation;

        if !continuation {
            // Cancels the in-flight run at what is on screen; `sync_run` then snaps to zero.
            self.driver.jump(self.cursor as f32);
            self.generation = self.generation.wrapping_add(1);
            tdebug!(
                frozen_at = self.cursor,
                len = self.len,
                "AnimatedText::update: text replaced"
            );
        }

        self.sync_run(now_ms)
    }

    /// Advances the current run to `now_ms`.
    ///
    /// Returns `true` (and fires `on_change`) when the cursor moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.driver.is_animating() {
            return false;
        }
        let value = self.driver.tick(now_ms);
        if !self.driver.is_animating() {
            ttrace!(len = self.len, "AnimatedText::tick: run finished");
            // `len as f32` rounds for texts past 2^24 chars; a finished run always shows all.
            return self.set_cursor(self.len);
        }
        self.set_cursor(floor_cursor(value, self.len))
    }

    /// `update` + `tick` + `visible` in one call, for hosts that re-render every frame with the
    /// latest text. The `disabled` flag is whatever `set_disabled`/the options last set.
    pub fn render(&mut self, text: &str, now_ms: u64) -> &str {
        self.update(text, now_ms);
        self.tick(now_ms);
        self.visible()
    }

    /// Like [`AnimatedText::render`], taking the `disabled` flag on every call.
    pub fn render_with(&mut self, text: &str, disabled: bool, now_ms: u64) -> &str {
        self.set_disabled(disabled);
        self.render(text, now_ms)
    }

    /// The text to draw: the full text when disabled, otherwise the first `cursor` chars.
    pub fn visible(&self) -> &str {
        if self.options.disabled {
            return &self.text;
        }
        prefix_chars(&self.text, self.cursor)
    }

    /// Skips the rest of the current run and shows the full text.
    pub fn complete(&mut self) {
        self.driver.jump(self.len as f32);
        self.set_cursor(self.len);
    }

    /// Discards all reveal state and starts over as if freshly created with `text`.
    pub fn reset(&mut self, text: impl Into<String>, now_ms: u64) {
        *self = Self::new(text, self.options.clone(), now_ms);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in chars.
    pub fn len_chars(&self) -> usize {
        self.len
    }

    /// Number of chars currently revealed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn driver_value(&self) -> f32 {
        self.driver.get()
    }

    pub fn driver(&self) -> &MotionValue {
        &self.driver
    }

    /// Whether the last text change was an append to the previous text.
    pub fn is_continuation(&self) -> bool {
        self.continuation
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.len
    }

    /// Revealed fraction in `0.0..=1.0`. Empty text counts as fully revealed.
    pub fn progress(&self) -> f32 {
        if self.len == 0 {
            return 1.0;
        }
        (self.cursor as f32 / self.len as f32).min(1.0)
    }

    pub fn state(&self) -> RevealState {
        RevealState {
            cursor: self.cursor,
            len: self.len,
            driver: self.driver.get(),
            continuation: self.continuation,
            animating: self.driver.is_animating(),
            disabled: self.options.disabled,
        }
    }

    fn sync_run(&mut self, now_ms: u64) -> bool {
        let key = RunKey {
            continuation: self.continuation,
            len: self.len,
            generation: self.generation,
        };
        if self.run == Some(key) {
            return false;
        }
        self.run = Some(key);

        if !self.continuation {
            self.driver.jump(0.0);
            self.set_cursor(0);
        }
        ttrace!(
            from = self.driver.get(),
            to = self.len,
            continuation = self.continuation,
            "AnimatedText: starting run"
        );
        self.driver.animate_to(
            self.len as f32,
            now_ms,
            self.options.duration_ms,
            self.options.easing,
        );
        true
    }

    fn set_cursor(&mut self, cursor: usize) -> bool {
        if cursor == self.cursor {
            return false;
        }
        self.cursor = cursor;
        if let Some(cb) = &self.options.on_change {
            cb(self, cursor);
        }
        true
    }
}

fn floor_cursor(value: f32, len: usize) -> usize {
    // `as` saturates: negatives and NaN become 0.
    (value as usize).min(len)
}

fn warn_on_zero_duration(options: &RevealOptions) {
    if options.duration_ms == 0 {
        twarn!("RevealOptions: duration_ms = 0 is treated as 1ms");
    }
}
