use alloc::sync::Arc;

use crate::{AnimatedText, Easing};

/// Default reveal run length, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 500;

/// A callback fired when the reveal cursor moves.
///
/// The second argument is the new cursor (in chars).
pub type OnChangeCallback = Arc<dyn Fn(&AnimatedText, usize) + Send + Sync>;

/// Configuration for [`crate::AnimatedText`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct RevealOptions {
    /// Length of every reveal run, regardless of how many chars it has to cover.
    pub duration_ms: u64,
    pub easing: Easing,

    /// When set, [`crate::AnimatedText::visible`] returns the full text. The cursor keeps
    /// animating underneath so re-enabling picks up where the run is.
    pub disabled: bool,

    /// Optional callback fired from `tick` whenever the cursor moves.
    ///
    /// Hosts typically use it to request a re-render.
    pub on_change: Option<OnChangeCallback>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::Linear,
            disabled: false,
            on_change: None,
        }
    }
}

impl RevealOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&AnimatedText, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for RevealOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RevealOptions")
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
