use crate::{Easing, Tween};

/// An animatable scalar, driven by an adapter-provided clock.
///
/// This is the "driver" behind a reveal: it holds the current value plus at most one in-flight
/// [`Tween`]. Starting a new animation replaces (cancels) the previous one in place.
///
/// Nothing here reads wall-clock time. Adapters call [`MotionValue::tick`] with their frame
/// timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionValue {
    value: f32,
    tween: Option<Tween>,
}

impl MotionValue {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    /// The value as of the last `tick`/`jump`/`set`/`stop`.
    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Overwrites the value without touching an in-flight animation.
    ///
    /// A running tween keeps its own `from`/`to`, so the next `tick` overrides this value.
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Sets the value and cancels any in-flight animation.
    pub fn jump(&mut self, value: f32) {
        self.tween = None;
        self.value = value;
    }

    /// Cancels the in-flight animation, leaving the value where it had got to at `now_ms`.
    ///
    /// The value is not forced to the tween's target.
    pub fn stop(&mut self, now_ms: u64) {
        if let Some(tween) = self.tween.take() {
            self.value = tween.sample(now_ms);
        }
    }

    /// Starts animating from the current value to `to`.
    ///
    /// If an animation is already running it is stopped at `now_ms` first, so the new run
    /// continues from wherever the old one was.
    pub fn animate_to(&mut self, to: f32, now_ms: u64, duration_ms: u64, easing: Easing) {
        self.stop(now_ms);
        self.tween = Some(Tween::new(self.value, to, now_ms, duration_ms, easing));
    }

    /// Advances the animation to `now_ms` and returns the new value.
    ///
    /// When the tween has finished, the value lands exactly on its target and the tween is
    /// dropped.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        if let Some(tween) = self.tween {
            self.value = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
            }
        }
        self.value
    }
}
