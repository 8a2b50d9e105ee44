//! A headless typewriter-style text reveal engine.
//!
//! Given a target string and an evolving stream of updates to it, this crate computes which
//! prefix of the text to show, animating a reveal cursor forward over time. It is built for
//! chat-style UIs where a message grows while it streams in:
//!
//! - appended text extends the running reveal smoothly
//! - replaced text restarts the reveal from the first char
//! - a `disabled` flag shows the full text immediately
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the latest text
//! - a frame timestamp (`now_ms`) on every tick
//!
//! and to draw whatever [`AnimatedText::visible`] returns.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod clock;
#[cfg(feature = "std")]
mod controller;
mod easing;
mod motion;
mod options;
mod reveal;
mod state;
pub mod text;
mod tween;


#[cfg(feature = "std")]
pub use clock::{Clock, ManualClock, SystemClock};
#[cfg(feature = "std")]
pub use controller::Controller;
pub use easing::Easing;
pub use motion::MotionValue;
pub use options::{DEFAULT_DURATION_MS, OnChangeCallback, RevealOptions};
pub use reveal::AnimatedText;
pub use state::RevealState;
pub use tween::Tween;
