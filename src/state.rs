/// A lightweight, serializable snapshot of a reveal.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// debugging overlays and logging, not for restoring a reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealState {
    /// Chars currently shown.
    pub cursor: usize,
    /// Total chars in the target text.
    pub len: usize,
    /// The driver value the cursor is derived from.
    pub driver: f32,
    pub continuation: bool,
    pub animating: bool,
    pub disabled: bool,
}
