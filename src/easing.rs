/// Easing curve applied to the normalized time of a [`crate::Tween`].
///
/// The reveal uses [`Easing::Linear`] by default so characters appear at a constant rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Maps `t` in `0.0..=1.0` to eased progress. Inputs outside that range are clamped.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
