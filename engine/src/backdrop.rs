//! Page background: an animated gradient, or a neutral fill while previewing.

use std::time::Duration;

/// One full back-and-forth sweep of the gradient.
pub const GRADIENT_PERIOD: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backdrop {
    /// `phase` is the position within [`GRADIENT_PERIOD`], in `[0, 1)`.
    Gradient { phase: f32 },
    Neutral,
}

impl Backdrop {
    #[must_use]
    pub fn resolve(previewing: bool, elapsed: Duration, reduced_motion: bool) -> Self {
        if previewing {
            return Backdrop::Neutral;
        }
        if reduced_motion {
            return Backdrop::Gradient { phase: 0.0 };
        }
        let period = GRADIENT_PERIOD.as_secs_f32();
        let phase = (elapsed.as_secs_f32() % period) / period;
        Backdrop::Gradient { phase }
    }

    /// Horizontal shift of the gradient in `[0, 1]`: sweeps out and back once per period.
    #[must_use]
    pub fn sweep(phase: f32) -> f32 {
        let phase = phase.clamp(0.0, 1.0);
        if phase < 0.5 {
            phase * 2.0
        } else {
            (1.0 - phase) * 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Backdrop, GRADIENT_PERIOD};
    use std::time::Duration;

    #[test]
    fn previewing_is_always_neutral() {
        assert_eq!(
            Backdrop::resolve(true, Duration::from_secs(3), false),
            Backdrop::Neutral
        );
        assert_eq!(
            Backdrop::resolve(true, Duration::ZERO, true),
            Backdrop::Neutral
        );
    }

    #[test]
    fn phase_wraps_each_period() {
        let half = Backdrop::resolve(false, GRADIENT_PERIOD / 2, false);
        assert!(matches!(half, Backdrop::Gradient { phase } if (phase - 0.5).abs() < 1e-3));

        let wrapped = Backdrop::resolve(false, GRADIENT_PERIOD + GRADIENT_PERIOD / 4, false);
        assert!(matches!(wrapped, Backdrop::Gradient { phase } if (phase - 0.25).abs() < 1e-3));
    }

    #[test]
    fn reduced_motion_freezes_gradient() {
        assert_eq!(
            Backdrop::resolve(false, Duration::from_secs(7), true),
            Backdrop::Gradient { phase: 0.0 }
        );
    }

    #[test]
    fn sweep_goes_out_and_back() {
        assert!(Backdrop::sweep(0.0).abs() < f32::EPSILON);
        assert!((Backdrop::sweep(0.5) - 1.0).abs() < f32::EPSILON);
        assert!((Backdrop::sweep(0.75) - 0.5).abs() < f32::EPSILON);
    }
}
