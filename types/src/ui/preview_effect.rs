//! Entry animation for the preview panel.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEffectKind {
    /// Rises a few rows into place while it settles.
    SlideUp,
}

#[derive(Debug, Clone)]
pub struct PreviewEffect {
    kind: PreviewEffectKind,
    timer: EffectTimer,
}

impl PreviewEffect {
    #[must_use]
    pub fn slide_up(duration: Duration) -> Self {
        Self {
            kind: PreviewEffectKind::SlideUp,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn kind(&self) -> PreviewEffectKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, PreviewEffect, PreviewEffectKind};
    use std::time::Duration;

    #[test]
    fn slide_up_initial_state() {
        let effect = PreviewEffect::slide_up(Duration::from_millis(300));
        assert_eq!(effect.kind(), PreviewEffectKind::SlideUp);
        assert!(matches!(effect.phase(), AnimPhase::Running { progress } if progress < 0.1));
    }

    #[test]
    fn completed_and_clamped() {
        let mut effect = PreviewEffect::slide_up(Duration::from_millis(10));
        effect.advance(Duration::from_millis(50));
        assert!(matches!(effect.phase(), AnimPhase::Completed));
        assert!((effect.progress() - 1.0).abs() < f32::EPSILON);
    }
}
