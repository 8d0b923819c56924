use scene::focus::ViewTransform;

/// Duration of the focus/reset animation.
pub const FOCUS_TRANSITION_MS: f64 = 750.0;

/// Linear interpolation between two view transforms over a fixed duration.
///
/// The scene supplies only the start and end transforms; sampling at
/// elapsed time is the presentation loop's job. A new focus or reset
/// supersedes an in-flight transition (last-writer-wins): build the
/// replacement with `retarget` so it departs from the currently displayed
/// transform instead of jumping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    pub from: ViewTransform,
    pub to: ViewTransform,
    pub duration_ms: f64,
}

impl Transition {
    pub fn new(from: ViewTransform, to: ViewTransform, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    pub fn focus(from: ViewTransform, to: ViewTransform) -> Self {
        Self::new(from, to, FOCUS_TRANSITION_MS)
    }

    pub fn sample(&self, elapsed_ms: f64) -> ViewTransform {
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        ViewTransform::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
            self.from.k + (self.to.k - self.from.k) * t,
        )
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Supersedes this transition with a new target, starting from whatever
    /// is on screen at `elapsed_ms`.
    pub fn retarget(&self, elapsed_ms: f64, to: ViewTransform) -> Self {
        Self::focus(self.sample(elapsed_ms), to)
    }
}

#[cfg(test)]
mod tests {
    use super::{FOCUS_TRANSITION_MS, Transition};
    use scene::focus::ViewTransform;

    #[test]
    fn endpoints_and_midpoint() {
        let tr = Transition::focus(ViewTransform::identity(), ViewTransform::new(100.0, 50.0, 3.0));

        assert_eq!(tr.sample(0.0), ViewTransform::identity());
        assert_eq!(tr.sample(FOCUS_TRANSITION_MS), ViewTransform::new(100.0, 50.0, 3.0));

        let mid = tr.sample(FOCUS_TRANSITION_MS / 2.0);
        assert_eq!(mid, ViewTransform::new(50.0, 25.0, 2.0));
    }

    #[test]
    fn sample_clamps_past_the_end() {
        let tr = Transition::focus(ViewTransform::identity(), ViewTransform::new(10.0, 0.0, 2.0));
        assert_eq!(tr.sample(10_000.0), ViewTransform::new(10.0, 0.0, 2.0));
        assert_eq!(tr.sample(-5.0), ViewTransform::identity());
        assert!(tr.is_done(FOCUS_TRANSITION_MS));
        assert!(!tr.is_done(100.0));
    }

    #[test]
    fn retarget_departs_from_the_displayed_transform() {
        let tr = Transition::focus(ViewTransform::identity(), ViewTransform::new(100.0, 0.0, 3.0));
        let superseded = tr.retarget(FOCUS_TRANSITION_MS / 2.0, ViewTransform::identity());

        assert_eq!(superseded.from, ViewTransform::new(50.0, 0.0, 2.0));
        assert_eq!(superseded.to, ViewTransform::identity());
        assert_eq!(superseded.duration_ms, FOCUS_TRANSITION_MS);
    }
}
