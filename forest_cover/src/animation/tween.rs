use super::easing::{ease, Easing};

/// Scalar tween with a start delay. The start value is captured when the delay
/// runs out, so a tween queued behind another one continues from wherever the
/// first left off.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
    pub to: f32,
    pub easing: Easing,
    from: Option<f32>,
    elapsed: f32,
}

/// Result of advancing a tween by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// Still inside the delay; leave the value alone.
    Waiting,
    Running(f32),
    Finished(f32),
}

impl Tween {
    pub fn new(delay: f32, duration: f32, to: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            duration: duration.max(0.0),
            to,
            easing: Easing::default(),
            from: None,
            elapsed: 0.0,
        }
    }

    pub fn with_from(mut self, from: f32) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advances by `dt` seconds; `current` is the live value, used as the start
    /// value the first time the tween runs.
    pub fn advance(&mut self, dt: f32, current: f32) -> TweenStep {
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.delay {
            return TweenStep::Waiting;
        }
        let from = *self.from.get_or_insert(current);

        let t = if self.duration > 0.0 {
            (self.elapsed - self.delay) / self.duration
        } else {
            1.0
        };
        if t >= 1.0 {
            return TweenStep::Finished(self.to);
        }
        let k = ease(t, self.easing);
        TweenStep::Running(from + (self.to - from) * k)
    }
}
