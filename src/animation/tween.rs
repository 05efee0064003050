use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;

/// A single timed transition from one value to another.
///
/// Times are seconds on the owner's play-head, not wall-clock time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween<T> {
    /// Value before the tween starts.
    pub from: T,
    /// Value once the tween completes.
    pub to: T,
    /// Start time in seconds.
    pub delay: f64,
    /// Length in seconds; `0` jumps straight to `to`.
    pub duration: f64,
    /// Easing applied to the normalized progress.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Time at which the tween reaches `to`.
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }

    /// Linear progress in `[0, 1]` at `time`.
    pub fn progress(&self, time: f64) -> f64 {
        if time < self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        crate::foundation::math::clamp01((time - self.delay) / self.duration)
    }

    /// Return `true` once `time` has passed the start time.
    pub fn has_started(&self, time: f64) -> bool {
        time >= self.delay
    }

    /// Return `true` once `time` has reached the end time.
    pub fn is_complete(&self, time: f64) -> bool {
        time >= self.end_time()
    }

    /// Eased value at `time`.
    pub fn sample(&self, time: f64) -> T {
        let t = self.progress(time);
        if t <= 0.0 {
            return self.from.clone();
        }
        if t >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
