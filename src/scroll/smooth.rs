use crate::foundation::math::clamp01;
use crate::scroll::trigger::ScrollDirection;

/// Options for [`SmoothScroller`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollOptions {
    /// Fraction of the remaining distance covered per tick (0.05 smooth, 0.2 snappy).
    pub ease: f64,
    /// Multiplier applied to wheel and touch deltas.
    pub speed: f64,
    /// Emit a skew proportional to the remaining distance.
    pub skew: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            ease: 0.1,
            speed: 1.0,
            skew: false,
        }
    }
}

/// State reported by each [`SmoothScroller::tick`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollFrame {
    /// Translation to apply to the scrolled content (negative of the smoothed offset).
    pub translate: f64,
    /// Skew in degrees, `0` when skew is disabled or the scroller has settled.
    pub skew: f64,
    /// Smoothed offset as a fraction of the scrollable length.
    pub progress: f64,
    /// Direction of the remaining movement.
    pub direction: ScrollDirection,
    /// `false` while another tick is needed.
    pub settled: bool,
}

/// Eased follower of a scroll target driven by wheel and touch input.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroller {
    opts: SmoothScrollOptions,
    max_scroll: f64,
    current: f64,
    target: f64,
    direction: ScrollDirection,
    touch_y: Option<f64>,
}

impl SmoothScroller {
    /// Remaining distance below which the scroller snaps and settles.
    pub const SETTLE_DISTANCE: f64 = 0.1;

    /// Scroller over `[0, max_scroll]`.
    pub fn new(opts: SmoothScrollOptions, max_scroll: f64) -> Self {
        Self {
            opts: SmoothScrollOptions {
                ease: opts.ease.clamp(1e-3, 1.0),
                ..opts
            },
            max_scroll: max_scroll.max(0.0),
            current: 0.0,
            target: 0.0,
            direction: ScrollDirection::Forward,
            touch_y: None,
        }
    }

    /// Update the scrollable length (content height minus viewport height).
    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
        self.target = self.target.clamp(0.0, self.max_scroll);
    }

    /// Wheel input.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.nudge(delta_y);
    }

    /// Touch start at viewport coordinate `y`.
    pub fn on_touch_start(&mut self, y: f64) {
        self.touch_y = Some(y);
    }

    /// Touch move to viewport coordinate `y`; dragging up scrolls forward.
    pub fn on_touch_move(&mut self, y: f64) {
        if let Some(prev) = self.touch_y {
            self.nudge(prev - y);
        }
        self.touch_y = Some(y);
    }

    /// Set an absolute target offset.
    pub fn scroll_to(&mut self, offset: f64) {
        if offset.is_finite() {
            self.target = offset.clamp(0.0, self.max_scroll);
        }
    }

    /// Current smoothed offset.
    pub fn offset(&self) -> f64 {
        self.current
    }

    /// Target offset.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> ScrollFrame {
        self.current += (self.target - self.current) * self.opts.ease;
        if let Some(d) = ScrollDirection::between(self.current, self.target) {
            self.direction = d;
        }

        let remaining = self.target - self.current;
        let settled = remaining.abs() <= Self::SETTLE_DISTANCE;
        if settled {
            self.current = self.target;
        }

        let progress = if self.max_scroll > 0.0 {
            clamp01(self.current / self.max_scroll)
        } else {
            0.0
        };
        ScrollFrame {
            translate: -self.current,
            skew: if self.opts.skew && !settled {
                remaining * 0.01
            } else {
                0.0
            },
            progress,
            direction: self.direction,
            settled,
        }
    }

    fn nudge(&mut self, delta: f64) {
        if delta.is_finite() {
            self.target = (self.target + delta * self.opts.speed).clamp(0.0, self.max_scroll);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
