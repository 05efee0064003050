use smallvec::SmallVec;

use crate::foundation::math::clamp01;

/// Direction of the most recent scroll movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScrollDirection {
    /// Toward the end of the page.
    #[default]
    Forward,
    /// Toward the top of the page.
    Backward,
}

impl ScrollDirection {
    /// Direction of movement from `prev` to `next`; `None` when nothing moved.
    pub fn between(prev: f64, next: f64) -> Option<Self> {
        if next > prev {
            Some(Self::Forward)
        } else if next < prev {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Maps an absolute scroll offset onto `[0, 1]` between two offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    /// Offset where progress is `0`.
    pub start: f64,
    /// Offset where progress is `1`.
    pub end: f64,
}

impl ScrollRange {
    /// Clamped progress at scroll offset `pos`.
    ///
    /// An empty or inverted range acts as a step at `start`.
    pub fn progress(&self, pos: f64) -> f64 {
        let len = self.end - self.start;
        if len <= 0.0 || !len.is_finite() {
            return if pos >= self.start { 1.0 } else { 0.0 };
        }
        clamp01((pos - self.start) / len)
    }
}

/// Crossing reported by [`TriggerRegion::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TriggerEvent {
    /// Entered through `start` while scrolling forward.
    Enter,
    /// Left through `end` while scrolling forward.
    Leave,
    /// Entered through `end` while scrolling backward.
    EnterBack,
    /// Left through `start` while scrolling backward.
    LeaveBack,
}

impl TriggerEvent {
    /// Return `true` for both entering events.
    pub fn is_enter(self) -> bool {
        matches!(self, Self::Enter | Self::EnterBack)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Before,
    Inside,
    After,
}

/// Active band `[start, end]` over page progress, with edge detection.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerRegion {
    start: f64,
    end: f64,
    side: Option<Side>,
}

impl TriggerRegion {
    /// Region active for progress in `[start, end]` (swapped if given in reverse).
    pub fn new(start: f64, end: f64) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            start,
            end,
            side: None,
        }
    }

    /// Start threshold.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End threshold.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Return `true` while the last observed progress was inside the region.
    pub fn is_active(&self) -> bool {
        self.side == Some(Side::Inside)
    }

    /// Observe progress `p` and report every threshold crossed since the last observation.
    ///
    /// The first observation is treated as arriving from before the region when scrolling
    /// forward and from after it when scrolling backward. Jumping over the whole region reports
    /// both crossings in order. NaN is ignored.
    pub fn update(&mut self, p: f64, direction: ScrollDirection) -> SmallVec<[TriggerEvent; 2]> {
        let mut events = SmallVec::new();
        if p.is_nan() {
            return events;
        }
        let next = self.classify(p);
        let prev = self.side.unwrap_or(match direction {
            ScrollDirection::Forward => Side::Before,
            ScrollDirection::Backward => Side::After,
        });
        self.side = Some(next);

        use TriggerEvent::*;
        match (prev, next) {
            (Side::Before, Side::Inside) => events.push(Enter),
            (Side::Before, Side::After) => events.extend([Enter, Leave]),
            (Side::Inside, Side::After) => events.push(Leave),
            (Side::Inside, Side::Before) => events.push(LeaveBack),
            (Side::After, Side::Inside) => events.push(EnterBack),
            (Side::After, Side::Before) => events.extend([EnterBack, LeaveBack]),
            _ => {}
        }
        events
    }

    /// Forget the last observation.
    pub fn reset(&mut self) {
        self.side = None;
    }

    fn classify(&self, p: f64) -> Side {
        if p < self.start {
            Side::Before
        } else if p > self.end {
            Side::After
        } else {
            Side::Inside
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
