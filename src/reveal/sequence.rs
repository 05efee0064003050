use crate::animation::tween::Tween;
use crate::foundation::core::TargetId;
use crate::reveal::entry::{RevealEntry, sanitize_secs};
use crate::reveal::state::RevealState;
use crate::scroll::trigger::{ScrollDirection, TriggerEvent, TriggerRegion};

/// Receiver of reveal states, implemented by the host view layer.
pub trait RevealHost {
    /// Apply `state` to `target`. Return `false` when the target is not attached; the sequence
    /// skips it for this call.
    fn set_state(&mut self, target: &TargetId, state: &RevealState) -> bool;
}

impl RevealHost for std::collections::BTreeMap<TargetId, RevealState> {
    fn set_state(&mut self, target: &TargetId, state: &RevealState) -> bool {
        match self.get_mut(target) {
            Some(slot) => {
                *slot = *state;
                true
            }
            None => false,
        }
    }
}

/// What a sequence does when the scroll position leaves its trigger region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaveAction {
    /// Keep the current play-head.
    #[default]
    None,
    /// Play backward to the start.
    Reverse,
    /// Jump back to the start and stop.
    Reset,
}

/// Lifecycle notifications returned by [`RevealSequence::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SequenceEvent {
    /// First advance after a (re)start.
    Started,
    /// Entry `i` reached its start offset.
    EntryStarted(usize),
    /// Entry `i` reached its end offset.
    EntryCompleted(usize),
    /// The play-head reached the end while playing forward.
    Completed,
    /// The play-head returned to `0` while reversing.
    ReverseCompleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Stopped,
    Forward,
    Reverse,
}

/// Staggered element reveals sharing one play-head, restarted by a scroll trigger.
#[derive(Clone, Debug)]
pub struct RevealSequence {
    entries: Vec<RevealEntry>,
    trigger: TriggerRegion,
    on_leave: LeaveAction,
    on_leave_back: LeaveAction,
    total: f64,
    playhead: f64,
    playback: Playback,
    pending_start: bool,
    started: Vec<bool>,
    completed: Vec<bool>,
}

impl RevealSequence {
    /// Build a sequence; entries are ordered by ascending start offset (stable for ties).
    pub fn new(mut entries: Vec<RevealEntry>, trigger: TriggerRegion) -> Self {
        for e in &mut entries {
            e.start_offset = sanitize_secs(e.start_offset);
            e.duration = sanitize_secs(e.duration);
        }
        entries.sort_by(|a, b| a.start_offset.total_cmp(&b.start_offset));
        let total = entries
            .iter()
            .map(RevealEntry::end_offset)
            .fold(0.0, f64::max);
        let n = entries.len();
        Self {
            entries,
            trigger,
            on_leave: LeaveAction::None,
            on_leave_back: LeaveAction::None,
            total,
            playhead: 0.0,
            playback: Playback::Stopped,
            pending_start: false,
            started: vec![false; n],
            completed: vec![false; n],
        }
    }

    /// Build with staggered offsets: entry `i` starts at
    /// `global_delay + stagger * i + entry.start_offset`, `i` being its position in `entries`.
    pub fn staggered(
        mut entries: Vec<RevealEntry>,
        stagger: f64,
        global_delay: f64,
        trigger: TriggerRegion,
    ) -> Self {
        let stagger = sanitize_secs(stagger);
        let global_delay = sanitize_secs(global_delay);
        for (i, e) in entries.iter_mut().enumerate() {
            e.start_offset = global_delay + stagger * i as f64 + sanitize_secs(e.start_offset);
        }
        Self::new(entries, trigger)
    }

    /// Configure what leaving the region does, in each direction.
    pub fn with_leave_actions(mut self, on_leave: LeaveAction, on_leave_back: LeaveAction) -> Self {
        self.on_leave = on_leave;
        self.on_leave_back = on_leave_back;
        self
    }

    /// Entries in start order.
    pub fn entries(&self) -> &[RevealEntry] {
        &self.entries
    }

    /// Seconds from start until the last entry completes.
    pub fn total_duration(&self) -> f64 {
        self.total
    }

    /// Current play-head in seconds.
    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    /// Return `true` while the play-head is moving (either direction).
    pub fn is_playing(&self) -> bool {
        self.playback != Playback::Stopped
    }

    /// Trigger dispatch for a new scroll progress.
    ///
    /// Entering the region (either direction) restarts the sequence unless it is already
    /// playing. Returns `true` when a restart happened.
    pub fn on_scroll_progress(&mut self, p: f64, direction: ScrollDirection) -> bool {
        let mut restarted = false;
        for event in self.trigger.update(p, direction) {
            match event {
                TriggerEvent::Enter | TriggerEvent::EnterBack => restarted |= self.play(),
                TriggerEvent::Leave => self.leave(self.on_leave),
                TriggerEvent::LeaveBack => self.leave(self.on_leave_back),
            }
        }
        restarted
    }

    /// Restart from the beginning unless already playing. Returns `true` on restart.
    pub fn play(&mut self) -> bool {
        if self.is_playing() {
            tracing::trace!(playhead = self.playhead, "reveal already playing");
            return false;
        }
        self.rewind();
        self.playback = Playback::Forward;
        self.pending_start = true;
        tracing::debug!(entries = self.entries.len(), "reveal sequence restarted");
        true
    }

    /// Freeze the play-head.
    pub fn pause(&mut self) {
        self.playback = Playback::Stopped;
        self.pending_start = false;
    }

    /// Play backward from the current play-head.
    pub fn reverse(&mut self) {
        if self.playhead > 0.0 {
            self.playback = Playback::Reverse;
            self.pending_start = false;
        }
    }

    /// Jump to the end state and stop.
    pub fn skip_to_end(&mut self) {
        self.playhead = self.total;
        self.playback = Playback::Stopped;
        self.pending_start = false;
        self.started.fill(true);
        self.completed.fill(true);
    }

    /// Jump to the start state and stop.
    pub fn reset(&mut self) {
        self.rewind();
        self.playback = Playback::Stopped;
        self.pending_start = false;
    }

    /// Move the play-head by `dt` seconds and report what happened.
    pub fn advance(&mut self, dt: f64) -> Vec<SequenceEvent> {
        let mut events = Vec::new();
        let dt = sanitize_secs(dt);
        match self.playback {
            Playback::Stopped => {}
            Playback::Forward => {
                if std::mem::take(&mut self.pending_start) {
                    events.push(SequenceEvent::Started);
                }
                self.playhead = (self.playhead + dt).min(self.total);
                // (crossing time, starts before completions at equal times, event)
                let mut crossed: Vec<(f64, u8, SequenceEvent)> = Vec::new();
                for (i, e) in self.entries.iter().enumerate() {
                    if !self.started[i] && self.playhead >= e.start_offset {
                        self.started[i] = true;
                        crossed.push((e.start_offset, 0, SequenceEvent::EntryStarted(i)));
                    }
                    if !self.completed[i] && self.playhead >= e.end_offset() {
                        self.completed[i] = true;
                        crossed.push((e.end_offset(), 1, SequenceEvent::EntryCompleted(i)));
                    }
                }
                crossed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
                events.extend(crossed.into_iter().map(|(_, _, ev)| ev));
                if self.playhead >= self.total {
                    self.playback = Playback::Stopped;
                    events.push(SequenceEvent::Completed);
                    tracing::debug!(total = self.total, "reveal sequence completed");
                }
            }
            Playback::Reverse => {
                self.playhead = (self.playhead - dt).max(0.0);
                if self.playhead <= 0.0 {
                    self.rewind();
                    self.playback = Playback::Stopped;
                    events.push(SequenceEvent::ReverseCompleted);
                }
            }
        }
        events
    }

    /// State of entry `i` at the current play-head.
    pub fn state_of(&self, i: usize) -> Option<RevealState> {
        self.entries.get(i).map(|e| e.tween().sample(self.playhead))
    }

    /// State of every entry at the current play-head.
    pub fn states(&self) -> Vec<(TargetId, RevealState)> {
        self.entries
            .iter()
            .map(|e| (e.target.clone(), e.tween().sample(self.playhead)))
            .collect()
    }

    /// Push every entry's state to `host`; detached targets are skipped. Returns how many
    /// targets were updated.
    pub fn apply(&self, host: &mut dyn RevealHost) -> usize {
        self.entries
            .iter()
            .filter(|e| host.set_state(&e.target, &e.tween().sample(self.playhead)))
            .count()
    }

    /// Standalone animation of entry `i` from its current state to its target state,
    /// independent of the play-head.
    pub fn play_element(&self, i: usize) -> Option<Tween<RevealState>> {
        let e = self.entries.get(i)?;
        Some(Tween {
            from: e.tween().sample(self.playhead),
            to: e.to,
            delay: 0.0,
            duration: e.duration,
            ease: e.ease,
        })
    }

    fn leave(&mut self, action: LeaveAction) {
        match action {
            LeaveAction::None => {}
            LeaveAction::Reverse => self.reverse(),
            LeaveAction::Reset => self.reset(),
        }
    }

    fn rewind(&mut self) {
        self.playhead = 0.0;
        self.started.fill(false);
        self.completed.fill(false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/sequence.rs"]
mod tests;
