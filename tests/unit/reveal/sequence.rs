use super::*;
use std::collections::BTreeMap;

fn three() -> RevealSequence {
    RevealSequence::staggered(
        vec![
            RevealEntry::new("a"),
            RevealEntry::new("b"),
            RevealEntry::new("c"),
        ],
        0.1,
        0.0,
        TriggerRegion::new(0.2, 0.8),
    )
}

#[test]
fn stagger_spaces_start_offsets() {
    let seq = three();
    let offsets: Vec<f64> = seq.entries().iter().map(|e| e.start_offset).collect();
    assert_eq!(offsets, vec![0.0, 0.1, 0.2]);
    assert_eq!(seq.total_duration(), 1.0);
    assert!(!seq.is_playing());
}

#[test]
fn global_delay_and_entry_delay_add_up() {
    let seq = RevealSequence::staggered(
        vec![RevealEntry::new("a").at(0.5), RevealEntry::new("b")],
        0.2,
        1.0,
        TriggerRegion::new(0.0, 1.0),
    );
    let offsets: Vec<(&str, f64)> = seq
        .entries()
        .iter()
        .map(|e| (e.target.as_str(), e.start_offset))
        .collect();
    assert_eq!(offsets, vec![("b", 1.2), ("a", 1.5)]);
}

#[test]
fn new_orders_entries_stably() {
    let seq = RevealSequence::new(
        vec![
            RevealEntry::new("late").at(0.5),
            RevealEntry::new("first").at(0.0),
            RevealEntry::new("second").at(0.0),
        ],
        TriggerRegion::new(0.0, 1.0),
    );
    let names: Vec<&str> = seq.entries().iter().map(|e| e.target.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "late"]);
}

#[test]
fn entering_while_playing_keeps_one_playhead() {
    let mut seq = three();
    assert!(seq.on_scroll_progress(0.5, ScrollDirection::Forward));
    seq.advance(0.3);
    assert!(!seq.on_scroll_progress(0.1, ScrollDirection::Backward));
    assert!(!seq.on_scroll_progress(0.5, ScrollDirection::Forward));
    assert_eq!(seq.playhead(), 0.3);
    assert!(seq.is_playing());
}

#[test]
fn entering_after_completion_restarts() {
    let mut seq = three();
    assert!(seq.on_scroll_progress(0.5, ScrollDirection::Forward));
    seq.advance(2.0);
    assert!(!seq.is_playing());
    seq.on_scroll_progress(0.9, ScrollDirection::Forward);
    assert!(seq.on_scroll_progress(0.5, ScrollDirection::Backward));
    assert_eq!(seq.playhead(), 0.0);
    assert!(seq.is_playing());
}

#[test]
fn advance_reports_lifecycle_in_order() {
    let mut seq = three();
    assert!(seq.play());
    assert_eq!(
        seq.advance(0.05),
        vec![SequenceEvent::Started, SequenceEvent::EntryStarted(0)]
    );
    assert_eq!(seq.advance(0.1), vec![SequenceEvent::EntryStarted(1)]);
    assert_eq!(
        seq.advance(1.0),
        vec![
            SequenceEvent::EntryStarted(2),
            SequenceEvent::EntryCompleted(0),
            SequenceEvent::EntryCompleted(1),
            SequenceEvent::EntryCompleted(2),
            SequenceEvent::Completed,
        ]
    );
    assert_eq!(seq.playhead(), 1.0);
    assert!(seq.advance(1.0).is_empty());
}

#[test]
fn events_within_one_advance_follow_crossing_time() {
    let mut seq = RevealSequence::new(
        vec![
            RevealEntry::new("long").lasting(1.0),
            RevealEntry::new("short").at(0.1).lasting(0.2),
            RevealEntry::new("instant").at(0.5).lasting(0.0),
        ],
        TriggerRegion::new(0.0, 1.0),
    );
    seq.play();
    assert_eq!(
        seq.advance(2.0),
        vec![
            SequenceEvent::Started,
            SequenceEvent::EntryStarted(0),
            SequenceEvent::EntryStarted(1),
            SequenceEvent::EntryCompleted(1),
            SequenceEvent::EntryStarted(2),
            SequenceEvent::EntryCompleted(2),
            SequenceEvent::EntryCompleted(0),
            SequenceEvent::Completed,
        ]
    );
}

#[test]
fn states_follow_playhead() {
    let mut seq = three();
    assert_eq!(seq.state_of(0), Some(RevealState::HIDDEN));
    assert_eq!(seq.state_of(3), None);

    seq.play();
    seq.advance(0.4);
    let a = seq.state_of(0).unwrap();
    let c = seq.state_of(2).unwrap();
    assert!(a.opacity > c.opacity);
    assert!(a.opacity > 0.0 && a.opacity < 1.0);

    seq.skip_to_end();
    assert!(!seq.is_playing());
    for (_, s) in seq.states() {
        assert_eq!(s, RevealState::SHOWN);
    }
}

#[test]
fn pause_freezes_and_reverse_returns_to_start() {
    let mut seq = three();
    seq.play();
    seq.advance(0.5);
    seq.pause();
    assert!(seq.advance(0.5).is_empty());
    assert_eq!(seq.playhead(), 0.5);

    seq.reverse();
    assert!(seq.is_playing());
    assert!(seq.advance(0.2).is_empty());
    assert_eq!(seq.advance(1.0), vec![SequenceEvent::ReverseCompleted]);
    assert_eq!(seq.playhead(), 0.0);
    assert!(!seq.is_playing());
    assert_eq!(seq.state_of(2), Some(RevealState::HIDDEN));
}

#[test]
fn reset_on_leave_back_rewinds() {
    let mut seq = three().with_leave_actions(LeaveAction::None, LeaveAction::Reset);
    seq.on_scroll_progress(0.5, ScrollDirection::Forward);
    seq.advance(0.4);
    seq.on_scroll_progress(0.1, ScrollDirection::Backward);
    assert_eq!(seq.playhead(), 0.0);
    assert!(!seq.is_playing());
}

#[test]
fn apply_skips_detached_targets() {
    let mut seq = three();
    seq.skip_to_end();
    let mut host: BTreeMap<TargetId, RevealState> = BTreeMap::new();
    host.insert(TargetId::new("a"), RevealState::HIDDEN);
    host.insert(TargetId::new("c"), RevealState::HIDDEN);
    assert_eq!(seq.apply(&mut host), 2);
    assert_eq!(host[&TargetId::new("a")], RevealState::SHOWN);
    assert!(!host.contains_key(&TargetId::new("b")));
}

#[test]
fn play_element_starts_from_current_state() {
    let seq = three();
    let tw = seq.play_element(1).unwrap();
    assert_eq!(tw.from, RevealState::HIDDEN);
    assert_eq!(tw.to, RevealState::SHOWN);
    assert_eq!(tw.delay, 0.0);
    assert_eq!(tw.sample(tw.end_time()), RevealState::SHOWN);
    assert!(seq.play_element(9).is_none());
}

#[test]
fn empty_sequence_completes_immediately() {
    let mut seq = RevealSequence::new(Vec::new(), TriggerRegion::new(0.0, 1.0));
    assert!(seq.play());
    assert_eq!(
        seq.advance(0.016),
        vec![SequenceEvent::Started, SequenceEvent::Completed]
    );
}
