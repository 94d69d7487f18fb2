//! Assertion helpers for paging tests.

use std::collections::BTreeMap;

use pagemenu_foundation::LifecycleEvent;
use pagemenu_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotPhase {
    Unloaded,
    Loading,
    Loaded,
    Unloading,
}

/// Assert that an event log follows the per-page state machine.
///
/// Every `WillLoad` is followed by its `DidLoad` before anything else
/// happens to that page, and likewise for unloads. Pages start unloaded.
pub fn assert_lifecycle_well_ordered(events: &[LifecycleEvent]) {
    let mut phases: BTreeMap<usize, SlotPhase> = BTreeMap::new();

    for (position, event) in events.iter().enumerate() {
        let Some(index) = event.index() else {
            continue;
        };
        let phase = phases.entry(index).or_insert(SlotPhase::Unloaded);
        let next = match (*phase, event) {
            (SlotPhase::Unloaded, LifecycleEvent::WillLoad(_)) => SlotPhase::Loading,
            (SlotPhase::Loading, LifecycleEvent::DidLoad(_)) => SlotPhase::Loaded,
            (SlotPhase::Loaded, LifecycleEvent::WillUnload(_)) => SlotPhase::Unloading,
            (SlotPhase::Unloading, LifecycleEvent::DidUnload(_)) => SlotPhase::Unloaded,
            (current, LifecycleEvent::DidMoveToPage(_))
                if current != SlotPhase::Loading && current != SlotPhase::Unloading =>
            {
                current
            }
            (current, _) => panic!(
                "event #{position} {event:?} not allowed while page {index} is {current:?}: {events:?}"
            ),
        };
        *phase = next;
    }

    for (index, phase) in phases {
        assert!(
            phase == SlotPhase::Unloaded || phase == SlotPhase::Loaded,
            "page {index} left mid-transition ({phase:?}): {events:?}"
        );
    }
}
