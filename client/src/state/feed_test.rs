use super::*;

use std::cell::RefCell;
use std::rc::Rc;

fn item(title: &str) -> FeedItem {
    FeedItem {
        title: title.into(),
        link: "#".into(),
        description: "...".into(),
        published: "Recent".into(),
        read_minutes: 1,
    }
}

#[test]
fn feed_state_defaults_to_loading() {
    assert_eq!(FeedState::default(), FeedState::Loading);
}

#[test]
fn empty_item_list_is_empty_state_not_error() {
    assert_eq!(FeedState::from_result(Ok(Vec::new())), FeedState::Empty);
}

#[test]
fn items_become_posts() {
    let state = FeedState::from_result(Ok(vec![item("a"), item("b")]));
    assert_eq!(state, FeedState::Posts(vec![item("a"), item("b")]));
}

#[test]
fn timeout_gets_connection_specific_message() {
    let state = FeedState::from_result(Err(FeedError::Timeout));
    assert_eq!(
        state,
        FeedState::Failed { message: "Request timeout. Please check your connection.".into() }
    );
}

#[test]
fn other_failures_share_generic_message() {
    for err in [
        FeedError::Status(503),
        FeedError::Network("offline".into()),
        FeedError::Parse("unexpected end of stream".into()),
    ] {
        assert_eq!(
            FeedState::from_result(Err(err)),
            FeedState::Failed { message: "Unable to load blog posts at the moment.".into() }
        );
    }
}

#[test]
fn sequencer_only_latest_ticket_is_current() {
    let seq = FeedSequencer::default();
    let first = seq.begin();
    assert!(seq.is_current(first));

    let second = seq.begin();
    assert!(second > first);
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn sequencer_clones_share_counter() {
    let seq = FeedSequencer::default();
    let clone = seq.clone();
    let first = seq.begin();
    let second = clone.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

// =============================================================
// should_publish
// =============================================================

#[test]
fn late_completion_of_superseded_fetch_is_discarded() {
    let seq = FeedSequencer::default();
    let slow = seq.begin();
    let fast = seq.begin();

    assert!(should_publish(true, &seq, fast));
    assert!(!should_publish(true, &seq, slow));
}

#[test]
fn unmounted_grid_never_publishes() {
    let seq = FeedSequencer::default();
    let only = seq.begin();
    assert!(!should_publish(false, &seq, only));
}

#[test]
fn ticket_taken_after_completion_supersedes_it() {
    let seq = FeedSequencer::default();
    let first = seq.begin();
    assert!(should_publish(true, &seq, first));
    let _second = seq.begin();
    assert!(!should_publish(true, &seq, first));
}

// =============================================================
// PendingRefresh
// =============================================================

/// Timer stand-in that records its id when dropped (cancelled).
struct StubTimer {
    id: u32,
    dropped: Rc<RefCell<Vec<u32>>>,
}

impl Drop for StubTimer {
    fn drop(&mut self) {
        self.dropped.borrow_mut().push(self.id);
    }
}

fn timer(id: u32, dropped: &Rc<RefCell<Vec<u32>>>) -> StubTimer {
    StubTimer { id, dropped: Rc::clone(dropped) }
}

#[test]
fn restart_cancels_earlier_timers_and_keeps_latest() {
    let dropped = Rc::new(RefCell::new(Vec::new()));
    let mut pending = PendingRefresh::default();
    assert!(!pending.is_scheduled());

    pending.restart(timer(1, &dropped));
    pending.restart(timer(2, &dropped));
    pending.restart(timer(3, &dropped));

    assert_eq!(*dropped.borrow(), [1, 2]);
    assert!(pending.is_scheduled());

    pending.cancel();
    assert_eq!(*dropped.borrow(), [1, 2, 3]);
    assert!(!pending.is_scheduled());
}

#[test]
fn single_visibility_event_schedules_without_cancelling() {
    let dropped = Rc::new(RefCell::new(Vec::new()));
    let mut pending = PendingRefresh::default();
    pending.restart(timer(7, &dropped));
    assert!(dropped.borrow().is_empty());
    assert!(pending.is_scheduled());
}
