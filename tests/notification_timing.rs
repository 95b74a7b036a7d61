// SPDX-License-Identifier: MPL-2.0
use std::cell::RefCell;
use std::time::Duration;
use tearing_overlay::notifications::{NotificationQueue, Severity, Shown};
use tokio::time::{sleep, Instant};

#[derive(Debug)]
struct Window {
    message: String,
    start: Instant,
    end: Instant,
}

/// Drives the queue the way the overlay does: wait out each ticket, then
/// report completion.
async fn display_until_idle(queue: &RefCell<NotificationQueue>, first: Option<Shown>) -> Vec<Window> {
    let mut windows = Vec::new();
    let mut ticket = first;
    while let Some(shown) = ticket {
        let message = queue
            .borrow()
            .active()
            .map(|n| n.message().to_string())
            .expect("a ticket always has an active notification");
        let start = Instant::now();
        sleep(shown.duration).await;
        windows.push(Window {
            message,
            start,
            end: Instant::now(),
        });
        ticket = queue.borrow_mut().complete(shown.id);
    }
    windows
}

#[tokio::test(start_paused = true)]
async fn burst_is_displayed_serially_with_equal_windows() {
    let queue = RefCell::new(NotificationQueue::default());
    let first = queue.borrow_mut().enqueue("one", Severity::Info);
    for message in ["two", "three", "four"] {
        assert!(queue.borrow_mut().enqueue(message, Severity::Error).is_none());
    }

    let windows = display_until_idle(&queue, first).await;

    let messages: Vec<_> = windows.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(messages, ["one", "two", "three", "four"]);
    for window in &windows {
        assert_eq!(window.end - window.start, Duration::from_millis(1200));
    }
    for pair in windows.windows(2) {
        assert!(pair[0].end <= pair[1].start, "windows overlap: {pair:?}");
    }
    assert!(queue.borrow().is_idle());
}

#[tokio::test(start_paused = true)]
async fn late_enqueue_joins_the_tail_without_preempting() {
    let queue = RefCell::new(NotificationQueue::default());
    let first = queue.borrow_mut().enqueue("first", Severity::Info);

    let producer = async {
        sleep(Duration::from_millis(500)).await;
        let before = queue.borrow().active().cloned();
        assert!(queue.borrow_mut().enqueue("late", Severity::Error).is_none());
        assert_eq!(queue.borrow().active().cloned(), before);
    };

    let (windows, ()) = tokio::join!(display_until_idle(&queue, first), producer);

    let messages: Vec<_> = windows.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(messages, ["first", "late"]);
    assert!(windows[0].end <= windows[1].start);
}

#[tokio::test(start_paused = true)]
async fn configured_duration_applies_to_every_severity() {
    let queue = RefCell::new(NotificationQueue::new(Duration::from_millis(300)));
    let first = queue.borrow_mut().enqueue("ok", Severity::Success);
    queue.borrow_mut().enqueue("info", Severity::Info);
    queue.borrow_mut().enqueue("bad", Severity::Error);

    let started = Instant::now();
    let windows = display_until_idle(&queue, first).await;

    assert_eq!(windows.len(), 3);
    assert_eq!(Instant::now() - started, Duration::from_millis(900));
}
