//! Integration tests for the rating gesture, driven through the widget.

use crossbeam_channel::Receiver;
use starbar_ui::{
    ChannelListener, GesturePhase, PointerEvent, RatingEvent, SpriteKey, SpriteMetrics, StarBar,
    StarResources, Widget,
};

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 60.0;
const SETTLE_DELAY_MS: u64 = 1700;

struct TestResources;

impl StarResources for TestResources {
    fn sprite(&self, key: SpriteKey) -> SpriteMetrics {
        SpriteMetrics {
            texture_id: u32::try_from(key.index()).unwrap(),
            width: 50.0,
            height: 50.0,
        }
    }

    fn label_font_size(&self) -> f32 {
        12.0
    }
}

fn bar_with_listener(listener: ChannelListener) -> StarBar {
    let mut bar = StarBar::new(&TestResources);
    bar.resize(WIDTH, HEIGHT);
    bar.set_listener(listener);
    bar
}

fn bar() -> (StarBar, Receiver<RatingEvent>) {
    let (listener, events) = ChannelListener::channel();
    (bar_with_listener(listener), events)
}

/// Advances one 16 ms frame at a time until the animator stops.
fn run_frames(bar: &mut StarBar, mut now: u64) -> u64 {
    bar.advance(now);
    while bar.is_animating() {
        now += 16;
        bar.advance(now);
    }
    now
}

fn all_at_rest(bar: &StarBar) -> bool {
    bar.current_sizes().iter().all(|&size| (size - 1.0).abs() <= 0.01)
}

#[test]
fn test_full_rating_cycle() {
    let (mut bar, events) = bar();

    bar.handle_pointer(&PointerEvent::down(0.0, 30.0, 0));
    assert_eq!(events.try_iter().collect::<Vec<_>>(), [RatingEvent::Start, RatingEvent::Pending(1)]);

    bar.handle_pointer(&PointerEvent::moved(950.0, 30.0, 100));
    assert_eq!(events.try_recv(), Ok(RatingEvent::Pending(10)));

    bar.handle_pointer(&PointerEvent::up(950.0, 0.0, 250));
    assert_eq!(events.try_recv(), Ok(RatingEvent::Final { rating: 10, swipe: false }));
    assert_eq!(bar.phase(), GesturePhase::Settling);

    // The top star stays up until the settle delay.
    let now = run_frames(&mut bar, 250);
    assert!(now < 250 + SETTLE_DELAY_MS);
    assert!((bar.current_sizes()[9] - 2.0).abs() <= 0.01);
    assert!(bar.is_sliding());

    bar.advance(250 + SETTLE_DELAY_MS);
    assert_eq!(bar.phase(), GesturePhase::Idle);
    assert_eq!(bar.slide_position(), None);

    run_frames(&mut bar, 250 + SETTLE_DELAY_MS);
    assert!(all_at_rest(&bar));
    assert_eq!(bar.next_wakeup(), None);
    assert!(events.try_recv().is_err());
}

#[test]
fn test_pending_ratings_stay_in_range() {
    let (mut bar, events) = bar();
    bar.handle_pointer(&PointerEvent::down(-500.0, 30.0, 0));

    let mut x = -500.0;
    let mut t = 0;
    while x < 1500.0 {
        x += 37.0;
        t += 8;
        bar.handle_pointer(&PointerEvent::moved(x, 30.0, t));
    }

    let pending: Vec<u8> = events
        .try_iter()
        .filter_map(|event| match event {
            RatingEvent::Pending(rating) => Some(rating),
            _ => None,
        })
        .collect();

    assert_eq!(pending.first(), Some(&1));
    assert_eq!(pending.last(), Some(&10));
    assert!(pending.iter().all(|rating| (1..=10).contains(rating)));
    // Reported only on change.
    assert!(pending.windows(2).all(|pair| pair[0] != pair[1]));
}

#[test]
fn test_swipe_threshold_boundary() {
    let (mut bar, events) = bar();

    bar.handle_pointer(&PointerEvent::down(450.0, 30.0, 1000));
    bar.handle_pointer(&PointerEvent::up(450.0, 30.0, 1500));
    assert_eq!(events.try_iter().last(), Some(RatingEvent::Final { rating: 5, swipe: false }));

    bar.handle_pointer(&PointerEvent::down(450.0, 30.0, 3000));
    bar.handle_pointer(&PointerEvent::up(450.0, 30.0, 3501));
    assert_eq!(events.try_iter().last(), Some(RatingEvent::Final { rating: 5, swipe: true }));
}

#[test]
fn test_overdrag_release_cancels() {
    let (mut bar, events) = bar();

    bar.handle_pointer(&PointerEvent::down(500.0, 30.0, 0));
    bar.handle_pointer(&PointerEvent::moved(520.0, -80.0, 50));
    bar.handle_pointer(&PointerEvent::up(520.0, -80.0, 100));

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(received.last(), Some(&RatingEvent::Cancel));
    assert!(!received.iter().any(|event| matches!(event, RatingEvent::Final { .. })));
    assert_eq!(bar.phase(), GesturePhase::Idle);
    assert!(bar.target_sizes().iter().all(|&size| (size - 1.0).abs() <= f32::EPSILON));

    run_frames(&mut bar, 100);
    assert!(all_at_rest(&bar));
    // No settle was scheduled.
    assert_eq!(bar.next_wakeup(), None);
}

#[test]
fn test_platform_cancel() {
    let (mut bar, events) = bar();

    bar.handle_pointer(&PointerEvent::down(300.0, 30.0, 0));
    bar.handle_pointer(&PointerEvent::cancel(40));
    assert_eq!(events.try_iter().last(), Some(RatingEvent::Cancel));
    assert!(!bar.is_sliding());

    // A second cancel outside a slide is ignored.
    bar.handle_pointer(&PointerEvent::cancel(60));
    assert!(events.try_recv().is_err());
}

#[test]
fn test_stale_settle_does_not_end_new_gesture() {
    let (mut bar, events) = bar();

    bar.handle_pointer(&PointerEvent::down(100.0, 30.0, 0));
    bar.handle_pointer(&PointerEvent::up(100.0, 30.0, 100));
    run_frames(&mut bar, 100);

    // New gesture before the first settle fires.
    bar.handle_pointer(&PointerEvent::down(700.0, 30.0, 1000));
    let now = run_frames(&mut bar, 1000);
    assert!(now < 100 + SETTLE_DELAY_MS);

    bar.advance(100 + SETTLE_DELAY_MS);
    assert_eq!(bar.phase(), GesturePhase::Sliding);
    assert_eq!(bar.current_rating(), Some(8));
    assert!((bar.current_sizes()[7] - 2.0).abs() <= 0.01);
    assert!(!bar.is_animating());

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(received.last(), Some(&RatingEvent::Pending(8)));
}

#[test]
fn test_refused_start_suppresses_gesture() {
    let (listener, events) = ChannelListener::channel();
    let mut bar = bar_with_listener(listener.accepting(false));

    bar.handle_pointer(&PointerEvent::down(500.0, 30.0, 0));
    bar.handle_pointer(&PointerEvent::moved(800.0, 30.0, 50));
    bar.handle_pointer(&PointerEvent::up(800.0, 30.0, 100));

    assert!(events.try_recv().is_err());
    assert!(!bar.is_sliding());
    assert!(!bar.is_animating());
    assert!(all_at_rest(&bar));
}

#[test]
fn test_refused_press_while_settling_rests_immediately() {
    let (sender, events) = crossbeam_channel::unbounded();
    let mut bar = bar_with_listener(ChannelListener::with_sender(sender.clone()));

    bar.handle_pointer(&PointerEvent::down(500.0, 30.0, 0));
    bar.handle_pointer(&PointerEvent::up(500.0, 30.0, 100));
    run_frames(&mut bar, 100);
    assert_eq!(bar.phase(), GesturePhase::Settling);

    bar.set_listener(ChannelListener::with_sender(sender).accepting(false));
    bar.handle_pointer(&PointerEvent::down(200.0, 30.0, 500));
    assert_eq!(bar.phase(), GesturePhase::Idle);

    run_frames(&mut bar, 500);
    assert!(all_at_rest(&bar));

    // The old settle is now stale and harmless.
    bar.advance(100 + SETTLE_DELAY_MS);
    assert_eq!(bar.phase(), GesturePhase::Idle);

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(received.last(), Some(&RatingEvent::Final { rating: 6, swipe: false }));
}

#[test]
fn test_release_uses_release_position() {
    let (mut bar, events) = bar();

    bar.handle_pointer(&PointerEvent::down(150.0, 30.0, 0));
    bar.handle_pointer(&PointerEvent::up(650.0, 30.0, 80));

    assert_eq!(events.try_iter().last(), Some(RatingEvent::Final { rating: 7, swipe: false }));
    assert_eq!(bar.slide_position(), Some(6.5));
}
