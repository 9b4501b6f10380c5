use crate::helpers::{CarouselBuilder, ManualScheduler};
use parking_lot::Mutex;
use showreel::carousel::pointer::PointerEvent;
use showreel::AutoScroll;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_loop_ticks_once_per_frame() {
    let scheduler = Arc::new(ManualScheduler::new());
    let carousel = Arc::new(Mutex::new(CarouselBuilder::new().build()));
    let auto = AutoScroll::start(Arc::clone(&carousel), Arc::clone(&scheduler));

    assert!(auto.is_running());
    assert_eq!(scheduler.pending(), 1);

    scheduler.run_frames(10);

    assert_eq!(auto.frames(), 10);
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(carousel.lock().offset(), -10.0);
}

#[test]
fn test_loop_wraps_over_many_frames() {
    let scheduler = Arc::new(ManualScheduler::new());
    let carousel = Arc::new(Mutex::new(CarouselBuilder::new().build()));
    let _auto = AutoScroll::start(Arc::clone(&carousel), Arc::clone(&scheduler));

    for _ in 0..700 {
        scheduler.run_frame(0.0);
        let offset = carousel.lock().offset();
        assert!(offset <= 0.0 && offset > -300.0);
    }
    assert_eq!(carousel.lock().offset(), -100.0);
}

#[test]
fn test_drag_pauses_the_loop() {
    let scheduler = Arc::new(ManualScheduler::new());
    let carousel = Arc::new(Mutex::new(CarouselBuilder::new().build()));
    let auto = AutoScroll::start(Arc::clone(&carousel), Arc::clone(&scheduler));

    scheduler.run_frames(5);
    carousel.lock().handle_pointer(PointerEvent::touch_start(100.0));
    scheduler.run_frames(20);

    assert_eq!(carousel.lock().offset(), -5.0);
    // Frames keep being requested while paused
    assert_eq!(auto.frames(), 25);

    carousel.lock().handle_pointer(PointerEvent::touch_end(100.0));
    scheduler.run_frames(3);
    assert_eq!(carousel.lock().offset(), -8.0);
}

#[test]
fn test_stop_cancels_pending_frame() {
    let scheduler = Arc::new(ManualScheduler::new());
    let carousel = Arc::new(Mutex::new(CarouselBuilder::new().build()));
    let auto = AutoScroll::start(Arc::clone(&carousel), Arc::clone(&scheduler));

    scheduler.run_frames(2);
    auto.stop();
    auto.stop();

    assert!(!auto.is_running());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.run_frame(0.0), 0);
    assert_eq!(carousel.lock().offset(), -2.0);
}

#[test]
fn test_drop_releases_the_carousel() {
    let scheduler = Arc::new(ManualScheduler::new());
    let carousel = Arc::new(Mutex::new(CarouselBuilder::new().build()));

    {
        let _auto = AutoScroll::start(Arc::clone(&carousel), Arc::clone(&scheduler));
        scheduler.run_frames(3);
        assert!(Arc::strong_count(&carousel) > 1);
    }

    assert_eq!(scheduler.pending(), 0);
    assert_eq!(Arc::strong_count(&carousel), 1);
}

#[test]
fn test_loop_control_while_frame_waits_on_carousel() {
    let scheduler = Arc::new(ManualScheduler::new());
    let carousel = Arc::new(Mutex::new(CarouselBuilder::new().build()));
    let auto = Arc::new(AutoScroll::start(
        Arc::clone(&carousel),
        Arc::clone(&scheduler),
    ));
    let (done_tx, done_rx) = mpsc::channel();

    // Input handler: holds the carousel, then queries and stops the loop
    let input = {
        let carousel = Arc::clone(&carousel);
        let auto = Arc::clone(&auto);
        let done = done_tx.clone();
        thread::spawn(move || {
            let _guard = carousel.lock();
            thread::sleep(Duration::from_millis(100));
            let _ = auto.average_tick_ms();
            auto.stop();
            done.send("input").unwrap();
        })
    };

    // Frame driver: fires while the input handler holds the carousel
    let frames = {
        let scheduler = Arc::clone(&scheduler);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            scheduler.run_frame(0.0);
            done_tx.send("frames").unwrap();
        })
    };

    let mut finished = Vec::new();
    for _ in 0..2 {
        match done_rx.recv_timeout(Duration::from_secs(3)) {
            Ok(name) => finished.push(name),
            Err(_) => break,
        }
    }
    assert_eq!(finished.len(), 2, "threads stuck, finished: {finished:?}");

    input.join().unwrap();
    frames.join().unwrap();
    assert!(!auto.is_running());
    assert_eq!(scheduler.pending(), 0);
}
