use std::cell::RefCell;
use std::time::{Duration, Instant};

use randplot::{DataSource, LivePlot, RecurringTimer, Repaint, SampleBatch, TimerState};

// Helper: records one entry per redraw request
#[derive(Default)]
struct RedrawLog(RefCell<usize>);

impl Repaint for RedrawLog {
    fn request_redraw(&self) {
        *self.0.borrow_mut() += 1;
    }
}

#[test]
fn each_tick_draws_four_samples_and_one_redraw() {
    let t0 = Instant::now();
    let mut plot = LivePlot::new(DataSource::seeded(11), t0);
    let log = RedrawLog::default();

    let batch = plot.tick(&log).cloned().unwrap();
    assert_eq!(batch.len(), 4);
    assert!(batch.iter().all(|v| (0..=10).contains(v)));
    assert_eq!(*log.0.borrow(), 1);

    let curve = &plot.canvas().curves()[0];
    let expected: Vec<[f64; 2]> = (0..4).map(|i| [i as f64, batch.values()[i] as f64]).collect();
    assert_eq!(curve.points, expected);
}

#[test]
fn end_to_end_three_ticks() {
    let mut src = DataSource::new();
    let ten = src.provide_data(10);
    assert_eq!(ten.len(), 10);
    assert!(ten.iter().all(|v| (0..=10).contains(v)));
    let twenty = src.provide_data(20);
    assert_eq!(twenty.len(), 20);
    assert!(twenty.iter().all(|v| (0..=10).contains(v)));

    let t0 = Instant::now();
    let mut plot = LivePlot::new(DataSource::new(), t0);
    let log = RedrawLog::default();
    let mut batches: Vec<SampleBatch> = Vec::new();
    for i in 1..=3u32 {
        let now = t0 + Duration::from_millis(100) * i;
        assert_eq!(plot.poll(now), 1);
        batches.push(plot.tick(&log).cloned().unwrap());
    }

    assert_eq!(*log.0.borrow(), 3);
    assert_eq!(plot.ticks(), 3);
    assert_eq!(plot.canvas().redraws(), 3);
    assert!(batches.iter().all(|b| b.len() == 4));
    assert_eq!(plot.last_batch(), batches.last());
}

#[test]
fn stopping_idle_timer_does_not_fail() {
    let mut timer = RecurringTimer::default();
    assert_eq!(timer.state(), TimerState::Idle);
    assert!(!timer.stop());
    assert_eq!(timer.poll(Instant::now() + Duration::from_secs(10)), 0);
}

#[test]
fn no_tick_dispatched_after_stop() {
    let t0 = Instant::now();
    let mut plot = LivePlot::new(DataSource::seeded(2), t0);
    let log = RedrawLog::default();

    // A tick became due but the plot is stopped before it is handled.
    assert_eq!(plot.poll(t0 + Duration::from_millis(100)), 1);
    assert!(plot.stop());
    assert!(plot.tick(&log).is_none());
    assert_eq!(plot.poll(t0 + Duration::from_secs(5)), 0);
    assert_eq!(*log.0.borrow(), 0);
    assert_eq!(plot.state(), TimerState::Stopped);

    // Second stop is a no-op.
    assert!(!plot.stop());
}
