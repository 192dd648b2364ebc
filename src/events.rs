//! Event plumbing for the demo window.
//!
//! [`UiEvent`] messages travel over a FIFO channel from the button and the
//! live-plot timer to the single dispatcher in
//! [`DemoApp::process_events`](crate::app::DemoApp::process_events). Each
//! message is handled exactly once, in arrival order.
//!
//! What the dispatcher did is reported as [`DemoEvent`]s through an
//! optional [`EventController`], so embedding code can watch clicks, ticks
//! and timer transitions from another thread.

use std::fmt;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::data::source::SampleBatch;
use crate::sink::BatchOrigin;

/// A message queued for the dispatcher loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The "Generate Data" button was activated.
    GenerateClicked,
    /// The live plot's timer fired once.
    Tick,
}

/// Sending half of the dispatcher queue.
///
/// Cloneable, so widgets and embedding code can post events. Posting after
/// the dispatcher has gone away is silently ignored.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<UiEvent>,
}

impl EventSender {
    pub fn post(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}

/// Receiving half of the dispatcher queue, drained once per frame.
pub struct EventQueue {
    rx: Receiver<UiEvent>,
}

impl EventQueue {
    /// Next queued event, if any, without blocking.
    pub fn try_next(&self) -> Option<UiEvent> {
        self.rx.try_recv().ok()
    }
}

/// Create the FIFO queue connecting event producers to the dispatcher.
pub fn event_queue() -> (EventSender, EventQueue) {
    let (tx, rx) = std::sync::mpsc::channel();
    (EventSender { tx }, EventQueue { rx })
}

/// Something the dispatcher did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    /// A batch was generated and handed to the sink.
    BatchGenerated {
        origin: BatchOrigin,
        batch: SampleBatch,
    },
    /// The live plot handled its `tick`-th tick and redrew with `batch`.
    Ticked { tick: u64, batch: SampleBatch },
    /// The live plot's timer was armed.
    TimerStarted,
    /// The live plot's timer was stopped.
    TimerStopped,
}

/// Discriminant of a [`DemoEvent`], used to pick subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BatchGenerated,
    Ticked,
    TimerStarted,
    TimerStopped,
}

impl DemoEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DemoEvent::BatchGenerated { .. } => EventKind::BatchGenerated,
            DemoEvent::Ticked { .. } => EventKind::Ticked,
            DemoEvent::TimerStarted => EventKind::TimerStarted,
            DemoEvent::TimerStopped => EventKind::TimerStopped,
        }
    }

    /// The samples involved, if any.
    pub fn batch(&self) -> Option<&SampleBatch> {
        match self {
            DemoEvent::BatchGenerated { batch, .. } | DemoEvent::Ticked { batch, .. } => {
                Some(batch)
            }
            DemoEvent::TimerStarted | DemoEvent::TimerStopped => None,
        }
    }
}

/// One-line description, e.g. `click [3, 1]` or `tick 2 [0, 4, 9, 9]`.
impl fmt::Display for DemoEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoEvent::BatchGenerated {
                origin: BatchOrigin::Startup,
                batch,
            } => write!(f, "startup {batch}"),
            DemoEvent::BatchGenerated {
                origin: BatchOrigin::Click,
                batch,
            } => write!(f, "click {batch}"),
            DemoEvent::Ticked { tick, batch } => write!(f, "tick {tick} {batch}"),
            DemoEvent::TimerStarted => f.write_str("timer started"),
            DemoEvent::TimerStopped => f.write_str("timer stopped"),
        }
    }
}

/// A [`DemoEvent`] as delivered to a subscriber.
#[derive(Debug, Clone)]
pub struct Observed {
    /// Time since the controller was created.
    pub elapsed: Duration,
    pub event: DemoEvent,
}

struct Subscription {
    /// `None` receives everything.
    kinds: Option<Vec<EventKind>>,
    tx: Sender<Observed>,
}

impl Subscription {
    fn wants(&self, kind: EventKind) -> bool {
        self.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}

struct Hub {
    created: Instant,
    subscriptions: Vec<Subscription>,
}

/// Fans dispatcher events out to subscribers.
///
/// Attach a clone to [`DemoConfig`](crate::config::DemoConfig) before
/// building the window, then subscribe from any thread.
#[derive(Clone)]
pub struct EventController {
    hub: Arc<Mutex<Hub>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            hub: Arc::new(Mutex::new(Hub {
                created: Instant::now(),
                subscriptions: Vec::new(),
            })),
        }
    }

    /// Receive only events of the listed kinds.
    pub fn subscribe(&self, kinds: &[EventKind]) -> Receiver<Observed> {
        self.add(Some(kinds.to_vec()))
    }

    /// Receive every event.
    pub fn subscribe_all(&self) -> Receiver<Observed> {
        self.add(None)
    }

    fn add(&self, kinds: Option<Vec<EventKind>>) -> Receiver<Observed> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.hub().subscriptions.push(Subscription { kinds, tx });
        rx
    }

    /// Deliver `event` to interested subscribers, forgetting any whose
    /// receiver is gone.
    pub fn emit(&self, event: DemoEvent) {
        let mut hub = self.hub();
        let elapsed = hub.created.elapsed();
        let kind = event.kind();
        hub.subscriptions.retain(|sub| {
            !sub.wants(kind)
                || sub
                    .tx
                    .send(Observed {
                        elapsed,
                        event: event.clone(),
                    })
                    .is_ok()
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.hub().subscriptions.len()
    }

    fn hub(&self) -> MutexGuard<'_, Hub> {
        // A panicking subscriber push cannot leave the list half-written.
        self.hub.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(values: Vec<i64>) -> DemoEvent {
        DemoEvent::BatchGenerated {
            origin: BatchOrigin::Click,
            batch: SampleBatch::new(values),
        }
    }

    #[test]
    fn queue_is_fifo() {
        let (tx, queue) = event_queue();
        tx.post(UiEvent::GenerateClicked);
        tx.post(UiEvent::Tick);
        tx.post(UiEvent::GenerateClicked);
        assert_eq!(queue.try_next(), Some(UiEvent::GenerateClicked));
        assert_eq!(queue.try_next(), Some(UiEvent::Tick));
        assert_eq!(queue.try_next(), Some(UiEvent::GenerateClicked));
        assert_eq!(queue.try_next(), None);
    }

    #[test]
    fn post_after_queue_dropped_is_ignored() {
        let (tx, queue) = event_queue();
        drop(queue);
        tx.post(UiEvent::Tick);
    }

    #[test]
    fn subscriptions_filter_by_kind() {
        let ctrl = EventController::new();
        let all = ctrl.subscribe_all();
        let timer = ctrl.subscribe(&[EventKind::TimerStarted, EventKind::TimerStopped]);

        ctrl.emit(click(vec![1]));
        ctrl.emit(DemoEvent::TimerStopped);

        assert_eq!(all.try_iter().count(), 2);
        let got: Vec<_> = timer.try_iter().map(|o| o.event).collect();
        assert_eq!(got, vec![DemoEvent::TimerStopped]);
    }

    #[test]
    fn elapsed_is_measured_from_creation() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();
        std::thread::sleep(Duration::from_millis(10));
        ctrl.emit(DemoEvent::TimerStarted);
        assert!(rx.try_recv().unwrap().elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn display_names_the_occurrence() {
        assert_eq!(click(vec![3, 1]).to_string(), "click [3, 1]");
        let tick = DemoEvent::Ticked {
            tick: 2,
            batch: SampleBatch::new(vec![0, 4]),
        };
        assert_eq!(tick.to_string(), "tick 2 [0, 4]");
        assert_eq!(tick.batch().map(|b| b.len()), Some(2));
        assert_eq!(DemoEvent::TimerStopped.to_string(), "timer stopped");
        assert!(DemoEvent::TimerStarted.batch().is_none());
    }

    #[test]
    fn dropped_receiver_is_forgotten() {
        let ctrl = EventController::new();
        let gone = ctrl.subscribe_all();
        let kept = ctrl.subscribe_all();
        drop(gone);

        ctrl.emit(DemoEvent::TimerStarted);
        assert!(kept.try_recv().is_ok());
        assert_eq!(ctrl.subscriber_count(), 1);
    }
}
