//! Cancellable one-shot timers.
//!
//! [`TimeoutScheduler`] runs tasks on the browser event loop.
//! [`ManualScheduler`] runs them when its virtual clock is advanced, which
//! makes timing contracts (e.g. a dismissal cancelling an auto-hide)
//! directly testable.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Runs `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;
    /// Returns whether a pending task was cancelled.
    fn cancel(&self, id: TimerId) -> bool;
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Handles of scheduled timers, keyed by id.
///
/// A timer's handle can't be dropped from inside its own callback, so a
/// fired id is parked and its handle released by the next timer to fire or
/// the next schedule/cancel. At most one fired handle outlives that point.
struct Handles<H> {
    live: HashMap<TimerId, H>,
    fired: Vec<TimerId>,
}

impl<H> Default for Handles<H> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
            fired: Vec::new(),
        }
    }
}

impl<H> Handles<H> {
    fn insert(&mut self, id: TimerId, handle: H) {
        self.live.insert(id, handle);
    }

    fn take(&mut self, id: TimerId) -> Option<H> {
        self.fired.retain(|fired| *fired != id);
        self.live.remove(&id)
    }

    /// Releases previously fired handles, then parks `id`.
    fn fire(&mut self, id: TimerId) {
        self.release_fired();
        self.fired.push(id);
    }

    fn release_fired(&mut self) {
        for id in self.fired.drain(..) {
            self.live.remove(&id);
        }
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}

/// Browser scheduler backed by `setTimeout`.
#[derive(Default)]
pub struct TimeoutScheduler {
    next_id: Cell<u64>,
    handles: Rc<RefCell<Handles<Timeout>>>,
}

impl TimeoutScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers whose handles are still held, fired or not.
    pub fn held(&self) -> usize {
        self.handles.borrow().len()
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        self.handles.borrow_mut().release_fired();

        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let handles = Rc::clone(&self.handles);
        let timeout = Timeout::new(millis(delay), move || {
            task();
            handles.borrow_mut().fire(id);
        });
        self.handles.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut handles = self.handles.borrow_mut();
        handles.release_fired();
        match handles.take(id) {
            Some(timeout) => {
                timeout.cancel();
                true
            }
            None => false,
        }
    }
}

struct Pending {
    id: TimerId,
    due: Duration,
    task: Task,
}

/// Deterministic scheduler driven by an explicit virtual clock.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: Cell<u64>,
    elapsed: Cell<Duration>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Moves the clock forward by `by`, running every task that falls due in
    /// order of due time (ties in scheduling order). Tasks scheduled while
    /// advancing run too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let until = self.elapsed.get() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= until)
                    .min_by_key(|(_, pending)| (pending.due, pending.id))
                    .map(|(position, _)| position);
                position.map(|position| queue.remove(position))
            };
            let Some(pending) = next else { break };
            self.elapsed.set(pending.due);
            (pending.task)();
        }
        self.elapsed.set(until);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.queue.borrow_mut().push(Pending {
            id,
            due: self.elapsed.get() + delay,
            task,
        });
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|pending| pending.id != id);
        queue.len() != before
    }
}
