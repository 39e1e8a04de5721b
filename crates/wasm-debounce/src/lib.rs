//! WASM Debounce Utilities
//!
//! Restartable delayed tasks for debouncing browser input.
//! Each new call cancels the pending task; only the latest one fires.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

/// Default quiet period before a debounced task runs
pub const DEFAULT_DELAY_MS: u32 = 300;

/// Something that can run a task after a delay.
///
/// Dropping the returned handle must cancel the task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser scheduler backed by `setTimeout` (via gloo-timers)
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Runs the most recent task once input has been quiet for `delay_ms`
pub struct Debouncer<S: Scheduler = TimeoutScheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl Debouncer<TimeoutScheduler> {
    pub fn with_timeout(delay_ms: u32) -> Self {
        Self::new(TimeoutScheduler, delay_ms)
    }
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Restart the timer with `task` as the one to run when it fires
    pub fn call(&self, task: impl FnOnce() + 'static) {
        // Drop the old handle first so its task can never fire
        self.cancel();
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending task, if any
    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

/// Scheduler driven by hand: time only moves on `advance`.
///
/// For tests of code that debounces through a [`Scheduler`].
pub mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct Slot {
        due: u32,
        task: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Cancels its task when dropped
    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    /// Clones share one clock and one task queue
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now: Rc<Cell<u32>>,
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    impl ManualScheduler {
        /// Move the clock forward and run every live task now due
        pub fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);

            let mut ready = Vec::new();
            self.slots.borrow_mut().retain_mut(|slot| {
                if slot.cancelled.get() {
                    return false;
                }
                if slot.due <= now {
                    if let Some(task) = slot.task.take() {
                        ready.push(task);
                    }
                    return false;
                }
                true
            });

            for task in ready {
                task();
            }
        }

        /// Tasks scheduled and neither fired nor cancelled
        pub fn pending(&self) -> usize {
            self.slots
                .borrow()
                .iter()
                .filter(|slot| !slot.cancelled.get() && slot.task.is_some())
                .count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.slots.borrow_mut().push(Slot {
                due: self.now.get() + delay_ms,
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce()>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = fired.clone();
        let make = move |value: u32| {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
        };
        (fired, make)
    }

    #[test]
    fn test_only_latest_call_fires() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), DEFAULT_DELAY_MS);
        let (fired, task) = recorder();

        debouncer.call(task(1));
        scheduler.advance(100);
        debouncer.call(task(2));
        scheduler.advance(100);
        debouncer.call(task(3));
        scheduler.advance(300);

        assert_eq!(*fired.borrow(), vec![3]);
    }

    #[test]
    fn test_waits_for_full_delay_after_last_call() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 300);
        let (fired, task) = recorder();

        debouncer.call(task(7));
        scheduler.advance(299);
        assert!(fired.borrow().is_empty());

        scheduler.advance(1);
        assert_eq!(*fired.borrow(), vec![7]);
    }

    #[test]
    fn test_cancel_drops_pending_task() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 300);
        let (fired, task) = recorder();

        debouncer.call(task(1));
        assert_eq!(scheduler.pending(), 1);
        debouncer.cancel();
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(1_000);

        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_separate_bursts_each_fire() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 300);
        let (fired, task) = recorder();

        debouncer.call(task(1));
        scheduler.advance(300);
        debouncer.call(task(2));
        scheduler.advance(300);

        assert_eq!(*fired.borrow(), vec![1, 2]);
        assert_eq!(debouncer.delay_ms(), 300);
    }
}
