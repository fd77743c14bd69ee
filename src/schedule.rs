//! Cancelable delayed tasks.
//!
//! Every delayed callback in the crate (FAQ focus shift, button reset, form
//! completion) is scheduled through [`Scheduler`] and parked in a
//! [`TaskSlot`]. Replacing the slot's contents cancels whatever was pending,
//! so a reopened panel or a resubmitted form never sees a stale callback.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

#[cfg(test)]
#[path = "schedule_manual.rs"]
pub mod manual;

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the page's event loop.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle;
}

/// Owner of a pending task. Dropping it cancels the task.
#[must_use]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Holds at most one pending task.
#[derive(Default)]
pub struct TaskSlot {
    pending: Option<TaskHandle>,
}

impl TaskSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `handle`, cancelling the previous occupant.
    pub fn replace(&mut self, handle: TaskHandle) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.cancel();
        }
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.pending.is_some()
    }
}

/// Browser scheduler backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout))
    }
}
