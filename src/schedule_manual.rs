//! Virtual-clock scheduler for tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{Scheduler, Task, TaskHandle};

struct Pending {
    id: u64,
    due_ms: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<Pending>,
}

/// Tasks run only when the test calls [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Move the clock forward, running due tasks in due order. Ties run in
    /// scheduling order. Tasks scheduled while advancing run too if they fall
    /// due before the new time.
    pub fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now_ms + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due_ms <= target)
                    .min_by_key(|(_, p)| (p.due_ms, p.id))
                    .map(|(i, _)| i);
                position.map(|i| {
                    let pending = queue.tasks.remove(i);
                    queue.now_ms = pending.due_ms;
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due_ms = queue.now_ms + u64::from(delay_ms);
            queue.tasks.push(Pending { id, due_ms, task });
            id
        };
        let queue: Weak<RefCell<Queue>> = Rc::downgrade(&self.queue);
        TaskHandle::new(move || {
            if let Some(queue) = queue.upgrade() {
                queue.borrow_mut().tasks.retain(|p| p.id != id);
            }
        })
    }
}
