//! # Task Scheduler
//!
//! Single-threaded task queue for deferred widget work.
//!
//! ## Design
//!
//! The host owns the event loop. It calls [`Scheduler::take_due`] with the
//! current time and runs whatever comes back on the same thread. Tasks posted
//! while a batch runs wait for the next call, so an immediately re-posted
//! animation tick runs once per frame rather than spinning.

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskToken(u64);

impl TaskToken {
    /// Returns the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Work the star bar can defer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Advance the size animator one frame.
    AnimationTick,
    /// Return to rest after a release, unless a newer gesture started.
    Settle {
        /// Gesture generation captured when the settle was scheduled.
        generation: u64,
    },
}

/// A task waiting to run.
#[derive(Debug, Clone, Copy)]
struct Scheduled {
    token: TaskToken,
    due_ms: u64,
    task: Task,
}

/// Queue of pending tasks ordered by insertion.
#[derive(Debug)]
pub struct Scheduler {
    /// Tasks not yet run.
    pending: Vec<Scheduled>,
    /// Counter for generating tokens.
    next_token: u64,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(4),
            next_token: 1,
        }
    }

    /// Schedules `task` to run at or after `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, task: Task) -> TaskToken {
        let token = TaskToken(self.next_token);
        self.next_token += 1;
        self.pending.push(Scheduled { token, due_ms, task });
        token
    }

    /// Removes a pending task. Returns false if it already ran or was canceled.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|scheduled| scheduled.token != token);
        self.pending.len() != before
    }

    /// Returns true if the task has neither run nor been canceled.
    #[must_use]
    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.pending.iter().any(|scheduled| scheduled.token == token)
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|scheduled| scheduled.due_ms).min()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every task due at `now_ms`, in due order.
    ///
    /// Ties keep scheduling order.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<(TaskToken, Task)> {
        let mut due = Vec::new();
        self.pending.retain(|scheduled| {
            if scheduled.due_ms <= now_ms {
                due.push(*scheduled);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|scheduled| scheduled.due_ms);
        due.into_iter()
            .map(|scheduled| (scheduled.token, scheduled.task))
            .collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
