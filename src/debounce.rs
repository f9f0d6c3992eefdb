//! Debounced dispatch
//!
//! Collapses bursts of calls into a single call of the wrapped function once
//! the caller has been quiet for the configured delay. The timer is driven by
//! the host event loop through `poll`, so a call never runs the function
//! synchronously, even with a zero delay.

use std::time::{Duration, Instant};

/// A function wrapped with a trailing-edge debounce
pub struct Debounced<A, F> {
    func: F,
    delay: Duration,
    pending: Option<Scheduled<A>>,
}

struct Scheduled<A> {
    args: A,
    deadline: Instant,
}

impl<A, R, F> Debounced<A, F>
where
    F: FnMut(A) -> R,
{
    pub fn new(func: F, delay: Duration) -> Self {
        Self {
            func,
            delay,
            pending: None,
        }
    }

    /// Schedule `func(args)`, replacing any call that has not fired yet
    pub fn call(&mut self, args: A) {
        self.call_at(args, Instant::now());
    }

    pub fn call_at(&mut self, args: A, now: Instant) {
        if self.pending.is_some() {
            log::trace!("debounce: superseding scheduled call");
        }
        self.pending = Some(Scheduled {
            args,
            deadline: now + self.delay,
        });
    }

    /// Run the scheduled call if its quiet period has elapsed
    ///
    /// Returns the wrapped function's output when it ran.
    pub fn poll(&mut self) -> Option<R> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<R> {
        match &self.pending {
            Some(scheduled) if now >= scheduled.deadline => {}
            _ => return None,
        }
        let scheduled = self.pending.take()?;
        Some((self.func)(scheduled.args))
    }

    /// Drop the scheduled call, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the scheduled call becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|s| s.deadline)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
