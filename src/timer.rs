//! One-shot delayed tasks.
//!
//! A scheduled task lives exactly as long as its handle: dropping the handle
//! cancels the task if it has not run yet. Components keep handles in their
//! own fields, so tearing a component down cancels whatever it left pending.

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` backed scheduler for the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
