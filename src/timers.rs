// src/timers.rs  -  Fire-and-forget deferred patches on a virtual clock
use crate::dom::Patch;
use std::time::Duration;

struct Deferred {
    due:     Duration,
    label:   &'static str,
    patches: Vec<Patch>,
}

/// Deferred work (alert dismissal, logo float loop). There is no cancel:
/// once scheduled a task fires when the clock passes its due time.
#[derive(Default)]
pub struct Timers {
    now:   Duration,
    queue: Vec<Deferred>,
}

impl Timers {
    pub fn new() -> Self { Self::default() }

    pub fn now(&self) -> Duration { self.now }

    pub fn pending(&self) -> usize { self.queue.len() }

    pub fn schedule(&mut self, delay: Duration, label: &'static str, patches: Vec<Patch>) {
        log::debug!("[timers] {label} due in {delay:?}");
        self.queue.push(Deferred { due: self.now + delay, label, patches });
    }

    /// Move the clock to `now` (never backwards) and return the patches of
    /// every task that came due, earliest first.
    pub fn advance(&mut self, now: Duration) -> Vec<Patch> {
        self.now = self.now.max(now);
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|d| d.due <= now);
        self.queue = rest;
        due.sort_by_key(|d| d.due);
        due.into_iter()
            .flat_map(|d| {
                log::debug!("[timers] firing {}", d.label);
                d.patches
            })
            .collect()
    }
}
