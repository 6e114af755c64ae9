use std::collections::HashMap;

use uuid::Uuid;

/// Rendering-performance instrumentation consumed by the renderers.
///
/// All three notifications are fire-and-forget; nothing is returned and a
/// renderer never changes behavior based on the monitor.
pub trait PerfMonitor {
    fn on_begin_draw(&mut self, owner: Uuid);
    fn on_after_draw(&mut self, owner: Uuid);
    fn count_draw_call(&mut self, owner: Uuid);
}

/// Per-owner draw accounting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawCounters {
    pub begun: u64,
    pub completed: u64,
    pub draw_calls: u64,
}

/// A plain counter collector, keyed by the id of the renderer that drew.
#[derive(Debug, Default)]
pub struct DrawStats {
    counters: HashMap<Uuid, DrawCounters>,
}

impl DrawStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self, owner: Uuid) -> DrawCounters {
        self.counters.get(&owner).copied().unwrap_or_default()
    }

    pub fn total_draw_calls(&self) -> u64 {
        self.counters.values().map(|c| c.draw_calls).sum()
    }

    /// Clears all counters, typically once per frame.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}

impl PerfMonitor for DrawStats {
    fn on_begin_draw(&mut self, owner: Uuid) {
        self.counters.entry(owner).or_default().begun += 1;
    }

    fn on_after_draw(&mut self, owner: Uuid) {
        self.counters.entry(owner).or_default().completed += 1;
    }

    fn count_draw_call(&mut self, owner: Uuid) {
        self.counters.entry(owner).or_default().draw_calls += 1;
    }
}
