/// Minimum-gap gate for move-driven ripple spawns.
///
/// Continuous pointer/touch move streams can arrive every few milliseconds;
/// the debouncer admits at most one spawn per `min_gap_ms` of real time so
/// the ripple pool is not flooded. Timestamps are milliseconds as reported
/// by `Performance::now`.
#[derive(Clone, Debug)]
pub struct Debouncer {
    min_gap_ms: f64,
    last_fire_ms: f64,
}

/// Whether click/tap events pass through the debounce gate or bypass it.
/// Move events always go through the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickPolicy {
    Bypass,
    Debounced,
}

impl Debouncer {
    pub fn new(min_gap_ms: f64) -> Self {
        // Negative infinity so the very first event is always admitted.
        Self {
            min_gap_ms,
            last_fire_ms: f64::NEG_INFINITY,
        }
    }

    /// Returns true (and records `now_ms` as the last accepted time) iff at
    /// least `min_gap_ms` has elapsed since the last accepted event.
    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_fire_ms < self.min_gap_ms {
            return false;
        }
        self.last_fire_ms = now_ms;
        true
    }

    pub fn min_gap_ms(&self) -> f64 {
        self.min_gap_ms
    }
}
