use glam::Vec2;

/// A reusable ripple instance. The DOM slot implements this; tests use a
/// plain mock. `begin` repositions the slot and starts its animation; the
/// `animating` flag clears asynchronously when the underlying animation
/// completes (the pool never clears it itself).
pub trait RippleSlot {
    fn animating(&self) -> bool;
    fn begin(&mut self, at: Vec2);
}

/// What a `spawn` call did: reused an idle slot, or appended a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    Reused(usize),
    Grew(usize),
}

/// Growable pool of ripple slots, scanned first-idle-in-creation-order.
///
/// Slots are never removed or reordered; under sustained input faster than
/// the animation completion time the pool grows by exactly one slot per
/// spawn. Growth is unbounded by policy.
pub struct RipplePool<S: RippleSlot> {
    slots: Vec<S>,
}

/// Pre-allocation count sized so that input at the minimum allowed gap
/// rarely forces growth within one animation cycle.
pub fn initial_slot_count(min_gap_ms: f64) -> usize {
    (1000.0 / min_gap_ms).ceil() as usize + 4
}

impl<S: RippleSlot> RipplePool<S> {
    pub fn new(initial: usize, mut make_slot: impl FnMut() -> S) -> Self {
        let mut slots = Vec::with_capacity(initial);
        for _ in 0..initial {
            slots.push(make_slot());
        }
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Animate one slot at `at`. The first idle slot in creation order is
    /// reused; if every slot is animating, exactly one new slot is created
    /// via `make_slot`, appended, and animated. At most one slot transitions
    /// per call.
    pub fn spawn(&mut self, at: Vec2, make_slot: impl FnOnce() -> S) -> SpawnOutcome {
        for i in 0..self.slots.len() {
            if !self.slots[i].animating() {
                self.slots[i].begin(at);
                return SpawnOutcome::Reused(i);
            }
        }
        let mut slot = make_slot();
        slot.begin(at);
        self.slots.push(slot);
        SpawnOutcome::Grew(self.slots.len() - 1)
    }

    pub fn slots(&self) -> &[S] {
        &self.slots
    }
}
