pub mod debounce;
pub mod field;
pub mod params;
pub mod pool;
pub mod style;

pub use debounce::{ClickPolicy, Debouncer};
pub use field::{generate, CausticSpec, FieldLayout};
pub use params::ParameterState;
pub use pool::{initial_slot_count, RipplePool, RippleSlot, SpawnOutcome};
