//! Hand and discard gate.
//!
//! The hand may grow past the soft cap (a reward always lands), but while it
//! does the gate holds the attack action locked. The player resolves the
//! excess by playing or discarding.

pub mod gate;
pub mod list;

pub use gate::{DiscardGate, GateUpdate, LockState};
pub use list::Hand;
