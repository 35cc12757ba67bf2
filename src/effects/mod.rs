//! Decorative layers
//!
//! Views may draw these alongside a `Snapshot`; they only ever read the
//! current theme and never feed back into the simulation.

pub mod leaves;

pub use leaves::{Leaf, LeafField};
