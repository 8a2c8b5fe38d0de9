//! The Transform intermediate representation: one named logical view,
//! produced by interpretation and consumed read-only by the emitters.

pub mod transform;
