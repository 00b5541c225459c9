//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (Present/Absent) and the
//!   const-to-type bridge used to turn a probe result into a verdict type.

pub mod bool;

pub use bool::{Absent, Bool, Present, SelectBool, Verdict};
