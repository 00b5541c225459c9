#![cfg_attr(not(feature = "std"), no_std)]

//! # cap-gate
//!
//! Compile-time capability probing and capability-gated dispatch.
//!
//! **"Does `T` expose `func_a`?" answered by the type checker, acted on with
//! zero runtime dispatch.**
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present / Absent, Bool, Verdict<const B>                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - FuncA, FuncB, FuncC (+ forwarding through &T, Box, Rc, Arc)    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Probe                                                   |
//! |  - Detect<T> inherent-const fallback, Probe, ProbeExt, impl_probe! |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Dispatch                                                |
//! |  - Branch<T> for Present / Absent, handle()                       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use core::fmt::{self, Write};
//! use cap_gate::prelude::*;
//!
//! #[derive(Probe)]
//! struct Greeter;
//!
//! impl FuncA for Greeter {
//!     fn func_a(&self, out: &mut dyn Write) -> fmt::Result {
//!         writeln!(out, "hello")
//!     }
//! }
//!
//! let mut out = String::new();
//! handle(&mut out, &Greeter).unwrap();
//! assert_eq!(out, "funcA exists\nhello\n");
//! assert!(Greeter::HAS_FUNC_A);
//! ```

// Allow `::cap_gate` to work inside the crate itself
extern crate self as cap_gate;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for impl_detect!
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capabilities
// =============================================================================
pub mod capability;

// =============================================================================
// Layer 2: Probe
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 3: Dispatch
// =============================================================================
pub mod dispatch;

#[cfg(feature = "std")]
pub mod console;

pub mod demo;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{FuncA, FuncB, FuncC};
pub use detect::{Probe, ProbeExt};
pub use dispatch::{Branch, handle};
pub use primitives::{Absent, Bool, Present, SelectBool, Verdict};

// Re-export proc-macros
pub use macros::Probe;

/// Common items for the capability probe.
pub mod prelude {
    pub use crate::capability::{FuncA, FuncB, FuncC};
    pub use crate::detect::{Probe, ProbeExt};
    pub use crate::dispatch::handle;
    pub use crate::primitives::{Absent, Bool, Present};
    pub use macros::Probe;
    // Note: impl_probe! is #[macro_export] so it's at crate root
}
