//! # Layer 3: Capability-Gated Dispatch
//!
//! [`handle`] picks one of two behaviours from the probe's verdict for the
//! value's type. The choice is made by trait resolution on the verdict type,
//! so there is no runtime branch:
//!
//! ```text
//! T::Verdict = Present  =>  "funcA exists", then value.func_a()
//! T::Verdict = Absent   =>  value.func_b(), then "funcA does not exist"
//! ```
//!
//! The two branches announce in opposite orders. Callers rely on that order.
//!
//! A type with neither `func_a` nor `func_b` selects `Absent` and then fails
//! to build, because that branch needs `FuncB`:
//!
//! ```compile_fail
//! use cap_gate::dispatch::handle;
//! use cap_gate::demo::C;
//!
//! let mut out = String::new();
//! handle(&mut out, &C).unwrap();
//! ```

use core::fmt::{self, Write};

use crate::capability::{FuncA, FuncB};
use crate::detect::Probe;
use crate::primitives::{Absent, Bool, Present};

/// Line written before `func_a` when the capability is present.
pub const FUNC_A_EXISTS: &str = "funcA exists";

/// Line written after `func_b` when the capability is absent.
pub const FUNC_A_DOES_NOT_EXIST: &str = "funcA does not exist";

/// One dispatch branch, selected by the verdict type it is implemented on.
#[diagnostic::on_unimplemented(
    message = "`{T}` cannot be handled: it exposes neither `func_a` nor `func_b`",
    label = "no branch of `handle` applies to `{T}`",
    note = "implement `FuncA` or `FuncB` for `{T}`"
)]
pub trait Branch<T: ?Sized>: Bool {
    fn run(value: &T, out: &mut dyn Write) -> fmt::Result;
}

impl<T: FuncA + ?Sized> Branch<T> for Present {
    #[inline(always)]
    fn run(value: &T, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "{}", FUNC_A_EXISTS)?;
        value.func_a(out)
    }
}

impl<T: FuncB + ?Sized> Branch<T> for Absent {
    #[inline(always)]
    fn run(value: &T, out: &mut dyn Write) -> fmt::Result {
        value.func_b(out)?;
        writeln!(out, "{}", FUNC_A_DOES_NOT_EXIST)
    }
}

/// Handle `value`, writing every line of output to `out`.
pub fn handle<T>(out: &mut dyn Write, value: &T) -> fmt::Result
where
    T: Probe + ?Sized,
    T::Verdict: Branch<T>,
{
    <T::Verdict as Branch<T>>::run(value, out)
}
