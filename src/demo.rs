//! The demonstration program: three candidate types, each exposing exactly
//! one operation.
//!
//! | Type | Exposes  | `handle` result                                  |
//! |------|----------|--------------------------------------------------|
//! | `A`  | `func_a` | `funcA exists`, `funcA called`                   |
//! | `B`  | `func_b` | `funcB called`, `funcA does not exist`           |
//! | `C`  | `func_c` | does not build                                   |

use core::fmt::{self, Write};

use crate::Probe;
use crate::capability::{FuncA, FuncB, FuncC};
use crate::dispatch::handle;

#[derive(Debug, Default, Probe)]
pub struct A;

#[derive(Debug, Default, Probe)]
pub struct B;

#[derive(Debug, Default, Probe)]
pub struct C;

impl FuncA for A {
    fn func_a(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "funcA called")
    }
}

impl FuncB for B {
    fn func_b(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "funcB called")
    }
}

impl FuncC for C {
    fn func_c(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "funcC called")
    }
}

/// Run the demonstration, writing its transcript to `out`.
///
/// `C` is built but never handled: `handle(out, &c)` is rejected by the
/// compiler since `C` exposes neither `func_a` nor `func_b`.
pub fn run(out: &mut dyn Write) -> fmt::Result {
    let a = A;
    let b = B;
    let _c = C;

    handle(out, &a)?;
    handle(out, &b)?;
    Ok(())
}
