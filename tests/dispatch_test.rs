//! Branch selection and output ordering of `handle`.

use std::cell::Cell;
use std::fmt::{self, Write};

use cap_gate::dispatch::{FUNC_A_DOES_NOT_EXIST, FUNC_A_EXISTS};
use cap_gate::Branch;
use cap_gate::prelude::*;

/// Counts calls to each operation.
#[derive(Default)]
struct Calls {
    a: Cell<u32>,
    b: Cell<u32>,
}

#[derive(Default, Probe)]
struct OnlyA {
    calls: Calls,
}

#[derive(Default, Probe)]
struct OnlyB {
    calls: Calls,
}

#[derive(Default, Probe)]
struct Both {
    calls: Calls,
}

impl FuncA for OnlyA {
    fn func_a(&self, out: &mut dyn Write) -> fmt::Result {
        self.calls.a.set(self.calls.a.get() + 1);
        writeln!(out, "only-a")
    }
}

impl FuncB for OnlyB {
    fn func_b(&self, out: &mut dyn Write) -> fmt::Result {
        self.calls.b.set(self.calls.b.get() + 1);
        writeln!(out, "only-b")
    }
}

impl FuncA for Both {
    fn func_a(&self, out: &mut dyn Write) -> fmt::Result {
        self.calls.a.set(self.calls.a.get() + 1);
        writeln!(out, "both-a")
    }
}

impl FuncB for Both {
    fn func_b(&self, out: &mut dyn Write) -> fmt::Result {
        self.calls.b.set(self.calls.b.get() + 1);
        writeln!(out, "both-b")
    }
}

fn lines(out: &str) -> Vec<&str> {
    out.lines().collect()
}

#[test]
fn test_present_announces_then_calls() {
    let value = OnlyA::default();
    let mut out = String::new();
    handle(&mut out, &value).unwrap();

    assert_eq!(lines(&out), [FUNC_A_EXISTS, "only-a"]);
    assert_eq!(value.calls.a.get(), 1);
}

#[test]
fn test_absent_calls_then_announces() {
    let value = OnlyB::default();
    let mut out = String::new();
    handle(&mut out, &value).unwrap();

    assert_eq!(lines(&out), ["only-b", FUNC_A_DOES_NOT_EXIST]);
    assert_eq!(value.calls.b.get(), 1);
}

#[test]
fn test_both_takes_present_branch_only() {
    let value = Both::default();
    let mut out = String::new();
    handle(&mut out, &value).unwrap();

    assert_eq!(lines(&out), [FUNC_A_EXISTS, "both-a"]);
    assert_eq!(value.calls.a.get(), 1);
    assert_eq!(value.calls.b.get(), 0);
}

#[test]
fn test_each_call_is_independent() {
    let value = OnlyB::default();
    let mut out = String::new();
    for _ in 0..3 {
        handle(&mut out, &value).unwrap();
    }

    assert_eq!(value.calls.b.get(), 3);
    assert_eq!(lines(&out).len(), 6);
    assert_eq!(lines(&out)[5], FUNC_A_DOES_NOT_EXIST);
}

#[test]
fn test_branch_selected_by_verdict_type() {
    let value = Both::default();
    let mut out = String::new();
    <Absent as Branch<Both>>::run(&value, &mut out).unwrap();

    assert_eq!(lines(&out), ["both-b", FUNC_A_DOES_NOT_EXIST]);
    assert_eq!(value.calls.a.get(), 0);
}

/// Sink that refuses every write.
struct Closed;

impl Write for Closed {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn test_present_stops_before_func_a_on_write_error() {
    let value = OnlyA::default();
    assert_eq!(handle(&mut Closed, &value), Err(fmt::Error));
    assert_eq!(value.calls.a.get(), 0);
}

#[test]
fn test_absent_propagates_write_error() {
    let value = OnlyB::default();
    assert_eq!(handle(&mut Closed, &value), Err(fmt::Error));
    assert_eq!(value.calls.b.get(), 1);
}
