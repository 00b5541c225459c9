//! # Layer 1: Capabilities
//!
//! A capability is a named operation a type may or may not expose. Each one
//! is a trait with a single required method that takes only the receiver
//! and the stream it writes its line to.
//!
//! Only [`FuncA`] is probed. [`FuncB`] is what the dispatcher falls back
//! to, and [`FuncC`] exists so that a type exposing neither of the other two
//! can be written down.
//!
//! Smart pointers and references forward `FuncA` and `FuncB` to their
//! pointee, so `&A`, `Box<A>` and `Rc<A>` expose whatever `A` exposes.

use core::fmt::{self, Write};

#[diagnostic::on_unimplemented(
    message = "`{Self}` does not expose `func_a`",
    label = "no `FuncA` impl for `{Self}`",
    note = "implement `FuncA` for `{Self}`"
)]
pub trait FuncA {
    fn func_a(&self, out: &mut dyn Write) -> fmt::Result;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` does not expose `func_b`",
    label = "`{Self}` has no `func_a`, so the fallback branch needs `func_b`",
    note = "a type must expose `func_a` or `func_b` to be handled"
)]
pub trait FuncB {
    fn func_b(&self, out: &mut dyn Write) -> fmt::Result;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` does not expose `func_c`",
    label = "no `FuncC` impl for `{Self}`"
)]
pub trait FuncC {
    fn func_c(&self, out: &mut dyn Write) -> fmt::Result;
}

// =============================================================================
// Forwarding impls
// =============================================================================

macro_rules! forward {
    ($Cap:ident, $method:ident) => {
        impl<T: $Cap + ?Sized> $Cap for &T {
            #[inline(always)]
            fn $method(&self, out: &mut dyn Write) -> fmt::Result {
                (**self).$method(out)
            }
        }

        impl<T: $Cap + ?Sized> $Cap for &mut T {
            #[inline(always)]
            fn $method(&self, out: &mut dyn Write) -> fmt::Result {
                (**self).$method(out)
            }
        }

        #[cfg(feature = "alloc")]
        impl<T: $Cap + ?Sized> $Cap for alloc::boxed::Box<T> {
            #[inline(always)]
            fn $method(&self, out: &mut dyn Write) -> fmt::Result {
                (**self).$method(out)
            }
        }

        #[cfg(feature = "alloc")]
        impl<T: $Cap + ?Sized> $Cap for alloc::rc::Rc<T> {
            #[inline(always)]
            fn $method(&self, out: &mut dyn Write) -> fmt::Result {
                (**self).$method(out)
            }
        }

        #[cfg(feature = "alloc")]
        impl<T: $Cap + ?Sized> $Cap for alloc::sync::Arc<T> {
            #[inline(always)]
            fn $method(&self, out: &mut dyn Write) -> fmt::Result {
                (**self).$method(out)
            }
        }
    };
}

forward!(FuncA, func_a);
forward!(FuncB, func_b);
