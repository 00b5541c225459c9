//! # Layer 2: Capability Probe
//!
//! Answers "does `T` expose `func_a`?" at compile time, without calling it.
//!
//! ## Public API
//!
//! The verdict is attached to the type once, with `#[derive(Probe)]` or
//! [`impl_probe!`](crate::impl_probe), and then read the same way from
//! concrete and generic code:
//!
//! ```
//! use cap_gate::{Bool, Probe, ProbeExt};
//! use cap_gate::demo::{A, C};
//!
//! fn describe<T: Probe>() -> bool {
//!     <T::Verdict as Bool>::VALUE
//! }
//!
//! assert!(describe::<A>());
//! assert!(!describe::<C>());
//! assert!(A::HAS_FUNC_A);
//! ```
//!
//! Deriving on a generic type is rejected, since the probe cannot see
//! through type parameters:
//!
//! ```compile_fail
//! use cap_gate::Probe;
//!
//! #[derive(Probe)]
//! struct Wrapper<T>(T);
//! ```
//!
//! A hand-written verdict is rejected too; only the derive and
//! `impl_probe!` may implement [`Probe`]:
//!
//! ```compile_fail
//! use core::fmt::{self, Write};
//! use cap_gate::{Absent, FuncA, Probe};
//!
//! struct Liar;
//!
//! impl FuncA for Liar {
//!     fn func_a(&self, _out: &mut dyn Write) -> fmt::Result {
//!         Ok(())
//!     }
//! }
//!
//! impl Probe for Liar {
//!     type Verdict = Absent;
//! }
//! ```

pub mod autoref;

pub use autoref::{Detect, FuncAFallback};

use crate::primitives::Bool;

/// Per-type capability verdict for `func_a`.
///
/// `Verdict` is [`Present`](crate::Present) when the type implements
/// [`FuncA`](crate::FuncA) and [`Absent`](crate::Absent) otherwise.
/// Implement it with `#[derive(Probe)]` or [`impl_probe!`](crate::impl_probe).
#[diagnostic::on_unimplemented(
    message = "`{Self}` has not been probed for `func_a`",
    label = "no `Probe` impl for `{Self}`",
    note = "add `#[derive(Probe)]` to `{Self}`, or call `cap_gate::impl_probe!({Self})`"
)]
pub trait Probe: __private::Sealed {
    type Verdict: Bool;
}

/// The verdict as a named constant. Implemented for every [`Probe`] type.
pub trait ProbeExt: Probe {
    const HAS_FUNC_A: bool;
}

impl<T: Probe + ?Sized> ProbeExt for T {
    const HAS_FUNC_A: bool = <T::Verdict as Bool>::VALUE;
}

#[doc(hidden)]
pub mod __private {
    #[diagnostic::on_unimplemented(
        message = "`Probe` for `{Self}` must come from `#[derive(Probe)]` or `cap_gate::impl_probe!`",
        label = "hand-written `Probe` impl for `{Self}`"
    )]
    pub trait Sealed {}
}

/// Concrete-type detection behind [`impl_probe!`](crate::impl_probe).
///
/// Only meaningful for concrete types: inside a generic function it always
/// reports `false`. Read verdicts through [`Probe`] instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __has_func_a {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::FuncAFallback;
        $crate::detect::Detect::<$T>::HAS_FUNC_A
    }};
}

/// Implement [`Probe`] for a concrete type.
///
/// `#[derive(Probe)]` expands to this. Call it directly for types the
/// derive cannot reach, such as `Box<MyType>`.
#[macro_export]
macro_rules! impl_probe {
    ($T:ty) => {
        impl $crate::detect::__private::Sealed for $T {}

        impl $crate::Probe for $T {
            type Verdict = $crate::Verdict<{ $crate::__has_func_a!($T) }>;
        }

        const _: () = assert!(
            <$T as $crate::detect::ProbeExt>::HAS_FUNC_A == $crate::__has_func_a!($T),
            "Probe verdict disagrees with the detected capability",
        );
    };
}

#[cfg(test)]
mod tests {
    use core::fmt::{self, Write};

    use super::ProbeExt;
    use crate::{Absent, FuncA, FuncB, Present, Probe};

    struct Yes;
    struct No;

    impl FuncA for Yes {
        fn func_a(&self, _out: &mut dyn Write) -> fmt::Result {
            Ok(())
        }
    }

    impl FuncB for No {
        fn func_b(&self, _out: &mut dyn Write) -> fmt::Result {
            Ok(())
        }
    }

    impl_probe!(Yes);
    impl_probe!(No);

    fn verdict_is<T: Probe<Verdict = V>, V>() {}

    #[test]
    fn test_concrete_detection() {
        const YES: bool = __has_func_a!(Yes);
        const NO: bool = __has_func_a!(No);
        assert!(YES);
        assert!(!NO);
        assert!(!__has_func_a!(&'static str));
    }

    #[test]
    fn test_probe_verdict_types() {
        verdict_is::<Yes, Present>();
        verdict_is::<No, Absent>();
        assert!(Yes::HAS_FUNC_A);
        assert!(!No::HAS_FUNC_A);
    }

    #[test]
    fn test_same_verdict_in_generic_code() {
        fn read<T: Probe>() -> bool {
            T::HAS_FUNC_A
        }
        assert_eq!(read::<Yes>(), Yes::HAS_FUNC_A);
        assert_eq!(read::<No>(), No::HAS_FUNC_A);
    }

    #[cfg(feature = "alloc")]
    mod pointers {
        use alloc::rc::Rc;
        use alloc::sync::Arc;

        use super::{No, ProbeExt, Yes};

        impl_probe!(Rc<Yes>);
        impl_probe!(Arc<Yes>);
        impl_probe!(Rc<No>);

        #[test]
        fn test_forwarded_through_shared_pointers() {
            assert!(<Rc<Yes>>::HAS_FUNC_A);
            assert!(<Arc<Yes>>::HAS_FUNC_A);
            assert!(!<Rc<No>>::HAS_FUNC_A);
        }
    }
}
