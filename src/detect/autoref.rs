//! Inherent-const-fallback detection machinery.
//!
//! For each capability we want to detect:
//! 1. Define a fallback trait with `const HAS_X: bool = false`
//! 2. Implement the fallback for `Detect<T>` for all T
//! 3. Implement an inherent const `HAS_X = true` for `Detect<T>` where `T: X`
//!
//! When resolving `Detect::<Concrete>::HAS_X`, the compiler:
//! - If `Concrete: X`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! Neither const is computed by calling anything, so the capability's
//! method is never run while probing.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the use site.
//! Inside `fn foo<T>()` the inherent impl's bound cannot be proven and the
//! fallback always wins.

use core::marker::PhantomData;

use crate::capability::FuncA;

/// Detection wrapper type. Never constructed.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a capability trait.
macro_rules! impl_detect {
    ($Cap:ident => $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Cap Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Cap Fallback>] for Detect<T> {}
            impl<T: $Cap + ?Sized> Detect<T> { pub const $CONST: bool = true; }
        }
    };
}

impl_detect!(FuncA => HAS_FUNC_A);
