//! Procedural macros for the cap-gate capability probe
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Probe)]` | struct/enum/union | Attach the `func_a` verdict to a type |

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod probe;

/// Derive macro to attach a compile-time `func_a` verdict to a type.
///
/// # Usage
/// ```ignore
/// #[derive(Probe)]
/// struct MyType;
///
/// impl FuncA for MyType { /* ... */ }
///
/// assert!(MyType::HAS_FUNC_A);
/// ```
///
/// Generic types are rejected: the probe only sees concrete types.
#[proc_macro_derive(Probe)]
pub fn derive_probe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    probe::expand_derive_probe(input).into()
}
