//! `#[derive(Probe)]` expansion.
//!
//! Two-layer bridge so the generated impl can use `$crate` paths:
//! 1. `#[derive(Probe)]` (this proc-macro) emits `::cap_gate::impl_probe!(Name);`
//! 2. `impl_probe!` (decl-macro in cap-gate) writes the `Probe` impl

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, spanned::Spanned};

pub fn expand_derive_probe(input: DeriveInput) -> TokenStream {
    match check_concrete(&input) {
        Ok(()) => {
            let name = &input.ident;
            quote! {
                ::cap_gate::impl_probe!(#name);
            }
        }
        Err(e) => e.to_compile_error(),
    }
}

/// The probe resolves against concrete types only; inside a generic impl it
/// would always answer `false`, so generic types are refused up front.
fn check_concrete(input: &DeriveInput) -> syn::Result<()> {
    let generics = &input.generics;
    if generics.params.is_empty() && generics.where_clause.is_none() {
        return Ok(());
    }
    Err(syn::Error::new(
        generics.span(),
        format!(
            "Probe cannot be derived for generic type `{}`; use `cap_gate::impl_probe!` on each concrete instantiation",
            input.ident
        ),
    ))
}
