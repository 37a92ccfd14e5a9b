//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// `#[aoc_solver(...)]` accepts:
/// - `max_parts`: Required. Number of parts (each needs a `PartSolver<N>` impl)
/// - `skip_in_batch`: Optional. Parts to leave out when every puzzle runs in one batch
///
/// # Requirements
///
/// The type must implement `AocParser` and `PartSolver<1>..=PartSolver<max_parts>`.
/// A missing part impl is reported at compile time:
///
/// ```text
/// error[E0277]: the trait bound `Day3: PartSolver<2>` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::AocSolver;
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2, skip_in_batch = [2])]
/// struct Day3;
///
/// // impl AocParser for Day3 { ... }
/// // impl PartSolver<1> for Day3 { ... }
/// // impl PartSolver<2> for Day3 { ... }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AocSolver derive macro requires #[aoc_solver(max_parts = N)] attribute",
            )
        })?;

    let mut max_parts: Option<u8> = None;
    let mut skip_in_batch: Vec<u8> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Int(lit_int) => max_parts = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "max_parts must be an integer")),
            }
        } else if meta.path.is_ident("skip_in_batch") {
            // Parse array of integer literals: skip_in_batch = [1, 2]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Int(lit_int) => skip_in_batch.push(lit_int.base10_parse()?),
                    other => {
                        return Err(syn::Error::new_spanned(other, "parts must be integers"));
                    }
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc_solver attribute"));
        }
        Ok(())
    })?;

    let max_parts = max_parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required `max_parts`"))?;
    if max_parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1"));
    }
    if let Some(part) = skip_in_batch.iter().find(|p| **p == 0 || **p > max_parts) {
        return Err(syn::Error::new_spanned(
            attr,
            format!("skip_in_batch part {} is outside 1..={}", part, max_parts),
        ));
    }

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;
            const SKIP_IN_BATCH: &'static [u8] = &[#(#skip_in_batch),*];

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::aoc_solver::Answer, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}
