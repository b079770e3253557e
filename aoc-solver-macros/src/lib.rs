//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro submits a `SolverPlugin` to the inventory collection, so the
/// runner's registry picks the solution up without any lookup by name. The
/// day comes from the type's `Solver::DAY`.
///
/// # Attributes
///
/// - `tags`: Optional. Array of string literals for filtering (e.g., `["easy", "wip"]`)
///
/// # Requirements
///
/// The type must be a unit struct implementing the `Solver` trait with a
/// `DAY` between 1 and 25. Both are checked at compile time.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{Answer, AutoRegisterSolver, SolveError, Solver};
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(tags = ["easy"])]
/// pub struct Day01;
///
/// impl Solver for Day01 {
///     const DAY: u8 = 1;
///     // ... part1 / part2
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoRegisterSolver does not support generic solvers",
        ));
    }

    let mut tags: Vec<String> = Vec::new();

    // The #[aoc(...)] attribute is optional
    if let Some(aoc_attr) = input.attrs.iter().find(|attr| attr.path().is_ident("aoc")) {
        aoc_attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?; // Consume the '='
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    match lit {
                        Lit::Str(lit_str) => tags.push(lit_str.value()),
                        other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
                Ok(())
            } else {
                Err(meta.error("unsupported #[aoc(...)] key, expected `tags`"))
            }
        })?;
    }

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    Ok(quote! {
        const _: () = {
            // Custom trait to provide a better error message
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}

            assert!(
                <#name as ::aoc_solver::Solver>::DAY >= 1
                    && <#name as ::aoc_solver::Solver>::DAY <= 25,
                "Solver::DAY must be between 1 and 25"
            );
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                day: <#name as ::aoc_solver::Solver>::DAY,
                solver: &#name,
                tags: #tags_array,
            }
        }
    })
}
