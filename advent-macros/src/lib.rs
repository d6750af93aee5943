//! Procedural macros for the advent-core framework

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derives the `Puzzle` trait from the `PartSolver<N>` impls.
///
/// Takes the part count from the `#[puzzle(parts = N)]` attribute and
/// generates a `solve_part` that matches the part number onto the
/// corresponding `PartSolver<N>::solve`; anything else becomes
/// `SolveError::PartNotImplemented`. A `PartSolver` impl missing for any
/// part in `1..=N` is a compile error in the generated dispatch.
///
/// # Example
///
/// ```ignore
/// use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
/// use advent_macros::DailyPuzzle;
///
/// #[derive(DailyPuzzle)]
/// #[puzzle(parts = 2)]
/// struct Solver;
///
/// impl PuzzleInput for Solver { /* ... */ }
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
#[proc_macro_derive(DailyPuzzle, attributes(puzzle))]
pub fn derive_daily_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("DailyPuzzle derive requires a #[puzzle(parts = N)] attribute");

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    assert!(parts >= 1, "'parts' must be at least 1");

    let arms = (1..=parts).map(|part| {
        quote! {
            #part => <#name as ::advent_core::PartSolver<#part>>::solve(data),
        }
    });

    let expanded = quote! {
        impl ::advent_core::Puzzle for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                data: &mut Self::Data<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::advent_core::SolveError> {
                match part {
                    #(#arms)*
                    other => ::std::result::Result::Err(
                        ::advent_core::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Registers a puzzle with the plugin system.
///
/// Reads `#[register(year = ..., day = ..., tags = [...])]` and submits a
/// `PuzzlePlugin` through `inventory`, so the puzzle is picked up by
/// `RegistryBuilder::register_all_plugins` / `register_plugins`. The type
/// must implement `Puzzle`; if it doesn't, the generated bound check
/// produces the usual unsatisfied-trait error naming the type.
///
/// # Attributes
///
/// - `year`: required, the Advent of Code year
/// - `day`: required, the day number (1-25)
/// - `tags`: optional, string literals for registry-time filtering
///
/// # Example
///
/// ```ignore
/// use advent_macros::{DailyPuzzle, RegisterPuzzle};
///
/// #[derive(DailyPuzzle, RegisterPuzzle)]
/// #[puzzle(parts = 2)]
/// #[register(year = 2023, day = 13, tags = ["2023", "grid"])]
/// struct Solver;
/// ```
#[proc_macro_derive(RegisterPuzzle, attributes(register))]
pub fn derive_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("register"))
        .expect("RegisterPuzzle derive requires a #[register(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[register(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tag_strs = tags.iter().map(|s| s.as_str());
    let tags_array = quote! { &[#(#tag_strs),*] };

    let expanded = quote! {
        const _: () = {
            trait MustImplementPuzzle: ::advent_core::Puzzle {}
            impl MustImplementPuzzle for #name {}
        };

        ::advent_core::inventory::submit! {
            ::advent_core::PuzzlePlugin {
                year: #year,
                day: #day,
                puzzle: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
