//! Procedural macros for the aoc-launcher library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{DeriveInput, Lit, LitInt, LitStr, parse_macro_input};

/// Derive macro for registering a solution unit with the plugin system
///
/// Generates an `inventory` submission of an `aoc_launcher::UnitPlugin`, so the unit
/// shows up in any catalog built with `register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `parts`: Optional. Which parts the unit implements, `[1]`, `[2]` or `[1, 2]` (default)
/// - `name`: Optional. Display name; defaults to the type name
///
/// # Requirements
///
/// The type must implement `PartBehavior<N>` for every listed part. A missing impl is a
/// compile-time error naming the part:
///
/// ```text
/// error[E0277]: the trait bound `Day3: PartBehavior<2>` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_launcher::{AutoRegisterUnit, BehaviorError, PartBehavior};
///
/// #[derive(AutoRegisterUnit)]
/// #[aoc(year = 2023, day = 3, parts = [1], name = "Gear Ratios")]
/// struct Day3;
///
/// impl PartBehavior<1> for Day3 {
///     fn run() -> Result<(), BehaviorError> {
///         Ok(())
///     }
/// }
/// ```
#[proc_macro_derive(AutoRegisterUnit, attributes(aoc))]
pub fn derive_auto_register_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct UnitAttr {
    year: u16,
    day: u8,
    parts: Vec<u8>,
    name: Option<String>,
}

fn parse_attr(input: &DeriveInput) -> syn::Result<UnitAttr> {
    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new(
                input.ident.span(),
                "AutoRegisterUnit derive macro requires #[aoc(...)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut parts: Option<Vec<u8>> = None;
    let mut name: Option<String> = None;

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            name = Some(lit.value());
        } else if meta.path.is_ident("parts") {
            // parts = [1, 2]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let mut listed = Vec::new();
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                let Lit::Int(lit_int) = &lit else {
                    return Err(syn::Error::new(lit.span(), "parts must be integers"));
                };
                let part: u8 = lit_int.base10_parse()?;
                if part != 1 && part != 2 {
                    return Err(syn::Error::new(lit.span(), "parts must be 1 or 2"));
                }
                if listed.contains(&part) {
                    return Err(syn::Error::new(lit.span(), "part listed twice"));
                }
                listed.push(part);
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
            if listed.is_empty() {
                return Err(meta.error("parts must list at least one part"));
            }
            parts = Some(listed);
        } else {
            return Err(meta.error("unsupported aoc attribute, expected year, day, parts or name"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new(aoc_attr.span(), "missing required 'year'"))?;
    let day = day.ok_or_else(|| syn::Error::new(aoc_attr.span(), "missing required 'day'"))?;

    Ok(UnitAttr {
        year,
        day,
        parts: parts.unwrap_or_else(|| vec![1, 2]),
        name,
    })
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "AutoRegisterUnit cannot be derived for generic types",
        ));
    }

    let attr = parse_attr(input)?;
    let ident = &input.ident;
    let year = attr.year;
    let day = attr.day;
    let name = attr.name.unwrap_or_else(|| ident.to_string());

    let behavior = |part: u8| {
        if attr.parts.contains(&part) {
            quote! {
                ::core::option::Option::Some(
                    <#ident as ::aoc_launcher::PartBehavior<#part>>::run as ::aoc_launcher::Behavior
                )
            }
        } else {
            quote! { ::core::option::Option::None }
        }
    };
    let part_1 = behavior(1);
    let part_2 = behavior(2);

    // Compile-time check that every listed part is implemented
    let checks = attr.parts.iter().map(|part| {
        let check = quote::format_ident!("MustImplementPart{}", part);
        quote! {
            trait #check: ::aoc_launcher::PartBehavior<#part> {}
            impl #check for #ident {}
        }
    });

    Ok(quote! {
        const _: () = {
            #(#checks)*
        };

        ::aoc_launcher::inventory::submit! {
            ::aoc_launcher::UnitPlugin {
                year: #year,
                day: #day,
                name: #name,
                part_1: #part_1,
                part_2: #part_2,
            }
        }
    })
}
