//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::DefinedUnit` and `crate::Extended`, so it is intended to be used by `mensura-core`
//! (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit` (with `Wrapped = crate::Extended<MyUnit>`)
//! - `crate::DefinedUnit for MyUnit`
//! - one regional-system marker impl per entry in `systems(...)`
//!
//! Display formatting is not emitted here: `mensura-core` has a blanket `Display` for measurements that
//! renders composite unit symbols recursively.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `quantity = SomeQuantity`: physical-quantity marker type
//! - `ratio = 1000.0`: conversion ratio to the canonical unit of the quantity
//! - `systems(metric, uk_imperial, us_customary)`: optional list of regional measurement systems the
//!   unit participates in; each entry emits the matching marker impl (`crate::UsedInMetric`, …)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` plus catalog and regional-system marker impls for a unit type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `quantity`, and
/// `ratio`; `systems(...)` is optional.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[unit(...)] attribute
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let quantity = &unit_attr.quantity;
    let ratio = &unit_attr.ratio;

    let system_impls = unit_attr.systems.iter().map(|system| {
        let marker = system.marker_path();
        quote! {
            impl #marker for #name {}
        }
    });

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            type Quant = #quantity;
            const SYMBOL: &'static str = #symbol;
            type Wrapped = crate::Extended<#name>;
        }

        impl crate::DefinedUnit for #name {}

        #(#system_impls)*
    };

    Ok(expanded)
}

/// One entry of the `systems(...)` list.
#[derive(Clone, Copy, Debug, PartialEq)]
enum System {
    Metric,
    UkImperial,
    UsCustomary,
}

impl System {
    fn marker_path(self) -> TokenStream2 {
        match self {
            System::Metric => quote! { crate::UsedInMetric },
            System::UkImperial => quote! { crate::UsedInUKImperial },
            System::UsCustomary => quote! { crate::UsedInUSCustomary },
        }
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    quantity: Expr,
    ratio: Expr,
    systems: Vec<System>,
    // Future extensions:
    // long_name: Option<LitStr>,
    // plural: Option<LitStr>,
    // aliases: Option<Vec<LitStr>>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut quantity: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut systems: Vec<System> = Vec::new();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    input.parse::<Token![=]>()?;
                    symbol = Some(input.parse()?);
                }
                "quantity" => {
                    input.parse::<Token![=]>()?;
                    quantity = Some(input.parse()?);
                }
                "ratio" => {
                    input.parse::<Token![=]>()?;
                    ratio = Some(input.parse()?);
                }
                "systems" => {
                    let content;
                    syn::parenthesized!(content in input);
                    let entries = content.parse_terminated(Ident::parse, Token![,])?;
                    for entry in entries {
                        let system = match entry.to_string().as_str() {
                            "metric" => System::Metric,
                            "uk_imperial" => System::UkImperial,
                            "us_customary" => System::UsCustomary,
                            other => {
                                return Err(syn::Error::new(
                                    entry.span(),
                                    format!("unknown measurement system `{}`", other),
                                ));
                            }
                        };
                        if systems.contains(&system) {
                            return Err(syn::Error::new(
                                entry.span(),
                                format!("duplicate measurement system `{}`", entry),
                            ));
                        }
                        systems.push(system);
                    }
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let quantity = quantity
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `quantity`"))?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            quantity,
            ratio,
            systems,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
