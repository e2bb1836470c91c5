//! Table construction macro.
//!
//! This module contains:
//! - `dispatch_table!` - Function-like macro building a registry from typed entries

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, Ident, Token, Type, parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// `dyn Shape => bool, commutative;`
struct Header {
    base: Type,
    output: Type,
    commutative: bool,
}

impl Parse for Header {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let base: Type = input.parse()?;
        input.parse::<Token![=>]>()?;
        let output: Type = input.parse()?;

        let mut commutative = false;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let mode: Ident = input.parse()?;
            commutative = match mode.to_string().as_str() {
                "commutative" => true,
                "ordered" => false,
                other => {
                    return Err(syn::Error::new(
                        mode.span(),
                        format!("unknown mode `{}`, expected `commutative` or `ordered`", other),
                    ));
                }
            };
        }

        input.parse::<Token![;]>()?;
        Ok(Header {
            base,
            output,
            commutative,
        })
    }
}

/// `(Rectangle, Triangle) => rect_tri`
struct Entry {
    first: Type,
    second: Type,
    handler: Expr,
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        parenthesized!(content in input);
        let first: Type = content.parse()?;
        content.parse::<Token![,]>()?;
        let second: Type = content.parse()?;
        if !content.is_empty() {
            return Err(content.error("expected exactly two operand types"));
        }

        input.parse::<Token![=>]>()?;
        let handler: Expr = input.parse()?;

        Ok(Entry {
            first,
            second,
            handler,
        })
    }
}

struct Table {
    header: Header,
    entries: Punctuated<Entry, Token![,]>,
}

impl Parse for Table {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let header: Header = input.parse()?;
        let entries = Punctuated::parse_terminated(input)?;
        Ok(Table { header, entries })
    }
}

/// Implementation of the `dispatch_table!` macro.
///
/// Expands to a block expression evaluating to the populated registry.
pub fn dispatch_table_impl(input: TokenStream) -> TokenStream {
    let table = parse_macro_input!(input as Table);
    let Header {
        base,
        output,
        commutative,
    } = &table.header;

    let registrations = table.entries.iter().map(|entry| {
        let Entry {
            first,
            second,
            handler,
        } = entry;
        quote! {
            __dyadic_registry.register_typed::<#first, #second, _>(#handler);
        }
    });

    let expanded = quote! {
        {
            let mut __dyadic_registry =
                ::dyadic::DispatchRegistry::<#base, #output, #commutative>::new();
            #(#registrations)*
            __dyadic_registry
        }
    };

    TokenStream::from(expanded)
}
