use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

mod table_macro;

/// Derive macro for implementing `TypeIdentity`.
///
/// The generated impl reports `TypeKey::of::<Self>()` and hands out `self`
/// as `&dyn Any`, which is what typed handlers downcast from.
#[proc_macro_derive(TypeIdentity)]
pub fn derive_type_identity(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);
    input
        .generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: 'static));

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::dyadic::TypeIdentity for #name #ty_generics #where_clause {
            fn type_key(&self) -> ::dyadic::TypeKey {
                ::dyadic::TypeKey::of::<Self>()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };

    TokenStream::from(expanded)
}

/// Build a `DispatchRegistry` from a table of typed handlers.
///
/// ```rust,ignore
/// let intersects = dyadic::dispatch_table! {
///     dyn Shape => bool, commutative;
///     (Rectangle, Rectangle) => rect_rect,
///     (Rectangle, Triangle) => rect_tri,
/// };
/// ```
///
/// The header names the base operands are viewed through, the output type,
/// and optionally `commutative` or `ordered` (the default). Each entry
/// registers its handler with `register_typed`, so handlers take the concrete
/// types: `fn rect_tri(r: &Rectangle, t: &Triangle) -> bool`. Entries are
/// registered top to bottom; a repeated pair replaces the earlier one.
#[proc_macro]
pub fn dispatch_table(input: TokenStream) -> TokenStream {
    table_macro::dispatch_table_impl(input)
}
