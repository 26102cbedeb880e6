//! Derive macro for pgeom's projective object structs
//!
//! `#[derive(ProjectiveObject)]` applies to a struct with a single type parameter
//! (the coefficient type) and a single named field holding the `[K; 3]`
//! homogeneous coordinates. The dual kind is named with `#[dual(...)]`:
//!
//! ```ignore
//! #[derive(Clone, Debug, ProjectiveObject)]
//! #[dual(Line)]
//! pub struct Point<K> {
//!     coords: [K; 3],
//! }
//! ```
//!
//! The derive emits:
//! * `pgeom::object::ProjectiveObject`, with `Dual = Line<K>`
//! * `PartialEq` as projective equality
//! * `From<[K; 3]>` and `Index<usize>`
//! * `Mul` (owned and by reference) as the raw join / meet, returning the dual
//! * `Display` as `(x:y:z)`

extern crate proc_macro;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields, Ident, Result};

fn dual_ident(input: &DeriveInput) -> Result<Ident> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("dual"))
        .ok_or_else(|| {
            Error::new_spanned(&input.ident, "expected a #[dual(...)] attribute naming the dual kind")
        })?;
    attr.parse_args::<Ident>()
}

fn scalar_ident(input: &DeriveInput) -> Result<Ident> {
    let params: Vec<_> = input.generics.type_params().collect();
    match params[..] {
        [param] => Ok(param.ident.clone()),
        _ => Err(Error::new_spanned(
            &input.generics,
            "expected exactly one type parameter (the coefficient type)",
        )),
    }
}

fn coords_field(input: &DeriveInput) -> Result<Ident> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(&input.ident, "ProjectiveObject can only be derived for structs"));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(&data.fields, "expected a single named coordinate field"));
    };
    let mut iter = fields.named.iter();
    match (iter.next(), iter.next()) {
        (Some(field), None) => field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "expected a named field")),
        _ => Err(Error::new_spanned(fields, "expected a single named coordinate field")),
    }
}

fn derive_projective_object2(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let dual = dual_ident(&input)?;
    let k = scalar_ident(&input)?;
    let field = coords_field(&input)?;

    Ok(quote! {
        impl<#k: ::pgeom::scalar::Ring> ::pgeom::object::ProjectiveObject for #name<#k> {
            type Scalar = #k;
            type Dual = #dual<#k>;

            #[inline]
            fn coords(&self) -> &[#k; 3] {
                &self.#field
            }

            #[inline]
            fn from_coords(coords: [#k; 3]) -> Self {
                #name { #field: coords }
            }
        }

        impl<#k: ::pgeom::scalar::Ring> ::core::cmp::PartialEq for #name<#k> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::pgeom::object::projective_eq(&self.#field, &other.#field)
            }
        }

        impl<#k> ::core::convert::From<[#k; 3]> for #name<#k> {
            fn from(coords: [#k; 3]) -> Self {
                #name { #field: coords }
            }
        }

        impl<#k> ::core::ops::Index<usize> for #name<#k> {
            type Output = #k;

            fn index(&self, i: usize) -> &#k {
                &self.#field[i]
            }
        }

        impl<#k: ::pgeom::scalar::Ring> ::core::ops::Mul<#name<#k>> for #name<#k> {
            type Output = #dual<#k>;

            fn mul(self, r: #name<#k>) -> #dual<#k> {
                ::pgeom::object::ProjectiveObject::cross(&self, &r)
            }
        }

        impl<'a, 'b, #k: ::pgeom::scalar::Ring> ::core::ops::Mul<&'b #name<#k>> for &'a #name<#k> {
            type Output = #dual<#k>;

            fn mul(self, r: &'b #name<#k>) -> #dual<#k> {
                ::pgeom::object::ProjectiveObject::cross(self, r)
            }
        }

        impl<#k: ::core::fmt::Display> ::core::fmt::Display for #name<#k> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let [x, y, z] = &self.#field;
                write!(f, "({}:{}:{})", x, y, z)
            }
        }
    })
}

#[proc_macro_derive(ProjectiveObject, attributes(dual))]
pub fn derive_projective_object(input_tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse input
    let input = parse_macro_input!(input_tokens as DeriveInput);

    derive_projective_object2(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
