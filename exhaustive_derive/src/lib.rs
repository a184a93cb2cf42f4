//! Derive macro for the `Exhaustive` trait of the `plenum` crate.
//!
//! The macro writes a `Representable` impl mapping the deriving type onto
//! its generic shape (right-nested `Sum` over constructors in declaration
//! order, right-nested `Product` over fields in declaration order), plus an
//! `Exhaustive` impl delegating to the structural derivation engine.
//!
//! Two classes of type are rejected at expansion time with a compile error:
//! generic types (whose enumerability depends on their instantiation; write
//! a manual `Representable` impl for the cases that make sense), and types
//! with a directly self-referential field, which have no finite enumeration.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn;

#[proc_macro_derive(Exhaustive)]
pub fn exhaustive_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    impl_exhaustive(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn impl_exhaustive(ast: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    let name = &ast.ident;

    if let Some(param) = ast.generics.params.first() {
        return Err(syn::Error::new_spanned(
            param,
            "#[derive(Exhaustive)] does not support generic types; \
             provide a manual Representable impl for the instantiations that are finite",
        ));
    }

    let (labels, shape, from_arms, into_arms) = match &ast.data {
        syn::Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "unions have no constructor structure to enumerate",
            ))
        }
        syn::Data::Struct(syn::DataStruct { fields, .. }) => {
            reject_recursive_fields(name, fields)?;
            let label = format_ident!("{}Label", name);
            let label_def = label_def(&label, &name.to_string());
            let inner_ty = product_shape(fields);
            let inner_pat = product_value(fields);
            let inner_expr = product_value(fields);
            // Constructor syntax parses identically as a pattern and as an
            // expression, so the same tokens serve both match directions.
            let ctor = constructor(&quote!(#name), fields);
            let shape = quote!(::plenum::shape::Labeled<#inner_ty, #label>);
            let from_arm = quote! {
                ::plenum::shape::Labeled(#inner_pat, _) => #ctor
            };
            let into_arm = quote! {
                #ctor => ::plenum::shape::Labeled::new(#inner_expr)
            };
            (vec![label_def], shape, vec![from_arm], vec![into_arm])
        }
        syn::Data::Enum(syn::DataEnum { variants, .. }) => {
            let mut labels = Vec::new();
            let mut payload_shapes = Vec::new();
            let mut payload_pats = Vec::new();
            let mut payload_exprs = Vec::new();
            for variant in variants {
                reject_recursive_fields(name, &variant.fields)?;
                let vname = &variant.ident;
                let label = format_ident!("{}Label", vname);
                labels.push(label_def(&label, &vname.to_string()));
                let inner_ty = product_shape(&variant.fields);
                let inner_pat = product_value(&variant.fields);
                let inner_expr = product_value(&variant.fields);
                let ctor = constructor(&quote!(#name::#vname), &variant.fields);
                payload_shapes.push(quote!(::plenum::shape::Labeled<#inner_ty, #label>));
                payload_pats.push((
                    quote!(::plenum::shape::Labeled(#inner_pat, _)),
                    ctor.clone(),
                ));
                payload_exprs.push((
                    ctor,
                    quote!(::plenum::shape::Labeled::new(#inner_expr)),
                ));
            }

            let shape = sum_shape(&payload_shapes);
            let total = payload_shapes.len();
            let from_arms = payload_pats
                .into_iter()
                .enumerate()
                .map(|(i, (pat, ctor))| {
                    let tagged = sum_wrap(i, total, pat);
                    quote!(#tagged => #ctor)
                })
                .collect();
            let into_arms = payload_exprs
                .into_iter()
                .enumerate()
                .map(|(i, (matcher, expr))| {
                    let tagged = sum_wrap(i, total, expr);
                    quote!(#matcher => #tagged)
                })
                .collect();
            (labels, shape, from_arms, into_arms)
        }
    };

    Ok(quote! {
        const _: () = {
            #(#labels)*

            impl ::plenum::shape::Representable for #name {
                type Shape = #shape;

                fn from_shape(shape: Self::Shape) -> Self {
                    match shape {
                        #(#from_arms),*
                    }
                }

                fn into_shape(self) -> Self::Shape {
                    match self {
                        #(#into_arms),*
                    }
                }
            }

            impl ::plenum::exhaust::Exhaustive for #name {
                fn enumerate() -> ::std::vec::Vec<Self> {
                    ::plenum::shape::derive_enumeration::<Self>()
                }

                fn cardinality() -> ::plenum::card::Cardinality {
                    ::plenum::shape::derive_cardinality::<Self>()
                }
            }
        };
    })
}

fn label_def(label: &syn::Ident, source_name: &str) -> TokenStream2 {
    quote! {
        pub struct #label;

        impl ::plenum::shape::ShapeLabel for #label {
            const NAME: &'static str = #source_name;
        }
    }
}

fn field_types(fields: &syn::Fields) -> Vec<&syn::Type> {
    fields.iter().map(|field| &field.ty).collect()
}

fn field_bindings(fields: &syn::Fields) -> Vec<syn::Ident> {
    (0..fields.len()).map(|i| format_ident!("pos{}", i)).collect()
}

/// Right-nested `Product` chain over the field types; `UnitShape` for a
/// fieldless constructor, a bare `Leaf` for a single field.
fn product_shape(fields: &syn::Fields) -> TokenStream2 {
    fn go(tys: &[&syn::Type]) -> TokenStream2 {
        match tys {
            [] => quote!(::plenum::shape::UnitShape),
            [only] => quote!(::plenum::shape::Leaf<#only>),
            [head, rest @ ..] => {
                let tail = go(rest);
                quote!(::plenum::shape::Product<::plenum::shape::Leaf<#head>, #tail>)
            }
        }
    }
    go(&field_types(fields))
}

/// Right-nested `Product` chain over the positional bindings. Tuple-struct
/// syntax parses identically as a pattern and as an expression, so one
/// builder serves `from_shape` match arms and `into_shape` results alike.
fn product_value(fields: &syn::Fields) -> TokenStream2 {
    fn go(vars: &[syn::Ident]) -> TokenStream2 {
        match vars {
            [] => quote!(::plenum::shape::UnitShape),
            [only] => quote!(::plenum::shape::Leaf(#only)),
            [head, rest @ ..] => {
                let tail = go(rest);
                quote!(::plenum::shape::Product(::plenum::shape::Leaf(#head), #tail))
            }
        }
    }
    go(&field_bindings(fields))
}

/// Builds (or destructures, the token stream is the same either way) the
/// deriving type's own constructor from the positional bindings.
fn constructor(path: &TokenStream2, fields: &syn::Fields) -> TokenStream2 {
    let vars = field_bindings(fields);
    match fields {
        syn::Fields::Unit => quote!(#path),
        syn::Fields::Unnamed(_) => quote!(#path( #(#vars),* )),
        syn::Fields::Named(syn::FieldsNamed { named, .. }) => {
            let fname = named.iter().map(|field| &field.ident);
            quote!(#path { #(#fname: #vars),* })
        }
    }
}

/// Right-nested `Sum` chain over the per-constructor shapes; `VoidShape`
/// for an uninhabited enum.
fn sum_shape(payloads: &[TokenStream2]) -> TokenStream2 {
    match payloads {
        [] => quote!(::plenum::shape::VoidShape),
        [only] => only.clone(),
        [head, rest @ ..] => {
            let tail = sum_shape(rest);
            quote!(::plenum::shape::Sum<#head, #tail>)
        }
    }
}

/// Tags constructor `i` of `total` into the right-nested `Sum` chain:
/// `i` layers of `Right`, then `Left` unless this is the final alternative.
fn sum_wrap(i: usize, total: usize, payload: TokenStream2) -> TokenStream2 {
    if total == 1 {
        return payload;
    }
    let last = i == total - 1;
    let mut tagged = if last {
        payload
    } else {
        quote!(::plenum::shape::Sum::Left(#payload))
    };
    let rights = if last { total - 1 } else { i };
    for _ in 0..rights {
        tagged = quote!(::plenum::shape::Sum::Right(#tagged));
    }
    tagged
}

fn reject_recursive_fields(name: &syn::Ident, fields: &syn::Fields) -> syn::Result<()> {
    for field in fields {
        if mentions(&field.ty, name) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                format!(
                    "field type mentions `{}` itself; \
                     a directly recursive type has no finite enumeration",
                    name
                ),
            ));
        }
    }
    Ok(())
}

fn mentions(ty: &syn::Type, target: &syn::Ident) -> bool {
    match ty {
        syn::Type::Path(tp) => tp.path.segments.iter().any(|seg| {
            seg.ident == *target
                || match &seg.arguments {
                    syn::PathArguments::AngleBracketed(args) => {
                        args.args.iter().any(|arg| match arg {
                            syn::GenericArgument::Type(inner) => mentions(inner, target),
                            _ => false,
                        })
                    }
                    _ => false,
                }
        }),
        syn::Type::Reference(inner) => mentions(&inner.elem, target),
        syn::Type::Paren(inner) => mentions(&inner.elem, target),
        syn::Type::Group(inner) => mentions(&inner.elem, target),
        syn::Type::Array(inner) => mentions(&inner.elem, target),
        syn::Type::Slice(inner) => mentions(&inner.elem, target),
        syn::Type::Tuple(inner) => inner.elems.iter().any(|elem| mentions(elem, target)),
        _ => false,
    }
}
