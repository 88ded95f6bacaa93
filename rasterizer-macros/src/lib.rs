use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Error, Field, Result};

/// Derives `Lerp` for a struct with named fields by interpolating every field
/// with its own `Lerp` implementation. The `Lerp` trait must be in scope where
/// the derive is used.
#[proc_macro_derive(Lerp)]
pub fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let derive = parse_macro_input!(input as DeriveInput);

    match generate_impl(derive) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
    .into()
}

struct StructInfo {
    name: Ident,
    generics: syn::Generics,
    fields: Vec<Field>,
}

impl StructInfo {
    fn from_derive_input(derive: &DeriveInput) -> Result<Self> {
        let fields: Vec<Field> = if let syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(syn::FieldsNamed { ref named, .. }),
            ..
        }) = derive.data
        {
            named.iter().cloned().collect()
        } else {
            return Err(Error::new(
                Span::call_site(),
                "Lerp can only be derived for structs with named fields",
            ));
        };

        Ok(Self {
            name: derive.ident.clone(),
            generics: derive.generics.clone(),
            fields,
        })
    }
}

fn generate_field_lerp(field: &Field) -> Result<TokenStream> {
    let name = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new(Span::call_site(), "Field must have a name"))?;
    let ty = &field.ty;
    Ok(quote! {
        #name : <#ty as Lerp>::lerp(&a.#name, &b.#name, t)
    })
}

fn generate_impl(derive: DeriveInput) -> Result<TokenStream> {
    let struct_info = StructInfo::from_derive_input(&derive)?;

    let struct_name = &struct_info.name;
    let (impl_generics, ty_generics, where_clause) = struct_info.generics.split_for_impl();

    let field_assignements = struct_info
        .fields
        .iter()
        .map(generate_field_lerp)
        .collect::<Result<Vec<TokenStream>>>()?;

    Ok(quote! {
        impl #impl_generics Lerp for #struct_name #ty_generics #where_clause {
            fn lerp(a : &Self, b : &Self, t : f32) -> Self {
                Self {
                    #(#field_assignements),*
                }
            }
        }
    })
}
