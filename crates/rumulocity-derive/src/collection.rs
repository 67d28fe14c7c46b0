use crate::{
    attr::{FieldInput, RecordInput},
    util::vec_element,
};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error};

// derive_collection
pub fn derive_collection(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let record = match RecordInput::from_derive_input(&input) {
        Ok(record) => record,
        Err(err) => return err.write_errors(),
    };

    match expand(&record) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(record: &RecordInput) -> Result<TokenStream, Error> {
    let ident = &record.ident;
    let fields = record.fields();

    let items = items_field(record, &fields)?;
    let items_ident = items.ident();
    let item_ty = vec_element(&items.ty).ok_or_else(|| {
        Error::new_spanned(&items.ty, "#[jsonc(collection)] field must be a Vec<T>")
    })?;

    let next = required_field(record, &fields, "next")?.ident();
    let prev = required_field(record, &fields, "prev")?.ident();

    let self_ref = find_field(&fields, "self_link").map_or_else(
        || quote!(::core::option::Option::None),
        |field| {
            let field_ident = field.ident();
            quote!(::rumulocity::collection::PageRef::page_ref(&self.#field_ident))
        },
    );

    let statistics = find_field(&fields, "statistics").map_or_else(
        || quote!(::core::option::Option::None),
        |field| {
            let field_ident = field.ident();
            quote!(::rumulocity::collection::StatisticsRef::statistics_ref(&self.#field_ident))
        },
    );

    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::rumulocity::collection::Collection for #ident #ty_generics #where_clause {
            type Item = #item_ty;

            fn self_ref(&self) -> ::core::option::Option<&str> {
                #self_ref
            }

            fn next_ref(&self) -> ::core::option::Option<&str> {
                ::rumulocity::collection::PageRef::page_ref(&self.#next)
            }

            fn prev_ref(&self) -> ::core::option::Option<&str> {
                ::rumulocity::collection::PageRef::page_ref(&self.#prev)
            }

            fn items(&self) -> &[Self::Item] {
                &self.#items_ident
            }

            fn statistics(&self) -> ::core::option::Option<&::rumulocity::collection::PagingStatistics> {
                #statistics
            }
        }
    })
}

// exactly one field carries the sequence marker
fn items_field<'a>(
    record: &RecordInput,
    fields: &[&'a FieldInput],
) -> Result<&'a FieldInput, Error> {
    let mut marked = fields.iter().copied().filter(|field| field.collection);

    let Some(first) = marked.next() else {
        return Err(Error::new_spanned(
            &record.ident,
            "Collection requires one field tagged #[jsonc(collection)]",
        ));
    };

    if let Some(second) = marked.next() {
        return Err(Error::new_spanned(
            second.ident(),
            "only one field may be tagged #[jsonc(collection)]",
        ));
    }

    Ok(first)
}

fn find_field<'a>(fields: &[&'a FieldInput], name: &str) -> Option<&'a FieldInput> {
    fields.iter().copied().find(|field| field.name() == name)
}

fn required_field<'a>(
    record: &RecordInput,
    fields: &[&'a FieldInput],
    name: &str,
) -> Result<&'a FieldInput, Error> {
    find_field(fields, name).ok_or_else(|| {
        Error::new_spanned(
            &record.ident,
            format!("Collection requires a `{name}` page reference field"),
        )
    })
}
