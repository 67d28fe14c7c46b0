use crate::{
    attr::RecordInput,
    util::{type_param_bounds, where_clause_with_bounds},
};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

// derive_json_object
pub fn derive_json_object(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let record = match RecordInput::from_derive_input(&input) {
        Ok(record) => record,
        Err(err) => return err.write_errors(),
    };

    let ident = &record.ident;
    let record_name = record.name();
    let fields = record.fields();

    let metas = fields
        .iter()
        .map(|field| field.meta_expr(record.rename_all));

    // skipped fields are never read, so their type need not implement Encode
    let value_arms = fields.iter().enumerate().map(|(index, field)| {
        if field.skip {
            quote! {
                #index => ::core::option::Option::Some(&() as &dyn ::rumulocity::jsonc::Encode),
            }
        } else {
            let field_ident = field.ident();
            quote! {
                #index => ::core::option::Option::Some(&self.#field_ident as &dyn ::rumulocity::jsonc::Encode),
            }
        }
    });

    let bounds = type_param_bounds(&record.generics, &quote!(::rumulocity::jsonc::Encode));
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let where_clause = where_clause_with_bounds(where_clause, &bounds);

    quote! {
        impl #impl_generics ::rumulocity::jsonc::Record for #ident #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #record_name
            }

            fn field_meta(&self) -> &'static [::rumulocity::jsonc::FieldMeta] {
                const FIELDS: &[::rumulocity::jsonc::FieldMeta] = &[#(#metas),*];

                FIELDS
            }

            fn field_value(&self, index: usize) -> ::core::option::Option<&dyn ::rumulocity::jsonc::Encode> {
                match index {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::rumulocity::jsonc::Encode for #ident #ty_generics #where_clause {
            fn node(&self) -> ::rumulocity::jsonc::Node<'_> {
                ::rumulocity::jsonc::Node::Record(self)
            }

            fn kind(&self) -> ::rumulocity::jsonc::Kind {
                ::rumulocity::jsonc::Kind::Record
            }
        }
    }
}
