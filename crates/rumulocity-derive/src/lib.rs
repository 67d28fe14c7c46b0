use proc_macro::TokenStream;

mod attr;
mod collection;
mod record;
mod util;

/// Implements `jsonc::Record` and `jsonc::Encode` for a named-field struct.
///
/// Field directives: `#[jsonc(rename = "name", skip, omit_empty, flat, collection)]`.
/// Container directive: `#[jsonc(rename_all = "camelCase")]`.
#[proc_macro_derive(JsonObject, attributes(jsonc))]
pub fn derive_json_object(input: TokenStream) -> TokenStream {
    record::derive_json_object(input.into()).into()
}

/// Implements `collection::Collection` from the `#[jsonc(collection)]` item
/// field and the `next`, `prev`, `self_link` and `statistics` fields.
#[proc_macro_derive(Collection, attributes(jsonc))]
pub fn derive_collection(input: TokenStream) -> TokenStream {
    collection::derive_collection(input.into()).into()
}
