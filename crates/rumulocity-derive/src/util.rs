use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, Generics, PathArguments, Type, WhereClause};

pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[TokenStream],
) -> TokenStream {
    if bounds.is_empty() {
        return where_clause
            .as_ref()
            .map_or_else(|| quote!(), |wc| quote!(#wc));
    }

    if let Some(wc) = where_clause {
        let preds = &wc.predicates;
        let comma = (!preds.empty_or_trailing()).then(|| quote!(,));
        quote!(where #preds #comma #(#bounds),*)
    } else {
        quote!(where #(#bounds),*)
    }
}

/// One `#param: #bound` predicate per type parameter.
pub fn type_param_bounds(generics: &Generics, bound: &TokenStream) -> Vec<TokenStream> {
    generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            quote!(#ident: #bound)
        })
        .collect()
}

/// Element type of a `Vec<T>` field.
pub fn vec_element(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::{DeriveInput, parse_quote};

    fn compact(tokens: impl ToTokens) -> String {
        tokens.to_token_stream().to_string().replace(' ', "")
    }

    #[test]
    fn vec_element_reads_inner_type() {
        let ty: Type = parse_quote!(::std::vec::Vec<Operation>);
        let option: Type = parse_quote!(Option<Operation>);

        assert_eq!(vec_element(&ty).map(compact).as_deref(), Some("Operation"));
        assert!(vec_element(&option).is_none());
    }

    #[test]
    fn bounds_extend_existing_where_clause() {
        let input: DeriveInput = parse_quote! {
            struct Page<T, U> where T: Clone, { items: Vec<T>, extra: U }
        };
        let bounds = type_param_bounds(&input.generics, &quote!(Encode));

        let tokens = where_clause_with_bounds(input.generics.where_clause.as_ref(), &bounds);

        assert_eq!(compact(tokens), "whereT:Clone,T:Encode,U:Encode");
    }
}
