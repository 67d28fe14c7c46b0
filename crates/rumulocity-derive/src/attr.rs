use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromField, FromMeta, ast::Data};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident, Type, ext::IdentExt};

///
/// RecordInput
///
/// A named-field struct and its `#[jsonc(...)]` directives.
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(jsonc), supports(struct_named))]
pub struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<(), FieldInput>,

    #[darling(default)]
    pub rename_all: Option<RenameRule>,
}

impl RecordInput {
    pub fn fields(&self) -> Vec<&FieldInput> {
        match &self.data {
            Data::Struct(fields) => fields.fields.iter().collect(),
            Data::Enum(_) => Vec::new(),
        }
    }

    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

///
/// FieldInput
///

#[derive(Debug, FromField)]
#[darling(attributes(jsonc))]
pub struct FieldInput {
    pub ident: Option<Ident>,
    pub ty: Type,

    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub skip: bool,

    #[darling(default)]
    pub omit_empty: bool,

    #[darling(default)]
    pub flat: bool,

    #[darling(default)]
    pub collection: bool,
}

impl FieldInput {
    pub fn ident(&self) -> &Ident {
        self.ident.as_ref().expect("named field")
    }

    pub fn name(&self) -> String {
        self.ident().unraw().to_string()
    }

    /// `FieldMeta` builder expression for this field.
    pub fn meta_expr(&self, rename_all: Option<RenameRule>) -> TokenStream {
        let name = self.name();
        let rename = self
            .rename
            .clone()
            .or_else(|| rename_all.map(|rule| rule.apply(&name)));

        let mut expr = quote!(::rumulocity::jsonc::FieldMeta::new(#name));
        if let Some(rename) = rename {
            expr = quote!(#expr.rename(#rename));
        }
        if self.skip {
            expr = quote!(#expr.skip());
        }
        if self.omit_empty {
            expr = quote!(#expr.omit_empty());
        }
        if self.flat {
            expr = quote!(#expr.flat());
        }
        if self.collection {
            expr = quote!(#expr.collection());
        }

        expr
    }
}

///
/// RenameRule
///
/// Container-level `rename_all`; an explicit field `rename` still wins.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenameRule {
    Camel,
    Pascal,
    Snake,
    Kebab,
    UpperSnake,
}

impl RenameRule {
    pub fn apply(self, ident: &str) -> String {
        let case = match self {
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::Snake => Case::Snake,
            Self::Kebab => Case::Kebab,
            Self::UpperSnake => Case::UpperSnake,
        };

        // words split on `_` only, so digits stay attached like serde keeps them
        ident.from_case(Case::Snake).to_case(case)
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING_SNAKE_CASE" => Ok(Self::UpperSnake),
            _ => Err(darling::Error::custom(format!(
                "unknown rename_all rule `{value}`"
            ))),
        }
    }
}
