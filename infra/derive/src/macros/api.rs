use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, ItemFn, LitBool, LitStr};

const DEFAULT_RENAME: &str = "snake_case";

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<LitBool>,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let mut parsed = Self::default();
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("rename_all") {
                if parsed.rename_all.is_some() {
                    return Err(meta.error("duplicate `rename_all`"));
                }
                parsed.rename_all = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("deny_unknown_fields") {
                if parsed.deny_unknown_fields.is_some() {
                    return Err(meta.error("duplicate `deny_unknown_fields`"));
                }
                parsed.deny_unknown_fields = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `rename_all` or `deny_unknown_fields`"))
            }
        });
        syn::parse::Parser::parse2(parser, args)?;
        Ok(parsed)
    }
}

/// What the item already says about serde, so the macro never emits a duplicate.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl ExistingSerde {
    fn scan(input: &DeriveInput) -> syn::Result<Self> {
        let mut found = Self::default();
        for attr in input.attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    found.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    found.deny_unknown_fields = true;
                } else if meta.input.peek(syn::Token![=]) {
                    let _: syn::Expr = meta.value()?.parse()?;
                } else if meta.input.peek(syn::token::Paren) {
                    let _nested;
                    syn::parenthesized!(_nested in meta.input);
                }
                Ok(())
            })?;
        }
        Ok(found)
    }
}

/// Expands `#[api_model]` on structs and enums.
///
/// Structs and enums get `Debug`/`Serialize`/`Deserialize`, a `snake_case` rename policy and,
/// behind the consuming crate's `server` feature, `utoipa::ToSchema`. Structs tolerate unknown
/// fields unless `deny_unknown_fields = true` is passed.
pub fn expand_api_model(args: TokenStream, input: DeriveInput) -> TokenStream {
    match try_expand_model(args, input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand_model(args: TokenStream, input: DeriveInput) -> syn::Result<TokenStream> {
    if matches!(input.data, Data::Union(_)) {
        return Err(syn::Error::new_spanned(&input.ident, "api_model does not support unions"));
    }

    let args = ModelArgs::parse(args)?;
    let existing = ExistingSerde::scan(&input)?;
    let derives = derived_trait_names(&input.attrs);

    let mut missing = Vec::new();
    for (name, path) in [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ] {
        if !derives.contains(name) {
            missing.push(path);
        }
    }
    let derive_attr = if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let wanted = args.rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));
    let rename_attr = match &existing.rename_all {
        Some(current) if current.value() != wanted.value() => {
            return Err(syn::Error::new_spanned(
                current,
                "serde(rename_all) conflicts with api_model(rename_all); keep one of them",
            ));
        },
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #wanted)] },
    };

    let deny = args.deny_unknown_fields.as_ref().is_some_and(LitBool::value);
    let deny_attr = match (&input.data, deny, existing.deny_unknown_fields) {
        (Data::Struct(_), true, false) => quote! { #[serde(deny_unknown_fields)] },
        (Data::Enum(_), true, _) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields only applies to structs",
            ));
        },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands `#[api_handler]`: documents the handler with `utoipa::path` under the `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}
