use super::derived_trait_names;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, FieldsNamed, Ident, LitInt, Type, Variant};

const STATUS_ATTR: &str = "status";
const FALLBACK_STATUS: u16 = 500;

struct ErrorVariant {
    ident: Ident,
    source: Option<(Ident, Type)>,
    has_context: bool,
    has_message: bool,
    status: Option<u16>,
    cfg_attrs: Vec<Attribute>,
}

impl ErrorVariant {
    fn parse(variant: &Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "sledger_error variants must use named fields (message/source/context)",
            ));
        };

        let has_context = context_field(fields)?;
        let source = source_field(fields);
        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variants with a source need `context: Option<Cow<'static, str>>`",
            ));
        }

        Ok(Self {
            ident: variant.ident.clone(),
            source,
            has_context,
            has_message: fields.named.iter().any(|f| f.ident.as_ref().is_some_and(|i| i == "message")),
            status: status_code(&variant.attrs)?,
            cfg_attrs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect(),
        })
    }
}

pub fn expand_error(mut input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &mut input.data else {
        return syn::Error::new_spanned(&input.ident, "sledger_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    // `#[status]` is consumed here; thiserror would reject it.
    for variant in &mut data.variants {
        variant.attrs.retain(|attr| !attr.path().is_ident(STATUS_ATTR));
    }

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = derived_trait_names(&input.attrs);
    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Error") {
        missing.push(quote! { ::thiserror::Error });
    }
    let derive_attr = if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impl(name, &ext, v));
    let internal_impls = internal_impls(name, &variants);
    let status_impl = status_impl(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls
        #status_impl

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ErrorVariant { ident, cfg_attrs, .. } = v;
        quote! { #(#cfg_attrs)* #name::#ident { context, .. } => *context = Some(note.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(
                self,
                note: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            #[allow(unreachable_patterns)]
            fn context(self, note: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impl(name: &Ident, ext: &Ident, v: &ErrorVariant) -> Option<TokenStream> {
    if v.ident == "Internal" || v.has_message {
        return None;
    }
    let (field, ty) = v.source.as_ref()?;
    let ErrorVariant { ident, cfg_attrs, .. } = v;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(source: #ty) -> Self {
                Self::#ident { #field: source, context: None }
            }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                note: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name> {
                self.map_err(|source| #name::#ident { #field: source, context: Some(note.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variants: &[ErrorVariant]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == "Internal" && v.has_message) else {
        return quote! {};
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// Emits `StatusCoded` only when at least one variant is annotated; infrastructure
/// crates that never surface over HTTP stay free of the kernel dependency.
fn status_impl(name: &Ident, variants: &[ErrorVariant]) -> TokenStream {
    if variants.iter().all(|v| v.status.is_none()) {
        return quote! {};
    }

    let code_arms = variants.iter().map(|v| {
        let ErrorVariant { ident, cfg_attrs, .. } = v;
        let code = v.status.unwrap_or(FALLBACK_STATUS);
        quote! { #(#cfg_attrs)* Self::#ident { .. } => #code, }
    });

    let detail_arms = variants.iter().filter(|v| v.has_message).map(|v| {
        let ErrorVariant { ident, cfg_attrs, .. } = v;
        quote! {
            #(#cfg_attrs)* Self::#ident { message, .. } => ::std::borrow::Cow::Borrowed(&**message),
        }
    });

    quote! {
        #[automatically_derived]
        impl ::sledger_kernel::error::StatusCoded for #name {
            fn status_code(&self) -> u16 {
                match self {
                    #(#code_arms)*
                }
            }

            #[allow(unreachable_patterns)]
            fn detail(&self) -> ::std::borrow::Cow<'_, str> {
                match self {
                    #(#detail_arms)*
                    other => ::std::borrow::Cow::Owned(other.to_string()),
                }
            }
        }
    }
}

fn status_code(attrs: &[Attribute]) -> syn::Result<Option<u16>> {
    let Some(attr) = attrs.iter().find(|a| a.path().is_ident(STATUS_ATTR)) else {
        return Ok(None);
    };
    let lit: LitInt = attr.parse_args()?;
    let code: u16 = lit.base10_parse()?;
    if !(100..=599).contains(&code) {
        return Err(syn::Error::new_spanned(lit, "HTTP status must be within 100..=599"));
    }
    Ok(Some(code))
}

fn context_field(fields: &FieldsNamed) -> syn::Result<bool> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(false);
    };
    if is_optional_static_cow(&field.ty) {
        Ok(true)
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<(Ident, Type)> {
    fields
        .named
        .iter()
        .find(|f| {
            f.ident.as_ref().is_some_and(|i| i == "source")
                || f.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
        })
        .and_then(|f| f.ident.clone().map(|ident| (ident, f.ty.clone())))
}

/// Matches `Option<Cow<'static, str>>` by trailing path segments.
fn is_optional_static_cow(ty: &Type) -> bool {
    fn last_generic_args(ty: &Type, expected: &str) -> Option<Vec<syn::GenericArgument>> {
        let Type::Path(path) = ty else { return None };
        let segment = path.path.segments.last()?;
        if segment.ident != expected {
            return None;
        }
        let syn::PathArguments::AngleBracketed(args) = &segment.arguments else { return None };
        Some(args.args.iter().cloned().collect())
    }

    let Some(option_args) = last_generic_args(ty, "Option") else { return false };
    let [syn::GenericArgument::Type(cow)] = option_args.as_slice() else { return false };
    let Some(cow_args) = last_generic_args(cow, "Cow") else { return false };
    let [syn::GenericArgument::Lifetime(lt), syn::GenericArgument::Type(Type::Path(inner))] =
        cow_args.as_slice()
    else {
        return false;
    };

    lt.ident == "static" && inner.path.segments.last().is_some_and(|seg| seg.ident == "str")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expanded(input: DeriveInput) -> String {
        expand_error(input).to_string()
    }

    #[test]
    fn tuple_variants_are_rejected() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[error("IO error: {0}")]
                Io(std::io::Error),
            }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("named fields"));
    }

    #[test]
    fn source_without_context_is_rejected() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[error("IO error: {source}")]
                Io { source: std::io::Error },
            }
        });
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn context_type_is_checked() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[error("bad")]
                Bad { message: String, context: Option<String> },
            }
        });
        assert!(out.contains("Option<Cow<'static, str>>"));
    }

    #[test]
    fn status_out_of_range_is_rejected() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[status(42)]
                #[error("bad")]
                Bad { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
            }
        });
        assert!(out.contains("100..=599"));
    }

    #[test]
    fn status_attribute_is_consumed() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[status(404)]
                #[error("missing")]
                Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
            }
        });
        assert!(!out.contains("# [status"));
        assert!(out.contains("StatusCoded"));
        assert!(out.contains("404u16"));
    }

    #[test]
    fn no_status_means_no_kernel_dependency() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[error("internal")]
                Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
            }
        });
        assert!(!out.contains("sledger_kernel"));
        assert!(out.contains("impl From <"));
    }
}
