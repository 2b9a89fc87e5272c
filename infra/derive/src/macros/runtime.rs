use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands `#[sledger_runtime::main(profile)]`.
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            input.sig.fn_token,
            "#[sledger_runtime::main] expects an `async fn`",
        )
        .to_compile_error();
    }
    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig,
            "#[sledger_runtime::main] expects the function to return a `Result`",
        )
        .to_compile_error();
    }

    let profile = match profile_call(args) {
        Ok(tokens) => tokens,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let runtime = ::sledger_runtime::build_runtime(&#profile)?;
            runtime.block_on(async move #block)
        }
    }
}

fn profile_call(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::sledger_runtime::RuntimeConfig::default() });
    }

    let ident: syn::Ident = syn::parse2(args)?;
    match ident.to_string().as_str() {
        "server" => Ok(quote! { ::sledger_runtime::RuntimeConfig::server() }),
        "compact" => Ok(quote! { ::sledger_runtime::RuntimeConfig::compact() }),
        "default" => Ok(quote! { ::sledger_runtime::RuntimeConfig::default() }),
        _ => Err(Error::new_spanned(ident, "unknown runtime profile; expected server, compact or default")),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else { return false };
    let Type::Path(path) = ty.as_ref() else { return false };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
