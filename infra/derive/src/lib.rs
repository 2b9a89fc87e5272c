#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every SupplyLedger crate: error enums that render as HTTP
//! problems, feature slice handles, API models/handlers and the runtime entry point.
//!
//! Examples below are `ignore`d because they need the consuming crates in scope.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a blocking `fn main` on a profiled Tokio runtime.
///
/// Profiles: `server` (throughput, long keep-alive), `compact` (half the workers, small
/// stacks) and `default`. The function must return a `Result`.
///
/// ```rust,ignore
/// #[sledger_runtime::main(server)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a wire model (request/response body or value enum).
///
/// * adds `Debug`, `Serialize`, `Deserialize` when missing;
/// * adds `utoipa::ToSchema` under the consuming crate's `server` feature;
/// * applies `serde(rename_all = "snake_case")` unless `rename_all = "..."` is given;
/// * `deny_unknown_fields = true` opts a struct into strict field checking.
///
/// ```rust,ignore
/// use sledger_derive::api_model;
///
/// #[api_model]
/// pub struct CancelOrderResponse {
///     pub message: String,
///     pub order_id: String,
/// }
///
/// #[api_model(rename_all = "lowercase")]
/// pub enum Tone { Success, Warning, Danger }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an axum handler with `utoipa::path` (under the `server` feature).
///
/// Takes the usual `utoipa::path` arguments.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/orders/stats/{user_id}", tag = ORDERS_TAG,
///     responses((status = OK, body = OrderStats)))]
/// pub async fn stats(State(state): State<ApiState>, Path(user_id): Path<u64>) -> ApiResult<Json<OrderStats>> {
///     # todo!()
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a crate error enum.
///
/// Every variant uses named fields. Conventional shapes:
/// `Variant { message: Cow<'static, str>, context: Option<Cow<'static, str>> }` and
/// `Variant { source: UpstreamError, context: Option<Cow<'static, str>> }`.
///
/// Generated items:
/// * `#[derive(Debug, thiserror::Error)]` when not already derived;
/// * `<Name>Ext` with `.context(..)` for `Result<T, Name>` and for `Result<T, Source>`;
/// * `From<Source>` for source variants;
/// * `From<&'static str>` / `From<String>` when an `Internal { message, .. }` variant exists;
/// * `sledger_kernel::error::StatusCoded` when any variant carries `#[status(N)]`
///   (unannotated variants answer 500; the `message` field becomes the response detail).
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[sledger_derive::sledger_error]
/// pub enum OrderError {
///     #[status(404)]
///     #[error("Order not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal order error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn sledger_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}

/// Declares a feature slice handle.
///
/// `struct Orders { .. }` becomes `OrdersInner { .. }` plus a cloneable `Orders` wrapping it in
/// an `Arc`, with `Deref` to the inner state and a `FeatureSlice` impl for the kernel registry.
///
/// ```rust,ignore
/// #[sledger_derive::sledger_slice]
/// pub struct Users {
///     pub directory: UserDirectory,
/// }
///
/// let slice = Users::new(UsersInner { directory: UserDirectory::default() });
/// ```
#[proc_macro_attribute]
pub fn sledger_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
