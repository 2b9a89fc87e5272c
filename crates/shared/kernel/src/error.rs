//! HTTP-facing error contract.

use std::borrow::Cow;

/// An error that knows which HTTP status it maps to and what the client should read.
///
/// Implemented by `#[sledger_error]` for enums whose variants carry `#[status(N)]`.
pub trait StatusCoded: std::error::Error {
    /// HTTP status code (`100..=599`).
    fn status_code(&self) -> u16;

    /// Client-facing message, rendered as the `detail` field of the response body.
    fn detail(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}
