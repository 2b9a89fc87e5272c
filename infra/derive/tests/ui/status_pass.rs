use sledger_derive::sledger_error;
use sledger_kernel::error::StatusCoded;
use std::borrow::Cow;

#[sledger_error]
pub enum LookupError {
    #[status(404)]
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(400)]
    #[error("Bad input{}: {message}", format_context(.context))]
    BadInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = LookupError::NotFound { message: "Order not found".into(), context: None };
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.detail(), "Order not found");

    let err: Result<(), LookupError> =
        Err(LookupError::BadInput { message: "weight".into(), context: None });
    let err = err.context("parsing form").unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "Bad input (parsing form): weight");

    let err = LookupError::from("lock poisoned");
    assert_eq!(err.status_code(), 500);
}
