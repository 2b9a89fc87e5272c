use std::borrow::Cow;

#[sledger_derive::sledger_error]
pub enum ForecastError {
    #[status(400)]
    #[error("Invalid shipment descriptor{}: {message}", format_context(.context))]
    InvalidDescriptor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(500)]
    #[error("Internal forecast error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
