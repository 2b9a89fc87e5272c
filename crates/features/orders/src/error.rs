use sledger_kernel::security::OwnershipError;
use std::borrow::Cow;

#[sledger_derive::sledger_error]
pub enum OrdersError {
    #[status(404)]
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(403)]
    #[error("Forbidden{}: {message}", format_context(.context))]
    Forbidden { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(400)]
    #[error("Invalid order{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The order's current status does not allow the operation.
    #[status(400)]
    #[error("Invalid order state{}: {message}", format_context(.context))]
    InvalidState { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(500)]
    #[error("Internal orders error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<OwnershipError> for OrdersError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::Forbidden { message, context } => Self::Forbidden { message, context },
        }
    }
}

impl OrdersError {
    pub(crate) fn order_not_found() -> Self {
        Self::NotFound { message: "Order not found".into(), context: None }
    }

    pub(crate) fn state(message: &'static str) -> Self {
        Self::InvalidState { message: message.into(), context: None }
    }
}
