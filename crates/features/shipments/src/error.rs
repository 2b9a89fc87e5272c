use sledger_kernel::security::OwnershipError;
use std::borrow::Cow;

#[sledger_derive::sledger_error]
pub enum ShipmentsError {
    #[status(404)]
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(403)]
    #[error("Forbidden{}: {message}", format_context(.context))]
    Forbidden { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Delay prediction needs both coordinates.
    #[status(400)]
    #[error("Missing coordinates{}: {message}", format_context(.context))]
    MissingCoordinates { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(500)]
    #[error("Internal shipments error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<OwnershipError> for ShipmentsError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::Forbidden { message, context } => Self::Forbidden { message, context },
        }
    }
}

impl ShipmentsError {
    pub(crate) fn not_found(message: &'static str) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }
}
