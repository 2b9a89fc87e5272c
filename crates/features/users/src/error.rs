use std::borrow::Cow;

#[sledger_derive::sledger_error]
pub enum UsersError {
    #[status(404)]
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(400)]
    #[error("Invalid user{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(500)]
    #[error("Internal users error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl UsersError {
    pub(crate) fn user_not_found() -> Self {
        Self::NotFound { message: "User not found".into(), context: None }
    }

    pub(crate) fn invalid(message: &'static str) -> Self {
        Self::InvalidInput { message: message.into(), context: None }
    }
}
