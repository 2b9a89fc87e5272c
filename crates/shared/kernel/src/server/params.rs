use sledger_derive::api_model;

/// `?user_id=` naming the caller of a user-scoped request.
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OwnerQuery {
    pub user_id: u64,
}

/// Plain acknowledgement, e.g. `{"message": "Order deleted successfully"}`.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
