//! Ownership checks for user-scoped resources.
//!
//! Requests identify the caller with a `user_id`; a resource owned by someone else is
//! reported as forbidden, never silently returned.

use std::borrow::Cow;

#[sledger_derive::sledger_error]
pub enum OwnershipError {
    #[status(403)]
    #[error("Forbidden{}: {message}", format_context(.context))]
    Forbidden { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Stateless guard comparing resource owners with the requesting user.
#[derive(Debug, Clone, Copy)]
pub struct OwnershipGuard;

impl OwnershipGuard {
    /// Passes when `requester` owns the resource.
    ///
    /// `resource` names the entity in the message (`"Order"` yields
    /// `Unauthorized - Order belongs to another user`).
    ///
    /// # Errors
    /// [`OwnershipError::Forbidden`] when the ids differ.
    pub fn ensure(owner: u64, requester: u64, resource: &str) -> Result<(), OwnershipError> {
        if owner == requester {
            return Ok(());
        }
        tracing::warn!(owner, requester, resource, "Ownership check failed");
        Err(OwnershipError::Forbidden {
            message: format!("Unauthorized - {resource} belongs to another user").into(),
            context: None,
        })
    }
}
