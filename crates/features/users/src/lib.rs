//! Users feature slice: registration, profile read/update and lookup by email.

mod directory;
mod error;
#[cfg(feature = "server")]
mod handlers;
mod model;

pub use crate::directory::UserDirectory;
pub use crate::error::{UsersError, UsersErrorExt};
#[cfg(feature = "server")]
pub use crate::handlers::router;
pub use crate::model::{EmailQuery, NewUser, ProfilePatch, User};

use sledger_kernel::domain::registry::InitializedSlice;

/// Users feature state.
#[sledger_derive::sledger_slice]
pub struct Users {
    pub directory: UserDirectory,
}

/// Initialize the users feature with an empty directory.
///
/// # Errors
/// Infallible today; the signature matches the other slices.
pub fn init() -> Result<InitializedSlice, UsersError> {
    let slice = Users::new(UsersInner { directory: UserDirectory::new() });
    tracing::info!("Users slice initialized");
    Ok(InitializedSlice::new(slice))
}
