//! Everything a slice's HTTP module usually needs.

pub use crate::error::StatusCoded;
pub use crate::security::OwnershipGuard;
#[cfg(feature = "server")]
pub use crate::server::{
    ApiError, ApiJson, ApiPath, ApiQuery, ApiResult, ApiState, MessageResponse, OwnerQuery,
};
