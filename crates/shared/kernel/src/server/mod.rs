//! HTTP plumbing shared by every slice router.

mod error;
mod extract;
mod health;
mod params;
pub mod router;
mod state;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use health::HealthResponse;
pub use params::{MessageResponse, OwnerQuery};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
