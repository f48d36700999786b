//! HTTP inbound adapter exposing the user endpoints.

pub mod error;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult, ErrorBody, RequestError};
