//! User identity service.
//!
//! Creates user records and looks them up by identifier or username. The
//! crate is split along hexagonal lines: `domain` owns validation, the error
//! taxonomy and the use cases; `outbound` adapts PostgreSQL; `inbound` maps
//! HTTP requests and errors onto the domain.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
