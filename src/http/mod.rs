//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! proxy sub-request
//!     → server.rs (Axum router, request ID, tracing)
//!     → request.rs (host, query, cookies)
//!     → auth::Gate (decision)
//!     → response.rs (403, or 302 + Location + optional Set-Cookie)
//!     → back to the proxy
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{AuthRequest, QueryParams};
pub use server::{AuthServer, ServerError};
