//! Forward-auth decision subsystem.
//!
//! # Data Flow
//! ```text
//! AuthRequest (host, query, cookies)
//!     → extractor.rs (token + channel)
//!     → authenticator.rs (delayed comparison)
//!     → decision.rs (deny, or allow with cookie.rs + redirect.rs)
//!     → Decision, rendered by http::response
//! ```

pub mod authenticator;
pub mod cookie;
pub mod decision;
pub mod extractor;
pub mod redirect;

pub use authenticator::{authenticate, Authenticator, AUTH_DELAY};
pub use cookie::{session_cookie, COOKIE_NAME};
pub use decision::{Decision, Gate};
pub use extractor::{extract, Channel, Credential};
