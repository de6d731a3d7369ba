//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Request ID (add unique ID to each request)
//! 3. Session layer (tower-sessions with in-memory store)
//! 4. Rate limiting (governor, chat endpoint only)

pub mod rate_limit;
pub mod request_id;
pub mod session;

pub use rate_limit::chat_rate_limiter;
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
