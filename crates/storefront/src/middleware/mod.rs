//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture panics and errors)
//! 2. `TraceLayer` (request span with an empty `request_id` field)
//! 3. Request ID (fills the span field, echoes `x-request-id`)
//! 4. Security headers (CSP, frame options, etc.)

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
