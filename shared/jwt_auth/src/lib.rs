//!
//! Bearer JWT authentication shared by floating tickets services.
//!
//! [JwtAuthLayer] validates `Authorization: Bearer <jwt>` header and
//! inserts [User] into request extensions. Requests without
//! valid token are answered with 401 before reaching handlers.
//!

pub mod dto;
pub mod error;
pub mod functions;
pub mod middleware;
pub mod util;

pub use dto::User;
pub use functions::require_all_roles;
pub use middleware::JwtAuthLayer;
