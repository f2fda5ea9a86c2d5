mod jwt_auth_future;
mod jwt_auth_layer;
mod jwt_auth_service;

pub use jwt_auth_layer::JwtAuthLayer;
pub use jwt_auth_service::JwtAuthService;
