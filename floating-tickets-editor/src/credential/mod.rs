mod credential_provider;
mod static_credential_provider;

pub use credential_provider::*;
pub use static_credential_provider::*;
