mod dto;
mod editor_bridge;
mod navigator;
mod notifier;

pub use dto::*;
pub use editor_bridge::*;
pub use navigator::*;
pub use notifier::*;
