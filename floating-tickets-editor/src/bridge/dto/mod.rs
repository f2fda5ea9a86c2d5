mod bridge_state;
mod editor_bridge_config;
mod notification;

pub use bridge_state::*;
pub use editor_bridge_config::*;
pub use notification::*;
