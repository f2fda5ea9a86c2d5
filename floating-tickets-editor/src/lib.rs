//!
//! Client side of floating tickets.
//!
//! [bridge::EditorBridge] loads an existing ticket through [client::TicketsClient],
//! keeps it in [staging::StagingStore] and sends the agent to the ticket builder,
//! which resumes the staged ticket by its id.
//!

pub mod bridge;
pub mod client;
pub mod credential;
pub mod error;
pub mod staging;

#[cfg(test)]
mod fixtures;

pub use error::{Error, StagingError};
