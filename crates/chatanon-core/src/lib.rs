//! Core domain models for chatanon
//!
//! This crate contains:
//! - Message models (RawMessage, CleanedMessage)
//! - The real-name to pseudonym table (SpeakerMap)
//! - Export loading and JSON output writing

pub mod error;
pub mod export;
pub mod message;
pub mod speaker;

pub use error::{Error, Result};
pub use export::{load_messages, parse_messages, write_json};
pub use message::{CleanedMessage, RawMessage};
pub use speaker::SpeakerMap;
