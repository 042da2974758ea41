//! Text scrubbing and name anonymization
//!
//! - [`Redactor`] drops reaction notifications and masks emails, phone
//!   numbers and links.
//! - [`Anonymizer`] assigns pseudonyms to senders and rewrites known names
//!   inside message text.

pub mod anonymizer;
pub mod pseudonym;
pub mod redactor;

pub use anonymizer::{Anonymizer, NameMatcher, substitute_names};
pub use pseudonym::{PseudonymPolicy, friend_label, is_friend_label};
pub use redactor::{RedactionInfo, RedactionKind, Redactor};
