//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the bot's external dependencies: match data,
//! language models and preference storage.

pub mod feed;
pub mod llm;
pub mod preference;
