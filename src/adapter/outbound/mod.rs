//! Outbound adapters: implementations of the driven ports.

pub mod feed;
pub mod http;
pub mod llm;
pub mod preference;
