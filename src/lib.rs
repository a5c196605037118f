//! Kickoff - football fixtures and win probabilities over Telegram.
//!
//! A Telegram bot that lists today's football matches, turns bookmaker odds
//! into implied win probabilities, remembers which leagues each user follows,
//! and can forward free-text questions to an LLM for analysis.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Fixtures, leagues, standings and the probability model
//! - [`port`] - Traits for match feeds, LLMs and preference storage
//! - [`adapter`] - Telegram and CLI front ends; feed, HTTP, LLM and storage
//!   implementations
//! - [`application`] - Use cases behind the bot commands
//! - [`infrastructure`] - Configuration, factories and process wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose [`adapter::outbound::llm::MockLlm`] for downstream tests
//! - `integration-tests` - Enable tests that call real LLM APIs
//!
//! # Example
//!
//! ```
//! use kickoff::domain::{implied_probabilities, Odds};
//! use rust_decimal_macros::dec;
//!
//! let p = implied_probabilities(&Odds::new(dec!(2.10), dec!(3.40), dec!(3.50))).unwrap();
//! assert_eq!(p.home_win, dec!(45.09));
//! assert_eq!(p.margin, Some(dec!(5.60)));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
