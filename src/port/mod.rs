//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!  Telegram ────────▶│  Application + Domain   │
//!                    └────────────┬────────────┘
//!          ┌──────────────────────┼──────────────────────┐
//!          ▼                      ▼                      ▼
//!    ┌───────────┐         ┌─────────────┐        ┌─────────────┐
//!    │ MatchFeed │         │     Llm     │        │ Preferences │
//!    └───────────┘         └─────────────┘        └─────────────┘
//! ```

pub mod outbound;
