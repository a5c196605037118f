//! LLM provider adapters.

pub mod anthropic;
#[cfg(any(test, feature = "testkit"))]
pub mod mock;
pub mod openai;

pub use anthropic::Anthropic;
#[cfg(any(test, feature = "testkit"))]
pub use mock::MockLlm;
pub use openai::OpenAi;
