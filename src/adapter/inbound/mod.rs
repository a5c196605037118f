pub mod cli;
pub mod telegram;
