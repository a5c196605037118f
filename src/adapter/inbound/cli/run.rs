//! Handler for the `run` command.

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, args);
    config.init_logging();

    if !args.json_logs {
        output::header(env!("CARGO_PKG_VERSION"));
        output::field("Config", args.config.display());
        output::field("Feed", format!("{:?}", config.feed.source).to_lowercase());
        output::field(
            "Analysis",
            if config.llm.enabled {
                format!("{:?}", config.llm.provider).to_lowercase()
            } else {
                "disabled".to_string()
            },
        );
        output::field(
            "Chats",
            if config.telegram.allowed_chats.is_empty() {
                "all".to_string()
            } else {
                config.telegram.allowed_chats.len().to_string()
            },
        );
    }

    bootstrap::run(config).await
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
}
