use anyhow::Context;
use clap::Parser;

use kickoff::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use kickoff::adapter::inbound::cli::{check, output, preview, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(cli.json);

    if let Err(e) = dispatch(cli.command).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn dispatch(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => run::execute(&args).await.context("bot stopped with an error"),
        Commands::Check(CheckCommand::Config(arg)) => {
            check::execute_config(&arg.config).context("configuration check failed")
        }
        Commands::Check(CheckCommand::Telegram(arg)) => check::execute_telegram(&arg.config)
            .await
            .context("Telegram check failed"),
        Commands::Check(CheckCommand::Llm(arg)) => check::execute_llm(&arg.config)
            .await
            .context("LLM check failed"),
        Commands::Preview(args) => preview::execute(&args).await.context("preview failed"),
    }
}
