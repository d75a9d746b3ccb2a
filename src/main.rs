//! workdesk - AI productivity task server
//!
//! Entry point for the workdesk binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workdesk::cli::{commands, Cli, Commands};
use workdesk::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            workdesk::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Serve { host, port } => {
                    commands::serve(&settings, host, port).await?;
                }
                Commands::Run {
                    task,
                    input,
                    file,
                    output,
                    language,
                    tone,
                    recipient,
                    topic,
                    count,
                } => {
                    commands::run_task(
                        &settings,
                        commands::RunArgs {
                            task,
                            input,
                            file,
                            output,
                            language,
                            tone,
                            recipient,
                            topic,
                            count,
                        },
                    )
                    .await?;
                }
                Commands::Config(config_cmd) => {
                    commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
