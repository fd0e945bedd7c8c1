use clap::Parser;
use metagraph_workflow_config::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("metagraph_workflow_config=debug,info")
    } else {
        EnvFilter::new("metagraph_workflow_config=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Keys(args) => {
            cli::keys::run(args, cli.format)?;
        }
        cli::Commands::Formats => {
            cli::formats::run(cli.format)?;
        }
        cli::Commands::LabelOption(args) => {
            cli::label_option::run(args, cli.format)?;
        }
    }

    Ok(())
}
