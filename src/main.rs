use anyhow::Context;
use clap::Parser;
use parking_registry::core::ConfigProvider;
use parking_registry::utils::{logger, validation::Validate};
use parking_registry::{CliConfig, CommandLoop, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Load the TOML file, if one was given
    let file_config = match &cli.config {
        Some(path) => {
            let mut config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            cli.apply_to(&mut config);
            Some(config)
        }
        None => None,
    };

    // Logging
    let level = file_config.as_ref().and_then(|config| config.log_level());
    logger::init_cli_logger(cli.verbose, level);

    tracing::info!("Starting parking-lot");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Validate configuration
    cli.validate().context("invalid command-line arguments")?;
    if let Some(config) = &file_config {
        config.validate().context("invalid configuration file")?;
    }

    match &file_config {
        Some(config) => run(config),
        None => run(&cli),
    }
}

fn run<C: ConfigProvider>(config: &C) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut session = CommandLoop::with_config(config);
    if let Err(e) = session.run(stdin.lock(), stdout.lock()) {
        tracing::error!("❌ Command loop stopped: {}", e);
        return Err(e.into());
    }

    tracing::info!("✅ Parking lot session finished");
    Ok(())
}
