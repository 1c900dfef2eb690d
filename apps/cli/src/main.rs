mod args;
mod handlers;

use crate::args::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use cpv::RegistryFactory;
use cpv::domain::config::{LoggingConfig, RegistryConfig, TranslatorKind};
use cpv::kernel::config::load_config;
use cpv_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = settings(&cli)?;
    let _logger = init_logger(&config.logging)?;

    let factory = RegistryFactory::from_config(&config);
    let stdout = std::io::stdout();
    handlers::run(&cli.command, &factory, cli.json, &mut stdout.lock())
}

/// Configuration file and `CPV__*` variables, then command-line flags on top.
fn settings(cli: &Cli) -> Result<RegistryConfig> {
    let mut config: RegistryConfig =
        load_config(cli.config.as_deref()).context("Configuration is malformed")?;

    if let Some(data) = &cli.data {
        config.dataset_root = Some(data.clone());
    }
    if let Some(locale) = &cli.locale {
        config.translation.backend = TranslatorKind::Native;
        config.translation.locale.clone_from(locale);
    }
    if let Some(fallback) = &cli.fallback {
        config.translation.fallback_locale.clone_from(fallback);
    }
    if let Some(translations) = &cli.translations {
        config.translation.backend = TranslatorKind::Native;
        config.translation.root = Some(translations.clone());
    }

    Ok(config)
}

fn init_logger(logging: &LoggingConfig) -> Result<Logger> {
    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level_str(&logging.level);
    if let Some(path) = &logging.path {
        builder = builder.path(path).json(logging.json);
    }
    builder.init().context("Cannot initialize logging")
}
