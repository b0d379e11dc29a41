use anyhow::Context;
use clap::Parser;
use course_registry::utils::{logger, validation::Validate};
use course_registry::{CliConfig, JsonFileStore, Presenter, RegistrationSession, RegistryConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（選用）
    let file_config = match &cli.config {
        Some(path) => RegistryConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => RegistryConfig::default(),
    };
    let config = cli.resolve(file_config);

    // 初始化日誌
    match config.log_level() {
        Some(level) if !cli.verbose => logger::init_with_level(level),
        _ => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("Starting course-registry");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e).with_context(|| {
            format!("Invalid configuration (file_name = '{}')", config.file_name())
        });
    }

    let store = JsonFileStore::new(config.file_name());
    let stdin = io::stdin();
    let presenter = Presenter::new(stdin.lock(), io::stdout().lock())
        .with_separator_width(config.separator_width());

    let mut session = RegistrationSession::new(store, presenter);
    session.run().context("Console input/output failed")?;

    Ok(())
}
