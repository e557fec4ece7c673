use clap::Parser;
use gallerygen::domain::model::ProviderKind;
use gallerygen::domain::ports::PhotoProvider;
use gallerygen::utils::{logger, validation::Validate};
use gallerygen::{
    CliConfig, LocalStorage, PinterestProvider, Secrets, SiteConfig, SiteEngine, UnsplashProvider,
};
use reqwest::Client;
use std::collections::HashMap;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting gallerygen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = SiteConfig::from_path(Path::new(&cli.config))?;
    if let Some(output) = cli.output {
        config.site.output_path = output;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let secrets = Secrets::from_env();
    if let Err(e) = secrets.require_for(&config.providers_in_use()) {
        tracing::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let providers = build_providers(&config, &secrets);
    let storage = LocalStorage::new(config.site.output_path.clone());
    let engine = SiteEngine::new(storage, config, providers);

    let report = engine.run().await?;

    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(
        "Build finished: {} page(s), {} warning(s)",
        report.pages_written.len(),
        report.warnings.len()
    );
    println!(
        "Built {} page(s): {}",
        report.pages_written.len(),
        report.pages_written.join(", ")
    );
    if !report.warnings.is_empty() {
        println!("{} provider call(s) degraded; see log for details", report.warnings.len());
    }

    Ok(())
}

fn build_providers(
    config: &SiteConfig,
    secrets: &Secrets,
) -> HashMap<ProviderKind, Box<dyn PhotoProvider>> {
    let client = Client::new();
    let mut providers: HashMap<ProviderKind, Box<dyn PhotoProvider>> = HashMap::new();

    if let Some(key) = &secrets.unsplash_access_key {
        providers.insert(
            ProviderKind::Unsplash,
            Box::new(UnsplashProvider::new(
                client.clone(),
                config.site.unsplash_base_url.clone(),
                key.clone(),
                config.site.per_page,
            )),
        );
    }

    if let Some(token) = &secrets.pinterest_access_token {
        providers.insert(
            ProviderKind::Pinterest,
            Box::new(PinterestProvider::new(
                client.clone(),
                config.site.pinterest_base_url.clone(),
                token.clone(),
            )),
        );
    }

    providers
}
