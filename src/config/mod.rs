pub mod secrets;
pub mod site_config;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "gallerygen")]
#[command(about = "Build a static photo gallery site from provider search results")]
pub struct CliConfig {
    /// Path to the site configuration TOML
    #[arg(long, default_value = "gallery.toml")]
    pub config: String,

    /// Override the output directory from the site config
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
