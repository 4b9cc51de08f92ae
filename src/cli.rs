use clap::Parser;

/// Shopscroll - terminal product catalog browser
#[derive(Debug, Parser)]
#[command(name = "shopscroll")]
#[command(about = "Browse a storefront's product catalog with infinite scroll")]
#[command(version)]
pub struct Cli {
    /// Base URL of the storefront
    #[arg(long, default_value = "https://summersalt.com")]
    pub base_url: String,

    /// Collection to browse
    #[arg(long, default_value = "swimwear")]
    pub collection: String,

    /// Use the high contrast theme
    #[arg(long)]
    pub high_contrast: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
