use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod portfolio;
mod prelude;
mod resume;
mod taxonomy;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Turn freelancer profiles and résumé PDFs into portfolio drafts"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// TOML file replacing the built-in service taxonomy
    #[clap(long, env = "FOLIO_TAXONOMY", global = true)]
    taxonomy: Option<std::path::PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "FOLIO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Extract cleaned text from a résumé PDF (URL or local path)
    Resume(crate::resume::App),

    /// Classify skills and tools against the service taxonomy
    Classify(crate::classify::App),

    /// Print the active service taxonomy
    Taxonomy(crate::taxonomy::App),

    /// Print a freelancer's profile records and résumé text
    Lookup(crate::portfolio::LookupOptions),

    /// Generate a freelancer portfolio
    Portfolio(crate::portfolio::PortfolioOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();

    let default_filter = if app.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    color_eyre::install()?;

    match app.command {
        SubCommands::Resume(sub_app) => crate::resume::run(sub_app, app.global).await,
        SubCommands::Classify(sub_app) => crate::classify::run(sub_app, app.global).await,
        SubCommands::Taxonomy(sub_app) => crate::taxonomy::run(sub_app, app.global).await,
        SubCommands::Lookup(options) => crate::portfolio::lookup(options, app.global).await,
        SubCommands::Portfolio(options) => crate::portfolio::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
