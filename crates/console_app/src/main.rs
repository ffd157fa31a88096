//! Index console: terminal control panel for the search/indexing service.

mod platform;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use console_engine::{ApiSettings, DEFAULT_BASE_URL};
use console_logging::{console_info, level_for};

use platform::logging::{self, LogDestination};
use platform::oneshot::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "index-console")]
#[command(author, version, about = "Search, crawl and reset a local search index", long_about = None)]
struct Cli {
    /// Base URL of the search service
    #[arg(long, env = "INDEX_CONSOLE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Seconds to wait for a connection
    #[arg(long, default_value_t = 10)]
    connect_timeout_secs: u64,

    /// Overall request deadline in seconds; unlimited when omitted
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Log file used by the interactive UI
    #[arg(long, default_value = "console.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the index for a term
    Search {
        term: String,
        /// Print HTML markup instead of text
        #[arg(long)]
        html: bool,
    },
    /// Crawl and index a URL
    Crawl {
        url: String,
        #[arg(long)]
        html: bool,
    },
    /// Clear the whole index
    Reset {
        #[arg(long)]
        html: bool,
    },
    /// Check whether the service is reachable
    Health {
        #[arg(long)]
        html: bool,
    },
}

impl Cli {
    fn settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let level = level_for(cli.verbose);
    let settings = cli.settings();

    let Some(command) = cli.command else {
        logging::initialize(LogDestination::File(cli.log_file), level);
        console_info!("Starting index console against {}", settings.base_url);
        platform::app::run_app(settings)?;
        return Ok(ExitCode::SUCCESS);
    };

    logging::initialize(LogDestination::Terminal, level);
    let (command, html) = match command {
        Commands::Search { term, html } => (oneshot::Command::Search { term }, html),
        Commands::Crawl { url, html } => (oneshot::Command::Crawl { url }, html),
        Commands::Reset { html } => (oneshot::Command::Reset, html),
        Commands::Health { html } => (oneshot::Command::Health, html),
    };
    let format = if html {
        OutputFormat::Html
    } else {
        OutputFormat::Text
    };

    if oneshot::run(settings, command, format)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
