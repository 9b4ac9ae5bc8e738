use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod domain;
mod format;
mod logging;
mod report;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::client::ApiClient;
use crate::report::ReportFormat;
use crate::state::{App, AppConfig};
use crate::ui::header::HeaderSize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// finboard - terminal dashboard for your transactions and balance
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Base URL of the finance backend
    #[arg(long, global = true, env = "FINBOARD_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Header size
    #[arg(long, global = true, value_enum)]
    header_size: Option<HeaderSize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch once and print the dashboard
    Print {
        /// Print JSON keyed by card id instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
    /// Display version
    Version,
}

impl Cli {
    /// Config file values with command-line overrides applied.
    fn effective_config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(api_url) = &self.api_url {
            config.api_url.clone_from(api_url);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(header_size) = self.header_size {
            config.header_size = header_size;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // The app works without a log file; say so once and carry on.
    if let Err(err) = logging::init() {
        eprintln!("finboard: logging disabled: {err}");
    }

    let config = cli.effective_config(AppConfig::load());

    match &cli.command {
        Some(Commands::Print { json }) => print(&config, *json).await,
        Some(Commands::Config { save }) => show_config(&config, *save),
        Some(Commands::Version) => {
            println!("finboard v{VERSION}");
            Ok(())
        }
        None => run_tui(&config).await,
    }
}

async fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config).map_err(domain::DashboardError::into_report)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    tracing::info!("finboard exiting");
    result
}

async fn print(config: &AppConfig, json: bool) -> Result<()> {
    let client = ApiClient::new(&config.api_url, config.http_config())
        .map_err(domain::DashboardError::into_report)?;
    let format = if json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    let out = report::run(&client, format)
        .await
        .map_err(domain::DashboardError::into_report)?;
    print!("{out}");
    Ok(())
}

fn show_config(config: &AppConfig, save: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if save {
        config.save()?;
        println!("Saved {}", path.display());
    } else {
        println!("# {}", path.display());
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "finboard",
            "--api-url",
            "http://10.0.0.2:3333",
            "--header-size",
            "small",
            "print",
            "--json",
        ]);
        let config = cli.effective_config(AppConfig::default());

        assert_eq!(config.api_url, "http://10.0.0.2:3333");
        assert_eq!(config.header_size, HeaderSize::Small);
        assert_eq!(config.timeout_secs, 10);
        assert!(matches!(cli.command, Some(Commands::Print { json: true })));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["finboard", "--timeout", "3"]);
        let base = AppConfig {
            api_url: "https://money.example.com".to_string(),
            ..AppConfig::default()
        };
        let config = cli.effective_config(base);

        assert_eq!(config.api_url, "https://money.example.com");
        assert_eq!(config.timeout_secs, 3);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
