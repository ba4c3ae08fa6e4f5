use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docgen::api::ApiClient;
use docgen::services::Services;
use docgen::{tui, Config};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), env!("DOCGEN_VERSION_SUFFIX"));

#[derive(Parser)]
#[command(name = "docgen")]
#[command(author, version = VERSION, about = "Terminal front-end for the docgen documentation service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL (overrides config file and DOCGEN_BASE_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal UI (default)
    Ui,

    /// List the available document templates
    Templates {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Analyze a source file and print the result
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Programming language of the file
        #[arg(short, long, default_value = "python")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr; the TUI owns stdout.
    let filter = if cli.verbose {
        "docgen=debug"
    } else {
        "docgen=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load().unwrap_or_default();
    // Precedence: --backend-url, then DOCGEN_BASE_URL, then the config file.
    let resolved = match cli.backend_url {
        Some(url) => url,
        None => config.base_url(),
    };
    config.backend.base_url = resolved;
    tracing::info!("Using backend at {}", config.backend.base_url);

    match cli.command {
        None | Some(Commands::Ui) => tui::run(config).await,
        Some(Commands::Templates { format }) => run_templates(&config, &format).await,
        Some(Commands::Analyze { file, language }) => run_analyze(&config, &file, &language).await,
    }
}

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Sections")]
    sections: usize,
}

async fn run_templates(config: &Config, format: &str) -> Result<()> {
    let services = Services::new(Arc::new(ApiClient::new(config.backend.base_url.clone())));
    let templates = services.documentation.get_templates().await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&templates)?);
    } else {
        let rows: Vec<TemplateRow> = templates
            .into_iter()
            .map(|t| TemplateRow {
                id: t.id,
                name: t.name,
                description: t.description,
                sections: t.sections.len(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

async fn run_analyze(config: &Config, file: &PathBuf, language: &str) -> Result<()> {
    let code = std::fs::read_to_string(file)?;
    let services = Services::new(Arc::new(ApiClient::new(config.backend.base_url.clone())));
    let analysis = services.code_analysis.analyze_code(&code, language).await?;

    println!("{}", "Summary".cyan().bold());
    println!("{}\n", analysis.summary);
    println!("{}", "Complexity".cyan().bold());
    println!("{}\n", analysis.complexity);
    println!("{}", "Suggestions".cyan().bold());
    for suggestion in &analysis.suggestions {
        println!("  • {suggestion}");
    }
    println!();
    println!("{}", "Documentation".cyan().bold());
    println!("{}", analysis.documentation);
    Ok(())
}
