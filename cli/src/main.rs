//! sobjgen CLI - refresh SObject definition stubs from a Salesforce org

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use sobjgen_lib::{GenerateOptions, OrgConnection, ProgressEvent, SObjectCategory, generate};
use tokio::sync::Mutex;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod output;

/// Generate faux Apex classes for SObjects to enable code completion
#[derive(Parser)]
#[command(name = "sobjgen", version, about)]
struct Cli {
    /// Instance URL of the target org (e.g. https://example.my.salesforce.com)
    #[arg(long, env = "SOBJGEN_INSTANCE_URL")]
    instance_url: String,

    /// Access token for the target org
    #[arg(long, env = "SOBJGEN_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Salesforce REST API version (e.g. 62.0)
    #[arg(long)]
    api_version: Option<String>,

    /// Which SObjects to generate definitions for
    #[arg(long, value_enum, default_value_t = CategoryArg::All)]
    category: CategoryArg,

    /// Project root; stubs are written under <DIR>/tools/sobjects/
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Maximum concurrent describe requests
    #[arg(long, default_value_t = sobjgen_lib::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Output the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    log_verbosity: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    All,
    Custom,
    Standard,
}

impl From<CategoryArg> for SObjectCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => SObjectCategory::All,
            CategoryArg::Custom => SObjectCategory::Custom,
            CategoryArg::Standard => SObjectCategory::Standard,
        }
    }
}

/// Guards against two refreshes racing for the same destination tree.
///
/// The guard is scope-held across the `generate` call, so it is released on
/// every exit path including errors.
static RUN_LOCK: Mutex<()> = Mutex::const_new(());

/// Initialize tracing subscriber based on verbosity.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,sobjgen_lib=info".to_string(),
            2 => "info,sobjgen_lib=debug".to_string(),
            _ => "debug,sobjgen_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.log_verbosity);

    let mut connection = OrgConnection::new(&cli.instance_url, &cli.access_token);
    if let Some(version) = &cli.api_version {
        connection = connection.with_api_version(version);
    }

    let quiet = cli.json;
    let options = GenerateOptions::new(&cli.output_dir)
        .category(cli.category.into())
        .concurrency(cli.concurrency)
        .on_progress(Arc::new(move |event: ProgressEvent| {
            output::print_progress(&event, quiet);
        }));

    let _guard = RUN_LOCK.lock().await;
    let result = generate(&connection, &options).await?;

    if cli.json {
        output::print_json(&result)?;
    } else {
        output::print_summary(&result);
    }

    Ok(())
}
