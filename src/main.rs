use crate::analytics::{CountySortKey, Dashboard};
use crate::domain::FilterSpec;
use crate::errors::{AppError, AppResult};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analytics;
mod domain;
mod errors;
mod ingest;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
    Xlsx,
}

/// Summarize housing-project listings as an HTML dashboard, JSON or XLSX.
#[derive(Debug, Parser)]
#[command(name = "housing-dashboard", version)]
struct Args {
    /// Listings CSV. Defaults to the bundled seed dataset.
    #[arg(short, long, env = "HOUSING_INPUT")]
    input: Option<PathBuf>,

    /// Exact county name
    #[arg(long, env = "HOUSING_COUNTY", default_value = "")]
    county: String,

    /// Social, Affordable, Market or Other
    #[arg(long, env = "HOUSING_CATEGORY", default_value = "")]
    category: String,

    /// Availability label, e.g. "Sold Out"
    #[arg(long, env = "HOUSING_STATUS", default_value = "")]
    status: String,

    /// Substring of project name or location
    #[arg(long, env = "HOUSING_SEARCH", default_value = "")]
    search: String,

    /// County chart ordering
    #[arg(long, value_enum, env = "HOUSING_SORT", default_value_t = CountySortKey::Projects)]
    sort: CountySortKey,

    #[arg(short, long, value_enum, env = "HOUSING_FORMAT", default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Destination file. HTML and JSON go to stdout when omitted.
    #[arg(short, long, env = "HOUSING_OUTPUT")]
    output: Option<PathBuf>,
}

impl Args {
    fn filter(&self) -> FilterSpec {
        FilterSpec {
            county: self.county.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            search: self.search.clone(),
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "housing_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> AppResult<()> {
    if args.output.is_none() && args.format == OutputFormat::Xlsx {
        return Err(AppError::BadRequest("xlsx output needs --output".to_string()));
    }

    let text = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "Reading listings");
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Using bundled seed dataset");
            ingest::SEED_CSV.to_string()
        }
    };

    let records = ingest::parse_records(&text);
    let dashboard = Dashboard::build(&records, &args.filter(), args.sort);
    info!(
        matched = dashboard.records.len(),
        total = dashboard.record_count,
        "Filtered listings"
    );

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let bytes = render(&dashboard, args.format, &generated_at)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &bytes)?;
            info!(path = %path.display(), bytes = bytes.len(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn render(dashboard: &Dashboard, format: OutputFormat, generated_at: &str) -> AppResult<Vec<u8>> {
    match format {
        OutputFormat::Html => Ok(templates::dashboard_page(dashboard, generated_at)
            .into_string()
            .into_bytes()),
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(dashboard)?),
        OutputFormat::Xlsx => spreadsheets::export_dashboard_xlsx(dashboard, generated_at),
    }
}
