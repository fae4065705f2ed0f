use clap::Parser;
use huisjacht::config::AppConfig;
use huisjacht::error::AppError;
use huisjacht::geo::{standard_points, PostalCodeTable};
use huisjacht::listings::{AcceptancePolicy, ListingIntake};
use huisjacht::report::{ReportOptions, ReportRenderer};
use huisjacht::telemetry;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "huisjacht",
    about = "Summarize scraped housing listings into a per-district report",
    version
)]
struct Cli {
    /// Path to the scraped listings JSON file
    filename: PathBuf,
    /// Override the postal code reference table
    #[arg(long)]
    postal_codes: Option<PathBuf>,
    /// Rows per district section
    #[arg(long)]
    top: Option<usize>,
    /// Field the district sections are ranked by
    #[arg(long)]
    rank_by: Option<String>,
    /// Suppress ANSI colors in the report
    #[arg(long)]
    no_color: bool,
    /// Append the winners section (cheapest, priciest, best value)
    #[arg(long)]
    winners: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let postal_codes = cli
        .postal_codes
        .unwrap_or_else(|| config.reference.postal_codes.clone());
    let table = PostalCodeTable::from_path(&postal_codes)?;
    info!(prefixes = table.len(), path = %postal_codes.display(), "postal code table ready");

    let collection = ListingIntake::from_path(
        &cli.filename,
        &table,
        &AcceptancePolicy::standard(),
        standard_points(),
    )?;

    let mut options = ReportOptions::standard();
    options.top_n = cli.top.unwrap_or(config.top_n);
    if let Some(rank_field) = cli.rank_by {
        options.rank_field = rank_field;
    }

    let renderer = ReportRenderer::new(!cli.no_color);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    renderer.render(&collection, &options, &mut out)?;
    if cli.winners {
        renderer.render_extremes(&collection, &mut out)?;
    }
    out.flush()?;

    Ok(())
}
