//! EDINET analysis CLI.
//!
//! Fetches corporate disclosures from EDINET DB and runs the local analysis
//! engine: indicators, ratings, rankings, and comparisons.

use clap::{Parser, Subcommand, ValueEnum};
use edinet::analysis::{
    AnalyzedCompany, SortOrder, analyze_universe, build_ranking, compare,
};
use edinet::client::EdinetClient;
use edinet::indicators::{Metric, RatingThresholds};
use edinet::output::{ExportFormat, Exporter, Report};
use edinet::statements::CompanyIdentity;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "edinet")]
#[command(about = "EDINET DB financial analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// EDINET DB API key.
    #[arg(long, env = "EDINET_API_KEY", global = true, default_value = "")]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search companies by name
    Search {
        /// Search keyword (company name)
        query: Option<String>,

        /// Results per page
        #[arg(long, default_value = "10")]
        per_page: usize,

        /// Page number
        #[arg(long, default_value = "1")]
        page: usize,

        /// Export results to a file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputKind,
    },

    /// Show company details
    Info {
        /// EDINET code (e.g. E02367)
        code: String,
    },

    /// Show a company's financial analysis
    Financials {
        /// EDINET code (e.g. E02367)
        code: String,

        /// Number of recent fiscal periods to analyze
        #[arg(long, default_value = "1")]
        years: usize,
    },

    /// Build a ranking over an explicit company universe
    Ranking {
        /// Metric name (roe, roa, equity_ratio, operating_margin, net_sales, ...)
        metric: String,

        /// Company codes forming the ranking universe
        #[arg(long, value_delimiter = ',', required = true)]
        codes: Vec<String>,

        /// Maximum ranked entries shown
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// Sort order
        #[arg(long, default_value = "desc")]
        order: String,

        /// Export results to a file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputKind,
    },

    /// Compare companies side by side
    Compare {
        /// EDINET codes (e.g. E02367 E01825), order preserved
        #[arg(required = true)]
        codes: Vec<String>,

        /// Export results to a file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    Csv,
    Json,
    PrettyJson,
}

impl From<OutputKind> for ExportFormat {
    fn from(kind: OutputKind) -> Self {
        match kind {
            OutputKind::Csv => Self::Csv,
            OutputKind::Json => Self::Json,
            OutputKind::PrettyJson => Self::PrettyJson,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = EdinetClient::new(&cli.api_key)?;

    match cli.command {
        Commands::Search {
            query,
            per_page,
            page,
            export,
            format,
        } => {
            let companies = client
                .search_companies(query.as_deref(), per_page, page)
                .await?;
            for (i, company) in companies.iter().enumerate() {
                println!(
                    "{:2}. {} ({}) 証券コード: {}",
                    i + 1,
                    company.name,
                    company.code,
                    company.securities_code.as_deref().unwrap_or("N/A"),
                );
            }
            if companies.is_empty() {
                println!("該当する企業が見つかりませんでした");
            }
            if let Some(path) = export {
                companies.export_to_file(&path, format.into())?;
                println!("\n✓ exported to {}", path.display());
            }
        }

        Commands::Info { code } => {
            let profile = client.company(&code).await?;
            let identity = &profile.identity;
            println!("企業情報: {}", identity.name);
            println!("  EDINETコード: {}", identity.code);
            println!(
                "  証券コード:   {}",
                identity.securities_code.as_deref().unwrap_or("N/A")
            );
            println!(
                "  業種:         {}",
                identity.industry.as_deref().unwrap_or("N/A")
            );
            println!(
                "  所在地:       {}",
                profile.address.as_deref().unwrap_or("N/A")
            );
            println!(
                "  設立年月日:   {}",
                profile.established_date.as_deref().unwrap_or("N/A")
            );
        }

        Commands::Financials { code, years } => {
            let profile = client.company(&code).await?;
            let records = client.financials(&code, Some(years)).await?;
            if records.is_empty() {
                println!("財務データが見つかりません");
                return Ok(());
            }
            let thresholds = RatingThresholds::default();
            let batch = analyze_universe(
                records
                    .into_iter()
                    .map(|raw| (profile.identity.clone(), Some(raw)))
                    .collect(),
                &thresholds,
            );
            for analyzed in &batch.companies {
                println!("{}", Report(analyzed));
            }
            for skipped in &batch.skipped {
                tracing::warn!(code = %skipped.company.code, reason = %skipped.reason, "period skipped");
            }
        }

        Commands::Ranking {
            metric,
            codes,
            limit,
            order,
            export,
            format,
        } => {
            let metric: Metric = metric.parse()?;
            let order: SortOrder = order.parse()?;
            let universe = fetch_universe(&client, &codes).await;
            let ranking = build_ranking(&universe, metric, order, Some(limit as usize));
            println!("{}", Report(&ranking));
            if let Some(path) = export {
                ranking.export_to_file(&path, format.into())?;
                println!("✓ exported to {}", path.display());
            }
        }

        Commands::Compare {
            codes,
            export,
            format,
        } => {
            let universe = fetch_universe(&client, &codes).await;
            let table = compare(&universe)?;
            println!("{}", Report(&table));
            if let Some(path) = export {
                table.export_to_file(&path, format.into())?;
                println!("✓ exported to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Fetch and analyze each coded company, reporting failures without
/// aborting the rest.
async fn fetch_universe(client: &EdinetClient, codes: &[String]) -> Vec<AnalyzedCompany> {
    let thresholds = RatingThresholds::default();
    let mut inputs: Vec<(CompanyIdentity, Option<serde_json::Value>)> = Vec::new();

    for code in codes {
        match fetch_company(client, code).await {
            Ok(input) => inputs.push(input),
            Err(e) => tracing::warn!(%code, error = %e, "fetch failed, company dropped"),
        }
    }

    let batch = analyze_universe(inputs, &thresholds);
    for skipped in &batch.skipped {
        tracing::warn!(code = %skipped.company.code, reason = %skipped.reason, "company skipped");
    }
    batch.companies
}

async fn fetch_company(
    client: &EdinetClient,
    code: &str,
) -> Result<(CompanyIdentity, Option<serde_json::Value>), edinet::client::ClientError> {
    let profile = client.company(code).await?;
    let latest = client.latest_financials(code).await?;
    Ok((profile.identity, latest))
}
