use analyzer::{AnalysisResult, PairAnalyzer};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use data_provider::{MockProvider, PriceProvider};
use tracing_subscriber::EnvFilter;

/// The main entry point for the pairscope analysis application.
fn main() -> anyhow::Result<()> {
    // Route engine logs through the standard RUST_LOG filter.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Pairs-trading spread analysis over two correlated price series.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the spread between two tickers over a date range.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// First leg of the pair (e.g., "PETR3").
    #[arg(long)]
    ticker_a: String,

    /// Second leg of the pair (e.g., "PETR4").
    #[arg(long)]
    ticker_b: String,

    /// The start date of the analysis window (format: YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// The end date of the analysis window (format: YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,

    /// Minimum spread for a day to qualify as an opportunity.
    #[arg(long)]
    min_spread: Option<f64>,

    /// Operational cost per leg.
    #[arg(long)]
    cost_per_leg: Option<f64>,

    /// Nominal position size for the risk metrics.
    #[arg(long)]
    position_size: Option<f64>,

    /// Rolling-statistics window length.
    #[arg(long)]
    window: Option<usize>,

    /// Emit the full result bundle as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles the orchestration of one pair analysis: fetch, analyze, render.
fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = configuration::load_config().context("Failed to load configuration")?;

    // CLI flags override the file-level defaults.
    let mut settings = config.analysis.clone();
    if let Some(v) = args.min_spread {
        settings.min_spread = v;
    }
    if let Some(v) = args.cost_per_leg {
        settings.cost_per_leg = v;
    }
    if let Some(v) = args.position_size {
        settings.position_size = v;
    }
    if let Some(v) = args.window {
        settings.rolling_window = v;
    }

    let provider = MockProvider::new(config.provider.clone())
        .context("Failed to construct the price provider")?;
    let series_a = provider
        .daily_prices(&args.ticker_a, args.from, args.to)
        .with_context(|| format!("Failed to fetch prices for {}", args.ticker_a))?;
    let series_b = provider
        .daily_prices(&args.ticker_b, args.from, args.to)
        .with_context(|| format!("Failed to fetch prices for {}", args.ticker_b))?;

    let analyzer = PairAnalyzer::new(settings);
    let result = analyzer
        .analyze(&series_a, &series_b)
        .with_context(|| format!("Analysis failed for {}/{}", args.ticker_a, args.ticker_b))?;
    tracing::info!(
        ticker_a = %args.ticker_a,
        ticker_b = %args.ticker_b,
        opportunities = result.opportunities.len(),
        "Analysis finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    render_tables(&args.ticker_a, &args.ticker_b, &result);
    Ok(())
}

/// Renders the result bundle as terminal tables.
fn render_tables(ticker_a: &str, ticker_b: &str, result: &AnalysisResult) {
    println!("Spread analysis {ticker_a}/{ticker_b}");

    let mut summary = Table::new();
    summary.set_header(vec!["Metric", "Value"]);
    summary.add_row(vec![
        "Mean spread".to_string(),
        format!("{:.2}", result.metrics.mean_spread),
    ]);
    summary.add_row(vec![
        "Max spread".to_string(),
        format!("{:.2}", result.metrics.max_spread),
    ]);
    summary.add_row(vec![
        "Opportunities".to_string(),
        result.metrics.opportunity_count.to_string(),
    ]);
    summary.add_row(vec![
        "Mean net return".to_string(),
        format!("{:.2}", result.metrics.mean_net_return),
    ]);
    summary.add_row(vec![
        "Total net return".to_string(),
        format!("{:.2}", result.metrics.total_net_return),
    ]);
    summary.add_row(vec![
        "Correlation".to_string(),
        format!("{:.4}", result.metrics.correlation),
    ]);
    summary.add_row(vec![
        "Spread std".to_string(),
        format!("{:.4}", result.descriptive.std),
    ]);
    summary.add_row(vec![
        "95th percentile".to_string(),
        format!("{:.2}", result.descriptive.percentile_95),
    ]);
    summary.add_row(vec![
        "5th percentile".to_string(),
        format!("{:.2}", result.descriptive.percentile_5),
    ]);
    summary.add_row(vec![
        "Skewness".to_string(),
        format!("{:.4}", result.descriptive.skewness),
    ]);
    summary.add_row(vec![
        "Excess kurtosis".to_string(),
        format!("{:.4}", result.descriptive.kurtosis),
    ]);
    println!("{summary}");

    let mut risk = Table::new();
    risk.set_header(vec!["Risk metric", "Value"]);
    risk.add_row(vec![
        "Daily volatility".to_string(),
        format!("{:.6}", result.risk.daily_volatility),
    ]);
    risk.add_row(vec![
        "Annualized volatility".to_string(),
        format!("{:.6}", result.risk.annualized_volatility),
    ]);
    risk.add_row(vec![
        "Value at risk".to_string(),
        format!("{:.2}", result.risk.value_at_risk),
    ]);
    risk.add_row(vec![
        "Max drawdown".to_string(),
        format!("{:.2}%", result.risk.max_drawdown * 100.0),
    ]);
    risk.add_row(vec![
        "Position risk".to_string(),
        format!("{:.2}", result.risk.position_risk),
    ]);
    risk.add_row(vec![
        "Stop loss".to_string(),
        format!("{:.2}", result.stop_levels.stop_loss),
    ]);
    risk.add_row(vec![
        "Take profit".to_string(),
        format!("{:.2}", result.stop_levels.take_profit),
    ]);
    println!("{risk}");

    if result.opportunities.is_empty() {
        println!("No days cleared the spread threshold.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Spread", "Gross", "Cost", "Net"]);
    for o in &result.opportunities {
        table.add_row(vec![
            o.date.to_string(),
            format!("{:.2}", o.spread_value),
            format!("{:.2}", o.gross_return),
            format!("{:.2}", o.total_cost),
            format!("{:.2}", o.net_return),
        ]);
    }
    println!("{table}");
}
