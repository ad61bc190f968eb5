//! `day-state` CLI — resolve calendar day cells from JSON on the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve one day (stdin → stdout)
//! echo '{"year":2024,"month":3,"day":3}' | day-state resolve
//!
//! # Resolve from file to file, merging each style stack into one object
//! day-state resolve -i request.json -o day.json --flatten
//!
//! # Reject inconsistent requests instead of degrading them
//! day-state resolve --strict -i request.json
//!
//! # Summarize every day of a month for a picker context
//! day-state month --year 2024 --month 3 -i context.json
//!
//! # Validate a request only
//! day-state check -i request.json
//! ```
//!
//! Logs go to stderr. Set the level with `--log-level` or `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use day_state::{DayContext, DayRequest, MonthBase, ResolvedDay};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "day-state",
    version,
    about = "Resolve calendar day-cell state from JSON requests"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter (e.g. "debug", "day_state=trace"); falls back to RUST_LOG
    #[arg(long, global = true, env = "DAY_STATE_LOG")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single day request
    Resolve {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fail on invalid dates or inconsistent selections
        #[arg(long)]
        strict: bool,
        /// Merge each style stack into a single object
        #[arg(long)]
        flatten: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the variant of every day in a month
    Month {
        /// Input context file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        /// Month number, one-based unless --zero-based is given
        #[arg(long)]
        month: u32,
        /// Interpret --month as zero-based (January = 0)
        #[arg(long)]
        zero_based: bool,
    },
    /// Validate a day request without resolving it
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match cli.command {
        Commands::Resolve {
            input,
            output,
            strict,
            flatten,
            pretty,
        } => {
            let request = read_request(input.as_deref())?;
            if strict {
                request.validate().context("Request failed validation")?;
            }
            let day = day_state::resolve_request(&request);
            debug!(variant = day.variant.as_str(), "resolved day");
            let json = render_day(&day, flatten, pretty)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Month {
            input,
            year,
            month,
            zero_based,
        } => {
            let raw = read_input(input.as_deref())?;
            let context = DayContext::from_json(&raw).context("Failed to parse day context")?;
            let base = if zero_based {
                MonthBase::ZeroBased
            } else {
                MonthBase::OneBased
            };
            let month = base
                .to_one_based(month)
                .with_context(|| format!("Month out of range: {}", month))?;
            let days = day_state::resolve_month(year, month, &context)
                .context("Failed to resolve month")?;
            info!(year, month, days = days.len(), "resolved month");
            for day in &days {
                println!("{}", month_line(day));
            }
        }
        Commands::Check { input } => {
            let request = read_request(input.as_deref())?;
            let date = request.validate().context("Request failed validation")?;
            println!("ok {}", date);
        }
    }

    Ok(())
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log filter: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn read_request(path: Option<&str>) -> Result<DayRequest> {
    let raw = read_input(path)?;
    DayRequest::from_json(&raw).context("Failed to parse day request")
}

fn render_day(day: &ResolvedDay, flatten: bool, pretty: bool) -> Result<String> {
    let mut value = serde_json::to_value(day)?;
    if flatten {
        let styles = day.flatten_styles();
        value["wrapper"] = serde_json::to_value(&styles.wrapper)?;
        value["surface"] = serde_json::to_value(&styles.surface)?;
        value["label"] = serde_json::to_value(&styles.label)?;
    }
    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

/// One summary line per day: `DD  variant  [reasons]  (mark)`.
fn month_line(day: &ResolvedDay) -> String {
    let mut line = format!("{:02}  {}", day.day, day.variant.as_str());
    if !day.reasons.is_empty() {
        let reasons: Vec<&str> = day.reasons.iter().map(|r| r.as_str()).collect();
        line.push_str(&format!("  [{}]", reasons.join(",")));
    }
    if let Some(mark) = day.mark {
        line.push_str(&format!("  ({})", mark.as_str()));
    }
    line
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
