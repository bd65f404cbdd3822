use std::env;
use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use sales_report::generate_report;
use sales_report::io::ReportFormat;
use sales_report::options::AnalysisOptions;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: sales-report <input.json> [--format json|csv]";

fn parse_args(args: &[String]) -> Result<(String, ReportFormat)> {
    let mut input = None;
    let mut format = ReportFormat::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                let value = iter.next().context(USAGE)?;
                format = value.parse().map_err(anyhow::Error::msg)?;
            }
            _ if input.is_none() => input = Some(arg.clone()),
            other => anyhow::bail!("unexpected argument '{}'\n{}", other, USAGE),
        }
    }

    Ok((input.context(USAGE)?, format))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (filename, format) = parse_args(&args)?;

    let file = File::open(&filename)
        .with_context(|| format!("Failed to open input file '{}'", filename))?;

    generate_report(
        BufReader::new(file),
        io::stdout().lock(),
        format,
        &AnalysisOptions::default_policy(),
    )
    .context("Failed to build seller report")?;

    Ok(())
}
