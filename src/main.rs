use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing_subscriber::{fmt, EnvFilter};

use journal_insight::config::Config;
use journal_insight::journal;
use journal_insight::report::JournalReport;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let path = match std::env::args().nth(1) {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: journal-insight <journal.json | journal.csv>"),
    };

    let trades = journal::load(&path)
        .with_context(|| format!("loading journal {}", path.display()))?;

    let report = JournalReport::from_trades(&trades, Utc::now(), &cfg);
    report.print_summary();

    Ok(())
}
