use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::Trade;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to read journal file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON journal: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed CSV journal: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported journal format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid trade '{id}': {reason}")]
    InvalidTrade { id: String, reason: String },
}

/// Load a journal snapshot, dispatching on file extension (.json / .csv).
/// Everything the analytics core consumes passes through `validate` here;
/// past this point `pnl` and friends are trusted to be finite.
pub fn load(path: &Path) -> Result<Vec<Trade>, JournalError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let trades = match ext.as_str() {
        "json" => {
            let mut raw = String::new();
            File::open(path)?.read_to_string(&mut raw)?;
            from_json_str(&raw)?
        }
        "csv" => from_csv_reader(File::open(path)?)?,
        other => return Err(JournalError::UnsupportedFormat(other.to_string())),
    };

    info!(count = trades.len(), path = %path.display(), "journal loaded");
    Ok(trades)
}

pub fn from_json_str(raw: &str) -> Result<Vec<Trade>, JournalError> {
    let trades: Vec<Trade> = serde_json::from_str(raw)?;
    validate(&trades)?;
    Ok(trades)
}

/// Broker-history CSV with a header row matching the `Trade` field names.
/// Empty optional columns read as absent.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Trade>, JournalError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut trades = Vec::new();
    for row in rdr.deserialize() {
        let trade: Trade = row?;
        trades.push(trade);
    }
    validate(&trades)?;
    Ok(trades)
}

/// Boundary checks the core relies on. Rejecting here is what lets every
/// function downstream assume well-formed input.
pub fn validate(trades: &[Trade]) -> Result<(), JournalError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for trade in trades {
        let invalid = |reason: &str| JournalError::InvalidTrade {
            id: trade.id.clone(),
            reason: reason.to_string(),
        };

        if trade.id.trim().is_empty() {
            return Err(invalid("empty id"));
        }
        if !seen.insert(&trade.id) {
            return Err(invalid("duplicate id"));
        }
        if trade.pair.trim().is_empty() {
            return Err(invalid("empty pair"));
        }
        for (name, value) in [
            ("pnl", trade.pnl),
            ("entry", trade.entry),
            ("exit", trade.exit),
            ("lots", trade.lots),
        ] {
            if !value.is_finite() {
                return Err(invalid(&format!("non-finite {}", name)));
            }
        }
        if trade.ts <= 0 {
            return Err(invalid("non-positive timestamp"));
        }
    }

    Ok(())
}
