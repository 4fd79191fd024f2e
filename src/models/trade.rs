use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Mood, Session, Setup, SetupQuality};

/// A single closed journal entry. Immutable once recorded: `pnl`, `date`
/// and `ts` are trusted as-is and never recomputed from prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub pair: String,
    pub direction: Direction,
    pub entry: f64,
    pub exit: f64,
    pub lots: f64,
    pub pnl: f64,
    /// Calendar date of the trade, YYYY-MM-DD.
    pub date: NaiveDate,
    /// Entry time as Unix epoch milliseconds.
    pub ts: i64,
    #[serde(default)]
    pub setup: Setup,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub violation_reason: Option<String>,
    #[serde(default)]
    pub setup_quality: Option<SetupQuality>,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.pnl > 0.0
    }

    pub fn is_violation(&self) -> bool {
        self.violation_reason.is_some()
    }

    /// Entry time as a UTC datetime. `ts` is trusted to be a valid epoch
    /// offset; out-of-range values saturate to the epoch.
    pub fn datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.ts)
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap())
    }

    /// Hour of day (0-23) in the journal's timezone.
    pub fn hour_in(&self, tz: Tz) -> u32 {
        self.datetime().with_timezone(&tz).hour()
    }

    /// Weekday in the journal's timezone.
    pub fn weekday_in(&self, tz: Tz) -> Weekday {
        self.datetime().with_timezone(&tz).weekday()
    }
}
