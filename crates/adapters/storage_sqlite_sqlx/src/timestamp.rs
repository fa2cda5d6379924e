//! Timestamps are stored as ISO 8601 text with microsecond precision.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use fitbook_domain::time::{self, Timestamp};

pub(crate) fn encode(ts: &Timestamp) -> String {
    time::to_iso(ts)
}

pub(crate) fn decode(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    raw.parse::<Timestamp>()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
