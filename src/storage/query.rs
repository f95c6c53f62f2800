//! Reading stored checks back.

use sqlx::postgres::{PgConnection, PgRow};
use sqlx::types::Json;
use sqlx::Row;

use super::models::HeaderCheckRecord;
use crate::check::PresentHeaders;
use crate::error_handling::DatabaseError;

const SELECT_COLUMNS: &str =
    "SELECT id, url, check_date, headers_present, missing_headers, score FROM header_checks";

fn record_from_row(row: &PgRow) -> Result<HeaderCheckRecord, sqlx::Error> {
    let headers_present: Option<Json<PresentHeaders>> = row.try_get("headers_present")?;
    let missing_headers: Option<Json<Vec<String>>> = row.try_get("missing_headers")?;
    let score: Option<i32> = row.try_get("score")?;

    Ok(HeaderCheckRecord {
        id: row.try_get("id")?,
        url: row.try_get("url")?,
        check_date: row.try_get("check_date")?,
        headers_present: headers_present.map(|j| j.0).unwrap_or_default(),
        missing_headers: missing_headers.map(|j| j.0).unwrap_or_default(),
        score: score.unwrap_or(0),
    })
}

/// Fetches a single row by id.
pub(crate) async fn fetch_check(
    conn: &mut PgConnection,
    id: i32,
) -> Result<Option<HeaderCheckRecord>, DatabaseError> {
    let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.as_ref().map(record_from_row).transpose()?)
}

/// Fetches the newest rows first, optionally restricted to one URL.
pub(crate) async fn fetch_recent_checks(
    conn: &mut PgConnection,
    url: Option<&str>,
    limit: i64,
) -> Result<Vec<HeaderCheckRecord>, DatabaseError> {
    let rows = sqlx::query(&format!(
        "{SELECT_COLUMNS} WHERE ($1::TEXT IS NULL OR url = $1) ORDER BY id DESC LIMIT $2"
    ))
    .bind(url)
    .bind(limit)
    .fetch_all(&mut *conn)
    .await?;

    rows.iter()
        .map(|row| record_from_row(row).map_err(DatabaseError::from))
        .collect()
}
