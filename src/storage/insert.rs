//! Insertion of check results.

use sqlx::postgres::PgConnection;
use sqlx::types::Json;

use crate::check::PresentHeaders;
use crate::config::MAX_URL_LENGTH;
use crate::error_handling::DatabaseError;

/// Rejects URLs that do not fit the `url VARCHAR(255)` column.
pub(crate) fn validate_url_length(url: &str) -> Result<(), DatabaseError> {
    let len = url.chars().count();
    if len > MAX_URL_LENGTH {
        return Err(DatabaseError::UrlTooLong {
            len,
            max: MAX_URL_LENGTH,
        });
    }
    Ok(())
}

/// Inserts one row into `header_checks` and returns its id.
///
/// `present` is stored as a JSONB object and `missing` as a JSONB array.
pub(crate) async fn insert_header_check(
    conn: &mut PgConnection,
    url: &str,
    present: &PresentHeaders,
    missing: &[String],
    score: u8,
) -> Result<i32, DatabaseError> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO header_checks (url, headers_present, missing_headers, score)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(url)
    .bind(Json(present))
    .bind(Json(missing))
    .bind(i32::from(score))
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}
