//! header_audit library: security header compliance checks
//!
//! This library fetches a URL, checks the response for a fixed set of
//! security headers, scores compliance, renders a report, and records the
//! result in PostgreSQL.
//!
//! # Example
//!
//! ```no_run
//! use header_audit::{run_check, Database, DbConfig};
//! use header_audit::initialization::init_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new(DbConfig::from_env()?);
//! let client = init_client()?;
//! let mut stdout = std::io::stdout();
//!
//! let report = run_check("example.com", &db, &client, &mut stdout).await?;
//! println!("score: {}%", report.outcome.score());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod check;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use app::{normalize_url, render_report, truncate_value};
pub use check::{check_security_headers, CheckOutcome, CheckResult, PresentHeaders};
pub use config::{Cli, DbConfig, SecurityHeader};
pub use error_handling::DatabaseError;
pub use run::{persist_outcome, run_check, PersistStatus, RunReport};
pub use storage::{Database, HeaderCheckRecord};

// Internal run module (contains the end-to-end check flow)
mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::app::render_report;
    use crate::check::{check_security_headers, CheckOutcome};
    use crate::storage::Database;

    /// What happened to the result after the report was printed.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PersistStatus {
        /// Row written with this id.
        Saved(i32),
        /// Saving failed; the error was logged and discarded.
        Failed(String),
        /// The request failed outright, so there was nothing to save.
        Skipped,
    }

    /// Results of a single check run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Outcome of the header check
        pub outcome: CheckOutcome,
        /// Whether the outcome was persisted
        pub persistence: PersistStatus,
    }

    /// Saves `outcome` under `url_as_given` if it carries any header
    /// information.
    ///
    /// The row stores the URL exactly as the user typed it, not the
    /// normalized form that was requested.
    ///
    /// Never fails: a save error is logged and reported as
    /// [`PersistStatus::Failed`].
    pub async fn persist_outcome(
        db: &Database,
        url_as_given: &str,
        outcome: &CheckOutcome,
    ) -> PersistStatus {
        let Some(result) = outcome.as_result().filter(|_| outcome.is_persistable()) else {
            info!("Nothing to save for {}", outcome.url());
            return PersistStatus::Skipped;
        };

        match db
            .save(url_as_given, &result.present, &result.missing, result.score)
            .await
        {
            Ok(id) => PersistStatus::Saved(id),
            Err(e) => {
                error!("Error saving to database: {e}");
                PersistStatus::Failed(e.to_string())
            }
        }
    }

    /// Runs one check end to end, writing the report to `out`.
    ///
    /// Steps, in order: ensure schema, fetch and evaluate, write report,
    /// persist, write the confirmation line (only if the row was saved).
    ///
    /// `url` is echoed in the report and stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns an error if schema setup fails (the caller should exit with
    /// status 1) or if writing to `out` fails. Transport and save failures
    /// are not errors.
    pub async fn run_check<W: Write>(
        url: &str,
        db: &Database,
        client: &reqwest::Client,
        out: &mut W,
    ) -> Result<RunReport> {
        db.ensure_schema()
            .await
            .context("Database setup error")?;

        let outcome = check_security_headers(client, url).await;

        out.write_all(render_report(url, &outcome).as_bytes())
            .context("Failed to write report")?;
        out.flush().context("Failed to write report")?;

        let persistence = persist_outcome(db, url, &outcome).await;
        if let PersistStatus::Saved(_) = persistence {
            writeln!(out, "\nResults saved to database!").context("Failed to write report")?;
        }

        Ok(RunReport {
            outcome,
            persistence,
        })
    }
}
