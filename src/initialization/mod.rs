//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client
//! - Environment file loading

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger;

/// Loads a `.env` file into the process environment.
///
/// Tries the current directory first, then the directory holding the
/// executable. A missing file is not an error; variables already set in the
/// environment are never overwritten.
pub fn load_env_file() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
        }
    }
}
