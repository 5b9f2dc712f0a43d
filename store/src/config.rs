//! Database location shared by the service binaries.
//!
//! Handles data directory configuration with the following precedence:
//! 1. ENTAIN_DATA_DIR environment variable
//! 2. ~/.config/entain/data (production default)
//! 3. ./db (fallback for development)

use std::path::PathBuf;

const DEFAULT_CONFIG_DIR: &str = ".config/entain/data";
const DEV_DATA_DIR: &str = "./db";

/// Get the directory holding the service databases.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ENTAIN_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Default path for a service's database file.
pub fn get_db_path(file_name: &str) -> PathBuf {
    get_data_dir().join(file_name)
}
