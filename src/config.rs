use std::path::PathBuf;

pub const STORAGE_PATH_VAR: &str = "STORAGE_PATH";
pub const DEFAULT_STORAGE_PATH: &str = "/storage";

pub struct Config {
    pub storage_path: PathBuf,
}

impl Config {
    /// Reads the configuration from the environment and an optional `.env` file.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let storage_path = dotenv::var(STORAGE_PATH_VAR)
            .unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_owned())
            .into();
        Self { storage_path }
    }
}
