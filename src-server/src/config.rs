//! Configuration
//!
//! Everything comes from the environment. Missing values fall back to a
//! default; the API key may instead live in a mounted secret file.

use std::{
    env,
    fmt::Display,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::{info, warn};

use crate::error::ServerError;

pub const DEFAULT_CATALOG_URL: &str = "https://api.catalog.beer";
const SECRETS_DIR: &str = "/run/secrets";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Upstream base URL without a trailing slash
    pub catalog_url: String,
    pub api_key: String,
    /// Built frontend, served when present
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ServerError> {
        Self::load_from(|key| env::var(key).ok(), Path::new(SECRETS_DIR))
    }

    /// Load with an explicit variable lookup and secrets directory
    fn load_from<F>(var: F, secrets_dir: &Path) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url: String = try_load(&var, "CATALOG_API_URL", DEFAULT_CATALOG_URL)?;

        Ok(Self {
            port: try_load(&var, "PROXY_PORT", "3000")?,
            catalog_url: catalog_url.trim_end_matches('/').to_string(),
            api_key: load_secret(&var, secrets_dir, "CATALOG_API_KEY")?,
            static_dir: try_load(&var, "STATIC_DIR", "dist")?,
        })
    }
}

fn try_load<T, F>(var: &F, key: &str, default: &str) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| ServerError::Config(format!("Invalid {key} value: {e}")))
}

/// Environment first, then `{secrets_dir}/{name}`
fn load_secret<F>(var: &F, secrets_dir: &Path, name: &str) -> Result<String, ServerError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = var(name) {
        if !value.trim().is_empty() {
            return Ok(value.trim().to_string());
        }
    }

    warn!("{name} not set, trying secret file");
    read_secret(&secrets_dir.join(name))
}

fn read_secret(path: &Path) -> Result<String, ServerError> {
    let secret = read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| ServerError::Config(format!("Failed to read {}: {e}", path.display())))?;

    if secret.is_empty() {
        return Err(ServerError::Config(format!("{} is empty", path.display())));
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_key_from_env() {
        let secrets = tempfile::tempdir().unwrap();
        let config = Config::load_from(lookup(&[("CATALOG_API_KEY", " abc ")]), secrets.path()).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.static_dir, std::path::PathBuf::from("dist"));
    }

    #[test]
    fn test_key_falls_back_to_secret_file() {
        let secrets = tempfile::tempdir().unwrap();
        std::fs::write(secrets.path().join("CATALOG_API_KEY"), "from-file\n").unwrap();
        let vars = lookup(&[("PROXY_PORT", "8080"), ("CATALOG_API_URL", "http://localhost:9000/")]);

        let config = Config::load_from(vars, secrets.path()).unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_url, "http://localhost:9000");
    }

    #[test]
    fn test_missing_key_is_startup_error() {
        let secrets = tempfile::tempdir().unwrap();
        let result = Config::load_from(lookup(&[]), secrets.path());
        assert!(matches!(result, Err(ServerError::Config(_))));

        let blank = Config::load_from(lookup(&[("CATALOG_API_KEY", "   ")]), secrets.path());
        assert!(matches!(blank, Err(ServerError::Config(_))));
    }

    #[test]
    fn test_invalid_port_is_startup_error() {
        let secrets = tempfile::tempdir().unwrap();
        let vars = lookup(&[("CATALOG_API_KEY", "k"), ("PROXY_PORT", "not-a-port")]);
        assert!(matches!(Config::load_from(vars, secrets.path()), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_read_secret_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  abc123  ").unwrap();
        assert_eq!(read_secret(file.path()).unwrap(), "abc123");
    }

    #[test]
    fn test_read_secret_rejects_missing_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_secret(&dir.path().join("nope")).is_err());

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(read_secret(empty.path()), Err(ServerError::Config(_))));
    }
}
