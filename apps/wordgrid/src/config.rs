use anyhow::{bail, Context, Result};

/// Largest grid edge accepted when `WORDGRID_MAX_SIZE` is not set.
pub const DEFAULT_MAX_GRID_SIZE: usize = 256;

/// Builder configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub max_grid_size: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            max_grid_size: DEFAULT_MAX_GRID_SIZE,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("WORDGRID_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .context("WORDGRID_SEED must be an unsigned 64-bit integer")
            })
            .transpose()?;

        let max_grid_size = match lookup("WORDGRID_MAX_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context("WORDGRID_MAX_SIZE must be a positive integer")?,
            None => DEFAULT_MAX_GRID_SIZE,
        };
        if max_grid_size == 0 {
            bail!("WORDGRID_MAX_SIZE must be at least 1");
        }

        Ok(Config {
            seed,
            max_grid_size,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_grid_size, DEFAULT_MAX_GRID_SIZE);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("WORDGRID_SEED", "42"),
            ("WORDGRID_MAX_SIZE", " 64 "),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_grid_size, 64);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_malformed_seed_names_variable() {
        let err = Config::from_lookup(lookup_from(&[("WORDGRID_SEED", "abc")])).unwrap_err();
        assert!(err.to_string().contains("WORDGRID_SEED"));
    }

    #[test]
    fn test_zero_max_size_rejected() {
        let err = Config::from_lookup(lookup_from(&[("WORDGRID_MAX_SIZE", "0")])).unwrap_err();
        assert!(err.to_string().contains("WORDGRID_MAX_SIZE"));
    }
}
