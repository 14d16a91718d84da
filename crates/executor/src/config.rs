use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct SolverConfig {
    /// Largest instance the CLI will hand to the brute-force sweep. The
    /// solver itself has no cutoff; this guard exists because (n-1)! makes
    /// anything much past a dozen vertices effectively unbounded.
    pub max_vertices: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub min_weight: f64,
    pub max_weight: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub solver: SolverConfig,
    pub generator: GeneratorConfig,
}

/// Loads configuration from a file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoad(format!("Failed to determine current directory: {}", e))
    })?;

    load_config_from(&base_path)
}

fn load_config_from(base_path: &Path) -> Result<Config, Error> {
    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("executor")
        .join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoad(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("TSP")
                .try_parsing(true)
                .separator("_"),
        )
        .build()
        .map_err(|e| Error::ConfigLoad(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoad(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ships_with_a_parseable_config_file() {
        let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let config = load_config_from(&workspace_root).unwrap();

        assert!(config.solver.max_vertices >= 3);
        assert!(config.generator.min_weight <= config.generator.max_weight);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let result = load_config_from(Path::new("/nonexistent"));
        assert!(matches!(result, Err(Error::ConfigLoad(_))));
    }
}
