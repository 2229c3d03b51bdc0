use std::path::Path;

use figment::{
    Figment,
    providers::{Format, Toml},
};

use super::{Config, ConfigError};

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "arca.toml";

/// Load the configuration with layered sources: `arca.toml` in the working
/// directory first, overridden by a custom `--config` file when given.
pub(crate) fn load(custom_config_path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::new();

    let default_exists = Path::new(DEFAULT_CONFIG_FILE).exists();
    if default_exists {
        figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
    }

    match custom_config_path {
        Some(config_path) => {
            if !config_path.exists() {
                return Err(ConfigError::MissingConfig(
                    config_path.display().to_string(),
                ));
            }
            figment = figment.merge(Toml::file(config_path));
        }
        None if !default_exists => {
            return Err(ConfigError::MissingConfig(DEFAULT_CONFIG_FILE.to_string()));
        }
        None => {}
    }

    figment.extract().map_err(|e| Box::new(e).into())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use arca_triple_store::StoreBackendType;

    use super::*;
    use crate::logger::LogFormat;

    const SAMPLE: &str = r#"
        [store]
        backend = "graphdb"
        url = "http://localhost:7200/repositories/records"
        prefixes = [
            { short = "base", long = "http://records.example.org/resource/" },
            { short = "crm", long = "http://www.cidoc-crm.org/cidoc-crm/" },
        ]
    "#;

    #[test]
    fn loads_custom_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.store.backend, StoreBackendType::Graphdb);
        assert_eq!(config.store.prefixes.len(), 2);
        assert_eq!(config.store.username, None);
        // Logger falls back to its defaults when the section is absent
        assert_eq!(config.logger.level, "info");
        assert_eq!(config.logger.format, LogFormat::Pretty);
    }

    #[test]
    fn missing_custom_config_file_is_an_error() {
        let error = load(Some(Path::new("/nonexistent/arca.toml"))).unwrap_err();
        assert!(matches!(error, ConfigError::MissingConfig(_)));
    }
}
