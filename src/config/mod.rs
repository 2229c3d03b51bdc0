mod error;
mod loader;

use arca_triple_store::StoreConfig;
use serde::Deserialize;

pub(crate) use error::ConfigError;
pub(crate) use loader::load;

use crate::logger::LoggerConfig;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Triple store connection and prefix table
    pub store: StoreConfig,

    #[serde(default)]
    pub logger: LoggerConfig,
}
