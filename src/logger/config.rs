use serde::Deserialize;

/// Logger configuration for tracing output.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct LoggerConfig {
    /// Log level filter (e.g., "info", "debug", or module-specific like
    /// "arca_triple_store=debug")
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: "pretty" for human-readable, "json" for structured
    /// JSON logs
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogFormat {
    #[default]
    Pretty,
    Json,
}
