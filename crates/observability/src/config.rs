use core::str::FromStr;

/// Filter directive env var (standard `tracing-subscriber` name).
pub const LOG_FILTER_ENV: &str = "RUST_LOG";
/// Output format env var: `json` or `pretty`.
pub const LOG_FORMAT_ENV: &str = "CATALOG_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("unknown log format {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `CATALOG_LOG_FORMAT`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(LOG_FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|err: String| {
                // Subscriber is not installed yet, so this goes to stderr directly.
                eprintln!("{LOG_FORMAT_ENV}: {err}; falling back to json");
                LogFormat::Json
            }),
            None => LogFormat::default(),
        };

        Self { filter, format }
    }
}
