//! Shared tracing configuration for the square workspace.
//!
//! Benches, integration tests and Rust embedders install their `tracing`
//! subscriber through this crate so the log surface stays the same
//! everywhere. The extension module itself never installs a subscriber; a
//! host process that loads it owns global logging.

use std::env;

use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Overrides the filter directives (`RUST_LOG` syntax).
pub const DIRECTIVES_ENV: &str = "SQUARE_TRACING_DIRECTIVES";
/// Overrides the output format: `pretty`, `compact` or `json`.
pub const FORMAT_ENV: &str = "SQUARE_TRACING_FORMAT";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Output format for the formatter layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TracingOutput {
    Pretty,
    Compact,
    Json,
}

impl TracingOutput {
    /// Parse a format name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// How the subscriber filters and formats events.
#[derive(Clone, Debug)]
pub struct TracingConfig {
    /// Explicit filter directives. Without them `RUST_LOG` applies, then
    /// `fallback`.
    pub directives: Option<String>,
    /// Directive used when nothing else resolves.
    pub fallback: String,
    /// ANSI colours. Always off for JSON.
    pub ansi: bool,
    pub output: TracingOutput,
    /// Write through the libtest capture writer instead of stdout.
    pub test_writer: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            directives: None,
            fallback: "info".to_string(),
            ansi: true,
            output: TracingOutput::Pretty,
            test_writer: false,
        }
    }
}

impl TracingConfig {
    /// Compact, uncoloured debug output captured by the test harness.
    pub fn for_tests() -> Self {
        Self {
            fallback: "debug".to_string(),
            ansi: false,
            output: TracingOutput::Compact,
            test_writer: true,
            ..Self::default()
        }
    }

    /// Default configuration with `SQUARE_TRACING_*` overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `SQUARE_TRACING_DIRECTIVES` and `SQUARE_TRACING_FORMAT`.
    /// Blank or unrecognised values leave the config untouched.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(directives) = env::var(DIRECTIVES_ENV).ok().filter(|d| !d.trim().is_empty()) {
            self.directives = Some(directives);
        }
        if let Some(output) = env::var(FORMAT_ENV).ok().as_deref().and_then(TracingOutput::parse) {
            self.output = output;
        }
        if self.output == TracingOutput::Json {
            self.ansi = false;
        }
        self
    }

    fn filter(&self) -> Result<EnvFilter, TracingSetupError> {
        match &self.directives {
            Some(directives) => EnvFilter::try_new(directives).map_err(|source| TracingSetupError::InvalidFilter {
                directives: directives.clone(),
                source,
            }),
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.fallback))),
        }
    }

    fn layer(&self) -> BoxedLayer {
        macro_rules! writer {
            ($layer:expr) => {
                if self.test_writer {
                    Box::new($layer.with_test_writer()) as BoxedLayer
                } else {
                    Box::new($layer) as BoxedLayer
                }
            };
        }

        let base = fmt::layer().with_ansi(self.ansi);
        match self.output {
            TracingOutput::Pretty => writer!(base.pretty()),
            TracingOutput::Compact => writer!(base.compact()),
            TracingOutput::Json => writer!(base.json().with_ansi(false)),
        }
    }
}

/// Failures while setting up the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TracingSetupError {
    #[error("invalid tracing directives `{directives}`: {source}")]
    InvalidFilter {
        directives: String,
        #[source]
        source: ParseError,
    },

    /// Usually means a global subscriber is already installed.
    #[error("failed to install global tracing subscriber: {0}")]
    SubscriberInit(#[from] TryInitError),
}

/// Build a subscriber for `config` without installing it.
pub fn build_subscriber(config: &TracingConfig) -> Result<impl Subscriber + Send + Sync, TracingSetupError> {
    let filter = config.filter()?;
    Ok(Registry::default().with(config.layer()).with(filter))
}

/// Install the configured subscriber as the process-wide default.
pub fn init_global_tracing(config: &TracingConfig) -> Result<(), TracingSetupError> {
    build_subscriber(config)?.try_init()?;
    Ok(())
}

/// Install the test subscriber. Repeat calls, and calls after another
/// subscriber won the race, are no-ops.
pub fn init_test_tracing() {
    let _ = init_global_tracing(&TracingConfig::for_tests().with_env_overrides());
}
