use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod formatter;

pub use formatter::*;

use crate::configs::LoggingConfig;

/// Builds the filter directive string: the configured level, the extra
/// per-target filters, and a quiet default for the HTML parser internals.
pub fn filter_directives(logging: Option<&LoggingConfig>) -> String {
    let level = logging
        .and_then(|l| l.level.as_deref())
        .unwrap_or("info");

    let mut directives = format!("{},html5ever=error,selectors=error", level);
    if let Some(filters) = logging
        .and_then(|l| l.filters.as_deref())
        .filter(|f| !f.trim().is_empty())
    {
        directives.push(',');
        directives.push_str(filters.trim());
    }
    directives
}

pub fn init(logging: Option<&LoggingConfig>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(logging)));

    let stdout_layer = fmt::layer()
        .event_format(CustomFormatter::new(true))
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();
}
