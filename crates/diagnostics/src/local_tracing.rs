use std::{
    env,
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};
use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, prelude::*, EnvFilter, Layer, Registry};

const TRACE_VAR: &str = "TRACE";

static IS_TRACING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Targets that a bare level in `TRACE` turns on.
const WORKSPACE_TARGETS: [&str; 3] = ["yarn_dedupe", "yarn_dedupe_lockfile", "yarn_dedupe_cli"];

/// What the `TRACE` environment variable asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TraceFilter {
    /// A bare level such as `debug`, applied to the workspace's own targets only.
    Level(Level),
    /// An [`EnvFilter`] directive such as `yarn_dedupe::fix=info,warn`.
    Directive(String),
}

impl TraceFilter {
    fn from_env_value(value: &str) -> Self {
        match Level::from_str(value) {
            Ok(level) => TraceFilter::Level(level),
            Err(_) => TraceFilter::Directive(value.to_string()),
        }
    }

    fn into_layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        match self {
            TraceFilter::Level(level) => Targets::new()
                .with_targets(WORKSPACE_TARGETS.map(|target| (target, level)))
                .boxed(),
            // SAFETY: for the `expect`, a directive that cannot be parsed would silently log
            // something other than what was asked for, so panic instead
            TraceFilter::Directive(directive) => EnvFilter::builder()
                .with_regex(true)
                .parse(directive)
                .expect("Parse tracing directive syntax failed,for details about the directive syntax you could refer https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives")
                .boxed(),
        }
    }
}

/// Install a tracing subscriber that writes to stderr if `TRACE` is set.
///
/// Only the first call has an effect.
pub fn enable_tracing_by_env() {
    let Ok(value) = env::var(TRACE_VAR) else {
        return;
    };
    if IS_TRACING_ENABLED.swap(true, Ordering::SeqCst) {
        return;
    }

    tracing_subscriber::registry()
        .with(TraceFilter::from_env_value(&value).into_layer())
        .with(fmt::layer().with_writer(std::io::stderr).with_file(true))
        .init();
    tracing::debug!(target: "yarn_dedupe_cli", filter = %value, "Enable tracing");
}
