//! Global subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in the trace resource.
const SERVICE_NAME: &str = "sparrow-state";

/// Installs a global subscriber exporting spans to `config.trace_file`.
///
/// The filter directive comes from `config.trace_level` and defaults to
/// `"info"`. Without a `trace_file` nothing is installed and the `tracing`
/// macros in the reducers stay inert.
///
/// # Initialization Behavior
///
/// - Creates the trace file's parent directory if needed
/// - Returns silently if that directory cannot be created
/// - Only the first successful call installs a subscriber; later calls are
///   ignored
///
/// # Example
///
/// ```rust
/// use sparrow_state::observability::init_tracing;
/// use sparrow_state::Config;
///
/// let dir = std::env::temp_dir().join("sparrow-doc-traces");
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     trace_file: Some(dir.join("otlp.json")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let Some(trace_file) = config.trace_file.clone() else {
        return;
    };

    if let Some(parent) = trace_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let level = config.trace_level.as_deref().unwrap_or("info");

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(trace_file, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}

