//! Subscriber setup connecting `tracing` to the OTLP file exporter.

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Jiffy";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE: &str = "jiffy-otlp.json";

/// Installs the global subscriber: an [`EnvFilter`] at `config.trace_level`
/// feeding an OpenTelemetry layer that exports to
/// `~/.local/share/zellij/jiffy/jiffy-otlp.json`.
///
/// Tracing is best effort. If the data directory cannot be created the plugin
/// runs without it, and calling this twice keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("jiffy: tracing disabled, cannot create {}: {e}", data_dir.display());
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|e| {
        eprintln!("jiffy: invalid trace_level {:?} ({e}), using info", config.trace_level);
        EnvFilter::new("info")
    });

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::file_tracer_provider(
        data_dir.join(TRACE_FILE),
        resource,
        SERVICE_NAME,
        RotationPolicy::default(),
    );

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
