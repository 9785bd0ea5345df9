//! Tracer provider exporting spans to a local OTLP JSON file.
//!
//! The plugin sandbox has no collector to talk to, so spans go through a
//! simple (unbatched) processor into [`OtlpFileExporter`], one line per export.

use super::file_writer::{RotatingWriter, RotationPolicy};
use super::otlp;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Span exporter writing OTLP JSON lines through a [`RotatingWriter`].
#[derive(Debug)]
struct OtlpFileExporter {
    writer: RotatingWriter,
    resource: Resource,
    scope: &'static str,
    stopped: bool,
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("trace file exporter already shut down"))
        } else {
            let line = otlp::encode_batch(&self.resource, self.scope, &batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(format!("writing trace file: {e}")))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider whose spans land in `path`, tagged with `resource` and
/// the instrumentation `scope`.
pub fn file_tracer_provider(
    path: PathBuf,
    resource: Resource,
    scope: &'static str,
    policy: RotationPolicy,
) -> TracerProvider {
    let exporter = OtlpFileExporter {
        writer: RotatingWriter::new(path, policy),
        resource: resource.clone(),
        scope,
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
