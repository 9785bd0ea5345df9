//! Tracing export to a local OTLP JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → OtlpFileExporter → RotatingWriter
//! ```
//!
//! Spans are written to `~/.local/share/zellij/jiffy/jiffy-otlp.json`, one
//! OTLP document per line, rotated at 10 MB with three backups kept. The level
//! comes from the `trace_level` plugin option (default `info`).
//!
//! - [`init`]: subscriber installation
//! - [`tracer`]: provider and span exporter
//! - [`otlp`]: span to JSON encoding
//! - [`file_writer`]: rotating line writer

mod file_writer;
mod init;
mod otlp;
mod tracer;

pub use init::{init_tracing, TRACE_FILE};
