//! Optional OpenTelemetry export of reducer spans to a local file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK provider
//!     → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! The reducers open `reduce`, `files`, `searches` and `users` spans. With a
//! `trace_file` configured, every finished span is written as one OTLP JSON
//! document per line; the file rotates at 10 MB and keeps three backups.
//!
//! The filter is taken from [`Config::trace_level`](crate::Config::trace_level),
//! defaulting to `"info"`. Reducer spans are at `debug` level.
//!
//! Export is synchronous: with a trace file configured, each dispatch also
//! writes its closed spans to disk before returning.
//!
//! - [`init`]: subscriber installation
//! - [`tracer`]: provider and file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: size-rotated output file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
