//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans are written as OTLP JSON, one batch per line, to
//! `~/.local/share/zellij/zroster/zroster-otlp.json`. The file rotates at
//! 10MB and keeps three backups.
//!
//! Request and reply handling are linked through the trace context carried in
//! each web request's context map (see [`crate::client::TraceContext`]), so a
//! reply span appears under the span that issued the request.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// Service and instrumentation scope name reported on every span.
pub(crate) const SERVICE_NAME: &str = "zroster";
