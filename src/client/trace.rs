//! Trace context carried through a web request's context map.
//!
//! Zellij hands the request context back untouched with the reply, so the
//! issuing span's ids ride along and the reply span is parented to it.

use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
use std::collections::BTreeMap;

const TRACE_ID_KEY: &str = "trace_id";
const PARENT_SPAN_ID_KEY: &str = "parent_span_id";

/// OpenTelemetry trace and span ids as hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// 32 hex digit trace id.
    pub trace_id: String,
    /// 16 hex digit id of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current tracing span.
    ///
    /// Returns `None` if no OpenTelemetry layer is installed or the span
    /// context is otherwise invalid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    pub(crate) fn write_to(&self, context: &mut BTreeMap<String, String>) {
        context.insert(TRACE_ID_KEY.to_string(), self.trace_id.clone());
        context.insert(PARENT_SPAN_ID_KEY.to_string(), self.parent_span_id.clone());
    }

    pub(crate) fn read_from(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: context.get(TRACE_ID_KEY)?.clone(),
            parent_span_id: context.get(PARENT_SPAN_ID_KEY)?.clone(),
        })
    }

    /// Makes this context the remote parent of spans opened while the guard lives.
    ///
    /// Returns `None` when the ids are not valid hex.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_map_round_trip() {
        let trace = TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
            parent_span_id: "00f067aa0ba902b7".to_string(),
        };
        let mut map = BTreeMap::new();
        trace.write_to(&mut map);
        assert_eq!(TraceContext::read_from(&map), Some(trace));
    }

    #[test]
    fn missing_ids_read_as_none() {
        let mut map = BTreeMap::new();
        map.insert(TRACE_ID_KEY.to_string(), "abc".to_string());
        assert_eq!(TraceContext::read_from(&map), None);
    }

    #[test]
    fn invalid_hex_does_not_attach() {
        let trace = TraceContext {
            trace_id: "not-hex".to_string(),
            parent_span_id: "also-not".to_string(),
        };
        assert!(trace.attach().is_none());
    }

    #[test]
    fn no_subscriber_means_no_current_context() {
        assert!(TraceContext::from_current().is_none());
    }
}
