//! Event Sink Implementations
//!
//! - TracingEventSink: deploy events as structured log records

mod tracing_sink;

pub use tracing_sink::TracingEventSink;
