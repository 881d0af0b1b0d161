// Adapters layer: concrete implementations for where plan output goes.

pub mod sink;

pub use sink::{MemorySink, WriterSink};
