// Domain layer: value types and the ports (traits) the core implements.
// Only std/serde here.

pub mod model;
pub mod ports;
