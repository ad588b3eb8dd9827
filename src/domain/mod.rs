// Domain layer: value types and ports (listener interface). No I/O here.

pub mod model;
pub mod ports;
